//! Terminal-width-aware column layout
//!
//! - `range_max` - triangular table of per-range maximum name lengths
//! - `solver` - column count search producing a [`ColumnLayout`]

mod range_max;
mod solver;

pub use range_max::RangeMaxTable;
pub use solver::{COLUMN_GAP, ColumnLayout, solve_layout};

use crate::collector::EntrySequence;

/// Lay out the names of an entry sequence within `width` columns.
pub fn layout_entries(entries: &EntrySequence, width: usize) -> ColumnLayout {
    let lengths: Vec<usize> = entries.iter().map(|e| e.name_len()).collect();
    solve_layout(&lengths, width)
}
