//! Grid renderer for the non-detailed listing

use std::io;

use termcolor::WriteColor;

use crate::collector::EntrySequence;
use crate::layout::ColumnLayout;

use super::utils::{write_name, write_padding};

/// Print `entries` laid out by `layout`.
///
/// Row `i` holds entry `i + k*rows` for each column `k` that has one. Names
/// are padded to their column width except the last name on a row.
pub fn render_grid<W: WriteColor>(
    out: &mut W,
    entries: &EntrySequence,
    layout: &ColumnLayout,
    use_color: bool,
) -> io::Result<()> {
    let rows = layout.rows();

    for row in 0..rows {
        let cells: Vec<_> = layout
            .widths()
            .iter()
            .enumerate()
            .map_while(|(col, &width)| entries.get(row + col * rows).map(|e| (e, width)))
            .collect();

        let last = cells.len().saturating_sub(1);
        for (i, (entry, width)) in cells.into_iter().enumerate() {
            write_name(out, entry, use_color)?;
            if i < last {
                write_padding(out, width.saturating_sub(entry.name_len()))?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
