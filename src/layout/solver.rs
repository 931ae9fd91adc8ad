//! Column count search

use tracing::debug;

use super::range_max::RangeMaxTable;

/// Spaces between adjacent columns.
pub const COLUMN_GAP: usize = 2;

/// Column widths and row count for laying out a name sequence.
///
/// Names fill the grid column-major: column `k` holds entries
/// `k*rows .. (k+1)*rows`. Every width but the last includes the gap that
/// follows the column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    widths: Vec<usize>,
    rows: usize,
}

impl ColumnLayout {
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Width of a full row, without trailing padding.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum()
    }
}

/// Lay out names of the given display lengths within `width` columns.
///
/// Candidate column counts are tried from 1 upwards until a row reaches or
/// passes `width` or every name has its own column. The trial counter ends
/// one past the last candidate, so an overflowing trial backs it off by two
/// to land on the last candidate that fit. A single overflowing column is
/// kept as is.
pub fn solve_layout(lengths: &[usize], width: usize) -> ColumnLayout {
    let count = lengths.len();
    if count == 0 {
        return ColumnLayout::default();
    }

    let table = RangeMaxTable::build(lengths, width);

    let mut columns = 1;
    let mut total = 0;
    while total < width && columns <= count {
        total = row_width(&table, columns);
        columns += 1;
    }

    if total > width && columns > 2 {
        columns -= 2;
    } else {
        // At least one column, even for a zero width.
        columns = columns.saturating_sub(1).max(1);
    }

    let layout = build_layout(&table, columns);
    debug!(
        entries = count,
        width,
        columns = layout.columns(),
        rows = layout.rows(),
        "solved column layout"
    );
    layout
}

/// Rows needed to hold every entry in `columns` columns.
fn rows_for(count: usize, columns: usize) -> usize {
    count.div_ceil(columns)
}

/// Inclusive index ranges of the non-empty columns for a given row count.
fn column_ranges(count: usize, rows: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count)
        .step_by(rows)
        .map(move |begin| (begin, (begin + rows - 1).min(count - 1)))
}

/// Rendered width of a row when laid out in `columns` columns.
fn row_width(table: &RangeMaxTable, columns: usize) -> usize {
    let rows = rows_for(table.len(), columns);
    let mut used = 0;
    let mut total = 0;
    for (begin, end) in column_ranges(table.len(), rows) {
        total += table.max(begin, end);
        used += 1;
    }
    total + COLUMN_GAP * (used - 1)
}

fn build_layout(table: &RangeMaxTable, columns: usize) -> ColumnLayout {
    let rows = rows_for(table.len(), columns);
    let mut widths: Vec<usize> = column_ranges(table.len(), rows)
        .map(|(begin, end)| table.max(begin, end) + COLUMN_GAP)
        .collect();
    if let Some(last) = widths.last_mut() {
        *last -= COLUMN_GAP;
    }
    ColumnLayout { widths, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_short_names_fit_one_row() {
        let layout = solve_layout(&[1, 2, 3], 20);
        assert_eq!(layout.widths(), &[3, 4, 3]);
        assert_eq!(layout.rows(), 1);
        assert_eq!(layout.total_width(), 10);
    }

    #[test]
    fn test_empty_sequence() {
        let layout = solve_layout(&[], 80);
        assert!(layout.is_empty());
        assert_eq!(layout.rows(), 0);
    }

    #[test]
    fn test_single_name() {
        let layout = solve_layout(&[7], 80);
        assert_eq!(layout.widths(), &[7]);
        assert_eq!(layout.rows(), 1);
    }

    #[test]
    fn test_name_longer_than_width_is_clamped() {
        let layout = solve_layout(&[120], 80);
        assert_eq!(layout.widths(), &[80]);
        assert_eq!(layout.rows(), 1);
    }

    #[test]
    fn test_unsplittable_single_column() {
        // Two columns would need 60 + 2 + 60; one overflowing column is kept.
        let layout = solve_layout(&[60, 60, 60], 50);
        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.widths(), &[50]);
    }

    #[test]
    fn test_overflowing_trial_backs_off_to_previous_candidate() {
        // Six names of length 4 in width 20:
        //   c=3 -> 4+2+4+2+4 = 16 fits, c=4 -> two rows of 3 columns
        //   (16 again), c=5 -> 2 rows, 3 columns (16), c=6 -> 34 overflows.
        // The counter stops at 7 and backs off by two to 5.
        let layout = solve_layout(&[4; 6], 20);
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.widths(), &[6, 6, 4]);
        assert!(layout.total_width() <= 20);
    }

    #[test]
    fn test_exact_fit_is_kept() {
        // Two names of 9 in width 20: 9 + 2 + 9 = 20 reaches the width
        // without passing it, so two columns stay.
        let layout = solve_layout(&[9, 9], 20);
        assert_eq!(layout.widths(), &[11, 9]);
        assert_eq!(layout.total_width(), 20);
    }

    #[test]
    fn test_zero_width_keeps_one_column() {
        let layout = solve_layout(&[1, 2, 3], 0);
        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.rows(), 3);
    }

    #[test]
    fn test_overflow_at_two_columns_falls_back_to_one() {
        let layout = solve_layout(&[10, 10], 15);
        assert_eq!(layout.widths(), &[10]);
        assert_eq!(layout.rows(), 2);
    }

    #[test]
    fn test_wide_first_name_forces_single_column() {
        // c=2 needs 20 + 2 + 1 = 23 > 22, so the search stops there.
        let layout = solve_layout(&[20, 1, 1, 1], 22);
        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.rows(), 4);
    }

    #[test]
    fn test_every_entry_placed_once() {
        for count in 0..40 {
            for width in [1, 5, 10, 20, 37, 80, 200] {
                let lengths: Vec<usize> = (0..count).map(|i| 1 + (i * 7) % 13).collect();
                let layout = solve_layout(&lengths, width);
                if count == 0 {
                    assert!(layout.is_empty());
                    continue;
                }
                let c = layout.columns();
                let r = layout.rows();
                assert!(c * r >= count, "n={count} W={width} c={c} r={r}");
                assert!(count > c * (r - 1), "n={count} W={width} c={c} r={r}");
            }
        }
    }

    #[test]
    fn test_multi_column_layouts_fit_width() {
        for count in 1..40 {
            for width in [10, 20, 37, 80] {
                let lengths: Vec<usize> = (0..count).map(|i| 1 + (i * 5) % 11).collect();
                let layout = solve_layout(&lengths, width);
                if layout.columns() > 1 {
                    assert!(
                        layout.total_width() <= width,
                        "n={count} W={width} widths={:?}",
                        layout.widths()
                    );
                }
            }
        }
    }
}
