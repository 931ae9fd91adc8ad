//! Triangular table of range maxima

/// Maximum name length for every contiguous range `[i, j]` of a sequence.
///
/// Stored as the upper triangle of an `n x n` matrix flattened row by row,
/// `n(n+1)/2` cells in total. Row `i` holds ranges `[i, i]` through
/// `[i, n-1]`, so each cell extends its left neighbour by one element.
#[derive(Debug, Clone)]
pub struct RangeMaxTable {
    len: usize,
    cells: Vec<usize>,
}

impl RangeMaxTable {
    /// Build the table from per-entry lengths, clamping each to `clamp`.
    pub fn build(lengths: &[usize], clamp: usize) -> Self {
        let len = lengths.len();
        let mut cells = Vec::with_capacity(len * (len + 1) / 2);

        for begin in 0..len {
            let mut running = 0;
            for &raw in &lengths[begin..] {
                running = running.max(raw.min(clamp));
                cells.push(running);
            }
        }

        Self { len, cells }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Longest clamped length in `[begin, end]`, both inclusive.
    pub fn max(&self, begin: usize, end: usize) -> usize {
        debug_assert!(begin <= end && end < self.len);
        self.cells[self.offset(begin, end)]
    }

    fn offset(&self, begin: usize, end: usize) -> usize {
        // Rows before `begin` hold n, n-1, ..., n-begin+1 cells.
        begin * self.len - begin * (begin.saturating_sub(1)) / 2 + (end - begin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_naive_maximum() {
        let lengths = [3, 1, 4, 1, 5, 9, 2, 6];
        let table = RangeMaxTable::build(&lengths, usize::MAX);
        assert_eq!(table.len(), lengths.len());

        for begin in 0..lengths.len() {
            for end in begin..lengths.len() {
                let expected = *lengths[begin..=end].iter().max().unwrap();
                assert_eq!(table.max(begin, end), expected, "range [{begin}, {end}]");
            }
        }
    }

    #[test]
    fn test_clamps_long_names() {
        let table = RangeMaxTable::build(&[2, 50, 3], 10);
        assert_eq!(table.max(0, 0), 2);
        assert_eq!(table.max(0, 2), 10);
        assert_eq!(table.max(1, 1), 10);
        assert_eq!(table.max(2, 2), 3);
    }

    #[test]
    fn test_triangular_size() {
        let table = RangeMaxTable::build(&[1; 7], 80);
        assert_eq!(table.cells.len(), 7 * 8 / 2);
    }

    #[test]
    fn test_empty() {
        let table = RangeMaxTable::build(&[], 80);
        assert!(table.is_empty());
    }
}
