//! Balanced contiguous row partitioning.

/// The row slice of the global grid owned by one rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub rows: usize,
}

impl RowRange {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn contains(&self, row: usize) -> bool {
        self.start <= row && row < self.end()
    }
}

/// Split `total_rows` into `size` contiguous, order-preserving ranges.
///
/// Counts differ by at most one and the remainder rows go to the lowest
/// ranks. With `size > total_rows` the trailing ranks legitimately own
/// zero rows; they still take part in the halo exchange as pass-throughs.
pub fn split_rows(total_rows: usize, size: usize) -> Vec<RowRange> {
    assert!(size >= 1, "at least one worker required");
    let base = total_rows / size;
    let remainder = total_rows % size;

    let mut ranges = Vec::with_capacity(size);
    let mut start = 0;
    for rank in 0..size {
        let rows = base + usize::from(rank < remainder);
        ranges.push(RowRange { start, rows });
        start += rows;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::split_rows;

    #[test]
    fn covers_rows_exactly_once_in_order() {
        for total_rows in 0..40 {
            for size in 1..10 {
                let ranges = split_rows(total_rows, size);
                assert_eq!(ranges.len(), size);
                let mut next = 0;
                for range in &ranges {
                    assert_eq!(range.start, next, "H={total_rows} size={size}");
                    next = range.end();
                }
                assert_eq!(next, total_rows);
            }
        }
    }

    #[test]
    fn counts_differ_by_at_most_one() {
        for total_rows in 0..40 {
            for size in 1..10 {
                let ranges = split_rows(total_rows, size);
                let max = ranges.iter().map(|r| r.rows).max().unwrap();
                let min = ranges.iter().map(|r| r.rows).min().unwrap();
                assert!(max - min <= 1, "H={total_rows} size={size}");
            }
        }
    }

    #[test]
    fn remainder_rows_go_to_the_lowest_ranks() {
        let ranges = split_rows(10, 4);
        let counts: Vec<_> = ranges.iter().map(|r| r.rows).collect();
        assert_eq!(counts, vec![3, 3, 2, 2]);
    }

    #[test]
    fn more_workers_than_rows_leaves_trailing_ranks_empty() {
        let ranges = split_rows(2, 5);
        let counts: Vec<_> = ranges.iter().map(|r| r.rows).collect();
        assert_eq!(counts, vec![1, 1, 0, 0, 0]);
        assert!(ranges[4].is_empty());
        assert_eq!(ranges[4].start, 2);
    }

    #[test]
    fn contains_matches_the_half_open_range() {
        let ranges = split_rows(7, 3);
        for row in 0..7 {
            let owners = ranges.iter().filter(|r| r.contains(row)).count();
            assert_eq!(owners, 1, "row {row} must have exactly one owner");
        }
    }
}
