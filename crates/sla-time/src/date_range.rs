//! Inclusive iteration over calendar dates.

use crate::date::Date;

/// Iterator over every date in a closed interval `[start, end]`.
///
/// An inverted interval (`start > end`) yields nothing.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl DateRange {
    /// Dates from `start` to `end`, both included.
    pub fn inclusive(start: Date, end: Date) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }

    /// Number of dates still to be yielded.
    pub fn remaining(&self) -> usize {
        self.next
            .map_or(0, |d| (d.days_between(self.end) + 1) as usize)
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = current.succ().filter(|&d| d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}
