//! Page cursor state
//!
//! Invariants held after every transition:
//! - `1 <= current <= last`
//! - `last == chunks == max(1, ceil(total / chunk_size))`
//! - `previous == max(1, current - 1)`
//! - `next == min(last, current + 1)`

use std::ops::Range;

use serde::Serialize;

/// Navigation state of a paginated collection. Page numbers are 1-based.
///
/// Fields are only set through the transitions below, which keep the
/// invariants listed at the top of this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pages {
    current: usize,
    next: usize,
    previous: usize,
    last: usize,
    chunks: usize,
}

impl Pages {
    /// Cursor on page 1 of `total` items split into `chunk_size` chunks.
    pub fn new(total: usize, chunk_size: usize) -> Self {
        let chunks = Self::chunk_count(total, chunk_size);
        Self::at(1, chunks)
    }

    /// Number of chunks for `total` items; at least 1.
    pub fn chunk_count(total: usize, chunk_size: usize) -> usize {
        total.div_ceil(chunk_size.max(1)).max(1)
    }

    fn at(current: usize, chunks: usize) -> Self {
        let last = chunks.max(1);
        let current = current.clamp(1, last);

        Self {
            current,
            next: current.saturating_add(1).min(last),
            previous: current.saturating_sub(1).max(1),
            last,
            chunks: last,
        }
    }

    /// Moves to `page`, clamped into `[1, last]`.
    pub fn goto(&mut self, page: i64) {
        let page = usize::try_from(page.max(1)).unwrap_or(self.last);
        *self = Self::at(page, self.chunks);
    }

    /// Moves forward one page; no-op on the last page.
    pub fn advance(&mut self) {
        *self = Self::at(self.current.saturating_add(1), self.chunks);
    }

    /// Moves back one page; no-op on the first page.
    pub fn retreat(&mut self) {
        *self = Self::at(self.current.saturating_sub(1), self.chunks);
    }

    /// Recomputes the chunk count for a new item total, keeping the current
    /// page when it is still in range.
    pub fn resize(&mut self, total: usize, chunk_size: usize) {
        *self = Self::at(self.current, Self::chunk_count(total, chunk_size));
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> usize {
        self.next
    }

    pub fn previous(&self) -> usize {
        self.previous
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn chunks(&self) -> usize {
        self.chunks
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last
    }

    /// Item indices of the current page, bounded by `total`.
    pub fn range(&self, chunk_size: usize, total: usize) -> Range<usize> {
        let start = self
            .current
            .saturating_sub(1)
            .saturating_mul(chunk_size)
            .min(total);
        let end = self.current.saturating_mul(chunk_size).min(total);
        start..end
    }
}
