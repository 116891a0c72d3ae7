//! Client-side pagination over an in-memory list.

use std::ops::Range;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
}

impl PageState {
    pub fn new(page: usize) -> Self {
        Self { page }
    }

    /// Record a page change. The value is taken as-is.
    pub fn change_page(&mut self, new_page: usize) {
        self.page = new_page;
    }

    /// The page to actually display for `count` rows.
    ///
    /// Falls back to the last page when the list shrank below the current page.
    pub fn clamped(self, count: usize, rows_per_page: usize) -> usize {
        self.page.min(last_page(count, rows_per_page))
    }
}

/// Number of pages needed for `count` rows; an empty list still has one page.
pub fn page_count(count: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 1;
    }
    count.div_ceil(rows_per_page).max(1)
}

pub fn last_page(count: usize, rows_per_page: usize) -> usize {
    page_count(count, rows_per_page) - 1
}

/// Index range of the rows on `page`, cut off at `count`.
pub fn visible_range(page: usize, rows_per_page: usize, count: usize) -> Range<usize> {
    let start = page.saturating_mul(rows_per_page).min(count);
    let end = start.saturating_add(rows_per_page).min(count);
    start..end
}

/// Page requested by the "previous" control.
pub fn previous_page(page: usize) -> usize {
    page.saturating_sub(1)
}

/// Page requested by the "next" control.
pub fn next_page(page: usize) -> usize {
    page.saturating_add(1)
}

pub fn has_previous(page: usize) -> bool {
    page > 0
}

pub fn has_next(page: usize, rows_per_page: usize, count: usize) -> bool {
    page < last_page(count, rows_per_page)
}

/// Caption such as "26–30 of 30".
pub fn displayed_rows_label(page: usize, rows_per_page: usize, count: usize) -> String {
    let range = visible_range(page, rows_per_page, count);
    let from = if count == 0 { 0 } else { range.start + 1 };
    let to = if count == 0 { 0 } else { range.end.max(from) };
    format!("{}–{} of {}", from, to, count)
}
