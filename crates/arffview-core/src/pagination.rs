//! Client-side pagination over the loaded rows.
//!
//! Pages are 1-based. All navigation clamps to `[1, total_pages]`, so moving
//! past either boundary is a no-op. `total_pages == 0` (no rows) means there
//! is nothing to paginate.

use std::fmt;
use std::ops::Range;

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowsPerPage {
    Ten,
    TwentyFive,
    #[default]
    Fifty,
    Hundred,
}

impl RowsPerPage {
    pub const ALL: [RowsPerPage; 4] = [
        RowsPerPage::Ten,
        RowsPerPage::TwentyFive,
        RowsPerPage::Fifty,
        RowsPerPage::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            RowsPerPage::Ten => 10,
            RowsPerPage::TwentyFive => 25,
            RowsPerPage::Fifty => 50,
            RowsPerPage::Hundred => 100,
        }
    }

    /// Parse the value of the `<select>` element.
    pub fn from_value(value: &str) -> Option<Self> {
        let n: usize = value.trim().parse().ok()?;
        Self::ALL.into_iter().find(|rpp| rpp.get() == n)
    }
}

impl fmt::Display for RowsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows", self.get())
    }
}

/// Number of pages needed for `total_rows`.
pub fn total_pages(total_rows: usize, rows_per_page: RowsPerPage) -> usize {
    total_rows.div_ceil(rows_per_page.get())
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    page: usize,
    rows_per_page: RowsPerPage,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(RowsPerPage::default())
    }
}

impl Pagination {
    pub fn new(rows_per_page: RowsPerPage) -> Self {
        Self {
            page: 1,
            rows_per_page,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> RowsPerPage {
        self.rows_per_page
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Change the page size. Always returns to page 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: RowsPerPage) {
        self.rows_per_page = rows_per_page;
        self.page = 1;
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_pages(total_rows, self.rows_per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total_rows: usize) -> bool {
        self.page < self.total_pages(total_rows)
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total_rows: usize) {
        let last = self.total_pages(total_rows).max(1);
        self.page = (self.page + 1).min(last);
    }

    pub fn last(&mut self, total_rows: usize) {
        self.page = self.total_pages(total_rows).max(1);
    }

    /// Index range of the rows on the current page, clipped to `total_rows`.
    pub fn window(&self, total_rows: usize) -> Range<usize> {
        let size = self.rows_per_page.get();
        let start = (self.page - 1).saturating_mul(size).min(total_rows);
        let end = start.saturating_add(size).min(total_rows);
        start..end
    }
}
