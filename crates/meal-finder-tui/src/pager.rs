/// Page state for the filtered meal list.
///
/// Tracks only the cursor (`current_page`) and the configured page size; the
/// number of pages is always derived from the list the caller passes in, so
/// the state can never disagree with the data it slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            // A zero page size would make every slice empty and total_pages
            // divide by zero; treat it as 1.
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for a list of `len` items, minimum 1.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, len: usize) {
        if self.current_page < self.total_pages(len) {
            self.current_page += 1;
        }
    }

    /// Go back one page; no-op on page 1.
    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jump to a page, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.total_pages(len));
    }

    /// Pull the cursor back into range after the underlying list changed
    /// (e.g. the filter shrank it). Keeps the page where possible.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.min(self.total_pages(len));
    }

    /// The current page's half-open slice of `items`.
    ///
    /// Out-of-range bounds yield an empty slice rather than a panic.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
