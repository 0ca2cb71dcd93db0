//! Pager
//!
//! Footer of the ticket table. It only draws the controls: the dashboard
//! always shows every loaded row and page 1 stays active.

use crate::constants::{DEFAULT_PAGE_SIZE, PAGER_PAGES, PAGE_SIZE_OPTIONS};

/// Decorative pager state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
    pages: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            pages: PAGER_PAGES,
        }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a rows-per-page option; values not offered keep the current one
    pub fn with_page_size(mut self, size: usize) -> Self {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.page_size = size;
        }
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `Rows per page: [10]   ‹  [1] 2 3 4 5  ›`
    pub fn render(&self) -> String {
        let pages = (1..=self.pages)
            .map(|p| {
                if p == self.current_page {
                    format!("[{p}]")
                } else {
                    p.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "Rows per page: [{}]   ‹  {}  ›",
            self.page_size, pages
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_always_active() {
        assert_eq!(
            Pager::new().render(),
            "Rows per page: [10]   ‹  [1] 2 3 4 5  ›"
        );
    }

    #[test]
    fn only_offered_page_sizes_are_accepted() {
        assert_eq!(Pager::new().with_page_size(20).page_size(), 20);
        assert_eq!(Pager::new().with_page_size(7).page_size(), DEFAULT_PAGE_SIZE);
    }
}
