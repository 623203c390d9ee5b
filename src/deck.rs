//! Deck Paging
//!
//! A flat ordered list viewed one fixed-size page at a time, with a
//! pointer to the active card inside the current page.

/// Default number of cards per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Items of page `k`: `[k*P, min((k+1)*P, N))`, empty past the end
pub fn page_of<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck<T> {
    items: Vec<T>,
    page_size: usize,
    page: usize,
    index: usize,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl<T> Deck<T> {
    /// Page size 0 is treated as 1
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            page: 0,
            index: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    fn page_end(&self) -> usize {
        (self.page + 1).saturating_mul(self.page_size)
    }

    /// Cards of the current page
    pub fn current_page(&self) -> &[T] {
        page_of(&self.items, self.page_size, self.page)
    }

    /// Cards not yet decided, topmost first
    pub fn remaining(&self) -> &[T] {
        let page = self.current_page();
        &page[self.index.min(page.len())..]
    }

    /// The interactive card
    pub fn top(&self) -> Option<&T> {
        self.current_page().get(self.index)
    }

    pub fn has_cards(&self) -> bool {
        self.index < self.current_page().len()
    }

    pub fn has_more_pages(&self) -> bool {
        self.page_end() < self.items.len()
    }

    /// Move past the top card after a decision
    pub fn advance(&mut self) {
        if self.has_cards() {
            self.index += 1;
        }
    }

    /// Switch to the next page and reset the pointer; false when none left
    pub fn load_more(&mut self) -> bool {
        if !self.has_more_pages() {
            return false;
        }
        self.page += 1;
        self.index = 0;
        true
    }
}
