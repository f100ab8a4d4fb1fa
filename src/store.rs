//! Paged store over the word collection.
//!
//! The store owns the ordered word sequence and a fixed page size. Pages are
//! contiguous views computed on demand; nothing is materialized per page.
//! Once constructed the store is read-only; a different page size means
//! building a new store.

use anyhow::{Result, bail};

/// Index of a page within the store
pub type PageId = u32;

#[derive(Debug, Clone)]
pub struct PagedStore {
    words: Vec<String>,
    page_size: usize,
}

impl PagedStore {
    /// Create a store over `words` with `page_size` words per page.
    ///
    /// A page size of zero is a configuration error, reported before any
    /// other work happens.
    pub fn new(words: Vec<String>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            bail!("page size must be at least 1");
        }
        Ok(Self { words, page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of words in the store
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Total number of pages: `ceil(len / page_size)`
    pub fn page_count(&self) -> usize {
        self.words.len().div_ceil(self.page_size)
    }

    /// Page holding the word at position `pos`
    pub fn page_of(&self, pos: usize) -> PageId {
        (pos / self.page_size) as PageId
    }

    /// Fetch page `id`. An out-of-range index is a normal `None`, not an
    /// error.
    pub fn page(&self, id: PageId) -> Option<&[String]> {
        let start = (id as usize).checked_mul(self.page_size)?;
        if start >= self.words.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.words.len());
        Some(&self.words[start..end])
    }

    /// Linear scan for `word` from the start of the collection.
    ///
    /// On a hit the access count is the number of pages touched up to and
    /// including the match (`page + 1`). On a full miss every page was
    /// touched, so the count is `page_count()`.
    pub fn table_scan(&self, word: &str) -> (Option<PageId>, u32) {
        match self.words.iter().position(|w| w == word) {
            Some(pos) => {
                let page = self.page_of(pos);
                (Some(page), page + 1)
            }
            None => (None, self.page_count() as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<String> {
        ["apple", "banana", "cherry", "date", "fig"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(PagedStore::new(fruit(), 0).is_err());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(PagedStore::new(fruit(), 2).unwrap().page_count(), 3);
        assert_eq!(PagedStore::new(fruit(), 5).unwrap().page_count(), 1);
        assert_eq!(PagedStore::new(fruit(), 1).unwrap().page_count(), 5);
        assert_eq!(PagedStore::new(Vec::new(), 4).unwrap().page_count(), 0);
    }

    #[test]
    fn test_page_views() {
        let store = PagedStore::new(fruit(), 2).unwrap();
        assert_eq!(store.page(0).unwrap(), ["apple", "banana"]);
        assert_eq!(store.page(1).unwrap(), ["cherry", "date"]);
        // Final page is short
        assert_eq!(store.page(2).unwrap(), ["fig"]);
        assert_eq!(store.page(3), None);
    }

    #[test]
    fn test_table_scan_hit_counts_pages_touched() {
        let store = PagedStore::new(fruit(), 2).unwrap();
        assert_eq!(store.table_scan("apple"), (Some(0), 1));
        assert_eq!(store.table_scan("cherry"), (Some(1), 2));
        assert_eq!(store.table_scan("fig"), (Some(2), 3));
    }

    #[test]
    fn test_table_scan_miss_counts_all_pages() {
        // A full miss scanned every page, not zero of them.
        let store = PagedStore::new(fruit(), 2).unwrap();
        assert_eq!(store.table_scan("kiwi"), (None, 3));
    }

    #[test]
    fn test_empty_store() {
        let store = PagedStore::new(Vec::new(), 3).unwrap();
        assert_eq!(store.page_count(), 0);
        assert_eq!(store.page(0), None);
        assert_eq!(store.table_scan("anything"), (None, 0));
    }
}
