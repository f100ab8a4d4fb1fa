//! Hash-index lookup.

use crate::index::types::HashIndex;
use crate::store::PageId;

impl HashIndex {
    /// Look up the page holding `word`.
    ///
    /// Visiting the primary bucket is the first access; every overflow hop
    /// adds one more. The count models simulated storage accesses and is
    /// directly comparable to the table scan's pages-touched metric. A miss
    /// reports the accesses accumulated over the whole chain, never zero.
    pub fn lookup(&self, word: &str) -> (Option<PageId>, u32) {
        let mut accesses = 1;
        let mut bucket = &self.buckets[self.slot_of(word)];
        loop {
            if let Some(&(_, page)) = bucket.entries.iter().find(|(w, _)| w == word) {
                return (Some(page), accesses);
            }
            match bucket.overflow {
                Some(next) => {
                    accesses += 1;
                    bucket = &self.buckets[next as usize];
                }
                None => return (None, accesses),
            }
        }
    }
}
