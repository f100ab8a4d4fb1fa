use crate::store::PageId;
use crate::utils::fnv1;
use serde::{Deserialize, Serialize};

/// Index of a bucket within the index arena
pub type BucketId = u32;

/// Entries a bucket holds before its chain grows a new tail bucket
pub const DEFAULT_BUCKET_CAPACITY: usize = 5;

/// Default extra-bucket multiplier. 0.05-0.2 is the useful range; 0.2
/// measured the lowest collision and overflow rates on the embedded corpus.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.2;

/// Configuration for one build pass.
///
/// Threaded explicitly through the build call; there is no shared mutable
/// tuning state anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Words per page in the backing store
    pub page_size: usize,
    /// Entries per bucket before the chain grows a new tail
    pub bucket_capacity: usize,
    /// Multiplier controlling how many extra buckets are allocated relative
    /// to word count, trading memory for fewer overflows
    pub load_factor: f64,
}

impl IndexConfig {
    /// Default tuning with an explicit page size
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

/// A fixed-capacity container mapping words to page indices for one hash
/// slot. `overflow` links to the next bucket in the chain by arena index,
/// never by pointer.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    pub(crate) entries: Vec<(String, PageId)>,
    pub(crate) overflow: Option<BucketId>,
}

impl Bucket {
    pub fn entries(&self) -> &[(String, PageId)] {
        &self.entries
    }

    pub fn overflow(&self) -> Option<BucketId> {
        self.overflow
    }
}

/// The built, immutable hash index.
///
/// The first `slots` buckets of the arena are the primary buckets; overflow
/// buckets are appended behind them as chains grow. The index exposes no
/// mutation after build.
#[derive(Debug, Clone)]
pub struct HashIndex {
    pub(crate) buckets: Vec<Bucket>,
    pub(crate) slots: usize,
}

impl HashIndex {
    /// Number of primary buckets (the modulo for slot selection)
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Total buckets in the arena, overflow buckets included
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Slot a word maps to
    pub fn slot_of(&self, word: &str) -> usize {
        (fnv1(word.as_bytes()) % self.slots as u64) as usize
    }

    /// Walk one slot's chain, primary bucket first
    pub fn chain(&self, slot: usize) -> Chain<'_> {
        Chain {
            index: self,
            next: (slot < self.slots).then_some(slot as BucketId),
        }
    }
}

/// Iterator over the buckets of one overflow chain
pub struct Chain<'a> {
    index: &'a HashIndex,
    next: Option<BucketId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Bucket;

    fn next(&mut self) -> Option<&'a Bucket> {
        let id = self.next?;
        let bucket = &self.index.buckets[id as usize];
        self.next = bucket.overflow;
        Some(bucket)
    }
}

/// Counters recorded during one build, never updated afterward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Primary buckets allocated
    pub bucket_count: usize,
    pub bucket_capacity: usize,
    pub word_count: usize,
    /// Entries that landed outside their primary bucket
    pub collisions: usize,
    /// Overflow buckets created
    pub overflows: usize,
}

impl BuildStats {
    /// Collisions as a fraction of words (0 for an empty corpus)
    pub fn collision_rate(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.collisions as f64 / self.word_count as f64
        }
    }

    /// Overflow buckets as a fraction of words (0 for an empty corpus)
    pub fn overflow_rate(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.overflows as f64 / self.word_count as f64
        }
    }
}
