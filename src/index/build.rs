//! Hash-index construction.
//!
//! One atomic pass over the word collection: size the bucket array, insert
//! every word keyed to its page, grow overflow chains as buckets fill, and
//! record the collision/overflow counters. The returned index and statistics
//! are immutable; rebuilding with different settings produces a fresh pair.

use crate::index::types::{Bucket, BucketId, BuildStats, HashIndex, IndexConfig};
use crate::store::PageId;
use crate::utils::{fnv1, next_prime};
use anyhow::{Result, bail};

/// Number of primary buckets for a corpus of `word_count` words:
/// `ceil(word_count / capacity) + word_count * load_factor`, rounded up and
/// advanced to the next prime. Never zero, even for an empty corpus.
pub fn bucket_count_for(word_count: usize, config: &IndexConfig) -> usize {
    let estimate = (word_count as f64 / config.bucket_capacity as f64).ceil()
        + word_count as f64 * config.load_factor;
    next_prime((estimate.ceil() as usize).max(1))
}

fn validate(config: &IndexConfig) -> Result<()> {
    if config.page_size == 0 {
        bail!("page size must be at least 1");
    }
    if config.bucket_capacity == 0 {
        bail!("bucket capacity must be at least 1");
    }
    if !config.load_factor.is_finite() || config.load_factor < 0.0 {
        bail!("load factor must be finite and non-negative");
    }
    Ok(())
}

/// Build a hash index mapping every word to the page that holds it.
pub fn reindex(words: &[String], config: &IndexConfig) -> Result<(HashIndex, BuildStats)> {
    validate(config)?;

    let slots = bucket_count_for(words.len(), config);
    let mut buckets: Vec<Bucket> = vec![Bucket::default(); slots];
    let mut collisions = 0usize;
    let mut overflows = 0usize;

    for (pos, word) in words.iter().enumerate() {
        let page = (pos / config.page_size) as PageId;
        let slot = (fnv1(word.as_bytes()) % slots as u64) as usize;

        // Walk the chain to its tail, remembering any existing entry for
        // this word along the way.
        let mut tail = slot;
        let mut existing: Option<(usize, usize)> = None;
        loop {
            if let Some(i) = buckets[tail].entries.iter().position(|(w, _)| w == word) {
                existing = Some((tail, i));
            }
            match buckets[tail].overflow {
                Some(next) => tail = next as usize,
                None => break,
            }
        }

        // A repeated word keeps its single entry; the later page index wins.
        if let Some((bucket, entry)) = existing {
            buckets[bucket].entries[entry].1 = page;
            continue;
        }

        let dest = if buckets[tail].entries.len() < config.bucket_capacity {
            tail
        } else {
            buckets.push(Bucket::default());
            let fresh = buckets.len() - 1;
            buckets[tail].overflow = Some(fresh as BucketId);
            overflows += 1;
            fresh
        };

        // Collision bookkeeping is decided per word, not with a flag shared
        // across iterations: did this entry land outside its primary bucket?
        if dest != slot {
            collisions += 1;
        }
        buckets[dest].entries.push((word.clone(), page));
    }

    let stats = BuildStats {
        bucket_count: slots,
        bucket_capacity: config.bucket_capacity,
        word_count: words.len(),
        collisions,
        overflows,
    };
    Ok((HashIndex { buckets, slots }, stats))
}
