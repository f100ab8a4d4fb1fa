//! Build-statistics reporting.

use crate::session::Session;
use std::collections::HashMap;

/// Display build statistics for a session
pub fn show_stats(session: &Session) {
    let stats = session.stats();
    let store = session.store();
    let index = session.index();

    println!("Build Statistics");
    println!("================");
    println!();
    println!("Words:            {}", stats.word_count);
    println!("Page size:        {}", store.page_size());
    println!("Pages:            {}", store.page_count());
    println!("Bucket capacity:  {}", stats.bucket_capacity);
    println!("Primary buckets:  {}", stats.bucket_count);
    println!("Total buckets:    {}", index.bucket_count());
    println!(
        "Collisions:       {} ({:.2}%)",
        stats.collisions,
        stats.collision_rate() * 100.0
    );
    println!(
        "Overflows:        {} ({:.2}%)",
        stats.overflows,
        stats.overflow_rate() * 100.0
    );

    println!();
    println!("Chain lengths:");
    for (len, count) in chain_lengths(session) {
        println!("  {:2} bucket(s): {} slots", len, count);
    }
}

/// Machine-readable statistics
pub fn stats_json(session: &Session) -> serde_json::Value {
    let store = session.store();
    let chains: Vec<_> = chain_lengths(session)
        .into_iter()
        .map(|(len, count)| serde_json::json!({"buckets": len, "slots": count}))
        .collect();

    serde_json::json!({
        "stats": session.stats(),
        "page_size": store.page_size(),
        "page_count": store.page_count(),
        "total_buckets": session.index().bucket_count(),
        "chain_lengths": chains,
    })
}

/// How long the chains got: (chain length, number of slots), ascending
fn chain_lengths(session: &Session) -> Vec<(usize, usize)> {
    let index = session.index();
    let mut lengths: HashMap<usize, usize> = HashMap::new();
    for slot in 0..index.slots() {
        *lengths.entry(index.chain(slot).count()).or_insert(0) += 1;
    }
    let mut sorted: Vec<_> = lengths.into_iter().collect();
    sorted.sort_by_key(|&(len, _)| len);
    sorted
}
