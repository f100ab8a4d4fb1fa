//! Instrumented search layer.
//!
//! Both lookup strategies come back in one uniform shape — the page found,
//! the simulated storage accesses, and wall-clock elapsed time — so their
//! costs can be read side by side. This is the only layer front ends call.

use crate::session::Session;
use crate::store::PageId;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Which lookup strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    TableScan,
    HashIndex,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::TableScan => "table scan",
            Strategy::HashIndex => "hash index",
        }
    }
}

/// Uniform result of one instrumented lookup
#[derive(Debug, Clone, Copy)]
pub struct Lookup {
    pub strategy: Strategy,
    pub page: Option<PageId>,
    pub accesses: u32,
    pub elapsed: Duration,
}

impl Lookup {
    pub fn found(&self) -> bool {
        self.page.is_some()
    }
}

/// Executor over one built session
pub struct Executor<'a> {
    session: &'a Session,
}

impl<'a> Executor<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Linear table scan, timed
    pub fn table_scan(&self, word: &str) -> Lookup {
        let start = Instant::now();
        let (page, accesses) = self.session.store().table_scan(word);
        Lookup {
            strategy: Strategy::TableScan,
            page,
            accesses,
            elapsed: start.elapsed(),
        }
    }

    /// Hash-index lookup, timed
    pub fn hash_lookup(&self, word: &str) -> Lookup {
        let start = Instant::now();
        let (page, accesses) = self.session.index().lookup(word);
        Lookup {
            strategy: Strategy::HashIndex,
            page,
            accesses,
            elapsed: start.elapsed(),
        }
    }

    /// Run both strategies for the same word, hash index first
    pub fn compare(&self, word: &str) -> [Lookup; 2] {
        [self.hash_lookup(word), self.table_scan(word)]
    }

    /// Words of a page, for rendering lookup results
    pub fn page(&self, id: PageId) -> Option<&'a [String]> {
        self.session.store().page(id)
    }
}
