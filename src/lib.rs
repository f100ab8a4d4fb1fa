//! # hix - Hash Index vs Table Scan
//!
//! hix compares the cost of two lookup strategies over a static, paged,
//! in-memory word collection: a linear table scan and a hash index with
//! separate-chaining overflow buckets. Every lookup reports the page it
//! found, the simulated storage accesses it needed, and the wall-clock time
//! it took, so the strategies can be read side by side.
//!
//! ## Architecture
//!
//! - [`corpus`] - word-list loading (embedded resource or file override)
//! - [`store`] - the paged store and the instrumented table scan
//! - [`index`] - hash-index build, lookup, and statistics
//! - [`session`] - one atomic build producing an immutable store/index pair
//! - [`query`] - the command language and the instrumented search layer
//! - [`output`] - result formatting (colored text and JSON)
//! - [`repl`] - the line-oriented interaction loop
//! - [`tui`] - interactive terminal UI (feature `interactive`)
//! - [`utils`] - FNV-1 hashing and primality helpers
//!
//! ## Quick Start
//!
//! ```
//! use hix::index::types::IndexConfig;
//! use hix::query::executor::Executor;
//! use hix::session::Session;
//!
//! let words = vec!["apple".to_string(), "banana".to_string()];
//! let session = Session::build(words, &IndexConfig::with_page_size(2)).unwrap();
//! let executor = Executor::new(&session);
//!
//! let hash = executor.hash_lookup("banana");
//! let scan = executor.table_scan("banana");
//! assert_eq!(hash.page, scan.page);
//! ```

pub mod corpus;
pub mod index;
pub mod output;
pub mod query;
pub mod repl;
pub mod session;
pub mod store;
#[cfg(feature = "interactive")]
pub mod tui;
pub mod utils;
