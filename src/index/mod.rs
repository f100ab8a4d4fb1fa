pub mod build;
pub mod search;
pub mod stats;
pub mod types;

pub use build::reindex;
pub use types::*;
