//! Shared utilities.
//!
//! - [`fnv`] - 64-bit FNV-1 hashing for bucket placement
//! - [`prime`] - trial-division primality for bucket-array sizing

pub mod fnv;
pub mod prime;

pub use fnv::*;
pub use prime::*;
