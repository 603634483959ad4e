//! Order store
//!
//! The sole interface through which order records are read or mutated.

pub mod orders;
pub mod seed;

pub use orders::{OrderStore, StoreError, StoreResult};
