//! # storage-adapters
//!
//! `PostStore` implementations. The application never talks to a database
//! of its own; the default adapter forwards every operation to a hosted
//! PostgREST-style collection, and the in-memory adapter stands in for it
//! in tests and offline runs.

#[cfg(feature = "store-memory")]
mod memory;
#[cfg(feature = "store-rest")]
mod rest;

#[cfg(feature = "store-memory")]
pub use memory::MemoryPostStore;
#[cfg(feature = "store-rest")]
pub use rest::{RestPostStore, RestStoreConfig};
