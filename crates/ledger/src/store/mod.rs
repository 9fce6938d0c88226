//! Key-value persistence boundary.
//!
//! This module defines an infrastructure-facing abstraction for storing and
//! loading named record collections without making any storage assumptions.
//! Each collection is a self-contained document, loaded in full at startup
//! and rewritten in full after each mutation - there is no incremental
//! persistence format.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryKvStore;
pub use r#trait::{KvStore, StoreError, collections};
