//! `fakturo-ledger` — the authoritative collection of invoices, products,
//! customers and the seller profile.
//!
//! The ledger enforces idempotent creation and gapless per-year invoice
//! numbering, and delegates durability to a key-value store collaborator:
//! every mutation is "mutate in memory, then persist" as one unit.

pub mod ledger;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use ledger::Ledger;
pub use store::{InMemoryKvStore, KvStore, StoreError, collections};
