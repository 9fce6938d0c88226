use serde_json::Value as JsonValue;
use thiserror::Error;

/// The four named collections the ledger persists.
pub mod collections {
    pub const INVOICES: &str = "invoices";
    pub const PRODUCTS: &str = "products";
    pub const CUSTOMERS: &str = "customers";
    pub const SELLER: &str = "seller";
}

/// Store operation error.
///
/// These are **infrastructure errors** (serialization, backend I/O) as
/// opposed to domain errors. The ledger maps them into
/// `DomainError::Persistence` so callers observe write failures instead of
/// having them swallowed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

/// Named-collection key-value store.
///
/// `save` replaces the whole collection document; `load` returns the whole
/// document or `None` when the collection has never been written. Works with
/// the in-memory implementation (tests/dev) and any future file or database
/// backend.
pub trait KvStore {
    fn load(&self, collection: &str) -> Result<Option<JsonValue>, StoreError>;

    fn save(&self, collection: &str, value: &JsonValue) -> Result<(), StoreError>;
}
