//! Catalogue products.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::ProductId;
use crate::money::Money;

/// A catalogue entry, referenced by id from invoice lines.
///
/// Finalized invoices carry their own price/tax snapshot; changing a product
/// afterwards does not touch them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub default_price: Money,
    pub active: bool,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
