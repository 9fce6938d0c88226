//! Seller and customer profiles.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::AccountId;
use crate::money::Currency;

/// A seller or buyer profile.
///
/// Owned independently of any invoice. An invoice embeds a **copy** taken at
/// creation time, so later edits to an account never retroactively alter
/// issued invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    /// Required by policy on the buyer side of Full invoices.
    pub tax_id: Option<String>,
    pub address: String,
    pub currency: Currency,
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
