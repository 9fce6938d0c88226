//! Invoices and their fully-costed line items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::entity::Entity;
use crate::id::{InvoiceId, LineItemId, ProductId};
use crate::money::{Currency, Money};
use crate::proration::ProrationDetails;
use crate::tax::TaxData;

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Finalized,
    Paid,
    Void,
}

/// Simplified invoices omit buyer fiscal details; Full invoices require a
/// buyer tax id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    Simplified,
    Full,
}

/// Pass-through exchange-rate attribute.
///
/// Carried on the invoice for display/reporting; the core performs no
/// conversion arithmetic with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub base: Currency,
    pub quote: Currency,
    pub rate: f64,
}

/// A fully-costed invoice line.
///
/// `subtotal`, `tax_amount` and `total` are outputs of the calculation
/// engine; callers never supply them as ground truth, they are always
/// recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: Option<ProductId>,
    pub description: String,
    pub quantity: i64,
    /// Exclusive of tax.
    pub unit_price: Money,
    pub tax: TaxData,
    pub discount: Option<Money>,
    pub proration: Option<ProrationDetails>,
    /// Base amount (after proration, before discount).
    pub subtotal: Money,
    pub tax_amount: Money,
    pub total: Money,
}

/// The calculation engine's output shape: computed lines and aggregate
/// totals overlaid on caller-supplied metadata.
///
/// Carries no identity, invoice number or status - those are assigned by the
/// ledger at commit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostedInvoice {
    pub kind: InvoiceKind,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub currency: Currency,
    pub exchange_rate: Option<ExchangeRate>,
    pub seller: Account,
    pub buyer: Account,
    pub lines: Vec<LineItem>,
    pub subtotal: Money,
    pub total_discount: Money,
    pub total_tax: Money,
    pub grand_total: Money,
}

/// A committed invoice record.
///
/// `seller` and `buyer` are snapshots exclusively owned by the invoice.
/// Invoices are never deleted, only voided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    /// Sequential `INV-{year}-{seq:04}`, gapless per calendar year.
    pub number: String,
    pub status: InvoiceStatus,
    /// Caller-supplied token making creation replays return the prior
    /// record instead of producing a duplicate. Unique across the ledger.
    pub idempotency_key: String,
    pub kind: InvoiceKind,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub currency: Currency,
    pub exchange_rate: Option<ExchangeRate>,
    pub seller: Account,
    pub buyer: Account,
    pub lines: Vec<LineItem>,
    pub subtotal: Money,
    pub total_discount: Money,
    pub total_tax: Money,
    pub grand_total: Money,
}

impl Invoice {
    /// Assemble a Draft invoice from a costed payload and ledger-assigned
    /// identity.
    pub fn draft(
        id: InvoiceId,
        number: String,
        idempotency_key: String,
        costed: CostedInvoice,
    ) -> Self {
        Self {
            id,
            number,
            status: InvoiceStatus::Draft,
            idempotency_key,
            kind: costed.kind,
            issue_date: costed.issue_date,
            due_date: costed.due_date,
            currency: costed.currency,
            exchange_rate: costed.exchange_rate,
            seller: costed.seller,
            buyer: costed.buyer,
            lines: costed.lines,
            subtotal: costed.subtotal,
            total_discount: costed.total_discount,
            total_tax: costed.total_tax,
            grand_total: costed.grand_total,
        }
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl InvoiceStatus {
    /// Legal transitions: Draft→Finalized, Draft→Void, Finalized→Paid,
    /// Finalized→Void. Repeating the current status is a no-op.
    pub fn can_transition_to(self, next: InvoiceStatus) -> bool {
        use InvoiceStatus::*;
        matches!(
            (self, next),
            (Draft, Finalized) | (Draft, Void) | (Finalized, Paid) | (Finalized, Void)
        ) || self == next
    }
}
