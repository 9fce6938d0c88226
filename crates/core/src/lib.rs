//! `fakturo-core` — shared data model for the invoicing core.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! money, tax, proration, accounts, products, invoices, and the error
//! taxonomy shared by the calculation engine and the ledger.

pub mod account;
pub mod entity;
pub mod error;
pub mod id;
pub mod invoice;
pub mod money;
pub mod product;
pub mod proration;
pub mod tax;
pub mod value_object;

pub use account::Account;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, InvoiceId, LineItemId, ProductId};
pub use invoice::{CostedInvoice, ExchangeRate, Invoice, InvoiceKind, InvoiceStatus, LineItem};
pub use money::{Currency, Money};
pub use product::Product;
pub use proration::ProrationDetails;
pub use tax::{TaxData, TaxKind};
pub use value_object::ValueObject;
