//! `fakturo-calc` — the pure calculation engine.
//!
//! Deterministic transformation from raw line-item/invoice drafts to
//! fully-costed output. No I/O, no shared state, no wall-clock reads - safe
//! to call repeatedly and concurrently. Committing the result is the
//! ledger's job (`fakturo-ledger`).

pub mod engine;
pub mod proration;

pub use engine::{
    InvoiceDraft, LineItemDraft, calculate_invoice, calculate_line_item, recalculate,
};
pub use proration::calculate_proration;
