//! End-to-end tests across the calculation engine and the ledger.
//!
//! Flow under test: draft → engine costing → idempotent commit → store
//! round trip → rendering-contract formatting.

use chrono::NaiveDate;

use fakturo_calc::{InvoiceDraft, LineItemDraft, calculate_invoice, calculate_proration};
use fakturo_core::{Account, AccountId, Currency, InvoiceKind, InvoiceStatus, Money, TaxData};

use crate::ledger::Ledger;
use crate::store::InMemoryKvStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn account(name: &str) -> Account {
    Account {
        id: AccountId::new(),
        name: name.to_string(),
        email: format!("{name}@example.com"),
        tax_id: Some("TAX-42".to_string()),
        address: "1 Main St".to_string(),
        currency: Currency::Usd,
    }
}

fn draft(lines: Vec<LineItemDraft>) -> InvoiceDraft {
    InvoiceDraft {
        kind: InvoiceKind::Full,
        issue_date: date(2026, 6, 1),
        due_date: date(2026, 7, 1),
        currency: Currency::Usd,
        exchange_rate: None,
        seller: account("seller"),
        buyer: account("buyer"),
        lines,
    }
}

fn plain_line(quantity: i64, unit_price: i64) -> LineItemDraft {
    LineItemDraft {
        product_id: None,
        description: "service".to_string(),
        quantity,
        unit_price: Money::new(unit_price, Currency::Usd),
        tax: Some(TaxData::exclusive(0.0)),
        discount: None,
        proration: None,
    }
}

#[test]
fn costed_draft_commits_and_survives_a_restart() {
    fakturo_observability::init();

    let costed = calculate_invoice(&draft(vec![plain_line(1, 150_000), plain_line(1, 50_000)]))
        .unwrap();
    assert_eq!(costed.grand_total.amount, 200_000);

    let mut ledger = Ledger::open(InMemoryKvStore::new()).unwrap();
    let committed = ledger.create_invoice(costed.clone(), "e2e-1").unwrap();
    assert_eq!(committed.number, "INV-2026-0001");
    assert_eq!(committed.status, InvoiceStatus::Draft);

    // Rendering contract on the committed record.
    assert_eq!(committed.grand_total.display(), "USD 2,000.00");

    // Restart: reload from the same store, record and totals intact.
    let store = ledger.close().unwrap();
    let mut reopened = Ledger::open(store).unwrap();
    assert_eq!(reopened.invoices().len(), 1);
    assert_eq!(reopened.invoices()[0].grand_total.amount, 200_000);

    // A retried commit after the restart is still a replay, not a duplicate.
    let replayed = reopened.create_invoice(costed, "e2e-1").unwrap();
    assert_eq!(replayed.id, committed.id);
    assert_eq!(reopened.invoices().len(), 1);
}

#[test]
fn prorated_taxed_line_flows_through_to_the_committed_totals() {
    let proration = calculate_proration(
        date(2026, 6, 1),
        date(2026, 6, 15),
        date(2026, 6, 1),
        date(2026, 6, 30),
    )
    .unwrap();

    let line = LineItemDraft {
        proration: Some(proration),
        tax: Some(TaxData::exclusive(10.0)),
        ..plain_line(1, 30_000)
    };
    let costed = calculate_invoice(&draft(vec![line])).unwrap();
    // 300.00 x 15/30 = 150.00 base, +10% tax = 165.00.
    assert_eq!(costed.subtotal.amount, 15_000);
    assert_eq!(costed.grand_total.amount, 16_500);

    let mut ledger = Ledger::open(InMemoryKvStore::new()).unwrap();
    let committed = ledger.create_invoice(costed, "e2e-2").unwrap();
    assert_eq!(committed.total_tax.amount, 1_500);
    assert_eq!(committed.lines.len(), 1);
    assert_eq!(committed.lines[0].proration.unwrap().days_of_use, 15);
}

#[test]
fn lifecycle_finalize_then_void_persists() {
    let costed = calculate_invoice(&draft(vec![plain_line(1, 10_000)])).unwrap();

    let mut ledger = Ledger::open(InMemoryKvStore::new()).unwrap();
    let id = ledger.create_invoice(costed, "e2e-3").unwrap().id;
    ledger.update_invoice_status(id, InvoiceStatus::Finalized).unwrap();
    ledger.update_invoice_status(id, InvoiceStatus::Void).unwrap();

    let store = ledger.close().unwrap();
    let reopened = Ledger::open(store).unwrap();
    assert_eq!(reopened.invoice(id).unwrap().status, InvoiceStatus::Void);
}
