//! Line-item and invoice costing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fakturo_core::{
    Account, CostedInvoice, Currency, DomainError, DomainResult, ExchangeRate, InvoiceKind,
    LineItem, LineItemId, Money, ProductId, ProrationDetails, TaxData, TaxKind,
};

/// Raw line-item input as supplied by a form collaborator.
///
/// Monetary inputs arrive as integers in the smallest currency unit; the
/// major-unit-to-minor-unit conversion (x100) happened at the form boundary.
/// Required/optional markers are explicit: missing tax data is rejected here
/// instead of being silently defaulted inside the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemDraft {
    pub product_id: Option<ProductId>,
    pub description: String,
    /// Defaults to 0 when absent from the payload.
    #[serde(default)]
    pub quantity: i64,
    /// Exclusive of tax; the amount may be 0.
    pub unit_price: Money,
    /// Required. Absence is a caller contract violation.
    pub tax: Option<TaxData>,
    pub discount: Option<Money>,
    pub proration: Option<ProrationDetails>,
}

/// Raw invoice input: metadata plus line drafts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub kind: InvoiceKind,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub currency: Currency,
    pub exchange_rate: Option<ExchangeRate>,
    pub seller: Account,
    pub buyer: Account,
    pub lines: Vec<LineItemDraft>,
}

/// Round to the nearest integer minor unit, ties upward (toward +inf).
///
/// Applied exactly once per monetary result, never per intermediate step.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Cost a single line item.
///
/// 1. base = quantity x unit price, scaled by the proration factor (one
///    rounding) when a proration is present.
/// 2. taxable = base - discount (discount defaults to 0).
/// 3. Exclusive: tax = taxable x rate/100. Inclusive: the taxable amount is
///    the tax-inclusive gross; tax = gross - gross/(1 + rate/100). Either
///    way the tax is rounded once, after the division.
/// 4. subtotal = base, total = taxable + tax (Exclusive) or the gross itself
///    (Inclusive - tax is already embedded, it is not added again).
///
/// A present-but-zero rate still routes through the normal branch so audit
/// output stays uniform. Negative quantities or prices pass through
/// arithmetically; rejecting them is a form-boundary concern.
pub fn calculate_line_item(draft: &LineItemDraft) -> DomainResult<LineItem> {
    let tax = draft
        .tax
        .ok_or_else(|| DomainError::missing_field("tax_data"))?;
    if !(0.0..=100.0).contains(&tax.rate) {
        return Err(DomainError::invalid_input(format!(
            "tax rate {} outside [0, 100]",
            tax.rate
        )));
    }

    let currency = draft.unit_price.currency;
    if let Some(discount) = &draft.discount {
        if discount.currency != currency {
            return Err(DomainError::currency_mismatch(format!(
                "discount {} vs unit price {}",
                discount.currency, currency
            )));
        }
    }

    let raw_base = (draft.quantity as i128)
        .checked_mul(draft.unit_price.amount as i128)
        .filter(|v| i64::try_from(*v).is_ok())
        .ok_or_else(|| DomainError::invalid_input("line amount overflow"))? as i64;

    let base = match &draft.proration {
        Some(p) => round_half_up(raw_base as f64 * p.factor),
        None => raw_base,
    };

    let discount_amount = draft.discount.map(|d| d.amount).unwrap_or(0);
    let taxable = base - discount_amount;

    let tax_amount = match tax.kind {
        TaxKind::Exclusive => round_half_up(taxable as f64 * tax.rate / 100.0),
        TaxKind::Inclusive => {
            let gross = taxable as f64;
            round_half_up(gross - gross / (1.0 + tax.rate / 100.0))
        }
    };

    let total = match tax.kind {
        TaxKind::Exclusive => taxable + tax_amount,
        TaxKind::Inclusive => taxable,
    };

    Ok(LineItem {
        id: LineItemId::new(),
        product_id: draft.product_id,
        description: draft.description.clone(),
        quantity: draft.quantity,
        unit_price: draft.unit_price,
        tax,
        discount: draft.discount,
        proration: draft.proration,
        subtotal: Money::new(base, currency),
        tax_amount: Money::new(tax_amount, currency),
        total: Money::new(total, currency),
    })
}

/// Cost every line of a draft and aggregate invoice totals.
///
/// All sums are integer accumulation in the draft's declared currency; a
/// line costed in a different currency fails with `CurrencyMismatch`.
/// `total_discount` accumulates only explicitly present discounts (an absent
/// discount contributes 0). Identity, invoice number and status are **not**
/// assigned here - they belong to the ledger.
pub fn calculate_invoice(draft: &InvoiceDraft) -> DomainResult<CostedInvoice> {
    let currency = draft.currency;
    let mut subtotal = Money::zero(currency);
    let mut total_discount = Money::zero(currency);
    let mut total_tax = Money::zero(currency);
    let mut grand_total = Money::zero(currency);

    let mut lines = Vec::with_capacity(draft.lines.len());
    for line_draft in &draft.lines {
        let line = calculate_line_item(line_draft)?;
        subtotal = subtotal.checked_add(line.subtotal)?;
        total_tax = total_tax.checked_add(line.tax_amount)?;
        grand_total = grand_total.checked_add(line.total)?;
        if let Some(discount) = line.discount {
            total_discount = total_discount.checked_add(discount)?;
        }
        lines.push(line);
    }

    Ok(CostedInvoice {
        kind: draft.kind,
        issue_date: draft.issue_date,
        due_date: draft.due_date,
        currency,
        exchange_rate: draft.exchange_rate,
        seller: draft.seller.clone(),
        buyer: draft.buyer.clone(),
        lines,
        subtotal,
        total_discount,
        total_tax,
        grand_total,
    })
}

/// Recompute an invoice from the current form state.
///
/// The caller invokes this on every edit event; there is no subscription or
/// event loop inside the engine.
pub fn recalculate(current_form_state: &InvoiceDraft) -> DomainResult<CostedInvoice> {
    calculate_invoice(current_form_state)
}
