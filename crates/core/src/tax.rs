//! Tax rate and composition mode.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Whether a stated price already contains tax (Inclusive) or tax is added on
/// top (Exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxKind {
    Inclusive,
    Exclusive,
}

/// Tax configuration for one line item.
///
/// `rate` is a percentage in `[0, 100]`; fractional rates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxData {
    pub rate: f64,
    pub kind: TaxKind,
}

impl ValueObject for TaxData {}

impl TaxData {
    pub fn exclusive(rate: f64) -> Self {
        Self {
            rate,
            kind: TaxKind::Exclusive,
        }
    }

    pub fn inclusive(rate: f64) -> Self {
        Self {
            rate,
            kind: TaxKind::Inclusive,
        }
    }
}
