//! Proration: the fraction of a billing period actually used.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Derived proration outcome.
///
/// Produced by the calculation engine; never hand-edited afterwards.
/// `factor = days_of_use / total_days_in_period`, kept as a real number -
/// only the downstream monetary amount is ever rounded, not the factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProrationDetails {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive day count of the billing period, always >= 1.
    pub total_days_in_period: i64,
    /// Inclusive day count of the effective usage window, 0 when empty.
    pub days_of_use: i64,
    pub factor: f64,
}

impl ValueObject for ProrationDetails {}
