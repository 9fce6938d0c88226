//! Usage-window proration over a billing period.

use chrono::NaiveDate;

use fakturo_core::{DomainError, DomainResult, ProrationDetails};

/// Derive the prorated fraction of a billing period covered by a usage window.
///
/// Day counts are inclusive of both endpoints, so a single-day period is one
/// day, not zero. The usage window is clamped to the period bounds; an empty
/// intersection yields `days_of_use = 0` rather than an error. The factor is
/// kept as a real number - only the downstream monetary amount is rounded.
pub fn calculate_proration(
    usage_start: NaiveDate,
    usage_end: NaiveDate,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> DomainResult<ProrationDetails> {
    if period_end < period_start {
        return Err(DomainError::invalid_input(format!(
            "billing period end {period_end} precedes start {period_start}"
        )));
    }

    let total_days_in_period = (period_end - period_start).num_days() + 1;

    let effective_start = usage_start.max(period_start);
    let effective_end = usage_end.min(period_end);
    let days_of_use = if effective_end < effective_start {
        0
    } else {
        (effective_end - effective_start).num_days() + 1
    };

    Ok(ProrationDetails {
        start_date: effective_start,
        end_date: effective_end,
        total_days_in_period,
        days_of_use,
        factor: days_of_use as f64 / total_days_in_period as f64,
    })
}
