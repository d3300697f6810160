//! Dashboard aggregates.

use serde::{Deserialize, Serialize};

use super::currency::parse_currency;
use super::projects_model::ProjectRecord;

/// Totals shown on the dashboard cards.
///
/// Recomputed from the full record list on every request. A total is NaN
/// when any contributing field failed to parse; NaN serializes as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub count: usize,
    pub total_business: f64,
    pub total_outstanding: f64,
    /// Projected profit: profit across every project.
    pub total_profit: f64,
    /// Realized profit: profit of projects with nothing outstanding.
    pub current_profit: f64,
}

/// Reduces the record list into dashboard totals.
pub fn summarize(records: &[ProjectRecord]) -> AggregateSummary {
    let summary = records
        .iter()
        .fold(AggregateSummary::default(), |mut acc, record| {
            let outstanding = parse_currency(&record.outstanding);
            let profit = parse_currency(&record.profit);

            acc.count += 1;
            acc.total_business += parse_currency(&record.payment_amount);
            acc.total_outstanding += outstanding;
            acc.total_profit += profit;
            if outstanding == 0.0 {
                acc.current_profit += profit;
            }
            acc
        });

    log::debug!("Summarized {} project records", summary.count);
    summary
}
