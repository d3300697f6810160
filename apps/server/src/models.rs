//! JSON view models served to the dashboard front end.

use projectboard_core::constants::{COUNT_PRECISION, MONEY_PRECISION};
use projectboard_core::{AggregateSummary, ProjectPage};
use serde::Serialize;

const TOTAL_PROJECTS_COLOR: &str = "#1890ff";
const TOTAL_BUSINESS_COLOR: &str = "#52c41a";
const CURRENT_PROFIT_COLOR: &str = "#2db7f5";
const PROJECTED_PROFIT_COLOR: &str = "#faad14";
const OUTSTANDING_DUE_COLOR: &str = "#cf1322";
const OUTSTANDING_CLEAR_COLOR: &str = "#3f8600";

/// One summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    /// Value rounded to `precision` decimals; `null` when the total is NaN.
    pub value: f64,
    pub precision: u32,
    pub formatted: String,
    pub color: &'static str,
}

impl StatCard {
    fn new(title: &'static str, value: f64, precision: u32, color: &'static str) -> Self {
        Self {
            title,
            value: round_to(value, precision),
            precision,
            formatted: format_amount(value, precision),
            color,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub loading: bool,
    pub error: Option<String>,
    pub summary: AggregateSummary,
    pub cards: Vec<StatCard>,
}

impl DashboardView {
    pub fn new(loading: bool, error: Option<String>, summary: AggregateSummary) -> Self {
        Self {
            loading,
            error,
            cards: stat_cards(&summary),
            summary,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsView {
    pub loading: bool,
    #[serde(flatten)]
    pub page: ProjectPage,
}

/// The five dashboard cards in display order.
pub fn stat_cards(summary: &AggregateSummary) -> Vec<StatCard> {
    let outstanding_color = if summary.total_outstanding > 0.0 {
        OUTSTANDING_DUE_COLOR
    } else {
        OUTSTANDING_CLEAR_COLOR
    };

    vec![
        StatCard::new(
            "Total Projects",
            summary.count as f64,
            COUNT_PRECISION,
            TOTAL_PROJECTS_COLOR,
        ),
        StatCard::new(
            "Total Business",
            summary.total_business,
            MONEY_PRECISION,
            TOTAL_BUSINESS_COLOR,
        ),
        StatCard::new(
            "Current Profit",
            summary.current_profit,
            MONEY_PRECISION,
            CURRENT_PROFIT_COLOR,
        ),
        StatCard::new(
            "Projected Profit",
            summary.total_profit,
            MONEY_PRECISION,
            PROJECTED_PROFIT_COLOR,
        ),
        StatCard::new(
            "Total Outstanding",
            summary.total_outstanding,
            MONEY_PRECISION,
            outstanding_color,
        ),
    ]
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Fixed-precision text with thousands separators, e.g. `12,345.00`.
/// Non-finite values render as `-`.
pub fn format_amount(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let text = format!("{:.*}", precision as usize, value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    let is_zero = text.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !is_zero {
        grouped.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
