//! Project record domain model.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::Result;

use super::currency::parse_currency;

/// One project's financial and status data as received from the sheet.
///
/// Monetary fields stay in their source form (e.g. `"Rs. 12,345.00"`) and are
/// only turned into numbers by [`parse_currency`] when totals are computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub client_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_cost: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub profit_margin: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_amount: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub profit: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_received: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub outstanding: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_status: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
}

impl ProjectRecord {
    /// Names of the aggregated monetary fields that do not reduce to a number.
    ///
    /// Totals are still computed from such records; this only reports which
    /// sums they will poison.
    pub fn malformed_money_fields(&self) -> Vec<&'static str> {
        [
            ("paymentAmount", &self.payment_amount),
            ("outstanding", &self.outstanding),
            ("profit", &self.profit),
        ]
        .into_iter()
        .filter(|(_, raw)| parse_currency(raw).is_nan())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Decodes a JSON array of project records.
pub fn parse_records(body: &str) -> Result<Vec<ProjectRecord>> {
    let records: Vec<ProjectRecord> = serde_json::from_str(body)?;
    log::debug!("Decoded {} project records", records.len());
    Ok(records)
}

/// Parses a sheet date cell: `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

// Sheet cells arrive as strings, numbers or null depending on the column format.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => parse_record_date(&text),
        _ => None,
    })
}
