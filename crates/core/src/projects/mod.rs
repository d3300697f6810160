//! Projects module - record model, currency normalization, aggregates and
//! the table query used by the dashboard.

mod currency;
mod projects_model;
mod status;
mod summary;
mod table;

pub use currency::parse_currency;
pub use projects_model::{parse_record_date, parse_records, ProjectRecord};
pub use status::{classify_status, StatusTone};
pub use summary::{summarize, AggregateSummary};
pub use table::{matches_search, query_projects, ProjectPage, ProjectQuery, ProjectRow};
