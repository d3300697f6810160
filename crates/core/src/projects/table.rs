//! Search and pagination for the project table.

use serde::Serialize;

use crate::constants::PAGE_SIZE;
use crate::errors::Result;

use super::projects_model::ProjectRecord;
use super::status::{classify_status, StatusTone};

/// A table request: optional search text and a 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search: Option<String>,
    pub page: usize,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
        }
    }
}

impl ProjectQuery {
    pub fn new(search: Option<String>, page: usize) -> Self {
        Self {
            search: search.filter(|text| !text.is_empty()),
            page: page.max(1),
        }
    }

    /// Builds a query from raw request parameters.
    ///
    /// A missing or blank page means the first page; page `0` is clamped to 1.
    pub fn parse(search: Option<&str>, page: Option<&str>) -> Result<Self> {
        let page = match page.map(str::trim) {
            None | Some("") => 1,
            Some(raw) => raw.parse::<usize>()?,
        };
        Ok(Self::new(search.map(str::to_string), page))
    }
}

/// A record as shown in the table, with its status tone resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRow {
    #[serde(flatten)]
    pub record: ProjectRecord,
    pub status_tone: StatusTone,
}

impl From<&ProjectRecord> for ProjectRow {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            status_tone: classify_status(&record.payment_status),
            record: record.clone(),
        }
    }
}

/// One page of the filtered table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub items: Vec<ProjectRow>,
    /// Number of records matching the search, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Case-insensitive substring match against project name or client name.
pub fn matches_search(record: &ProjectRecord, text: &str) -> bool {
    let needle = text.to_lowercase();
    record.project_name.to_lowercase().contains(&needle)
        || record.client_name.to_lowercase().contains(&needle)
}

/// Filters records by the query's search text and returns the requested page.
pub fn query_projects(records: &[ProjectRecord], query: &ProjectQuery) -> ProjectPage {
    let matching: Vec<&ProjectRecord> = match query.search.as_deref() {
        Some(text) => records
            .iter()
            .filter(|record| matches_search(record, text))
            .collect(),
        None => records.iter().collect(),
    };

    let page = query.page.max(1);
    let total = matching.len();
    let items = matching
        .into_iter()
        .skip((page - 1).saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .map(ProjectRow::from)
        .collect();

    ProjectPage {
        items,
        total,
        page,
        page_size: PAGE_SIZE,
        total_pages: total.div_ceil(PAGE_SIZE),
    }
}
