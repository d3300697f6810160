//! Spreadsheet web-app source.
//!
//! The sheet is published through an Apps Script web app that answers a bare
//! GET with a JSON array of project rows. Errors come back as an object with a
//! `message` field.

use std::time::Duration;

use async_trait::async_trait;
use projectboard_core::{parse_records, ProjectRecord};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::SourceError;
use crate::source::ProjectSource;

/// The published sheet endpoint. Not configurable.
pub const DEFAULT_SOURCE_URL: &str = "https://script.google.com/macros/s/AKfycbx6LZtblbYf7oDxzVBd45pAhoEqpjRH9VIz_Sq8s_qvMcu8YCw9tFp8Axad4VvR2DUHhw/exec";

const SOURCE_ID: &str = "GOOGLE_SHEET";

/// Used when a failed response carries no message of its own.
const DEFAULT_FAILURE_MESSAGE: &str = "Failed to fetch data";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by the web app
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Loads project records from the published sheet with a single GET.
pub struct SheetProjectSource {
    client: Client,
    endpoint: String,
}

impl SheetProjectSource {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_SOURCE_URL)
    }

    fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn failure_message(body: &str) -> String {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|err| err.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string())
    }
}

impl Default for SheetProjectSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectSource for SheetProjectSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, SourceError> {
        debug!("Fetching project records from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = Self::failure_message(&body);
            warn!("{} responded with {}: {}", SOURCE_ID, status, message);
            return Err(SourceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let records =
            parse_records(&body).map_err(|err| SourceError::InvalidPayload(err.to_string()))?;
        info!("Fetched {} project records from {}", records.len(), SOURCE_ID);
        Ok(records)
    }
}
