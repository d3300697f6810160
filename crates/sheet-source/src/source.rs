use async_trait::async_trait;
use projectboard_core::ProjectRecord;

use crate::errors::SourceError;

/// A place project records can be loaded from.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Identifier used in logs, e.g. "GOOGLE_SHEET".
    fn id(&self) -> &'static str;

    /// Loads the full record list. Called once per process; implementations
    /// must not retry.
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, SourceError>;
}
