//! Process-local dashboard state and the one-shot startup load.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use projectboard_core::ProjectRecord;
use projectboard_sheet_source::ProjectSource;
use tokio::sync::RwLock;

/// Shown when a failed fetch produced no message of its own.
const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while fetching data";

/// What the dashboard currently knows: the loaded records, whether the fetch
/// is still running, and the fetch error if it failed.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub records: Arc<Vec<ProjectRecord>>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owns the dashboard state. Records are written once, by [`load_once`].
#[derive(Debug, Default)]
pub struct DashboardStore {
    state: RwLock<DashboardSnapshot>,
    load_started: AtomicBool,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose load is about to be scheduled; reports `loading` from the start.
    pub fn pending() -> Self {
        Self {
            state: RwLock::new(DashboardSnapshot {
                loading: true,
                ..Default::default()
            }),
            load_started: AtomicBool::new(false),
        }
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().await.clone()
    }

    async fn begin_load(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    async fn finish_load(&self, outcome: Result<Vec<ProjectRecord>, String>) {
        let mut state = self.state.write().await;
        match outcome {
            Ok(records) => state.records = Arc::new(records),
            Err(message) => state.error = Some(message),
        }
        state.loading = false;
    }
}

/// Fetches the records once and stores the result or the error message.
///
/// Returns `false` without fetching when a load already ran on this store.
pub async fn load_once(store: &DashboardStore, source: &dyn ProjectSource) -> bool {
    if store.load_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Project load already started, skipping");
        return false;
    }

    store.begin_load().await;
    tracing::info!("Loading project records from {}", source.id());

    let outcome = match source.fetch_projects().await {
        Ok(records) => {
            let malformed = records
                .iter()
                .filter(|record| !record.malformed_money_fields().is_empty())
                .count();
            if malformed > 0 {
                tracing::warn!(
                    "{} of {} project records have monetary fields that do not parse; affected totals will be NaN",
                    malformed,
                    records.len()
                );
            }
            tracing::info!("Loaded {} project records", records.len());
            Ok(records)
        }
        Err(err) => {
            tracing::error!("Failed to load project records from {}: {}", source.id(), err);
            let message = err.to_string();
            Err(if message.trim().is_empty() {
                FALLBACK_ERROR_MESSAGE.to_string()
            } else {
                message
            })
        }
    };

    store.finish_load(outcome).await;
    true
}
