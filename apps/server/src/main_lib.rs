use std::sync::Arc;

use crate::store::{load_once, DashboardStore};
use projectboard_sheet_source::ProjectSource;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub store: Arc<DashboardStore>,
}

impl AppState {
    pub fn new(store: Arc<DashboardStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Builds the shared state and starts the single background load.
///
/// Returns immediately; until the fetch finishes the dashboard reports
/// `loading: true`.
pub fn build_state(source: Arc<dyn ProjectSource>) -> Arc<AppState> {
    let store = Arc::new(DashboardStore::pending());
    let loader = store.clone();
    tokio::spawn(async move {
        load_once(&loader, source.as_ref()).await;
    });
    AppState::new(store)
}
