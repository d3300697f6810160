use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use projectboard_core::summarize;

use crate::{main_lib::AppState, models::DashboardView};

/// Summary cards, recomputed from the loaded records on every request.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let snapshot = state.store.snapshot().await;
    let summary = summarize(&snapshot.records);
    Json(DashboardView::new(snapshot.loading, snapshot.error, summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
