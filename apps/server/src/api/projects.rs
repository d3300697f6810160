use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use projectboard_core::{query_projects, ProjectQuery};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState, models::ProjectsView};

#[derive(Debug, Deserialize)]
struct ProjectsParams {
    search: Option<String>,
    page: Option<String>,
}

// The fetch error is deliberately not part of this response.
async fn get_projects(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProjectsParams>,
) -> ApiResult<Json<ProjectsView>> {
    let query = ProjectQuery::parse(params.search.as_deref(), params.page.as_deref())?;
    let snapshot = state.store.snapshot().await;
    let page = query_projects(&snapshot.records, &query);
    Ok(Json(ProjectsView {
        loading: snapshot.loading,
        page,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/projects", get(get_projects))
}
