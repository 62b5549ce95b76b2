//! Project catalog routes.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use projects::{Catalog, ProjectRecord};

use crate::state::AppState;

/// `GET /api/projects` — categories and projects in authored order.
pub async fn list_projects(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

/// `GET /api/projects/:id` — one project record.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectRecord>, StatusCode> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            tracing::debug!(%id, "unknown project id");
            StatusCode::NOT_FOUND
        })
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
