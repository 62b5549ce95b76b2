//! Shared server state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is validated once at startup and never mutated afterwards.

use std::sync::Arc;

use projects::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}
