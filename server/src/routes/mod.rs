//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON catalog API, static asset directories and
//! Leptos SSR rendering under a single Axum router. The portfolio page is
//! the Leptos app at `/`.

pub mod catalog;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Read-only catalog API and health check.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/projects", get(catalog::list_projects))
        .route("/api/projects/{id}", get(catalog::get_project))
        .route("/healthz", get(catalog::healthz))
        .layer(cors)
        .with_state(state)
}

/// Leptos SSR frontend: API routes + Leptos SSR at `/` + `/pkg` and `/assets`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState, config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundle produced by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
