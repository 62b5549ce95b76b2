mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::ServerConfig::from_env().map_err(|e| e.to_string())?;
    let catalog = config::load_catalog().map_err(|e| e.to_string())?;
    tracing::info!(
        projects = catalog.projects().len(),
        categories = catalog.categories().len(),
        "project catalog loaded"
    );

    let state = state::AppState::new(catalog);
    let app = routes::leptos_app(state, &config)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| format!("bind port {}: {e}", config.port))?;

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("serve: {e}"))
}
