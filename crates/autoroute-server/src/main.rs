mod registry;
mod state;

// Every file in here is also picked up by the directory scan
mod routes {
    pub mod index;
    pub mod users;
    pub mod auth {
        pub mod login;
    }
}

use anyhow::{Context, Result};
use autoroute::{config::CONFIG_FILE, magic_with_report, Config};
use axum::Router;
use state::AppState;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,autoroute=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path =
        std::env::var("AUTOROUTE_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });

    let app = build_app(&config, AppState::seeded("autoroute"))?;

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Mounts the routes directory and attaches state and tracing
fn build_app(config: &Config, state: AppState) -> Result<Router> {
    let mut registry = registry::registry();

    // Relative routes directories live inside this crate
    let options = config
        .routing
        .mount_options(Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))));

    let report = magic_with_report(&config.routing.routes_dir, &mut registry, &options)
        .with_context(|| format!("Failed to mount routes from {}", config.routing.routes_dir))?;

    info!(
        "Mounted {} route modules from {}",
        report.routes.len(),
        report.routes_dir.display()
    );
    let prefix = report.prefix.as_deref().unwrap_or("");
    for route in &report.routes {
        let path = if route.mount_path == "/" && !prefix.is_empty() {
            prefix.to_string()
        } else {
            format!("{}{}", prefix, route.mount_path)
        };
        info!("  {} -> {} ({})", path, route.file.display(), route.kind);
    }

    for key in registry.unclaimed() {
        warn!(module = %key, "registered route module has no file under the routes directory");
    }

    Ok(report.router.with_state(state).layer(TraceLayer::new_for_http()))
}
