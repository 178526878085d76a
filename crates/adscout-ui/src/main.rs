//! adscout - main entry point.
//!
//! Loads configuration, constructs the backend, and starts the GPUI
//! application.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use adscout_core::AppConfig;
use adscout_ui::backend::{SearchBackend, StaticBackend};
use adscout_ui::window::run_app;

fn main() {
    // Config is loaded before logging so its filter directive can seed the
    // subscriber; errors are reported once the subscriber is up.
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG overrides the config directive.
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => {
            let directive = config.log_filter.clone().unwrap_or_else(|| "info".to_string());
            EnvFilter::new(directive)
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("adscout starting...");
    if let Some(e) = config_err {
        tracing::warn!("config error: {} - using default configuration", e);
    }

    // Create a tokio runtime and enter its context.
    // This keeps tokio available for the entire lifetime of the app,
    // which is needed for the channels used by the controller bridge.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to create tokio runtime");
    let _guard = rt.enter();

    // The search subsystem is an external collaborator; the bundled
    // backend serves canned listings so the view runs standalone.
    let backend: Arc<dyn SearchBackend> = Arc::new(StaticBackend::sample());

    // Fetch the model choices before the UI starts.
    let models = match rt.block_on(backend.models()) {
        Ok(models) => models,
        Err(e) => {
            tracing::error!("failed to load search models: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("loaded {} search models", models.len());

    run_app(config, backend, models);
}
