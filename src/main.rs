use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use translation_relay::{routes, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_relay=debug,tower_http=debug")),
        )
        .init();

    let config = Config::load()?;
    info!("Translate request timeout: {}s", config.api_timeout);
    if let Some(dir) = &config.static_dir {
        info!("Static files served from: {}", dir.display());
    }

    // Initialize app state
    let app_state = AppState::new(config.clone())?;
    let app = routes::build_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
