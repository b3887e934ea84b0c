//! Compensation Engine HTTP server.

use compensation_engine::api::{AppState, create_router};
use compensation_engine::config::{ConfigLoader, ServerSettings};
use compensation_engine::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let settings =
        ServerSettings::from_env().inspect_err(|e| error!(error = %e, "Invalid settings"))?;

    let loader = match &settings.rules_path {
        Some(path) => ConfigLoader::load(path)
            .inspect_err(|e| error!(error = %e, "Failed to load rule tables"))?,
        None => {
            info!("No rule file configured, using the standard rule tables");
            ConfigLoader::standard()
        }
    };

    let app = create_router(AppState::new(loader.into_tables()));
    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    info!(addr = %settings.addr, "Compensation Engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
