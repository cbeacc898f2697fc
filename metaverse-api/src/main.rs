//! Metaverse Master API Server Entry Point

use metaverse_api::registry::ResponseRegistry;
use metaverse_api::{config, logging, server, AppState};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // .env はロギング設定より先に読み込む
    let dotenv = dotenvy::dotenv();

    if let Err(e) = logging::init() {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => warn!("Failed to load .env file: {}", err),
    }

    let config = config::load_server_config();
    info!("{} v{}", config.service_name, env!("CARGO_PKG_VERSION"));

    let registry = match ResponseRegistry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to build response registry: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Registered {} endpoints for {} teams",
        registry.len(),
        registry.team_ids().len()
    );

    let state = AppState::new(registry, config.service_name.as_str());

    if let Err(e) = server::run(state, &config.bind_addr()).await {
        error!("Server error on {}: {}", config.bind_addr(), e);
        std::process::exit(1);
    }
}
