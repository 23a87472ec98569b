use am_server::{AppState, build_router, error::ServerError, logger};

use am_config::{Config, StoreBackend};
use am_session::{FileKeyValueStore, KeyValueStore};
use am_store::{DataStore, MemoryStore, RestStore, SharedStore, seed_sample_data};
use am_warranty::WarrantyClient;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Ignoring unreadable .env file: {e}");
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent).map_err(|source| ServerError::LogFile {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting am-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = connect_store(&config)?;

    if config.store.seed_sample_data {
        match seed_sample_data(&store).await {
            Ok(report) => info!("Sample data: {} rows created", report.total()),
            Err(e) => warn!("Sample data seeding failed: {e}"),
        }
    }

    // Persisted client state (session record and warranty token)
    let state_path = config.state_file_path()?;
    let persisted: Arc<dyn KeyValueStore> = Arc::new(
        FileKeyValueStore::open(&state_path).map_err(ServerError::from)?,
    );
    info!("Client state file: {}", state_path.display());

    let warranty = Arc::new(
        WarrantyClient::new(
            &config.warranty.base_url,
            Duration::from_secs(config.warranty.timeout_secs),
            persisted.clone(),
        )
        .map_err(ServerError::from)?,
    );

    // Build application state and restore any persisted session
    let app_state = AppState::new(store, persisted, warranty, &config);
    app_state.restore_session().await;
    match app_state.session.current().await {
        Some(identity) => info!("Restored session for {}", identity.email),
        None => info!("No persisted session"),
    }

    let resources = app_state.resources.clone();
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    resources.unmount_all();
    info!("Graceful shutdown complete");

    Ok(())
}

fn connect_store(config: &Config) -> Result<SharedStore, ServerError> {
    let store: SharedStore = match config.store.backend {
        StoreBackend::Rest => {
            // validate() guarantees both are present for the rest backend
            let url = config.store.url.as_deref().unwrap_or_default();
            let api_key = config.store.api_key.as_deref().unwrap_or_default();
            info!("Using remote store at {url}");
            Arc::new(RestStore::new(
                url,
                api_key,
                Duration::from_secs(config.store.timeout_secs),
            )?) as Arc<dyn DataStore>
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on exit");
            Arc::new(MemoryStore::new()) as Arc<dyn DataStore>
        }
    };

    Ok(store)
}
