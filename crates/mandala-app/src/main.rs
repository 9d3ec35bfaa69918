use std::sync::Arc;

use mandala_app::app::api::routes;
use mandala_app::config::ConfigHandler;
use mandala_app::store_handler::StoreHandler;
use mandala_core::config::{Settings, load_config};
use mandala_db::db::connection::create_pool;
use mandala_db::db::migrate::run_migrations;
use mandala_db::store::SharedStore;
use mandala_db::store::memory::MemoryStore;
use mandala_db::store::pg::PgStore;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// ## Summary
/// Opens the storage backend named by `database.url`.
///
/// ## Errors
/// Returns an error if the pool cannot be created or migrations fail.
async fn open_store(config: &Settings) -> anyhow::Result<SharedStore> {
    if config.database.is_memory() {
        tracing::warn!("Using the in-memory store; all data is lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    if config.database.run_migrations {
        run_migrations(&config.database.url).await?;
    }

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
    )
    .await?;

    tracing::info!("Database connection pool created.");

    Ok(Arc::new(PgStore::new(pool)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Mandala content API");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    if config.catalog.open_service_writes {
        tracing::warn!("Writes to /api/services are open to unauthenticated callers");
    }

    let store = open_store(&config).await?;

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
