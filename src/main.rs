mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, StorageBackend};
use crate::core::database;
use crate::core::router::{build_router, AppServices};
use crate::features::categories::{CategoryCatalog, CurrentCategoryHint};
use crate::modules::storage::{MemoryTriviaStore, PgTriviaStore, TriviaStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: storage={:?}, tokio_worker_threads={}",
        config.database.backend,
        worker_threads
    );

    let store = create_store(&config).await?;

    // Categories are read-only through the API, so one snapshot serves the process
    let catalog = CategoryCatalog::load(store.as_ref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load category catalog: {}", e))?;
    if catalog.is_empty() {
        tracing::warn!("Category catalog is empty; quizzes and category listings will 404");
    } else {
        tracing::info!("Category catalog loaded with {} categories", catalog.len());
    }

    let hint = CurrentCategoryHint::from_setting(config.quiz.current_category.as_deref());
    let services = AppServices::new(store, catalog, hint);
    let app = build_router(services, config.app.cors_allowed_origins.clone());

    let listener = bind_listener(&config.app.server_address())?;
    tracing::info!("Server listening on http://{}", config.app.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}

async fn create_store(config: &Config) -> anyhow::Result<Arc<dyn TriviaStore>> {
    match config.database.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory store seeded with the reference questions");
            Ok(Arc::new(MemoryTriviaStore::seeded()))
        }
        StorageBackend::Postgres => {
            let pool = database::connect(&config.database).await?;
            Ok(Arc::new(PgTriviaStore::new(pool)))
        }
    }
}

fn bind_listener(addr: &str) -> anyhow::Result<tokio::net::TcpListener> {
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}
