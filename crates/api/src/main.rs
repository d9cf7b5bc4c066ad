use std::net::SocketAddr;
use std::sync::Arc;

use galleria_api::app::build_router;
use galleria_api::config::{ServerConfig, StoreKind};
use galleria_api::service::GalleryService;
use galleria_api::state::AppState;
use galleria_db::{GalleryStore, MemoryGalleryStore, PgGalleryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "galleria_api=debug,galleria_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = config.port,
        store = ?config.store,
        "Loaded server configuration",
    );

    // --- Store ---
    let store = open_store(&config).await;
    let state = AppState::new(GalleryService::new(store), config.clone());

    // --- Router ---
    let app = build_router(state).expect("Invalid CORS configuration");

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Connect to the configured store. Startup aborts if it is unreachable.
async fn open_store(config: &ServerConfig) -> Arc<dyn GalleryStore> {
    match config.store {
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .expect("DATABASE_URL must be set when GALLERY_STORE=postgres");

            let pool = galleria_db::create_pool(database_url, config.database_max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            galleria_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            galleria_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgGalleryStore::new(pool))
        }
        StoreKind::Memory => {
            let drafts = galleria_db::fixtures::load_fixtures(&config.fixtures_path)
                .expect("Failed to load fixtures");
            tracing::info!(
                path = %config.fixtures_path.display(),
                count = drafts.len(),
                "In-memory store seeded from fixtures",
            );
            Arc::new(MemoryGalleryStore::with_drafts(&drafts))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
