//! Persistence for the Galleria artwork catalogue.
//!
//! - [`models`] holds the storage row and its mapping to the view model.
//! - [`repositories`] holds the sqlx queries against PostgreSQL.
//! - [`store`] is the async seam the server talks to, with a PostgreSQL
//!   implementation and an in-memory one.

use sqlx::postgres::PgPoolOptions;

pub mod fixtures;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use memory::MemoryGalleryStore;
pub use store::{GalleryStore, PgGalleryStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
