//! The gallery store seam.
//!
//! Handlers and services hold an `Arc<dyn GalleryStore>` so the server can
//! run against PostgreSQL in production and against [`MemoryGalleryStore`]
//! for the legacy fixture server and in tests.
//!
//! [`MemoryGalleryStore`]: crate::memory::MemoryGalleryStore

use async_trait::async_trait;
use galleria_core::artwork::Artwork;
use galleria_core::types::ArtworkId;
use galleria_core::validation::ArtworkDraft;

use crate::models::artwork::NewArtworkRow;
use crate::repositories::ArtworkRepo;
use crate::DbPool;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A nested JSON column could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store cannot serve requests right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations on the artwork catalogue.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// All artworks in creation order, optionally only the active ones.
    async fn list_artworks(&self, include_inactive: bool) -> Result<Vec<Artwork>, StoreError>;

    async fn find_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, StoreError>;

    /// Insert an already validated draft.
    async fn insert_artwork(&self, draft: &ArtworkDraft) -> Result<Artwork, StoreError>;

    /// Flip the active flag. `None` when the artwork does not exist.
    async fn toggle_visibility(&self, id: ArtworkId) -> Result<Option<Artwork>, StoreError>;

    /// Returns `true` if an artwork was deleted.
    async fn delete_artwork(&self, id: ArtworkId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`GalleryStore`] backed by the `galleria` table.
#[derive(Clone)]
pub struct PgGalleryStore {
    pool: DbPool,
}

impl PgGalleryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl GalleryStore for PgGalleryStore {
    async fn list_artworks(&self, include_inactive: bool) -> Result<Vec<Artwork>, StoreError> {
        let rows = ArtworkRepo::list(&self.pool, include_inactive).await?;
        Ok(rows.into_iter().map(|r| r.into_artwork()).collect())
    }

    async fn find_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, StoreError> {
        let row = ArtworkRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(|r| r.into_artwork()))
    }

    async fn insert_artwork(&self, draft: &ArtworkDraft) -> Result<Artwork, StoreError> {
        let new_row = NewArtworkRow::try_from(draft)?;
        let row = ArtworkRepo::create(&self.pool, &new_row).await?;
        Ok(row.into_artwork())
    }

    async fn toggle_visibility(&self, id: ArtworkId) -> Result<Option<Artwork>, StoreError> {
        let row = ArtworkRepo::toggle_active(&self.pool, id).await?;
        Ok(row.map(|r| r.into_artwork()))
    }

    async fn delete_artwork(&self, id: ArtworkId) -> Result<bool, StoreError> {
        Ok(ArtworkRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
