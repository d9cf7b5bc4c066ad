//! In-memory [`GalleryStore`].
//!
//! Keeps artworks in insertion order behind a `tokio::sync::RwLock`. Used by
//! the legacy fixture server and by the API integration tests. The store can
//! be switched offline to exercise failure paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use galleria_core::artwork::Artwork;
use galleria_core::types::ArtworkId;
use galleria_core::validation::ArtworkDraft;
use tokio::sync::RwLock;

use crate::store::{GalleryStore, StoreError};

#[derive(Default)]
pub struct MemoryGalleryStore {
    artworks: RwLock<Vec<Artwork>>,
    offline: AtomicBool,
}

impl MemoryGalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `drafts`, in order.
    pub fn with_drafts(drafts: &[ArtworkDraft]) -> Self {
        let artworks = drafts.iter().map(artwork_from_draft).collect();
        Self {
            artworks: RwLock::new(artworks),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every operation fails with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        Ok(())
    }
}

fn artwork_from_draft(draft: &ArtworkDraft) -> Artwork {
    Artwork::new(
        uuid::Uuid::now_v7(),
        draft.name.clone(),
        draft.year,
        draft.description.clone(),
        draft.source.clone().unwrap_or_default(),
        draft.artist.clone(),
        draft.images.clone(),
        draft.is_active,
        chrono::Utc::now(),
    )
}

#[async_trait]
impl GalleryStore for MemoryGalleryStore {
    async fn list_artworks(&self, include_inactive: bool) -> Result<Vec<Artwork>, StoreError> {
        self.ensure_online()?;
        let artworks = self.artworks.read().await;
        Ok(artworks
            .iter()
            .filter(|a| include_inactive || a.is_active)
            .cloned()
            .collect())
    }

    async fn find_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, StoreError> {
        self.ensure_online()?;
        let artworks = self.artworks.read().await;
        Ok(artworks.iter().find(|a| a.id == id).cloned())
    }

    async fn insert_artwork(&self, draft: &ArtworkDraft) -> Result<Artwork, StoreError> {
        self.ensure_online()?;
        let artwork = artwork_from_draft(draft);
        self.artworks.write().await.push(artwork.clone());
        Ok(artwork)
    }

    async fn toggle_visibility(&self, id: ArtworkId) -> Result<Option<Artwork>, StoreError> {
        self.ensure_online()?;
        let mut artworks = self.artworks.write().await;
        Ok(artworks.iter_mut().find(|a| a.id == id).map(|a| {
            a.is_active = !a.is_active;
            a.clone()
        }))
    }

    async fn delete_artwork(&self, id: ArtworkId) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut artworks = self.artworks.write().await;
        let before = artworks.len();
        artworks.retain(|a| a.id != id);
        Ok(artworks.len() < before)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ensure_online()
    }
}
