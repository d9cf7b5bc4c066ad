//! Server-context gallery service.
//!
//! Page handlers read through this service. Store failures are logged and
//! degrade to an empty listing or a missing artwork so a page always renders;
//! the JSON API talks to the store directly and reports errors instead.
//! A [`Listing`] remembers whether it was degraded so callers never cache
//! the fallback.

use std::sync::Arc;

use galleria_core::artwork::Artwork;
use galleria_core::slug::position_of_slug;
use galleria_db::GalleryStore;

/// Artworks read for a page. `degraded` is set when the store failed and
/// `artworks` is the empty fallback.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub artworks: Vec<Artwork>,
    pub degraded: bool,
}

/// An artwork together with its neighbours in the public (active) listing.
#[derive(Debug, Clone)]
pub struct SlideContext {
    pub artwork: Artwork,
    pub index: usize,
    pub total: usize,
    pub previous: Option<Artwork>,
    pub next: Option<Artwork>,
}

impl SlideContext {
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[derive(Clone)]
pub struct GalleryService {
    store: Arc<dyn GalleryStore>,
}

impl GalleryService {
    pub fn new(store: Arc<dyn GalleryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn GalleryStore> {
        &self.store
    }

    /// All artworks, or only active ones, flagged as degraded on failure.
    pub async fn listing(&self, include_inactive: bool) -> Listing {
        match self.store.list_artworks(include_inactive).await {
            Ok(artworks) => Listing {
                artworks,
                degraded: false,
            },
            Err(e) => {
                tracing::error!(error = %e, include_inactive, "Error fetching paintings");
                Listing {
                    artworks: Vec::new(),
                    degraded: true,
                }
            }
        }
    }

    /// All artworks, or only active ones. Empty on failure.
    pub async fn all_paintings(&self, include_inactive: bool) -> Vec<Artwork> {
        self.listing(include_inactive).await.artworks
    }

    /// The artwork whose derived slug matches. `None` on failure.
    pub async fn painting_by_slug(&self, slug: &str, include_inactive: bool) -> Option<Artwork> {
        self.all_paintings(include_inactive)
            .await
            .into_iter()
            .find(|a| a.slug == slug)
    }

    /// Position of an active artwork within the active listing.
    pub async fn slide_context(&self, slug: &str) -> Option<SlideContext> {
        let mut artworks = self.all_paintings(false).await;
        let index = position_of_slug(&artworks, slug)?;
        let total = artworks.len();

        let next = artworks.get(index + 1).cloned();
        let previous = index.checked_sub(1).and_then(|i| artworks.get(i)).cloned();
        let artwork = artworks.swap_remove(index);

        Some(SlideContext {
            artwork,
            index,
            total,
            previous,
            next,
        })
    }

    /// Slug of the first active artwork, where a slideshow starts.
    pub async fn first_active_slug(&self) -> Option<String> {
        self.all_paintings(false)
            .await
            .into_iter()
            .next()
            .map(|a| a.slug)
    }
}
