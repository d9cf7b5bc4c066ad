use std::sync::Arc;

use crate::config::ServerConfig;
use crate::page_cache::PageCache;
use crate::service::GalleryService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server-context gallery service wrapping the configured store.
    pub gallery: GalleryService,
    /// Rendered HTML pages, invalidated by the mutation actions.
    pub pages: Arc<PageCache>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(gallery: GalleryService, config: ServerConfig) -> Self {
        let pages = Arc::new(PageCache::new(config.page_cache_ttl));
        Self {
            gallery,
            pages,
            config: Arc::new(config),
        }
    }
}
