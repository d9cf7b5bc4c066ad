//! Rendered-page cache keyed by route path.
//!
//! Public pages are rendered once and served from here until either the
//! entry outlives the TTL or a mutation revalidates its path. Keys are route
//! paths, optionally followed by a canonical query string
//! (`/gallery/mona-lisa?modal=true`).
//!
//! Every revalidation bumps a generation counter. A render records the
//! generation before it reads the store and hands it back to
//! [`PageCache::insert`], which drops the page if a revalidation ran in
//! between.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

struct CachedPage {
    html: String,
    rendered_at: Instant,
}

#[derive(Default)]
struct Pages {
    entries: HashMap<String, CachedPage>,
    generation: u64,
}

pub struct PageCache {
    pages: RwLock<Pages>,
    ttl: Duration,
}

impl PageCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pages: RwLock::new(Pages::default()),
            ttl,
        }
    }

    /// Cached HTML for `key` if present and younger than the TTL.
    pub async fn get(&self, key: &str) -> Option<String> {
        let pages = self.pages.read().await;
        pages
            .entries
            .get(key)
            .filter(|page| page.rendered_at.elapsed() < self.ttl)
            .map(|page| page.html.clone())
    }

    /// The current generation. Read it before loading the data a page is
    /// rendered from.
    pub async fn generation(&self) -> u64 {
        self.pages.read().await.generation
    }

    /// Store a page rendered from data read at `generation`. Returns `false`
    /// and keeps nothing when a revalidation has happened since.
    pub async fn insert(&self, key: impl Into<String>, html: String, generation: u64) -> bool {
        let key = key.into();
        let mut pages = self.pages.write().await;
        if pages.generation != generation {
            tracing::debug!(%key, generation, current = pages.generation, "Dropped stale page");
            return false;
        }
        let page = CachedPage {
            html,
            rendered_at: Instant::now(),
        };
        pages.entries.insert(key, page);
        true
    }

    /// Drop `path` and every entry nested beneath it.
    ///
    /// `/gallery` drops `/gallery/mona-lisa` and `/gallery/mona-lisa?modal=true`;
    /// `/` drops only the home page. Returns the number of entries removed.
    pub async fn revalidate_path(&self, path: &str) -> usize {
        let nested = format!("{path}/");
        let exact_query = format!("{path}?");
        let mut pages = self.pages.write().await;
        pages.generation += 1;
        let before = pages.entries.len();
        pages.entries.retain(|key, _| {
            !(key == path || key.starts_with(&nested) || key.starts_with(&exact_query))
        });
        let removed = before - pages.entries.len();
        tracing::debug!(path, removed, "Revalidated path");
        removed
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.entries.is_empty()
    }
}
