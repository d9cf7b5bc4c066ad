//! HTTP gallery service for client contexts.
//!
//! Reads go through the shared [`QueryClient`]; callers get an empty list
//! or `None` when the API cannot be reached, with the failure logged.
//! Mutations invalidate every `paintings` query.

use std::time::Duration;

use galleria_core::artwork::Artwork;
use galleria_core::types::ArtworkId;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::query::{QueryClient, QueryKey};

/// Header carrying the public API key.
const API_KEY_HEADER: &str = "apikey";

/// The gallery list changes rarely; it is cached longer than other queries.
pub const LIST_STALE_TIME: Duration = Duration::from_secs(5 * 60);

#[derive(Deserialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: Option<String>,
}

/// Root key for every gallery query.
pub fn paintings_key() -> QueryKey {
    QueryKey::new(["paintings"])
}

pub fn list_key(include_inactive: bool) -> QueryKey {
    let scope = if include_inactive { "all" } else { "active" };
    QueryKey::new(["paintings", "list", scope])
}

pub fn slug_key(slug: &str) -> QueryKey {
    QueryKey::new(["paintings", "slug", slug])
}

// ---------------------------------------------------------------------------
// Raw HTTP access
// ---------------------------------------------------------------------------

/// Stateless request helper, cheap to clone into query fetchers.
#[derive(Clone)]
struct Api {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl Api {
    /// `{base}/api/v1/{segments..}`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = self.authorize(request).send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let (code, message) = match response.json::<ErrorBody>().await {
            Ok(body) => (body.code, body.error),
            Err(_) => (None, format!("HTTP {status}")),
        };
        Err(ClientError::Api {
            status,
            code,
            message,
        })
    }

    async fn data<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let body: DataResponse<T> = self.send(request).await?.json().await?;
        Ok(body.data)
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<Artwork>, ClientError> {
        let request = self
            .http
            .get(self.url(&["artworks"])?)
            .query(&[("include_inactive", include_inactive)]);
        self.data(request).await
    }

    async fn by_slug(&self, slug: &str) -> Result<Option<Artwork>, ClientError> {
        let request = self.http.get(self.url(&["artworks", "slug", slug])?);
        match self.data(request).await {
            Ok(artwork) => Ok(Some(artwork)),
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// GalleryClient
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct GalleryClient {
    api: Api,
    queries: QueryClient,
}

impl GalleryClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_queries(config, QueryClient::default())
    }

    /// Build a client that shares an existing query cache.
    pub fn with_queries(config: &ClientConfig, queries: QueryClient) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            ClientError::Config(format!("invalid API URL {:?}: {e}", config.api_url))
        })?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            api: Api {
                http,
                base_url,
                api_key: config.api_key.clone(),
            },
            queries,
        })
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    /// All paintings, or only active ones. Empty on failure.
    pub async fn get_all_paintings(&self, include_inactive: bool) -> Vec<Artwork> {
        let api = self.api.clone();
        let options = self.queries.defaults().with_stale_time(LIST_STALE_TIME);
        let result = self
            .queries
            .fetch_with(list_key(include_inactive), options, move || {
                let api = api.clone();
                async move { api.list(include_inactive).await }
            })
            .await;

        result.unwrap_or_else(|e| {
            tracing::error!(error = %e, include_inactive, "Error fetching paintings");
            Vec::new()
        })
    }

    /// The active painting with this slug. `None` if missing or on failure.
    pub async fn get_painting_by_slug(&self, slug: &str) -> Option<Artwork> {
        let api = self.api.clone();
        let owned = slug.to_string();
        let result = self
            .queries
            .fetch(slug_key(slug), move || {
                let api = api.clone();
                let slug = owned.clone();
                async move { api.by_slug(&slug).await }
            })
            .await;

        result.unwrap_or_else(|e| {
            tracing::error!(error = %e, slug, "Error fetching painting");
            None
        })
    }

    /// Flip an artwork's visibility and invalidate cached gallery reads.
    pub async fn toggle_visibility(&self, id: ArtworkId) -> Result<Artwork, ClientError> {
        let id = id.to_string();
        let request = self.api.http.post(self.api.url(&["artworks", &id, "toggle"])?);
        let artwork = self.api.data(request).await?;
        self.queries.invalidate_prefix(&paintings_key()).await;
        Ok(artwork)
    }

    /// Delete an artwork and invalidate cached gallery reads.
    pub async fn delete_artwork(&self, id: ArtworkId) -> Result<(), ClientError> {
        let id = id.to_string();
        let request = self.api.http.delete(self.api.url(&["artworks", &id])?);
        self.api.send(request).await?;
        self.queries.invalidate_prefix(&paintings_key()).await;
        Ok(())
    }
}

impl std::fmt::Debug for GalleryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryClient")
            .field("base_url", &self.api.base_url.as_str())
            .finish_non_exhaustive()
    }
}
