use std::time::Duration;

use crate::error::ClientError;

/// Connection settings for [`GalleryClient`](crate::GalleryClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Galleria server, without the `/api/v1` suffix.
    pub api_url: String,
    /// Public key sent in the `apikey` header when set.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".into(),
            api_key: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `GALLERIA_API_URL` | `http://localhost:3000` |
    /// | `GALLERIA_API_KEY` | unset                   |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let defaults = Self::default();

        let api_url = lookup("GALLERIA_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "GALLERIA_API_URL must be an http(s) URL, got {api_url:?}"
            )));
        }

        let api_key = lookup("GALLERIA_API_KEY").filter(|k| !k.trim().is_empty());

        Ok(Self {
            api_url,
            api_key,
            ..defaults
        })
    }
}
