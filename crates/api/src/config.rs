use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use galleria_core::slideshow::SlideshowConfig;

/// Which [`GalleryStore`](galleria_db::GalleryStore) backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// In-memory store seeded from `FIXTURES_PATH`.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                var: "GALLERY_STORE",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub store: StoreKind,
    /// Required when `store` is [`StoreKind::Postgres`].
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Seed file for the in-memory store.
    pub fixtures_path: PathBuf,
    /// When set, `/api/v1` requests must send it in the `apikey` header.
    pub public_api_key: Option<String>,
    /// How long a rendered page may be served from the page cache.
    pub page_cache_ttl: Duration,
    pub slideshow: SlideshowConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            cors_origins: vec!["http://localhost:3000".into()],
            request_timeout_secs: 30,
            store: StoreKind::Postgres,
            database_url: None,
            database_max_connections: 20,
            fixtures_path: PathBuf::from("fixtures/paintings.json"),
            public_api_key: None,
            page_cache_ttl: Duration::from_secs(60),
            slideshow: SlideshowConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `GALLERY_STORE`            | `postgres`                 |
    /// | `DATABASE_URL`             | required for `postgres`    |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `FIXTURES_PATH`            | `fixtures/paintings.json`  |
    /// | `PUBLIC_API_KEY`           | unset (API open)           |
    /// | `PAGE_CACHE_TTL_SECS`      | `60`                       |
    /// | `SLIDESHOW_TICK_MS`        | `60`                       |
    /// | `SLIDESHOW_THRESHOLD`      | `100`                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
        let store = parse_var(&lookup, "GALLERY_STORE", defaults.store)?;

        let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = parse_var(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            defaults.database_max_connections,
        )?;
        let fixtures_path = lookup("FIXTURES_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.fixtures_path);
        let public_api_key = lookup("PUBLIC_API_KEY").filter(|s| !s.trim().is_empty());

        let page_cache_ttl = Duration::from_secs(parse_var(
            &lookup,
            "PAGE_CACHE_TTL_SECS",
            defaults.page_cache_ttl.as_secs(),
        )?);

        let tick_ms = parse_var(
            &lookup,
            "SLIDESHOW_TICK_MS",
            defaults.slideshow.tick_interval.as_millis() as u64,
        )?;
        let threshold = parse_var(&lookup, "SLIDESHOW_THRESHOLD", defaults.slideshow.threshold)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
            database_url,
            database_max_connections,
            fixtures_path,
            public_api_key,
            page_cache_ttl,
            slideshow: SlideshowConfig {
                tick_interval: Duration::from_millis(tick_ms),
                threshold,
            },
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(default),
    }
}
