//! Keyed query cache for client-side reads.
//!
//! A [`QueryClient`] remembers the last value fetched for each [`QueryKey`]
//! and decides whether a new request is needed:
//!
//! - Concurrent fetches of the same key share one in-flight request.
//! - A value younger than `stale_time` is returned without a request.
//! - Failed requests are retried `retry` times, waiting
//!   [`retry_delay`] between attempts.
//! - Entries nobody has read for `gc_time` are dropped by
//!   [`QueryClient::collect_garbage`], which [`QueryClient::spawn_gc`] runs
//!   on a timer.
//! - Invalidating a key detaches any request in flight for it; that
//!   request's result still reaches its own callers but is not cached.
//!
//! Values are stored type-erased so one client can hold every query of an
//! application. All timing uses [`tokio::time::Instant`].

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::error::{ClientError, QueryError};

/// Delay before the first retry.
pub const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Upper bound on the delay between retries.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Delay before retry number `attempt` (zero-based): `min(1s * 2^attempt, 30s)`.
pub fn retry_delay(attempt: u32) -> Duration {
    let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
    INITIAL_RETRY_DELAY
        .checked_mul(factor)
        .unwrap_or(MAX_RETRY_DELAY)
        .min(MAX_RETRY_DELAY)
}

// ---------------------------------------------------------------------------
// Keys and options
// ---------------------------------------------------------------------------

/// Hierarchical cache key, e.g. `["paintings", "list", "active"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// True when `prefix` names this key or one of its ancestors.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Per-query timing and retry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long a fetched value is served without refetching.
    pub stale_time: Duration,
    /// How long an unread entry survives garbage collection.
    pub gc_time: Duration,
    /// Retries after the first failed attempt.
    pub retry: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(60),
            gc_time: Duration::from_secs(10 * 60),
            retry: 3,
        }
    }
}

impl QueryOptions {
    pub fn with_stale_time(self, stale_time: Duration) -> Self {
        Self { stale_time, ..self }
    }

    pub fn with_retry(self, retry: u32) -> Self {
        Self { retry, ..self }
    }
}

// ---------------------------------------------------------------------------
// Cache entries
// ---------------------------------------------------------------------------

type AnyValue = Arc<dyn Any + Send + Sync>;
type InFlight = Shared<BoxFuture<'static, Result<AnyValue, Arc<ClientError>>>>;

struct CacheEntry {
    value: Option<AnyValue>,
    updated_at: Option<Instant>,
    last_accessed: Instant,
    gc_time: Duration,
    invalidated: bool,
    /// Bumped whenever the cached value is replaced or invalidated. A fetch
    /// only commits if the generation it started under is still current.
    generation: u64,
    in_flight: Option<InFlight>,
}

impl CacheEntry {
    fn new(gc_time: Duration) -> Self {
        Self {
            value: None,
            updated_at: None,
            last_accessed: Instant::now(),
            gc_time,
            invalidated: false,
            generation: 0,
            in_flight: None,
        }
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
        self.generation += 1;
        self.in_flight = None;
    }

    fn fresh_value(&self, stale_time: Duration) -> Option<&AnyValue> {
        if self.invalidated {
            return None;
        }
        let updated_at = self.updated_at?;
        if updated_at.elapsed() < stale_time {
            self.value.as_ref()
        } else {
            None
        }
    }
}

type Entries = Arc<Mutex<HashMap<QueryKey, CacheEntry>>>;

// ---------------------------------------------------------------------------
// QueryClient
// ---------------------------------------------------------------------------

/// Shared query cache. Cloning yields another handle to the same cache.
#[derive(Clone, Default)]
pub struct QueryClient {
    entries: Entries,
    defaults: QueryOptions,
}

impl QueryClient {
    pub fn new(defaults: QueryOptions) -> Self {
        Self {
            entries: Entries::default(),
            defaults,
        }
    }

    pub fn defaults(&self) -> QueryOptions {
        self.defaults
    }

    /// Fetch `key` with the client's default options.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, QueryError>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        self.fetch_with(key, self.defaults, fetcher).await
    }

    /// Return the cached value for `key` if fresh, otherwise run `fetcher`
    /// (joining a request already in flight for the same key).
    pub async fn fetch_with<T, F, Fut>(
        &self,
        key: QueryKey,
        options: QueryOptions,
        fetcher: F,
    ) -> Result<T, QueryError>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let in_flight = {
            let mut entries = self.entries.lock().await;
            let entry = entries
                .entry(key.clone())
                .or_insert_with(|| CacheEntry::new(options.gc_time));
            entry.last_accessed = Instant::now();
            entry.gc_time = options.gc_time;

            if let Some(value) = entry.fresh_value(options.stale_time) {
                tracing::trace!(%key, "Query cache hit");
                return downcast(&key, value);
            }

            match entry.in_flight.clone() {
                Some(shared) => {
                    tracing::debug!(%key, "Joining in-flight query");
                    shared
                }
                None => {
                    let shared =
                        self.start_fetch(key.clone(), entry.generation, options.retry, fetcher);
                    entry.in_flight = Some(shared.clone());
                    shared
                }
            }
        };

        match in_flight.await {
            Ok(value) => downcast(&key, &value),
            Err(source) => Err(QueryError::Fetch {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn start_fetch<T, F, Fut>(
        &self,
        key: QueryKey,
        generation: u64,
        retry: u32,
        fetcher: F,
    ) -> InFlight
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let entries = Arc::clone(&self.entries);
        async move {
            let result = fetch_with_retry(&key, retry, &fetcher).await;

            let mut entries = entries.lock().await;
            let entry = entries
                .get_mut(&key)
                .filter(|entry| entry.generation == generation);
            if entry.is_none() {
                tracing::debug!(%key, "Discarding result of a detached query");
            }
            match result {
                Ok(value) => {
                    let value: AnyValue = Arc::new(value);
                    if let Some(entry) = entry {
                        entry.value = Some(Arc::clone(&value));
                        entry.updated_at = Some(Instant::now());
                        entry.invalidated = false;
                        entry.in_flight = None;
                    }
                    Ok(value)
                }
                Err(e) => {
                    if let Some(entry) = entry {
                        entry.in_flight = None;
                    }
                    Err(Arc::new(e))
                }
            }
        }
        .boxed()
        .shared()
    }

    /// The cached value for `key`, fresh or not.
    pub async fn get_query_data<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.lock().await;
        entries
            .get(key)?
            .value
            .as_ref()?
            .downcast_ref::<T>()
            .cloned()
    }

    /// Seed or overwrite the value for `key`; it counts as freshly fetched.
    pub async fn set_query_data<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        let mut entries = self.entries.lock().await;
        let entry = entries
            .entry(key)
            .or_insert_with(|| CacheEntry::new(self.defaults.gc_time));
        let now = Instant::now();
        entry.value = Some(Arc::new(value));
        entry.updated_at = Some(now);
        entry.last_accessed = now;
        entry.invalidated = false;
        entry.generation += 1;
        entry.in_flight = None;
    }

    /// Mark `key` stale so the next fetch goes to the network.
    pub async fn invalidate(&self, key: &QueryKey) {
        if let Some(entry) = self.entries.lock().await.get_mut(key) {
            entry.invalidate();
        }
    }

    /// Mark every key under `prefix` stale. Returns how many were marked.
    pub async fn invalidate_prefix(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries.lock().await;
        let mut marked = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidate();
                marked += 1;
            }
        }
        tracing::debug!(%prefix, marked, "Invalidated queries");
        marked
    }

    /// Drop entries that are idle (no request in flight) and have not been
    /// read for their `gc_time`. Returns how many were dropped.
    pub async fn collect_garbage(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| {
            entry.in_flight.is_some() || entry.last_accessed.elapsed() < entry.gc_time
        });
        let dropped = before - entries.len();
        if dropped > 0 {
            tracing::debug!(dropped, "Collected idle queries");
        }
        dropped
    }

    /// Run [`collect_garbage`](Self::collect_garbage) every `every` until
    /// `cancel` fires.
    pub fn spawn_gc(&self, every: Duration, cancel: CancellationToken) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + every, every);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!("Query garbage collector stopped");
                        return;
                    }
                    _ = ticks.tick() => {
                        client.collect_garbage().await;
                    }
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

fn downcast<T: Clone + 'static>(key: &QueryKey, value: &AnyValue) -> Result<T, QueryError> {
    value
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| QueryError::TypeMismatch(key.to_string()))
}

async fn fetch_with_retry<T, F, Fut>(
    key: &QueryKey,
    retry: u32,
    fetcher: &F,
) -> Result<T, ClientError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0u32;
    loop {
        match fetcher().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < retry => {
                let delay = retry_delay(attempt);
                tracing::warn!(
                    %key,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Query attempt failed, retrying",
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(
                    %key,
                    attempts = attempt + 1,
                    error = %e,
                    "Query failed after all retries",
                );
                return Err(e);
            }
        }
    }
}
