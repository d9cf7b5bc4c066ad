//! Client context for the Galleria API.
//!
//! - [`gallery::GalleryClient`] reads artworks over HTTP through a shared
//!   [`query::QueryClient`] cache.
//! - [`slideshow::run_slideshow`] drives the auto-advancing slideshow on a
//!   timer until cancelled.

pub mod config;
pub mod error;
pub mod gallery;
pub mod query;
pub mod slideshow;

pub use config::ClientConfig;
pub use error::{ClientError, QueryError};
pub use gallery::GalleryClient;
pub use query::{QueryClient, QueryKey, QueryOptions};
