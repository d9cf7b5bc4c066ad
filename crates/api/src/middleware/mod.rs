//! Request middleware.
//!
//! - [`api_key::require_api_key`] -- Checks the public `apikey` header on the JSON API.

pub mod api_key;
