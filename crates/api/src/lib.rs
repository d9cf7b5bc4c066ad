//! Galleria web server library.
//!
//! Exposes the building blocks (config, state, error handling, service,
//! actions, views, routes) so integration tests and the binaries can share
//! them.

pub mod actions;
pub mod app;
pub mod config;
pub mod error;
pub mod fixture_server;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod page_cache;
pub mod query;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod views;
