//! Domain layer for the Galleria artwork gallery.
//!
//! Pure logic only: no I/O, no async. The database, HTTP and client crates
//! all build on the types defined here.

pub mod artwork;
pub mod error;
pub mod slideshow;
pub mod slug;
pub mod types;
pub mod validation;
