//! Storage row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - An insert DTO built from the domain payload
//! - The mapping from row to the `galleria-core` view model

pub mod artwork;
