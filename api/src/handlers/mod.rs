//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod breeds;

pub use breeds::{create_breed, delete_breed, get_breed, list_breeds, put_breed};
