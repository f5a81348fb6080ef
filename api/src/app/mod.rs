//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, the factory, and ports.

pub mod breed_service;
pub mod catalog_sync;
pub mod usecase;

pub use breed_service::{BreedService, ListParams, Upserted};
pub use catalog_sync::{CatalogSync, SyncReport};
