//! Adapters layer
//!
//! Implementations of port traits and readers for external systems.

pub mod csv;
pub mod postgres;

pub use postgres::PostgresBreedRepository;
