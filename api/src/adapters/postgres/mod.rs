//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod breed_repo;

#[cfg(test)]
mod integration_tests;

pub use breed_repo::PostgresBreedRepository;
