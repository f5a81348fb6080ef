//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `values`: Self-validating scalar types
//! - `entities`: Domain models representing core business concepts
//! - `factory`: Construction of valid entities from untrusted input
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod factory;
pub mod ports;
pub mod values;
