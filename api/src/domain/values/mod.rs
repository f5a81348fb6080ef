//! Value types
//!
//! Self-validating scalar wrappers. A value that exists has already passed
//! validation, so entities built from them never need to re-check.

pub mod breed_name;
pub mod pet_size;
pub mod species;

use thiserror::Error;

pub use breed_name::{BreedName, BREED_NAME_PATTERN};
pub use pet_size::PetSize;
pub use species::Species;

/// Reason a raw input was rejected by a value type or the breed factory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("breed name must have at least 2 characters")]
    NameTooShort,

    #[error("breed name must have maximum 255 characters")]
    NameTooLong,

    #[error("breed name does not follow this pattern {}", BREED_NAME_PATTERN)]
    NameInvalid,

    #[error("species must be one of the following values: [dog, cat]")]
    InvalidSpecies,

    #[error("pet size must be one of the following values: [small, medium, tall]")]
    InvalidPetSize,

    #[error("average {0} adult weight must not be negative")]
    NegativeWeight(&'static str),
}
