//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Breed;
use crate::domain::factory::{BreedFactory, FactoryOpts};
use crate::domain::values::{PetSize, Species};

/// Factory input with no weights
pub fn breed_opts(name: &str, species: &str, pet_size: &str) -> FactoryOpts {
    FactoryOpts {
        name: name.to_string(),
        species: species.to_string(),
        pet_size: pet_size.to_string(),
        average_female_weight: None,
        average_male_weight: None,
    }
}

/// Create a valid breed with zero weights
pub fn test_breed(name: &str, species: Species, pet_size: PetSize) -> Breed {
    BreedFactory::new(breed_opts(name, species.as_str(), pet_size.as_str()))
        .instantiate()
        .expect("fixture breed must be valid")
}

/// Create a valid breed with explicit weights
pub fn test_breed_weighted(
    name: &str,
    species: Species,
    pet_size: PetSize,
    female: i32,
    male: i32,
) -> Breed {
    BreedFactory::new(FactoryOpts {
        average_female_weight: Some(female),
        average_male_weight: Some(male),
        ..breed_opts(name, species.as_str(), pet_size.as_str())
    })
    .instantiate()
    .expect("fixture breed must be valid")
}
