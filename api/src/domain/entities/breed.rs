//! Breed domain entity
//!
//! A named animal breed with its species, size class and average adult weights.

use serde::Serialize;

use crate::domain::values::{BreedName, PetSize, Species};

/// An immutable catalog entry, identified by its name.
///
/// Only the breed factory builds these, so every field is already valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breed {
    name: BreedName,
    species: Species,
    pet_size: PetSize,
    average_female_weight: i32,
    average_male_weight: i32,
}

impl Breed {
    pub(in crate::domain) fn new(
        name: BreedName,
        species: Species,
        pet_size: PetSize,
        average_female_weight: i32,
        average_male_weight: i32,
    ) -> Self {
        Self {
            name,
            species,
            pet_size,
            average_female_weight,
            average_male_weight,
        }
    }

    pub fn name(&self) -> &BreedName {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn pet_size(&self) -> PetSize {
        self.pet_size
    }

    pub fn average_female_weight(&self) -> i32 {
        self.average_female_weight
    }

    pub fn average_male_weight(&self) -> i32 {
        self.average_male_weight
    }
}
