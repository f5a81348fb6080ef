//! Breed factory
//!
//! The only way to build a `Breed`. Raw input is checked in a fixed order
//! (species, pet size, name, weights) and the first failure is returned as a
//! `DomainError::Validation` carrying the typed cause.

use serde::Deserialize;

use crate::domain::entities::Breed;
use crate::domain::values::{BreedName, PetSize, Species, ValidationError};
use crate::error::DomainError;

/// Untrusted construction input for a breed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FactoryOpts {
    pub name: String,
    pub species: String,
    pub pet_size: String,
    /// Defaults to 0 when absent
    pub average_female_weight: Option<i32>,
    /// Defaults to 0 when absent
    pub average_male_weight: Option<i32>,
}

/// Builds breeds from `FactoryOpts`
#[derive(Debug, Clone)]
pub struct BreedFactory {
    opts: FactoryOpts,
}

impl BreedFactory {
    pub fn new(opts: FactoryOpts) -> Self {
        Self { opts }
    }

    pub fn instantiate(self) -> Result<Breed, DomainError> {
        let FactoryOpts {
            name,
            species,
            pet_size,
            average_female_weight,
            average_male_weight,
        } = self.opts;

        let species: Species = species.parse()?;
        let pet_size: PetSize = pet_size.parse()?;
        let name = BreedName::parse(name)?;
        let average_female_weight = weight_or_default(average_female_weight, "female")?;
        let average_male_weight = weight_or_default(average_male_weight, "male")?;

        Ok(Breed::new(
            name,
            species,
            pet_size,
            average_female_weight,
            average_male_weight,
        ))
    }
}

fn weight_or_default(weight: Option<i32>, sex: &'static str) -> Result<i32, ValidationError> {
    match weight {
        Some(w) if w < 0 => Err(ValidationError::NegativeWeight(sex)),
        Some(w) => Ok(w),
        None => Ok(0),
    }
}
