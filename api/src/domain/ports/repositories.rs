//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::Breed;
use crate::domain::values::{BreedName, PetSize, Species};
use crate::error::DomainError;

/// Filters for listing breeds.
///
/// Every `Some` filter must match; `None` imposes no constraint. A weight of 0
/// is a real filter value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOpts {
    pub species: Option<Species>,
    pub pet_size: Option<PetSize>,
    pub average_female_weight: Option<i32>,
    pub average_male_weight: Option<i32>,
    pub name_in: Option<Vec<BreedName>>,
}

#[cfg(test)]
impl ListOpts {
    /// In-memory equivalent of the filters a storage adapter applies
    pub fn matches(&self, breed: &Breed) -> bool {
        self.species.map_or(true, |s| breed.species() == s)
            && self.pet_size.map_or(true, |p| breed.pet_size() == p)
            && self
                .average_female_weight
                .map_or(true, |w| breed.average_female_weight() == w)
            && self
                .average_male_weight
                .map_or(true, |w| breed.average_male_weight() == w)
            && self
                .name_in
                .as_ref()
                .map_or(true, |names| names.contains(breed.name()))
    }
}

/// Repository for Breed entities, keyed by breed name
#[async_trait]
pub trait BreedRepository: Send + Sync {
    /// Find a breed by name, `DomainError::NotFound` if absent
    async fn get_one_by_name(&self, name: &BreedName) -> Result<Breed, DomainError>;

    /// Insert a new breed
    async fn create_one(&self, breed: &Breed) -> Result<Breed, DomainError>;

    /// Replace the stored breed with the same name.
    ///
    /// Returns `DomainError::NothingTodo` when no row changed, either because
    /// every field already matches or because the name is absent.
    async fn update_one(&self, breed: &Breed) -> Result<Breed, DomainError>;

    /// Delete a breed by name, `DomainError::NotFound` if absent
    async fn delete_one_by_name(&self, name: &BreedName) -> Result<(), DomainError>;

    /// List breeds matching the filters, in creation order
    async fn list(&self, opts: &ListOpts) -> Result<Vec<Breed>, DomainError>;

    /// Insert several breeds at once (bulk import)
    async fn create_several(&self, breeds: &[Breed]) -> Result<Vec<Breed>, DomainError>;
}
