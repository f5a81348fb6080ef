//! Breed service
//!
//! Use cases for the breed catalog: create, update, delete, get, list, and the
//! create-or-update protocol built on top of create and update.
//!
//! Existence checks and writes are separate repository calls, so duplicate
//! prevention is best effort. A create racing another create for the same name
//! surfaces the store's uniqueness violation as an internal error.

use std::sync::Arc;

use crate::app::usecase::{self, UseCaseAction, UseCaseInfo};
use crate::domain::entities::Breed;
use crate::domain::factory::{BreedFactory, FactoryOpts};
use crate::domain::ports::{BreedRepository, ListOpts};
use crate::domain::values::{BreedName, PetSize, Species};
use crate::error::{DomainError, ErrorKind};

/// Raw list filters as received from the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub species: Option<String>,
    pub pet_size: Option<String>,
    pub average_female_weight: Option<i32>,
    pub average_male_weight: Option<i32>,
}

/// Result of a create-or-update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    Created(Breed),
    Updated(Breed),
}

impl Upserted {
    pub fn breed(&self) -> &Breed {
        match self {
            Upserted::Created(b) | Upserted::Updated(b) => b,
        }
    }

    pub fn into_breed(self) -> Breed {
        match self {
            Upserted::Created(b) | Upserted::Updated(b) => b,
        }
    }
}

/// Service for managing breeds
pub struct BreedService<BR>
where
    BR: BreedRepository,
{
    breeds: Arc<BR>,
}

impl<BR> BreedService<BR>
where
    BR: BreedRepository,
{
    pub fn new(breeds: Arc<BR>) -> Self {
        Self { breeds }
    }

    /// Create a breed, failing with `AlreadyExists` if the name is taken
    pub async fn create_one(&self, opts: FactoryOpts) -> Result<Breed, DomainError> {
        usecase::run(UseCaseInfo::breed(UseCaseAction::Create), async {
            let breed = BreedFactory::new(opts).instantiate()?;

            match self.breeds.get_one_by_name(breed.name()).await {
                Ok(_) => {
                    return Err(DomainError::AlreadyExists(format!(
                        "breed {} already exists",
                        breed.name()
                    )))
                }
                Err(DomainError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }

            self.breeds.create_one(&breed).await
        })
        .await
    }

    /// Replace an existing breed.
    ///
    /// Fails with `NotFound` if the name is absent and `NothingTodo` if every
    /// field already matches the stored breed.
    pub async fn update_one(&self, opts: FactoryOpts) -> Result<Breed, DomainError> {
        usecase::run(UseCaseInfo::breed(UseCaseAction::Update), async {
            let breed = BreedFactory::new(opts).instantiate()?;

            self.breeds.get_one_by_name(breed.name()).await?;

            self.breeds.update_one(&breed).await
        })
        .await
    }

    /// Create the breed, or update it if one with the same name exists.
    ///
    /// `name` is the target key and overrides `opts.name`. Only an
    /// `AlreadyExists` failure falls back to update; the update may in turn
    /// fail with `NothingTodo`.
    pub async fn create_or_update(
        &self,
        name: &str,
        mut opts: FactoryOpts,
    ) -> Result<Upserted, DomainError> {
        opts.name = name.to_string();

        match self.create_one(opts.clone()).await {
            Ok(breed) => Ok(Upserted::Created(breed)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                self.update_one(opts).await.map(Upserted::Updated)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a breed by name
    pub async fn delete_one_by_name(&self, name: &str) -> Result<(), DomainError> {
        usecase::run(UseCaseInfo::breed(UseCaseAction::Delete), async {
            let name = BreedName::parse(name)?;

            self.breeds.get_one_by_name(&name).await?;

            self.breeds.delete_one_by_name(&name).await
        })
        .await
    }

    /// Get a breed by name
    pub async fn get_one_by_name(&self, name: &str) -> Result<Breed, DomainError> {
        usecase::run(UseCaseInfo::breed(UseCaseAction::Retrieve), async {
            let name = BreedName::parse(name)?;

            self.breeds.get_one_by_name(&name).await
        })
        .await
    }

    /// List breeds matching every provided filter, in creation order
    pub async fn list(&self, params: ListParams) -> Result<Vec<Breed>, DomainError> {
        usecase::run(UseCaseInfo::breed(UseCaseAction::List), async {
            let species = params
                .species
                .as_deref()
                .map(str::parse::<Species>)
                .transpose()?;
            let pet_size = params
                .pet_size
                .as_deref()
                .map(str::parse::<PetSize>)
                .transpose()?;

            let opts = ListOpts {
                species,
                pet_size,
                average_female_weight: params.average_female_weight,
                average_male_weight: params.average_male_weight,
                name_in: None,
            };

            self.breeds.list(&opts).await
        })
        .await
    }
}
