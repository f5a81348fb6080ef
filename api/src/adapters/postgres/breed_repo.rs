//! PostgreSQL adapter for BreedRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::Breed;
use crate::domain::factory::{BreedFactory, FactoryOpts};
use crate::domain::ports::{BreedRepository, ListOpts};
use crate::domain::values::BreedName;
use crate::entity::breeds;
use crate::error::DomainError;

/// PostgreSQL implementation of BreedRepository
pub struct PostgresBreedRepository {
    db: DatabaseConnection,
}

impl PostgresBreedRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BreedRepository for PostgresBreedRepository {
    async fn get_one_by_name(&self, name: &BreedName) -> Result<Breed, DomainError> {
        let result = breeds::Entity::find_by_id(name.as_str().to_owned())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match result {
            Some(model) => model.try_into(),
            None => Err(DomainError::NotFound(format!("breed {} not found", name))),
        }
    }

    async fn create_one(&self, breed: &Breed) -> Result<Breed, DomainError> {
        let result = active_model(breed)
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn update_one(&self, breed: &Breed) -> Result<Breed, DomainError> {
        // Only rows that actually differ count as affected
        let changed = Condition::any()
            .add(breeds::Column::Species.ne(breed.species().to_string()))
            .add(breeds::Column::PetSize.ne(breed.pet_size().to_string()))
            .add(breeds::Column::AverageFemaleAdultWeight.ne(breed.average_female_weight()))
            .add(breeds::Column::AverageMaleAdultWeight.ne(breed.average_male_weight()));

        let result = breeds::Entity::update_many()
            .col_expr(
                breeds::Column::Species,
                Expr::value(breed.species().to_string()),
            )
            .col_expr(
                breeds::Column::PetSize,
                Expr::value(breed.pet_size().to_string()),
            )
            .col_expr(
                breeds::Column::AverageFemaleAdultWeight,
                Expr::value(breed.average_female_weight()),
            )
            .col_expr(
                breeds::Column::AverageMaleAdultWeight,
                Expr::value(breed.average_male_weight()),
            )
            .filter(breeds::Column::Name.eq(breed.name().as_str()))
            .filter(changed)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NothingTodo);
        }

        self.get_one_by_name(breed.name()).await
    }

    async fn delete_one_by_name(&self, name: &BreedName) -> Result<(), DomainError> {
        let result = breeds::Entity::delete_by_id(name.as_str().to_owned())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("breed {} not found", name)));
        }

        Ok(())
    }

    async fn list(&self, opts: &ListOpts) -> Result<Vec<Breed>, DomainError> {
        let mut query = breeds::Entity::find();

        if let Some(species) = opts.species {
            query = query.filter(breeds::Column::Species.eq(species.to_string()));
        }
        if let Some(pet_size) = opts.pet_size {
            query = query.filter(breeds::Column::PetSize.eq(pet_size.to_string()));
        }
        if let Some(weight) = opts.average_female_weight {
            query = query.filter(breeds::Column::AverageFemaleAdultWeight.eq(weight));
        }
        if let Some(weight) = opts.average_male_weight {
            query = query.filter(breeds::Column::AverageMaleAdultWeight.eq(weight));
        }
        if let Some(names) = &opts.name_in {
            if names.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(
                breeds::Column::Name.is_in(names.iter().map(|n| n.as_str().to_owned())),
            );
        }

        let results = query
            .order_by_asc(breeds::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Breed::try_from).collect()
    }

    async fn create_several(&self, new_breeds: &[Breed]) -> Result<Vec<Breed>, DomainError> {
        if new_breeds.is_empty() {
            return Ok(Vec::new());
        }

        breeds::Entity::insert_many(new_breeds.iter().map(active_model))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        self.list(&ListOpts {
            name_in: Some(new_breeds.iter().map(|b| b.name().clone()).collect()),
            ..Default::default()
        })
        .await
    }
}

/// Insert model for a breed; `seq` is left to the database
fn active_model(breed: &Breed) -> breeds::ActiveModel {
    breeds::ActiveModel {
        name: Set(breed.name().as_str().to_owned()),
        species: Set(breed.species().to_string()),
        pet_size: Set(breed.pet_size().to_string()),
        average_female_adult_weight: Set(breed.average_female_weight()),
        average_male_adult_weight: Set(breed.average_male_weight()),
        ..Default::default()
    }
}

/// Rows go back through the factory, so a corrupted row cannot become a Breed
impl TryFrom<breeds::Model> for Breed {
    type Error = DomainError;

    fn try_from(model: breeds::Model) -> Result<Self, Self::Error> {
        let name = model.name.clone();

        BreedFactory::new(FactoryOpts {
            name: model.name,
            species: model.species,
            pet_size: model.pet_size,
            average_female_weight: Some(model.average_female_adult_weight),
            average_male_weight: Some(model.average_male_adult_weight),
        })
        .instantiate()
        .map_err(|e| DomainError::Internal(format!("stored breed {} is invalid: {}", name, e)))
    }
}
