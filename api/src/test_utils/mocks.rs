//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::Breed;
use crate::domain::ports::{BreedRepository, ListOpts};
use crate::domain::values::BreedName;
use crate::error::DomainError;

// ============================================================================
// In-Memory Breed Repository
// ============================================================================

/// Keeps breeds in insertion order, like the `seq` column in PostgreSQL.
/// Clones share state, so a test can keep a handle after giving one away.
#[derive(Clone, Default)]
pub struct InMemoryBreedRepository {
    breeds: Arc<RwLock<Vec<Breed>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryBreedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a breed for testing
    pub fn with_breed(self, breed: Breed) -> Self {
        self.breeds.write().unwrap().push(breed);
        self
    }

    /// Number of port calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn not_found(name: &BreedName) -> DomainError {
        DomainError::NotFound(format!("breed {} not found", name))
    }
}

#[async_trait]
impl BreedRepository for InMemoryBreedRepository {
    async fn get_one_by_name(&self, name: &BreedName) -> Result<Breed, DomainError> {
        self.record_call();
        let breeds = self.breeds.read().unwrap();
        breeds
            .iter()
            .find(|b| b.name() == name)
            .cloned()
            .ok_or_else(|| Self::not_found(name))
    }

    async fn create_one(&self, breed: &Breed) -> Result<Breed, DomainError> {
        self.record_call();
        let mut breeds = self.breeds.write().unwrap();
        if breeds.iter().any(|b| b.name() == breed.name()) {
            return Err(DomainError::Database(format!(
                "duplicate key value violates unique constraint \"breeds_pkey\" ({})",
                breed.name()
            )));
        }
        breeds.push(breed.clone());
        Ok(breed.clone())
    }

    async fn update_one(&self, breed: &Breed) -> Result<Breed, DomainError> {
        self.record_call();
        let mut breeds = self.breeds.write().unwrap();
        match breeds.iter_mut().find(|b| b.name() == breed.name()) {
            Some(stored) if stored != breed => {
                *stored = breed.clone();
                Ok(breed.clone())
            }
            _ => Err(DomainError::NothingTodo),
        }
    }

    async fn delete_one_by_name(&self, name: &BreedName) -> Result<(), DomainError> {
        self.record_call();
        let mut breeds = self.breeds.write().unwrap();
        let before = breeds.len();
        breeds.retain(|b| b.name() != name);
        if breeds.len() == before {
            return Err(Self::not_found(name));
        }
        Ok(())
    }

    async fn list(&self, opts: &ListOpts) -> Result<Vec<Breed>, DomainError> {
        self.record_call();
        let breeds = self.breeds.read().unwrap();
        Ok(breeds.iter().filter(|b| opts.matches(b)).cloned().collect())
    }

    async fn create_several(&self, new_breeds: &[Breed]) -> Result<Vec<Breed>, DomainError> {
        self.record_call();
        let mut breeds = self.breeds.write().unwrap();
        breeds.extend_from_slice(new_breeds);
        Ok(new_breeds.to_vec())
    }
}

// ============================================================================
// Failing Breed Repository
// ============================================================================

/// Every call fails as if the database were unreachable
pub struct FailingBreedRepository;

impl FailingBreedRepository {
    fn unavailable() -> DomainError {
        DomainError::Database("connection refused".to_string())
    }
}

#[async_trait]
impl BreedRepository for FailingBreedRepository {
    async fn get_one_by_name(&self, _name: &BreedName) -> Result<Breed, DomainError> {
        Err(Self::unavailable())
    }

    async fn create_one(&self, _breed: &Breed) -> Result<Breed, DomainError> {
        Err(Self::unavailable())
    }

    async fn update_one(&self, _breed: &Breed) -> Result<Breed, DomainError> {
        Err(Self::unavailable())
    }

    async fn delete_one_by_name(&self, _name: &BreedName) -> Result<(), DomainError> {
        Err(Self::unavailable())
    }

    async fn list(&self, _opts: &ListOpts) -> Result<Vec<Breed>, DomainError> {
        Err(Self::unavailable())
    }

    async fn create_several(&self, _breeds: &[Breed]) -> Result<Vec<Breed>, DomainError> {
        Err(Self::unavailable())
    }
}
