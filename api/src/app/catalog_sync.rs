//! Catalog sync
//!
//! Brings the store in line with a reference set of breeds (e.g. a CSV file)
//! by inserting only the breeds whose names are not stored yet. Existing rows
//! are left untouched.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::Breed;
use crate::domain::ports::{BreedRepository, ListOpts};
use crate::error::DomainError;

/// Outcome of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Breeds from the reference set that were already stored
    pub found: usize,
    /// Breeds inserted by this run
    pub inserted: Vec<Breed>,
}

pub struct CatalogSync<BR>
where
    BR: BreedRepository,
{
    breeds: Arc<BR>,
}

impl<BR> CatalogSync<BR>
where
    BR: BreedRepository,
{
    pub fn new(breeds: Arc<BR>) -> Self {
        Self { breeds }
    }

    pub async fn sync(&self, reference: Vec<Breed>) -> Result<SyncReport, DomainError> {
        tracing::info!("Starting datastore synchronization");

        let names = reference.iter().map(|b| b.name().clone()).collect();
        let existing = self
            .breeds
            .list(&ListOpts {
                name_in: Some(names),
                ..Default::default()
            })
            .await?;

        let stored: HashSet<_> = existing.iter().map(|b| b.name().clone()).collect();
        let mut seen = HashSet::new();
        let to_insert: Vec<Breed> = reference
            .into_iter()
            .filter(|b| !stored.contains(b.name()) && seen.insert(b.name().clone()))
            .collect();

        tracing::info!(
            found = existing.len(),
            "{} breeds will be inserted",
            to_insert.len()
        );

        let inserted = if to_insert.is_empty() {
            Vec::new()
        } else {
            self.breeds.create_several(&to_insert).await?
        };

        tracing::info!("Datastore synchronized");

        Ok(SyncReport {
            found: existing.len(),
            inserted,
        })
    }
}
