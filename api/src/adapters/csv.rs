//! CSV reader for the reference breed catalog
//!
//! Expected layout, header row first:
//!
//! ```text
//! id,species,pet_size,name,average_male_adult_weight,average_female_adult_weight
//! 1,dog,medium,border_collie,20000,17000
//! ```
//!
//! Every row is built through the breed factory, so the first invalid row
//! aborts the whole import.

use std::path::Path;

use csv::StringRecord;

use crate::domain::entities::Breed;
use crate::domain::factory::{BreedFactory, FactoryOpts};
use crate::error::ImportError;

const SPECIES: usize = 1;
const PET_SIZE: usize = 2;
const NAME: usize = 3;
const MALE_WEIGHT: usize = 4;
const FEMALE_WEIGHT: usize = 5;

/// Read every breed from a CSV file
pub fn read_breeds_csv(path: &Path) -> Result<Vec<Breed>, ImportError> {
    tracing::info!("Starting reading {}", path.display());

    let read_error = |source| ImportError::Read {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;

    let mut breeds = Vec::new();
    for result in reader.records() {
        let record = result.map_err(read_error)?;
        breeds.push(breed_from_record(&record)?);
    }

    tracing::debug!(count = breeds.len(), "Read breeds from {}", path.display());
    Ok(breeds)
}

fn breed_from_record(record: &StringRecord) -> Result<Breed, ImportError> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();

    let field = |index: usize, column: &'static str| {
        record
            .get(index)
            .map(str::trim)
            .ok_or(ImportError::MissingColumn { line, column })
    };
    let weight = |index: usize, column: &'static str| {
        let value = field(index, column)?;
        value.parse::<i32>().map_err(|_| ImportError::InvalidWeight {
            line,
            column,
            value: value.to_string(),
        })
    };

    let average_male_weight = weight(MALE_WEIGHT, "average_male_adult_weight")?;
    let average_female_weight = weight(FEMALE_WEIGHT, "average_female_adult_weight")?;

    BreedFactory::new(FactoryOpts {
        name: field(NAME, "name")?.to_string(),
        species: field(SPECIES, "species")?.to_string(),
        pet_size: field(PET_SIZE, "pet_size")?.to_string(),
        average_female_weight: Some(average_female_weight),
        average_male_weight: Some(average_male_weight),
    })
    .instantiate()
    .map_err(|source| ImportError::InvalidBreed { line, source })
}
