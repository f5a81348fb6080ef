//! Breed handlers
//!
//! CRUD endpoints for the breed catalog, mounted under `/v1`.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{ListParams, Upserted};
use crate::domain::entities::Breed;
use crate::domain::factory::FactoryOpts;
use crate::domain::ports::BreedRepository;
use crate::error::AppError;
use crate::AppState;

/// Breed payload for create and create-or-update
#[derive(Debug, Deserialize)]
pub struct BreedRequest {
    /// Ignored on PUT, where the path carries the name
    #[serde(default)]
    pub name: String,
    pub species: String,
    pub pet_size: String,
    pub average_female_adult_weight: Option<i32>,
    pub average_male_adult_weight: Option<i32>,
}

impl From<BreedRequest> for FactoryOpts {
    fn from(req: BreedRequest) -> Self {
        FactoryOpts {
            name: req.name,
            species: req.species,
            pet_size: req.pet_size,
            average_female_weight: req.average_female_adult_weight,
            average_male_weight: req.average_male_adult_weight,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreedResponse {
    pub name: String,
    pub species: String,
    pub pet_size: String,
    pub average_female_adult_weight: i32,
    pub average_male_adult_weight: i32,
}

impl From<Breed> for BreedResponse {
    fn from(breed: Breed) -> Self {
        BreedResponse {
            name: breed.name().to_string(),
            species: breed.species().to_string(),
            pet_size: breed.pet_size().to_string(),
            average_female_adult_weight: breed.average_female_weight(),
            average_male_adult_weight: breed.average_male_weight(),
        }
    }
}

/// Query parameters for listing breeds
#[derive(Debug, Default, Deserialize)]
pub struct ListBreedsQuery {
    pub species: Option<String>,
    pub pet_size: Option<String>,
    pub average_female_adult_weight: Option<i32>,
    pub average_male_adult_weight: Option<i32>,
}

impl From<ListBreedsQuery> for ListParams {
    fn from(query: ListBreedsQuery) -> Self {
        ListParams {
            species: query.species,
            pet_size: query.pet_size,
            average_female_weight: query.average_female_adult_weight,
            average_male_weight: query.average_male_adult_weight,
        }
    }
}

fn parse_body(body: &Bytes) -> Result<BreedRequest, AppError> {
    if body.is_empty() {
        return Err(AppError::BadRequest("body is required".to_string()));
    }

    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("invalid body: {}", e)))
}

/// GET /v1/breeds
///
/// List breeds matching every provided filter.
pub async fn list_breeds<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListBreedsQuery>, QueryRejection>,
) -> Result<Json<Vec<BreedResponse>>, AppError>
where
    R: BreedRepository + 'static,
{
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let breeds = state.breed_service.list(query.into()).await?;

    Ok(Json(breeds.into_iter().map(BreedResponse::from).collect()))
}

/// POST /v1/breeds
pub async fn create_breed<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<BreedResponse>), AppError>
where
    R: BreedRepository + 'static,
{
    let request = parse_body(&body)?;

    let breed = state.breed_service.create_one(request.into()).await?;

    Ok((StatusCode::CREATED, Json(breed.into())))
}

/// GET /v1/breeds/name/:breed_name
pub async fn get_breed<R>(
    State(state): State<AppState<R>>,
    Path(breed_name): Path<String>,
) -> Result<Json<BreedResponse>, AppError>
where
    R: BreedRepository + 'static,
{
    let breed = state.breed_service.get_one_by_name(&breed_name).await?;

    Ok(Json(breed.into()))
}

/// PUT /v1/breeds/name/:breed_name
///
/// Create the breed, or update it when it already exists. Responds 201 on
/// create, 200 on update and 204 when the stored breed already matches.
pub async fn put_breed<R>(
    State(state): State<AppState<R>>,
    Path(breed_name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<BreedResponse>), AppError>
where
    R: BreedRepository + 'static,
{
    let request = parse_body(&body)?;

    let upserted = state
        .breed_service
        .create_or_update(&breed_name, request.into())
        .await?;

    let status = match upserted {
        Upserted::Created(_) => StatusCode::CREATED,
        Upserted::Updated(_) => StatusCode::OK,
    };
    tracing::debug!(name = %upserted.breed().name(), %status, "Breed upserted");

    Ok((status, Json(upserted.into_breed().into())))
}

/// DELETE /v1/breeds/name/:breed_name
pub async fn delete_breed<R>(
    State(state): State<AppState<R>>,
    Path(breed_name): Path<String>,
) -> Result<StatusCode, AppError>
where
    R: BreedRepository + 'static,
{
    state.breed_service.delete_one_by_name(&breed_name).await?;

    Ok(StatusCode::NO_CONTENT)
}
