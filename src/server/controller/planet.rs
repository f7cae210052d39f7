use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        catalog::{PlanetCreatedDto, PlanetDto, PlanetPayloadDto, PlanetUpdatedDto},
    },
    server::{
        controller::util::{json::JsonBody, path::PathParam},
        error::Error,
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

static PLANET_CREATED: &str = "Planet created successfully";
static PLANET_UPDATED: &str = "Planeta actualizado";
static PLANET_DELETED: &str = "Planet deleted successfully";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 404, description = "No planets exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = PlanetPayloadDto,
    responses(
        (status = 200, description = "Success when creating the planet", body = PlanetCreatedDto),
        (status = 400, description = "Missing fields or the planet already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PlanetPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::OK,
        Json(PlanetCreatedDto {
            message: PLANET_CREATED.to_string(),
            planet,
        }),
    ))
}

/// Replace every field of a planet
#[utoipa::path(
    put,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    request_body = PlanetPayloadDto,
    responses(
        (status = 200, description = "Success when updating the planet", body = PlanetUpdatedDto),
        (status = 400, description = "Missing fields or the name belongs to another planet", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<i32>,
    JsonBody(payload): JsonBody<PlanetPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db)
        .update(planet_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlanetUpdatedDto {
            message: PLANET_UPDATED.to_string(),
            planet,
        }),
    ))
}

/// Delete a planet along with the favorites pointing at it
#[utoipa::path(
    delete,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when deleting the planet", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db).delete(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: PLANET_DELETED.to_string(),
        }),
    ))
}
