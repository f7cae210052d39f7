use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::FavoritePayloadDto,
    },
    server::{
        controller::util::{json::JsonBody, path::PathParam},
        error::Error,
        model::{app::AppState, favorite::FavoriteTarget},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

static FAVORITE_REMOVED: &str = "Favorito eliminado";

/// Add a planet to the favorites of a user
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    request_body = FavoritePayloadDto,
    responses(
        (status = 200, description = "Success when adding the favorite", body = MessageDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<i32>,
    JsonBody(payload): JsonBody<FavoritePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, FavoriteTarget::Planet(planet_id), payload).await
}

/// Remove a planet from the favorites of a user
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    request_body = FavoritePayloadDto,
    responses(
        (status = 200, description = "Success when removing the favorite", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<i32>,
    JsonBody(payload): JsonBody<FavoritePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, FavoriteTarget::Planet(planet_id), payload).await
}

/// Add a person to the favorites of a user
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "ID of the person")),
    request_body = FavoritePayloadDto,
    responses(
        (status = 200, description = "Success when adding the favorite", body = MessageDto),
        (status = 404, description = "Person or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    PathParam(people_id): PathParam<i32>,
    JsonBody(payload): JsonBody<FavoritePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, FavoriteTarget::Person(people_id), payload).await
}

/// Remove a person from the favorites of a user
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "ID of the person")),
    request_body = FavoritePayloadDto,
    responses(
        (status = 200, description = "Success when removing the favorite", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    PathParam(people_id): PathParam<i32>,
    JsonBody(payload): JsonBody<FavoritePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, FavoriteTarget::Person(people_id), payload).await
}

/// Add a vehicle to the favorites of a user
#[utoipa::path(
    post,
    path = "/favorite/vehicle/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    request_body = FavoritePayloadDto,
    responses(
        (status = 200, description = "Success when adding the favorite", body = MessageDto),
        (status = 404, description = "Vehicle or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    PathParam(vehicle_id): PathParam<i32>,
    JsonBody(payload): JsonBody<FavoritePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, FavoriteTarget::Vehicle(vehicle_id), payload).await
}

/// Remove a vehicle from the favorites of a user
#[utoipa::path(
    delete,
    path = "/favorite/vehicle/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    request_body = FavoritePayloadDto,
    responses(
        (status = 200, description = "Success when removing the favorite", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    PathParam(vehicle_id): PathParam<i32>,
    JsonBody(payload): JsonBody<FavoritePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, FavoriteTarget::Vehicle(vehicle_id), payload).await
}

async fn add_favorite(
    state: &AppState,
    target: FavoriteTarget,
    payload: FavoritePayloadDto,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    FavoriteService::new(&state.db).add(target, payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: target.added_message().to_string(),
        }),
    ))
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
    payload: FavoritePayloadDto,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    FavoriteService::new(&state.db).remove(target, payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: FAVORITE_REMOVED.to_string(),
        }),
    ))
}
