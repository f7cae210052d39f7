use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        user::{FavoritesDto, UserCreatedDto, UserDto, UserPayloadDto},
    },
    server::{
        controller::util::{json::JsonBody, path::PathParam},
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

static USER_CREATED: &str = "User created successfully";

/// Query string identifying whose favorites to list
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoritesQuery {
    /// ID of the user
    pub user_id: i32,
}

/// List every user along with their favorites
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = Vec<UserDto>),
        (status = 404, description = "No users exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Register a user
///
/// The password is stored as an Argon2 hash and is never returned.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserPayloadDto,
    responses(
        (status = 201, description = "Success when creating the user", body = UserCreatedDto),
        (status = 400, description = "Missing email or password, or the email is taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedDto {
            message: USER_CREATED.to_string(),
            user,
        }),
    ))
}

/// List the favorites of a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when listing the user's favorites", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let favoritos = UserService::new(&state.db).favorites(user_id).await?;

    Ok((StatusCode::OK, Json(FavoritesDto { favoritos })))
}

/// List the favorites of the user named in the query string
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    params(FavoritesQuery),
    responses(
        (status = 200, description = "Success when listing the user's favorites", body = FavoritesDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    query: Result<Query<FavoritesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(|rejection| CatalogError::InvalidRequest(rejection.body_text()))?;

    let favoritos = UserService::new(&state.db).favorites(query.user_id).await?;

    Ok((StatusCode::OK, Json(FavoritesDto { favoritos })))
}
