use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        catalog::{PersonCreatedDto, PersonDto, PersonPayloadDto, PersonUpdatedDto},
    },
    server::{
        controller::util::{json::JsonBody, path::PathParam},
        error::Error,
        model::app::AppState,
        service::person::PersonService,
    },
};

pub static PERSON_TAG: &str = "people";

static PERSON_CREATED: &str = "Person created successfully";
static PERSON_UPDATED: &str = "Persona actualizada";
static PERSON_DELETED: &str = "Persona eliminada con éxito";

#[utoipa::path(
    get,
    path = "/people",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Success when listing people", body = Vec<PersonDto>),
        (status = 404, description = "No people exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(people)))
}

#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PERSON_TAG,
    params(("people_id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    PathParam(people_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db).get(people_id).await?;

    Ok((StatusCode::OK, Json(person)))
}

#[utoipa::path(
    post,
    path = "/people",
    tag = PERSON_TAG,
    request_body = PersonPayloadDto,
    responses(
        (status = 200, description = "Success when creating the person", body = PersonCreatedDto),
        (status = 400, description = "Missing fields or the person already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PersonPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::OK,
        Json(PersonCreatedDto {
            message: PERSON_CREATED.to_string(),
            person,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/people/{people_id}",
    tag = PERSON_TAG,
    params(("people_id" = i32, Path, description = "ID of the person")),
    request_body = PersonPayloadDto,
    responses(
        (status = 200, description = "Success when updating the person", body = PersonUpdatedDto),
        (status = 400, description = "Missing fields or the name belongs to another person", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    PathParam(people_id): PathParam<i32>,
    JsonBody(payload): JsonBody<PersonPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db)
        .update(people_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PersonUpdatedDto {
            message: PERSON_UPDATED.to_string(),
            person,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/people/{people_id}",
    tag = PERSON_TAG,
    params(("people_id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Success when deleting the person", body = MessageDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    PathParam(people_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    PersonService::new(&state.db).delete(people_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: PERSON_DELETED.to_string(),
        }),
    ))
}
