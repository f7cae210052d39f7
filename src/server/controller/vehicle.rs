use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        catalog::{VehicleCreatedDto, VehicleDto, VehiclePayloadDto, VehicleUpdatedDto},
    },
    server::{
        controller::util::{json::JsonBody, path::PathParam},
        error::Error,
        model::app::AppState,
        service::vehicle::VehicleService,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

static VEHICLE_CREATED: &str = "Vehiculo creado con exito";
static VEHICLE_UPDATED: &str = "Vehiculo actualizado";
static VEHICLE_DELETED: &str = "Vehiculo eliminado con exito";

/// List every vehicle
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when listing vehicles", body = Vec<VehicleDto>),
        (status = 404, description = "No vehicles exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = VehicleService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Success when retrieving the vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    PathParam(vehicle_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db).get(vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/vehicle",
    tag = VEHICLE_TAG,
    request_body = VehiclePayloadDto,
    responses(
        (status = 201, description = "Success when creating the vehicle", body = VehicleCreatedDto),
        (status = 400, description = "Missing fields or the vehicle already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VehiclePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(VehicleCreatedDto {
            message: VEHICLE_CREATED.to_string(),
            vehicle,
        }),
    ))
}

/// Replace every field of a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    request_body = VehiclePayloadDto,
    responses(
        (status = 200, description = "Success when updating the vehicle", body = VehicleUpdatedDto),
        (status = 400, description = "Missing fields or the name belongs to another vehicle", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    PathParam(vehicle_id): PathParam<i32>,
    JsonBody(payload): JsonBody<VehiclePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db)
        .update(vehicle_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(VehicleUpdatedDto {
            message: VEHICLE_UPDATED.to_string(),
            vehicle,
        }),
    ))
}

/// Delete a vehicle along with the favorites pointing at it
#[utoipa::path(
    delete,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Success when deleting the vehicle", body = MessageDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    PathParam(vehicle_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    VehicleService::new(&state.db).delete(vehicle_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: VEHICLE_DELETED.to_string(),
        }),
    ))
}
