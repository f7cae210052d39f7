//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint with utoipa's [`OpenApiRouter`], derives the
//! sitemap served at `/` from the resulting OpenAPI paths, and mounts Swagger UI at
//! `/api/docs`.

use axum::{routing::get, Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, sitemap::Sitemap},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` group. The OpenAPI document
/// produced by the registrations is served at `/api/docs/openapi.json` and its paths,
/// sorted, make up the sitemap returned by `GET /`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be given its state.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::person::PERSON_TAG, description = "People API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle API routes"),
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::person::list_people,
            controller::person::create_person
        ))
        .routes(routes!(
            controller::person::get_person,
            controller::person::update_person,
            controller::person::delete_person
        ))
        .routes(routes!(controller::planet::list_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::planet::create_planet))
        .routes(routes!(
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::vehicle::list_vehicles))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(controller::vehicle::create_vehicle))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::list_favorites))
        .routes(routes!(controller::user::list_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .routes(routes!(
            controller::favorite::add_favorite_vehicle,
            controller::favorite::remove_favorite_vehicle
        ))
        .split_for_parts();

    let sitemap = Sitemap::new(api.paths.paths.keys().cloned());

    routes
        .route("/", get(controller::sitemap::sitemap))
        .layer(Extension(sitemap))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
