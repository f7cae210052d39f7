//! Tests for the vehicle endpoints.

use super::*;

/// Expect 201 when creating a vehicle
#[tokio::test]
async fn creates_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/vehicle",
        Some(json!({
            "name": "Sand Crawler",
            "model": "Digger Crawler",
            "manufacturer": "Corellia Mining Corporation",
            "cost_in_credits": 150000
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Vehiculo creado con exito");
    assert_eq!(body["Vehicle"]["cost_in_credits"], "150000");

    Ok(())
}

/// Expect 400 and the original row unchanged when renaming onto another vehicle's name
#[tokio::test]
async fn rename_conflict_leaves_vehicle_unchanged() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_vehicle("Sand Crawler").await?;
    let skyhopper = test.catalog().insert_vehicle("T-16 skyhopper").await?;

    let (status, body) = send(
        &test,
        Method::PUT,
        &format!("/vehicles/{}", skyhopper.id),
        Some(json!({
            "name": "Sand Crawler",
            "model": "T-16",
            "manufacturer": "Incom Corporation",
            "cost_in_credits": "14500"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "El vehiculo ya existe" }));

    let (status, body) = send(
        &test,
        Method::GET,
        &format!("/vehicles/{}", skyhopper.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "T-16 skyhopper");
    assert_eq!(body["model"], skyhopper.model);

    Ok(())
}

/// Expect 404 with the vehicle message when none exist
#[tokio::test]
async fn list_fails_when_no_vehicles_exist() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test, Method::GET, "/vehicles", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado ningún vehiculo" }));

    Ok(())
}

/// Expect the vehicle to be deleted
#[tokio::test]
async fn deletes_vehicle() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let crawler = test.catalog().insert_vehicle("Sand Crawler").await?;

    let (status, body) = send(
        &test,
        Method::DELETE,
        &format!("/vehicles/{}", crawler.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Vehiculo eliminado con exito" }));

    let (status, _) = send(
        &test,
        Method::GET,
        &format!("/vehicles/{}", crawler.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
