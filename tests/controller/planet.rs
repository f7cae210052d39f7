//! Tests for the planet endpoints.

use super::*;

/// Expect a created planet to be returned unchanged by the get endpoint
#[tokio::test]
async fn created_planet_round_trips() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/planet",
        Some(json!({
            "name": "Tatooine",
            "gravity": "1",
            "population": "200000",
            "terrain": "desert"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Planet created successfully");
    let planet = body["Planet"].clone();
    assert_eq!(planet["name"], "Tatooine");

    let (status, body) = send(
        &test,
        Method::GET,
        &format!("/planets/{}", planet["id"]),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, planet);

    Ok(())
}

/// Expect 400 and no second row when creating a planet with a taken name
#[tokio::test]
async fn rejects_duplicate_planet() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_planet("Tatooine").await?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/planet",
        Some(json!({
            "name": "Tatooine",
            "gravity": "1",
            "population": "200000",
            "terrain": "desert"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "El planeta ya existe" }));

    let (_, planets) = send(&test, Method::GET, "/planets", None).await;
    assert_eq!(planets.as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Expect 400 when a required field is blank
#[tokio::test]
async fn rejects_planet_with_missing_fields() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/planet",
        Some(json!({ "name": "Hoth", "gravity": "", "population": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "name, gravity, population and terrain are required" })
    );

    Ok(())
}

/// Expect 400 with the error envelope for a body that is not JSON
#[tokio::test]
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test, Method::POST, "/planet", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect the planet to be updated and returned under the update key
#[tokio::test]
async fn updates_planet() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let hoth = test.catalog().insert_planet("Hoth").await?;

    let (status, body) = send(
        &test,
        Method::PUT,
        &format!("/planet/{}", hoth.id),
        Some(json!({
            "name": "Hoth",
            "gravity": "1.1 standard",
            "population": "0.1",
            "terrain": "tundra"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Planeta actualizado");
    assert_eq!(body["Planeta actualizado"]["terrain"], "tundra");

    Ok(())
}

/// Expect 404 when deleting a planet that does not exist
#[tokio::test]
async fn delete_fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test, Method::DELETE, "/planet/9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Planeta no encontrado" }));

    Ok(())
}

/// Expect a non-numeric ID to answer 404 with the error envelope
#[tokio::test]
async fn get_fails_for_non_numeric_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test, Method::GET, "/planets/abc", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado" }));

    Ok(())
}
