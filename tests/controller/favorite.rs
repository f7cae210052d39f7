//! Tests for the favorite endpoints.

use super::*;

/// Expect a favorite to be added for an existing planet & user
#[tokio::test]
async fn adds_favorite_planet() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_user("luke@tatooine.net").await?;
    let planet = test.catalog().insert_planet("Dagobah").await?;

    let (status, body) = send(
        &test,
        Method::POST,
        &format!("/favorite/planet/{}", planet.id),
        Some(json!({ "user_id": user.id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Planeta favorito añadido con éxito" }));

    Ok(())
}

/// Expect the missing target to be reported even when the user is also missing
#[tokio::test]
async fn add_reports_missing_target_first() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/favorite/people/3",
        Some(json!({ "user_id": 8 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "La persona no existe" }));

    Ok(())
}

/// Expect 404 when no user_id is provided
#[tokio::test]
async fn add_fails_without_user_id() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let vehicle = test.catalog().insert_vehicle("Speeder bike").await?;

    let (status, body) = send(
        &test,
        Method::POST,
        &format!("/favorite/vehicle/{}", vehicle.id),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado usuario" }));

    Ok(())
}

/// Expect deleting favorite (user 1, planet 5) to leave other favorites untouched
#[tokio::test]
async fn removes_only_matching_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let luke = test.user().insert_user("luke@tatooine.net").await?;
    let leia = test.user().insert_user("leia@alderaan.gov").await?;
    for name in ["Tatooine", "Alderaan", "Yavin IV", "Hoth", "Dagobah"] {
        test.catalog().insert_planet(name).await?;
    }
    let yoda = test.catalog().insert_person("Yoda").await?;
    test.user().insert_favorite_planet(luke.id, 5).await?;
    let kept_planet = test.user().insert_favorite_planet(luke.id, 4).await?;
    let kept_person = test.user().insert_favorite_person(luke.id, yoda.id).await?;
    let kept_other_user = test.user().insert_favorite_planet(leia.id, 5).await?;

    let (status, body) = send(
        &test,
        Method::DELETE,
        "/favorite/planet/5",
        Some(json!({ "user_id": luke.id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Favorito eliminado" }));

    let (_, body) = send(&test, Method::GET, "/users/1/favorites", None).await;
    let ids: Vec<i64> = body["Favoritos"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|favorite| favorite["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![kept_planet.id as i64, kept_person.id as i64]);

    let (_, body) = send(&test, Method::GET, "/users/2/favorites", None).await;
    assert_eq!(body["Favoritos"][0]["id"], kept_other_user.id);

    Ok(())
}

/// Expect 404 when the favorite does not exist
#[tokio::test]
async fn remove_fails_for_nonexistent_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_user("luke@tatooine.net").await?;

    let (status, body) = send(
        &test,
        Method::DELETE,
        "/favorite/vehicle/1",
        Some(json!({ "user_id": user.id })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado favorito" }));

    Ok(())
}

/// Expect a non-numeric target ID to answer 404 with the error envelope
#[tokio::test]
async fn add_fails_for_non_numeric_target_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/favorite/planet/tatooine",
        Some(json!({ "user_id": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado" }));

    Ok(())
}
