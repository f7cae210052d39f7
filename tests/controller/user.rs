//! Tests for the user endpoints.

use super::*;

/// Expect 201 with the password left out of the response
#[tokio::test]
async fn creates_user_without_exposing_password() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/users",
        Some(json!({ "email": "han@falcon.net", "password": "kessel-run" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["User"]["email"], "han@falcon.net");
    assert_eq!(body["User"]["is_active"], true);
    assert!(body["User"].get("password").is_none());

    Ok(())
}

/// Expect 400 when the email is already registered
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.user().insert_user("han@falcon.net").await?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/users",
        Some(json!({ "email": "han@falcon.net", "password": "kessel-run" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "El usuario ya existe" }));

    Ok(())
}

/// Expect users to be listed with their favorites
#[tokio::test]
async fn lists_users_with_favorites() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_user("han@falcon.net").await?;
    let falcon = test.catalog().insert_vehicle("Millennium Falcon").await?;
    let favorite = test
        .user()
        .insert_favorite_vehicle(user.id, falcon.id)
        .await?;

    let (status, body) = send(&test, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": user.id,
            "email": "han@falcon.net",
            "is_active": true,
            "favoritos": [{
                "id": favorite.id,
                "user_id": user.id,
                "people_id": null,
                "planet_id": null,
                "vehicle_id": falcon.id
            }]
        }])
    );

    Ok(())
}

/// Expect the query string form to list the same favorites as the path form
#[tokio::test]
async fn lists_favorites_by_query() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_user("han@falcon.net").await?;
    let planet = test.catalog().insert_planet("Corellia").await?;
    test.user().insert_favorite_planet(user.id, planet.id).await?;

    let (status, by_query) = send(
        &test,
        Method::GET,
        &format!("/users/favorites?user_id={}", user.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, by_path) = send(
        &test,
        Method::GET,
        &format!("/users/{}/favorites", user.id),
        None,
    )
    .await;

    assert_eq!(by_query, by_path);
    assert_eq!(by_query["Favoritos"][0]["planet_id"], planet.id);

    Ok(())
}

/// Expect 400 when the user_id query parameter is missing
#[tokio::test]
async fn favorites_by_query_requires_user_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test, Method::GET, "/users/favorites", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect 404 when listing the favorites of an unknown user
#[tokio::test]
async fn favorites_fail_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test, Method::GET, "/users/2/favorites", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado usuario" }));

    Ok(())
}
