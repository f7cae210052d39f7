//! Tests for the people endpoints.

use super::*;

/// Expect 404 with the error envelope rather than an empty array
#[tokio::test]
async fn list_fails_when_no_people_exist() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test, Method::GET, "/people", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado" }));

    Ok(())
}

/// Expect 404 for a person ID that does not exist
#[tokio::test]
async fn get_fails_for_nonexistent_person() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_person("Luke Skywalker").await?;

    let (status, body) = send(&test, Method::GET, "/people/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado" }));

    Ok(())
}

/// Expect a trailing slash to reach the same route
#[tokio::test]
async fn ignores_trailing_slash() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let luke = test.catalog().insert_person("Luke Skywalker").await?;

    let (status, body) = send(&test, Method::GET, "/people/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], luke.id);
    assert_eq!(body[0]["name"], "Luke Skywalker");

    Ok(())
}

/// Expect the created person under the `People` key
#[tokio::test]
async fn creates_person() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::POST,
        "/people",
        Some(json!({
            "name": "Leia Organa",
            "gender": "female",
            "birth_year": "19BBY",
            "mass": 49
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Person created successfully");
    assert_eq!(body["People"]["mass"], "49");

    Ok(())
}

/// Expect deleting a person to also remove the favorites pointing at them
#[tokio::test]
async fn delete_removes_favorites_of_person() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_user("han@falcon.net").await?;
    let chewie = test.catalog().insert_person("Chewbacca").await?;
    test.user().insert_favorite_person(user.id, chewie.id).await?;

    let (status, body) = send(
        &test,
        Method::DELETE,
        &format!("/people/{}", chewie.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Persona eliminada con éxito" }));

    let (_, body) = send(
        &test,
        Method::GET,
        &format!("/users/{}/favorites", user.id),
        None,
    )
    .await;
    assert_eq!(body, json!({ "Favoritos": [] }));

    Ok(())
}

/// Expect an ID too large for a record to answer 404 with the error envelope
#[tokio::test]
async fn update_fails_for_out_of_range_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test,
        Method::PUT,
        "/people/99999999999",
        Some(json!({
            "name": "Leia Organa",
            "gender": "female",
            "birth_year": "19BBY",
            "mass": "49"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No se ha encontrado" }));

    Ok(())
}
