//! Tests for the sitemap endpoint.

use super::*;

/// Expect every documented path to be listed in sorted order
#[tokio::test]
async fn lists_sorted_endpoints() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let (status, body) = send(&test, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    let endpoints: Vec<String> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|endpoint| endpoint.as_str().map(String::from))
        .collect();

    let mut sorted = endpoints.clone();
    sorted.sort();
    assert_eq!(endpoints, sorted);

    for path in [
        "/people",
        "/people/{people_id}",
        "/planet",
        "/planets/{planet_id}",
        "/vehicles",
        "/users/favorites",
        "/favorite/vehicle/{vehicle_id}",
    ] {
        assert!(endpoints.iter().any(|endpoint| endpoint == path), "{path}");
    }

    Ok(())
}
