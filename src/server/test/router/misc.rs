use super::*;

/// Tests the location lookups.
///
/// Expected: 200 for known names in any case, 404 for unknown ones
#[tokio::test]
async fn location_lookups() {
    let app = TestApp::new().await;

    let (status, continents) = app.get("/api/locations/continents", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(continents
        .as_array()
        .unwrap()
        .contains(&json!("Europe")));

    let (status, cities) = app
        .get("/api/locations/continents/europe/countries/GERMANY/cities", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(cities.as_array().unwrap().contains(&json!("Berlin")));

    let (status, _) = app
        .get("/api/locations/continents/Atlantis/countries", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .get("/api/locations/continents/Asia/countries/Germany/cities", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests the chat endpoint without an API key.
///
/// Expected: 503 Service Unavailable
#[tokio::test]
async fn chat_without_api_key_is_unavailable() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/chat", None, json!({ "message": "Any raves in Berlin?" }))
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with the event listing path present
#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new().await;

    let (status, doc) = app.get("/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/events"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearer"].is_object());
}
