use super::*;
use test_utils::factory;

/// Tests creating, listing and renaming categories.
///
/// Expected: 201 on create, kind filter applies, rename re-points events
#[tokio::test]
async fn category_lifecycle() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);

    let (status, techno) = app
        .post(
            "/api/admin/categories",
            Some(&token),
            json!({ "name": "Techno", "kind": "genre" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app
        .post(
            "/api/admin/categories",
            Some(&token),
            json!({ "name": "Outdoor", "kind": "setting" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, genres) = app.get("/api/categories?kind=genre", None).await;
    assert_eq!(genres.as_array().unwrap().len(), 1);
    assert_eq!(genres[0]["name"], "Techno");

    let mut payload = event_payload("Genre Night");
    payload["genre"] = json!("Techno");
    let (status, event) = app.post("/api/events", Some(&token), payload).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, renamed) = app
        .send(
            Method::PUT,
            &format!("/api/admin/categories/{}", techno["id"]),
            Some(&token),
            Some(json!({ "name": "Hard Techno" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Hard Techno");

    let (_, event) = app
        .get(&format!("/api/events/{}", event["id"]), None)
        .await;
    assert_eq!(event["genre"], "Hard Techno");
}

/// Tests that a category used by an event cannot be deleted.
///
/// Expected: 400 while in use, 404 for a missing category
#[tokio::test]
async fn delete_refuses_category_in_use() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);
    let genre = factory::create_category(&app.db, "genre", "Techno")
        .await
        .unwrap();
    factory::event::EventFactory::new(&app.db)
        .genre("Techno")
        .build()
        .await
        .unwrap();

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/admin/categories/{}", genre.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            Method::DELETE,
            "/api/admin/categories/9999",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that an unknown kind in the query is a client error.
///
/// Expected: 400
#[tokio::test]
async fn unknown_kind_is_bad_request() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/categories?kind=mood", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
