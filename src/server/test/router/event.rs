use super::*;
use test_utils::factory;

/// Tests that a public submission waits for review before it is listed.
///
/// Expected: 201 with approved=false, absent from the public list and by-id lookup,
/// visible to the admin, listed after approval
#[tokio::test]
async fn submission_is_hidden_until_approved() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);

    let (status, created) = app
        .post("/api/events", None, event_payload("Warehouse Session"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["approved"], false);
    assert_eq!(created["tags"], json!(["techno", "warehouse"]));
    let id = created["id"].as_i64().unwrap();

    let (_, listed) = app.get("/api/events", None).await;
    assert_eq!(listed["total"], 0);

    let (status, _) = app.get(&format!("/api/events/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&format!("/api/events/{}", id), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, pending) = app.get("/api/admin/events/pending", Some(&token)).await;
    assert_eq!(pending["total"], 1);

    let (status, approved) = app
        .send(
            Method::POST,
            &format!("/api/admin/events/{}/approve", id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["approved"], true);

    let (_, listed) = app.get("/api/events", None).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["events"][0]["title"], "Warehouse Session");
}

/// Tests that an admin submission through the public endpoint skips review.
///
/// Expected: 201 with approved=true
#[tokio::test]
async fn admin_submission_is_approved() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);

    let (status, created) = app
        .post("/api/events", Some(&token), event_payload("Curated"))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["approved"], true);
}

/// Tests validation errors on submission.
///
/// Expected: 400 for a city outside the country and for an unknown genre
#[tokio::test]
async fn invalid_submission_is_rejected() {
    let app = TestApp::new().await;

    let mut wrong_city = event_payload("Lost");
    wrong_city["city"] = json!("Paris");
    let (status, body) = app.post("/api/events", None, wrong_city).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let mut unknown_genre = event_payload("Lost");
    unknown_genre["genre"] = json!("Polka");
    let (status, _) = app.post("/api/events", None, unknown_genre).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests that anonymous callers cannot widen the status facet.
///
/// Expected: pending events stay hidden even with status=all
#[tokio::test]
async fn anonymous_status_is_forced_to_approved() {
    let app = TestApp::new().await;
    factory::event::EventFactory::new(&app.db)
        .approved(false)
        .build()
        .await
        .unwrap();
    factory::create_event(&app.db).await.unwrap();

    let (status, listed) = app.get("/api/events?status=all", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);
}

/// Tests the query string facets of the public listing.
///
/// Expected: tags, location and search narrow the results
#[tokio::test]
async fn listing_applies_query_facets() {
    let app = TestApp::new().await;
    factory::event::EventFactory::new(&app.db)
        .title("Berlin Techno")
        .tags(["techno"])
        .build()
        .await
        .unwrap();
    factory::event::EventFactory::new(&app.db)
        .title("Paris House")
        .location("Europe", "France", Some("Paris"))
        .tags(["house"])
        .build()
        .await
        .unwrap();

    let (_, by_tag) = app.get("/api/events?tags=house,ambient", None).await;
    assert_eq!(by_tag["total"], 1);
    assert_eq!(by_tag["events"][0]["title"], "Paris House");

    let (_, by_country) = app.get("/api/events?country=germany", None).await;
    assert_eq!(by_country["total"], 1);
    assert_eq!(by_country["events"][0]["title"], "Berlin Techno");

    let (_, by_search) = app.get("/api/events?search=PARIS", None).await;
    assert_eq!(by_search["total"], 1);

    let (_, paged) = app.get("/api/events?per_page=1&page=1", None).await;
    assert_eq!(paged["total"], 2);
    assert_eq!(paged["totalPages"], 2);
    assert_eq!(paged["events"].as_array().unwrap().len(), 1);
}

/// Tests that only events with coordinates become map pins.
///
/// Expected: one pin carrying latitude and longitude
#[tokio::test]
async fn map_returns_pins_with_coordinates() {
    let app = TestApp::new().await;
    factory::event::EventFactory::new(&app.db)
        .title("Pinned")
        .coordinates(52.52, 13.405)
        .build()
        .await
        .unwrap();
    factory::create_event(&app.db).await.unwrap();

    let (status, pins) = app.get("/api/events/map", None).await;

    assert_eq!(status, StatusCode::OK);
    let pins = pins.as_array().unwrap();
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0]["title"], "Pinned");
    assert_eq!(pins[0]["latitude"], 52.52);
}

/// Tests the admin moderation endpoints.
///
/// Expected: feature sets the flag, counts reflect state, delete returns 204 then 404
#[tokio::test]
async fn admin_moderation_flow() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);
    let event = factory::create_event(&app.db).await.unwrap();
    factory::event::EventFactory::new(&app.db)
        .approved(false)
        .build()
        .await
        .unwrap();

    let (status, featured) = app
        .send(
            Method::POST,
            &format!("/api/admin/events/{}/feature", event.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(featured["featured"], true);

    let (_, counts) = app.get("/api/admin/events/counts", Some(&token)).await;
    assert_eq!(counts, json!({ "approved": 1, "pending": 1 }));

    let uri = format!("/api/admin/events/{}", event.id);
    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests replacing an event through the admin edit endpoint.
///
/// Expected: 200 with new title and tags, 404 for a missing event
#[tokio::test]
async fn admin_update_replaces_fields() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);
    let event = factory::event::EventFactory::new(&app.db)
        .tags(["old"])
        .build()
        .await
        .unwrap();

    let mut payload = event_payload("Renamed");
    payload["tags"] = json!(["new"]);

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/admin/events/{}", event.id),
            Some(&token),
            Some(payload.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Renamed");
    assert_eq!(updated["tags"], json!(["new"]));
    assert_eq!(updated["approved"], true);

    let (status, _) = app
        .send(Method::PUT, "/api/admin/events/9999", Some(&token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests a page number whose row offset cannot be represented.
///
/// Expected: 400 instead of an overflowing offset, page 0 still served
#[tokio::test]
async fn listing_rejects_out_of_range_page() {
    let app = TestApp::new().await;
    factory::create_event(&app.db).await.unwrap();

    let (status, body) = app
        .get("/api/events?page=18446744073709551615&per_page=100", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, listed) = app.get("/api/events?page=0&per_page=100", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);
}
