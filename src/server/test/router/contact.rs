use super::*;
use test_utils::factory;

/// Tests the contact form through to the admin inbox.
///
/// Expected: 201 on submit, message listed as unread, marking it read updates the count
#[tokio::test]
async fn contact_message_reaches_inbox() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);

    let (status, message) = app
        .post(
            "/api/contact",
            None,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Is there a lineup yet?"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message["read"], false);

    let (status, inbox) = app.get("/api/admin/contact", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inbox["total"], 1);
    assert_eq!(inbox["unread"], 1);

    let (status, read) = app
        .send(
            Method::POST,
            &format!("/api/admin/contact/{}/read", message["id"]),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["read"], true);

    let (_, unread_only) = app
        .get("/api/admin/contact?unread=true", Some(&token))
        .await;
    assert_eq!(unread_only["total"], 0);
    assert_eq!(unread_only["unread"], 0);
}

/// Tests contact form validation.
///
/// Expected: 400 for an invalid e-mail address
#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/contact",
            None,
            json!({ "name": "Ada", "email": "not-an-address", "message": "Hi" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests deleting a message twice.
///
/// Expected: 204 then 404
#[tokio::test]
async fn delete_contact_message() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);
    let message = factory::create_contact_message(&app.db).await.unwrap();
    let uri = format!("/api/admin/contact/{}", message.id);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests an inbox page number whose row offset cannot be represented.
///
/// Expected: 400 for the admin instead of an overflowing offset
#[tokio::test]
async fn inbox_rejects_out_of_range_page() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);

    let (status, _) = app
        .get(
            "/api/admin/contact?page=9223372036854775807&per_page=20",
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
