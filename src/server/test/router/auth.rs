use super::*;
use crate::server::util::password::hash_password;
use test_utils::factory;

/// Tests logging in and resolving the current user from the issued token.
///
/// Expected: 200 with token and user, /api/auth/me returns the same user
#[tokio::test]
async fn login_then_me() {
    let app = TestApp::new().await;
    let hash = hash_password("correct horse").await.unwrap();
    factory::user::UserFactory::new(&app.db)
        .username("curator")
        .password_hash(hash)
        .admin(true)
        .build()
        .await
        .unwrap();

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "curator", "password": "correct horse" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "curator");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, me) = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "curator");
    assert_eq!(me["admin"], true);
}

/// Tests that wrong passwords and unknown users get the same answer.
///
/// Expected: 401 with identical error bodies
#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    let hash = hash_password("correct horse").await.unwrap();
    factory::user::UserFactory::new(&app.db)
        .username("curator")
        .password_hash(hash)
        .build()
        .await
        .unwrap();

    let (wrong_status, wrong_body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "curator", "password": "battery staple" }),
        )
        .await;
    let (unknown_status, unknown_body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "nobody", "password": "battery staple" }),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

/// Tests admin route protection.
///
/// Expected: 401 without a token, 403 for a non-admin user
#[tokio::test]
async fn admin_routes_require_admin() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let (status, _) = app.get("/api/admin/users", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/admin/users", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests admin account management.
///
/// Expected: created account is listed, self-delete is refused, other delete succeeds
#[tokio::test]
async fn admin_manages_accounts() {
    let app = TestApp::new().await;
    let admin = factory::create_admin(&app.db).await.unwrap();
    let token = app.token_for(&admin);

    let (status, created) = app
        .post(
            "/api/admin/users",
            Some(&token),
            json!({ "username": "second_admin", "password": "long enough password" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["admin"], true);

    let (_, users) = app.get("/api/admin/users", Some(&token)).await;
    assert_eq!(users.as_array().unwrap().len(), 2);

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/admin/users/{}", admin.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/admin/users/{}", created["id"]),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
