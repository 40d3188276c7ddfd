use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::ChatConfig, model::user::User, router::api_router,
    service::auth::token::TokenService, state::AppState,
};

mod auth;
mod category;
mod contact;
mod event;
mod misc;

/// Router and database for one test, without rate limiting.
struct TestApp {
    _test: TestContext,
    db: DatabaseConnection,
    tokens: TokenService,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let tokens = TokenService::new("router-test-secret", Duration::hours(1));

        let state = AppState::new(
            db.clone(),
            reqwest::Client::new(),
            tokens.clone(),
            ChatConfig {
                api_key: None,
                model: "test-model".to_string(),
                api_url: "http://127.0.0.1:9".to_string(),
            },
        );

        Self {
            _test: test,
            db,
            tokens,
            app: api_router(false).with_state(state),
        }
    }

    fn token_for(&self, user: &entity::user::Model) -> String {
        self.tokens.issue(&User::from_entity(user.clone())).unwrap()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }
}

/// Minimal valid event submission located in Berlin.
fn event_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "<p>All night long</p>",
        "startDate": "2031-08-01T20:00:00Z",
        "venue": "Tresor",
        "continent": "Europe",
        "country": "Germany",
        "city": "Berlin",
        "tags": ["Techno", " warehouse "]
    })
}
