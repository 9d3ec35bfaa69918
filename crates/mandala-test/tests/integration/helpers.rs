#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building the full `/api` router over a fresh in-memory store
//! - Making JSON requests with or without an admin token
//! - Asserting on status codes and JSON bodies
//!
//! ## Isolation
//! Every call to [`TestApp::new`] gets its own `MemoryStore`, so tests can run
//! in parallel without seeing each other's rows.

use std::sync::Arc;

use salvo::http::header::{AUTHORIZATION, CONTENT_TYPE};
use salvo::http::{ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use serde_json::{Value, json};

use mandala_test::app::{ConfigHandler, StoreHandler};
use mandala_test::component::config::{
    AuthConfig, CatalogConfig, DatabaseConfig, LoggingConfig, ServerConfig, Settings,
};
use mandala_test::component::db::store::SharedStore;
use mandala_test::component::db::store::memory::MemoryStore;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse";

/// Test configuration - static struct instead of loading from file.
#[must_use]
pub fn test_config() -> Settings {
    Settings {
        database: DatabaseConfig {
            url: "memory://".to_string(),
            max_connections: 1,
            run_migrations: false,
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_ttl_days: 1,
            allow_registration: true,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        catalog: CatalogConfig {
            open_service_writes: false,
        },
    }
}

/// A router over its own store, plus the token of a registered admin once
/// [`TestApp::with_admin`] has run.
pub struct TestApp {
    pub service: Service,
    pub token: Option<String>,
}

impl TestApp {
    /// Creates a service wired the same way as the server binary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    #[must_use]
    pub fn with_config(settings: Settings) -> Self {
        let store: SharedStore = Arc::new(MemoryStore::new());

        let router = Router::new()
            .hoop(StoreHandler { store })
            .hoop(ConfigHandler { settings })
            .push(mandala_test::app::api::routes());

        Self {
            service: Service::new(router),
            token: None,
        }
    }

    /// Registers the default admin and keeps its token for [`TestApp::admin`].
    ///
    /// ## Panics
    /// Panics if registration fails.
    pub async fn with_admin(mut self) -> Self {
        let res = self
            .send(
                TestClient::post(url("/api/auth/register"))
                    .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
            )
            .await
            .assert_status(StatusCode::CREATED);

        let token = res.body["token"]
            .as_str()
            .expect("register response carries a token")
            .to_string();
        self.token = Some(token);
        self
    }

    /// Attaches the admin token to `request`.
    ///
    /// ## Panics
    /// Panics if [`TestApp::with_admin`] has not run.
    #[must_use]
    pub fn admin(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token.as_deref().expect("admin token; call with_admin first");
        request.add_header(AUTHORIZATION, format!("Bearer {token}"), true)
    }

    pub async fn send(&self, request: RequestBuilder) -> TestResponse {
        let mut response = request.send(&self.service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let text = response.take_string().await.unwrap_or_default();
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        TestResponse { status, body }
    }

    /// Creates a content item through `family` as the admin and returns its JSON.
    pub async fn create_item(&self, family: &str, payload: &Value) -> Value {
        self.send(self.admin(TestClient::post(url(&format!("/api/{family}"))).json(payload)))
            .await
            .assert_status(StatusCode::CREATED)
            .body
    }
}

/// Absolute URL for a path on the in-process service.
#[must_use]
pub fn url(path: &str) -> String {
    format!("http://127.0.0.1:5000{path}")
}

/// Request with a raw body sent as JSON.
#[must_use]
pub fn raw_json(request: RequestBuilder, body: &str) -> RequestBuilder {
    request
        .add_header(CONTENT_TYPE, "application/json", true)
        .body(ReqBody::Once(body.as_bytes().to_vec().into()))
}

/// A minimal valid content payload.
#[must_use]
pub fn content_payload(slug: &str) -> Value {
    json!({
        "title": format!("Title {slug}"),
        "slug": slug,
        "description": "d",
        "content": "c",
        "image": "http://i/img.png"
    })
}

/// Same as [`content_payload`] with extra fields merged in.
#[must_use]
pub fn content_payload_with(slug: &str, extra: &Value) -> Value {
    let mut payload = content_payload(slug);
    if let (Some(base), Some(extra)) = (payload.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    payload
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {} with body {}",
            self.status, self.body
        );
        self
    }

    /// Asserts the `message` field of an error body.
    #[must_use]
    pub fn assert_message(self, expected: &str) -> Self {
        assert_eq!(
            self.body["message"].as_str(),
            Some(expected),
            "unexpected body {}",
            self.body
        );
        self
    }

    /// Field names listed in a validation error body.
    #[must_use]
    pub fn error_fields(&self) -> Vec<String> {
        self.body["errors"]
            .as_array()
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e["field"].as_str().map(ToString::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Slugs of a list response, in order.
    #[must_use]
    pub fn slugs(&self) -> Vec<String> {
        self.body
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i["slug"].as_str().map(ToString::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The `id` of a single-item response.
    ///
    /// ## Panics
    /// Panics if the body has no string `id`.
    #[must_use]
    pub fn id(&self) -> String {
        self.body["id"].as_str().expect("body has an id").to_string()
    }
}
