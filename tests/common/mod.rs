//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use k9_registry::config::Settings;
use k9_registry::startup::Application;

/// Base path every registry route is nested under in tests
pub const BASE: &str = "/api/dogs";

/// Settings for a throwaway database inside `dir`, bound to an ephemeral port
pub fn test_settings(dir: &TempDir) -> Settings {
    let mut settings: Settings = Settings::defaults("test")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    settings.server.host = "127.0.0.1".into();
    settings.server.port = 0;
    settings.database.url = format!("sqlite://{}", dir.path().join("registry.db").display());
    settings.database.max_connections = 5;
    settings.database.min_connections = 0;
    settings
}

/// Test application backed by a fresh, migrated SQLite file
pub struct TestApp {
    pub router: Router,
    // Keeps the database file alive for the lifetime of the test
    _db_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let app = Application::build(test_settings(&dir)).await.unwrap();

        Self {
            router: app.router(),
            _db_dir: dir,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.send(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Register a dog and return the created representation
    pub async fn create_dog(&self, dog: &Value) -> Value {
        let response = self
            .post_json(&format!("{BASE}/dogs"), &dog.to_string())
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid dog payload
pub fn dog_payload(name: &str, breed: &str, supplier: &str) -> Value {
    json!({
        "name": name,
        "breed": breed,
        "supplier": supplier,
        "badgeId": format!("K9-{name}"),
        "gender": "Female",
        "birthDate": "2020-05-15",
        "dateAcquired": "2021-01-10",
        "statusId": 1,
        "kennellingCharacteristic": "Calm"
    })
}
