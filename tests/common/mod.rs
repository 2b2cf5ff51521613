//! Common test utilities for API and e2e tests
//!
//! Provides a PostgreSQL-backed test application (testcontainers), plus
//! request helpers and response shapes shared by every test file.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use album_catalog::application::services::AlbumIdGenerator;
use album_catalog::infrastructure::driven_adapters::album_repository::PostgresAlbumRepository;
use album_catalog::infrastructure::driving_adapters::api_rest::{self, AppState};

/// DDL shipped with the service
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Test application context backed by a real PostgreSQL
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    pub repository: Arc<PostgresAlbumRepository>,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        // Provision the table the service expects
        sqlx::query(SCHEMA_SQL)
            .execute(&pool)
            .await
            .expect("Failed to create albums table");

        let repository = Arc::new(PostgresAlbumRepository::new(pool.clone()));
        let state = AppState::new(repository.clone(), AlbumIdGenerator::DEFAULT_MAX_ATTEMPTS);
        let router = api_rest::router(state);

        Self {
            router,
            pool,
            repository,
            _container: container,
        }
    }

    /// Send a request through the router
    pub async fn send(&self, method: Method, uri: &str, body: Option<serde_json::Value>) -> TestResponse {
        send(&self.router, method, uri, body).await
    }

    /// Count rows directly in the database
    pub async fn row_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM albums")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count albums")
    }
}

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl TestResponse {
    /// Deserialize the JSON body
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.body.clone()).expect("Unexpected response body shape")
    }
}

/// Send a request through any router, with an optional JSON body
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(router, request).await
}

/// Send a pre-built request through the router
pub async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse { status, headers, body }
}

/// Whether a string has the shape of a generated album id
pub fn is_album_id(value: &str) -> bool {
    Regex::new(r"^album-[0-9a-f]{16}$").unwrap().is_match(value)
}

/// Helper struct for album request bodies
#[derive(Debug, Clone, Serialize)]
pub struct AlbumRequest {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Default for AlbumRequest {
    fn default() -> Self {
        Self {
            title: "Wish".to_string(),
            artist: "The Cure".to_string(),
            price: 9.99,
        }
    }
}

impl AlbumRequest {
    pub fn new(title: &str, artist: &str, price: f64) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap()
    }
}

/// Album response structure for deserialization
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AlbumResponse {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Message response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
