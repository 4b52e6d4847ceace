#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use trivia_api::{
    config::Config,
    create_router,
    models::{Category, NewQuestion, Question},
    services::{
        seed::seed_if_empty,
        sqlite_store::SqliteStore,
        store::{StoreError, StoreResult, TriviaStore},
        AppState,
    },
};

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..Config::default()
    }
}

/// In-memory store with migrations applied and the stock trivia data loaded.
pub async fn seeded_store() -> Arc<SqliteStore> {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let store = SqliteStore::in_memory()
        .await
        .expect("Failed to open in-memory database");
    store.migrate().await.expect("Failed to run migrations");
    seed_if_empty(store.pool())
        .await
        .expect("Failed to seed test data");
    Arc::new(store)
}

pub async fn create_test_app() -> Router {
    create_test_app_with(test_config()).await.0
}

pub async fn create_test_app_with(config: Config) -> (Router, Arc<SqliteStore>) {
    let store = seeded_store().await;
    let state = Arc::new(AppState::with_store(config, store.clone()));
    (create_router(state), store)
}

pub fn create_failing_app() -> Router {
    let state = Arc::new(AppState::with_store(test_config(), Arc::new(FailingStore)));
    create_router(state)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "response body is not JSON: {}",
                String::from_utf8_lossy(&body)
            )
        })
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn question_ids(json: &Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

pub fn assert_error_envelope(json: &Value, status: StatusCode, message: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status.as_u16());
    assert_eq!(json["message"], message);
}

/// Store whose every operation fails like a dropped database connection.
pub struct FailingStore;

fn fault<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolClosed))
}

#[async_trait]
impl TriviaStore for FailingStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        fault()
    }

    async fn get_category(&self, _id: i64) -> StoreResult<Option<Category>> {
        fault()
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        fault()
    }

    async fn questions_in_category(&self, _category_id: i64) -> StoreResult<Vec<Question>> {
        fault()
    }

    async fn search_questions(&self, _term: &str) -> StoreResult<Vec<Question>> {
        fault()
    }

    async fn insert_question(&self, _question: &NewQuestion) -> StoreResult<i64> {
        fault()
    }

    async fn delete_question(&self, _id: i64) -> StoreResult<()> {
        fault()
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        fault()
    }
}
