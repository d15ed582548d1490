//! Shared helpers for façade tests: routers over a real or a failing store, body readers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use message_server::MessageServer;
use storage::{Message, MessageRepository, MessageStore, StorageError};

/// Router over a fresh in-memory SQLite repository.
pub async fn sqlite_router() -> Router {
    let repo = MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository");
    MessageServer::new(Arc::new(repo)).router()
}

/// Store whose every operation fails, as if the database were unreachable.
#[derive(Debug, Default, Clone)]
pub struct UnavailableStore {
    calls: Arc<AtomicUsize>,
}

impl UnavailableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> StorageError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StorageError::Connection("database is unreachable".to_string())
    }
}

#[async_trait]
impl MessageStore for UnavailableStore {
    async fn save(&self, _message: &Message) -> Result<i64, StorageError> {
        Err(self.fail())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Message>, StorageError> {
        Err(self.fail())
    }

    async fn find_all(&self) -> Result<Vec<Message>, StorageError> {
        Err(self.fail())
    }
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("valid request")
}

pub fn post_json(path: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .expect("valid request")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}
