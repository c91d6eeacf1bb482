use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::types::{NoteBody, Quote, UserProfile, Word};

/// Failures collapse into two kinds: the transport/parse layer failed, or
/// the backend answered with a non-2xx status. Callers treat both the same
/// way within each operation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// The backend surface the browser consumes. A trait seam so the core can
/// be driven by a fake in tests without a network.
pub trait Backend: Send + Sync {
    fn fetch_user(&self) -> Result<UserProfile, ApiError>;
    fn fetch_quote(&self) -> Result<Quote, ApiError>;
    fn fetch_words(&self) -> Result<Vec<Word>, ApiError>;
    fn fetch_note(&self, word_id: i64) -> Result<String, ApiError>;
    fn save_note(&self, word_id: i64, notes: &str) -> Result<(), ApiError>;
}

pub struct HttpBackend {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json()?)
    }
}

impl Backend for HttpBackend {
    fn fetch_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/user")
    }

    fn fetch_quote(&self) -> Result<Quote, ApiError> {
        self.get_json("/api/quote")
    }

    fn fetch_words(&self) -> Result<Vec<Word>, ApiError> {
        self.get_json("/api/words")
    }

    fn fetch_note(&self, word_id: i64) -> Result<String, ApiError> {
        let body: NoteBody = self.get_json(&format!("/api/notes/{word_id}"))?;
        Ok(body.notes.unwrap_or_default())
    }

    fn save_note(&self, word_id: i64, notes: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/notes/{word_id}")))
            .json(&serde_json::json!({ "notes": notes }))
            .send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        // Success is signalled by status alone; the body is ignored.
        Ok(())
    }
}
