//! HTTP client for the game server.
//!
//! Thin wrapper over `reqwest` for the board and log endpoints. Response
//! bodies are handed to the `board` crate's decoders, so every failure comes
//! back as a typed [`ApiError`] and nothing here interprets game data.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use board::{BoardPayload, DecodeError, InputRequest, decode_board, decode_log};
use serde_json::Value;

use crate::config::ViewerConfig;

/// Errors produced by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response, or the body could not be read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The body did not match the expected schema.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ViewerConfig,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: ViewerConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// `GET /mb/board/`.
    ///
    /// # Errors
    ///
    /// Transport failure, non-2xx status, or a body that is not a snapshot.
    pub async fn fetch_board(&self) -> Result<BoardPayload, ApiError> {
        let response = self.http.get(self.config.board_url()).send().await?;
        let body = read_body(response).await?;
        Ok(decode_board(&body)?)
    }

    /// `GET /mb/log/`.
    ///
    /// # Errors
    ///
    /// Transport failure, non-2xx status, or a body that is not a JSON array.
    pub async fn fetch_log(&self) -> Result<Vec<Value>, ApiError> {
        let response = self.http.get(self.config.log_url()).send().await?;
        let body = read_body(response).await?;
        Ok(decode_log(&body)?)
    }

    /// `POST /mb/board/` with one line of player input.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::fetch_board`].
    pub async fn submit_input(&self, input: &str) -> Result<BoardPayload, ApiError> {
        let response = self
            .http
            .post(self.config.board_url())
            .json(&InputRequest { input })
            .send()
            .await?;
        let body = read_body(response).await?;
        Ok(decode_board(&body)?)
    }
}

async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
    check_status(response.status().as_u16())?;
    Ok(response.bytes().await?.to_vec())
}

fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status { status }) }
}
