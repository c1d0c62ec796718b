//! Fetch-then-store controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `init` issues the board and log reads concurrently and stores whatever
//! succeeds. A board response is turned into a [`Board`] before it is stored;
//! the log is stored as received.
//!
//! ERROR HANDLING
//! ==============
//! `init` and `submit` never fail. A failed board read is logged (status code
//! for HTTP errors) and leaves the previous board in place; a failed log read
//! is dropped. The `refresh_*` methods return the error instead, for callers
//! that want it.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use board::{Board, BoardPayload};
use tracing::{debug, error, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::state::ViewStore;

pub struct Controller {
    api: ApiClient,
    store: ViewStore,
}

impl Controller {
    #[must_use]
    pub fn new(api: ApiClient, store: ViewStore) -> Self {
        Self { api, store }
    }

    #[must_use]
    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    /// Load board and log concurrently.
    pub async fn init(&self) {
        let (board, log) = tokio::join!(self.refresh_board(), self.refresh_log());
        if let Err(e) = board {
            report_board_error(&e);
        }
        if let Err(e) = log {
            debug!(error = %e, "log fetch failed");
        }
    }

    /// Send player input, store the board the server answers with, then reload the log.
    pub async fn submit(&self, input: &str) {
        match self.api.submit_input(input).await {
            Ok(payload) => self.apply(payload).await,
            Err(e) => report_board_error(&e),
        }
        if let Err(e) = self.refresh_log().await {
            debug!(error = %e, "log fetch failed");
        }
    }

    /// # Errors
    ///
    /// Returns the [`ApiError`] from the board read; the store is untouched.
    pub async fn refresh_board(&self) -> Result<(), ApiError> {
        let payload = self.api.fetch_board().await?;
        self.apply(payload).await;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`ApiError`] from the log read; the store is untouched.
    pub async fn refresh_log(&self) -> Result<(), ApiError> {
        let log = self.api.fetch_log().await?;
        debug!(entries = log.len(), "log loaded");
        self.store.set_log(log).await;
        Ok(())
    }

    async fn apply(&self, payload: BoardPayload) {
        let board = Board::build(&payload.board);
        if let Some(message) = &payload.error {
            info!(%message, "server rejected input");
        }
        self.store.set_board(board, payload.prompt, payload.error).await;
    }
}

fn report_board_error(err: &ApiError) {
    match err {
        ApiError::Status { status } => warn!(status, "board fetch failed"),
        ApiError::Decode(e) => error!(error = %e, "board payload rejected"),
        ApiError::Http(e) => warn!(error = %e, "board fetch failed"),
    }
}
