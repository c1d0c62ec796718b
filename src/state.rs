//! Renderer-visible state.
//!
//! DESIGN
//! ======
//! `ViewStore` is a cloneable handle to one `ViewState`. The controller is the
//! only writer; renderers take snapshots and compare `revision` to decide
//! whether to redraw. Each write replaces a field wholesale.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use board::Board;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

/// Everything a renderer reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Latest board view model; `None` until a board fetch succeeds.
    pub board: Option<Board>,
    /// Latest log, entries kept verbatim; `None` until a log fetch succeeds.
    pub log: Option<Vec<Value>>,
    /// Server prompt that arrived with the board.
    pub prompt: Option<String>,
    /// Server rejection of the last input, if any.
    pub error: Option<String>,
    /// Bumped on every write.
    pub revision: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewStore {
    inner: Arc<RwLock<ViewState>>,
}

impl ViewStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> ViewState {
        self.inner.read().await.clone()
    }

    pub async fn revision(&self) -> u64 {
        self.inner.read().await.revision
    }

    /// Replace the board together with the prompt and error it arrived with.
    pub async fn set_board(&self, board: Board, prompt: Option<String>, error: Option<String>) {
        let mut state = self.inner.write().await;
        state.board = Some(board);
        state.prompt = prompt;
        state.error = error;
        state.revision += 1;
    }

    pub async fn set_log(&self, log: Vec<Value>) {
        let mut state = self.inner.write().await;
        state.log = Some(log);
        state.revision += 1;
    }
}
