//! Typed wire schema for the game server's `/mb/board/` and `/mb/log/` bodies.
//!
//! DESIGN
//! ======
//! Field names mirror the server's PascalCase JSON. Everything the view
//! builder dereferences is a required field, so a payload missing a nested
//! record (a chiefdom without `Counter`, a counter without `Plain`) fails
//! here with a [`DecodeError`] instead of surfacing later as garbage.
//! Flags default to `false` when absent.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Error returned by [`decode_board`] and [`decode_log`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not valid JSON, or does not match the snapshot schema.
    #[error("invalid board payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The body is valid JSON but not an object.
    #[error("board payload must be a JSON object")]
    NotAnObject,
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Raw board snapshot as served by the game server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawBoard {
    /// The active history card. `null` before the first card is drawn.
    pub card: Option<RawCard>,
    pub lands: Vec<RawLand>,
    /// Warpath-major list; `null` where no chiefdom stands.
    pub chiefdoms: Vec<Option<RawChiefdom>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCard {
    pub title: String,
    pub action_points: i64,
    #[serde(default)]
    pub is_white: bool,
    /// Trade-good indices.
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_bonus: Vec<i64>,
    /// Tribe index.
    #[serde(default)]
    pub revolt: i64,
    /// Tribe index; zero or absent means the card has no modifier.
    #[serde(default)]
    pub modifier: Option<i64>,
    #[serde(default)]
    pub is_ascendant: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawLand {
    /// Row, 0-based.
    pub warpath: i64,
    /// Position along the warpath, 1-based.
    pub space: i64,
    pub name: String,
    #[serde(default, alias = "isWilderness")]
    pub is_wilderness: bool,
    #[serde(default, alias = "isControlled")]
    pub is_controlled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawChiefdom {
    pub counter: RawCounter,
    #[serde(default)]
    pub is_mounded: bool,
}

impl RawChiefdom {
    /// The counter face currently showing.
    #[must_use]
    pub fn face(&self) -> &RawCounterFace {
        if self.is_mounded { &self.counter.mounded } else { &self.counter.plain }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCounter {
    /// Trade-good index.
    pub good: i64,
    pub plain: RawCounterFace,
    pub mounded: RawCounterFace,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCounterFace {
    pub value: i64,
    #[serde(default)]
    pub is_green_bird: bool,
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// A decoded `/mb/board/` response.
///
/// The server may wrap the snapshot as `{"Board": ..., "Error": ..., "Prompt": ...}`;
/// a bare snapshot decodes with `prompt` and `error` unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardPayload {
    pub board: RawBoard,
    /// What the game is waiting for next.
    pub prompt: Option<String>,
    /// Rejection of the last submitted input.
    pub error: Option<String>,
}

/// Body of `POST /mb/board/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InputRequest<'a> {
    #[serde(rename = "Input")]
    pub input: &'a str,
}

/// Decode a `/mb/board/` response body.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is not JSON, not an object, or is
/// missing a field the snapshot requires.
pub fn decode_board(bytes: &[u8]) -> Result<BoardPayload, DecodeError> {
    let Value::Object(mut map) = serde_json::from_slice::<Value>(bytes)? else {
        return Err(DecodeError::NotAnObject);
    };

    let Some(board) = map.remove("Board") else {
        let board = serde_json::from_value(Value::Object(map))?;
        return Ok(BoardPayload { board, prompt: None, error: None });
    };

    Ok(BoardPayload {
        board: serde_json::from_value(board)?,
        prompt: take_text(&mut map, "Prompt"),
        error: take_text(&mut map, "Error"),
    })
}

/// Decode a `/mb/log/` response body. `null` decodes as an empty log.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is not a JSON array or `null`.
pub fn decode_log(bytes: &[u8]) -> Result<Vec<Value>, DecodeError> {
    let entries: Option<Vec<Value>> = serde_json::from_slice(bytes)?;
    Ok(entries.unwrap_or_default())
}

fn take_text(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
