//! Client side of the Mound Builders board viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the game server, `controller` turns responses into
//! renderer-visible state held by `state`, and `config` names the server.
//! Snapshot decoding and the board view model live in the `board` crate.

pub mod api;
pub mod config;
pub mod controller;
pub mod state;

pub use api::{ApiClient, ApiError};
pub use config::{ConfigError, ViewerConfig};
pub use controller::Controller;
pub use state::{ViewState, ViewStore};
