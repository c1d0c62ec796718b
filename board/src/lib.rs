//! Board snapshot schema and view-model builder for the Mound Builders board viewer.
//!
//! This crate is UI-framework agnostic so the viewer (or any other renderer)
//! can consume it directly. It does no I/O: callers hand it response bytes
//! and get back a [`Board`] shaped for rendering.
//!
//! LAYOUT
//! ======
//! - [`lookup`]: static trade-good and tribe name tables.
//! - [`snapshot`]: typed wire schema for `/mb/board/` and `/mb/log/` bodies.
//! - [`view`]: the pure transform from [`RawBoard`] to [`Board`].

pub mod lookup;
pub mod snapshot;
pub mod view;

pub use lookup::{
    GOODS, MAX_SPACES_PER_WARPATH, SPACES_PER_WARPATH, TRIBES, WARPATH_COUNT, good_name, tribe_name,
};
pub use snapshot::{
    BoardPayload, DecodeError, InputRequest, RawBoard, RawCard, RawChiefdom, RawCounter, RawCounterFace,
    RawLand, decode_board, decode_log,
};
pub use view::{Board, Card, ChiefdomView, LandCell, Lands};
