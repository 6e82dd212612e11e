//! Core systems for focustv.
//!
//! This crate provides the non-visual plumbing shared by the widget and
//! render crates: object identity, a type-safe signal/slot mechanism, and
//! logging target constants for `tracing` filtering.

pub mod logging;
pub mod object;
pub mod signal;

pub use object::{Object, ObjectId};
pub use signal::{ConnectionId, Signal};
