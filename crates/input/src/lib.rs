//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the renderer. It maps
//! `crossterm` key events onto the four logical movement keys, tracks which of
//! them are held (including terminals without key-release events), and
//! publishes the result as one atomic [`Intents`](crate::types::Intents)
//! snapshot from a background worker thread.

pub mod map;
pub mod shared;
pub mod tracker;
pub mod worker;

pub use tui_fps_types as types;

pub use map::{key_for, should_quit};
pub use shared::SharedIntents;
pub use tracker::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use worker::{
    spawn_input_worker, spawn_input_worker_with, EventSource, TerminalEvents, WorkerConfig,
    DEFAULT_POLL_MS,
};
