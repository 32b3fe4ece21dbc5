//! TUI FPS (workspace facade crate).
//!
//! This package exposes the workspace crates as `tui_fps::{core,input,term,types}`
//! and hosts the process-level concerns shared by the binaries: environment
//! configuration and logging.

pub mod config;
pub mod logging;

pub use tui_fps_core as core;
pub use tui_fps_input as input;
pub use tui_fps_term as term;
pub use tui_fps_types as types;
