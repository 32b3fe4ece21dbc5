//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders each frame into a fixed character framebuffer and flushes that
//! framebuffer to a terminal backend through a single sink operation.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep frame rendering pure (no I/O) and allocation-free once warmed up
//! - Hide the output mechanism behind [`FrameSink`]

pub mod fb;
pub mod frame_view;
pub mod renderer;

pub use tui_fps_core as core;
pub use tui_fps_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_view::{FrameView, Hud};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, FrameSink, TerminalRenderer};
