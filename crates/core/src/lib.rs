//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the world model, movement rules, and the ray caster.
//! It has **zero dependencies** on terminals, threads, or I/O, making it:
//!
//! - **Deterministic**: Same pose and map always produce the same rays
//! - **Testable**: Movement and ray casting are plain functions over plain data
//! - **Portable**: The frame renderer is the only consumer that knows about cells on screen
//!
//! # Module Structure
//!
//! - [`map`]: Immutable tile grid with column-major storage and fail-closed lookups
//! - [`world`]: Player pose, collision test, and the per-frame movement step
//! - [`raycast`]: Ray marching, tile-corner boundary detection, projection, and shading bands
//! - [`clock`]: Frame timing (elapsed seconds, instantaneous and averaged FPS)
//!
//! # Example
//!
//! ```
//! use tui_fps_core::{cast_ray, Map, World};
//! use tui_fps_types::{Intents, Pose, DEPTH};
//!
//! let map = Map::level().unwrap();
//! let mut world = World::new(map, Pose::start());
//!
//! // Walk forward for one 16ms frame.
//! let before = world.pose();
//! let after = world.advance(0.016, Intents { forward: true, ..Intents::NONE });
//! assert!(after.y > before.y);
//!
//! // Cast the centre ray.
//! let hit = cast_ray(world.map(), after.x, after.y, after.angle);
//! assert!(hit.distance <= DEPTH);
//! ```

pub mod clock;
pub mod map;
pub mod raycast;
pub mod world;

pub use tui_fps_types as types;

// Re-export commonly used types for convenience
pub use clock::{FrameClock, FrameStats, FrameTime};
pub use map::{Map, MapError};
pub use raycast::{
    cast_ray, floor_shade, project, ray_angle, wall_band, wall_shade, CornerSample, Projection,
    RayHit,
};
pub use world::{wrap_angle, World};
