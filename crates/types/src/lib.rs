//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world simulation, ray casting, terminal rendering, input).
//!
//! # Scenario Constants
//!
//! The whole demo is a closed, fixed scenario. Every tunable lives here:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 120 | Frame columns |
//! | `SCREEN_HEIGHT` | 40 | Frame rows |
//! | `MAP_WIDTH` / `MAP_HEIGHT` | 16 | World dimensions in cells |
//! | `FOV` | π/4 | Horizontal field of view (radians) |
//! | `DEPTH` | 16.0 | Maximum ray-march distance |
//! | `RAY_STEP` | 0.1 | Ray-march increment |
//! | `MOVE_SPEED` | 5.0 | Cells per second |
//! | `TURN_RATE_FACTOR` | 0.75 | Turn rate as a fraction of `MOVE_SPEED` (rad/s) |
//! | `BOUNDARY_THRESHOLD` | 0.01 | Corner alignment threshold (radians) |
//!
//! # Coordinates
//!
//! World cells are addressed as `(x, y)`. The map is stored column-major: the
//! flat index of cell `(x, y)` is `x * MAP_HEIGHT + y`. In the level text each
//! source line is one `x` slice and each character in it one `y` step, so the
//! text reads exactly like the mini-map drawn on screen.
//!
//! The facing angle is measured so that angle `0` points along `+y` and the
//! forward vector is `(sin(angle), cos(angle))`.
//!
//! # Examples
//!
//! ```
//! use tui_fps_types::{Intents, Key, Tile, MAP_HEIGHT, MAP_WIDTH};
//!
//! assert_eq!(Tile::from_glyph('#'), Some(Tile::Wall));
//! assert_eq!(Tile::from_glyph('.'), Some(Tile::Open));
//!
//! let intents = Intents::NONE.with(Key::Forward, true).with(Key::TurnLeft, true);
//! assert!(intents.forward);
//! assert!(intents.turn_left);
//! assert_eq!(Intents::from_bits(intents.bits()), intents);
//!
//! assert_eq!(MAP_WIDTH, 16);
//! assert_eq!(MAP_HEIGHT, 16);
//! ```

use std::f32::consts::FRAC_PI_4;

/// Frame width in terminal columns (120)
pub const SCREEN_WIDTH: u16 = 120;

/// Frame height in terminal rows (40)
pub const SCREEN_HEIGHT: u16 = 40;

/// World extent along `x` in cells
pub const MAP_WIDTH: usize = 16;

/// World extent along `y` in cells
pub const MAP_HEIGHT: usize = 16;

/// Field of view in radians
pub const FOV: f32 = FRAC_PI_4;

/// Maximum rendering distance in map cells
pub const DEPTH: f32 = 16.0;

/// Ray-march increment in map cells
pub const RAY_STEP: f32 = 0.1;

/// Walking speed in cells per second
pub const MOVE_SPEED: f32 = 5.0;

/// Turn rate multiplier. Turning is coupled to walking speed:
/// `angle_delta = MOVE_SPEED * TURN_RATE_FACTOR * elapsed`.
pub const TURN_RATE_FACTOR: f32 = 0.75;

/// Angular deviation (radians) under which a ray counts as grazing a tile corner
pub const BOUNDARY_THRESHOLD: f32 = 0.01;

/// Wall glyphs from nearest to farthest band; the last entry is "too far".
pub const WALL_SHADES: [char; 5] = ['█', '▓', '▒', '░', ' '];

/// Floor glyphs from farthest to nearest band.
pub const FLOOR_SHADES: [char; 5] = ['#', 'x', '.', '-', ' '];

/// Normalized-distance thresholds separating `FLOOR_SHADES` bands.
pub const FLOOR_THRESHOLDS: [f32; 4] = [0.25, 0.5, 0.75, 0.9];

/// Glyph for open ground (sky above the wall slice uses it too)
pub const BLANK_GLYPH: char = ' ';

/// Mini-map glyph marking the player's cell
pub const PLAYER_GLYPH: char = 'P';

/// Mini-map origin on screen: column offset
pub const MINIMAP_X: u16 = 2;

/// Mini-map origin on screen: row offset (row 0 holds the status line)
pub const MINIMAP_Y: u16 = 1;

/// Maximum number of status-line characters written into row 0
pub const STATUS_MAX_LEN: usize = 39;

/// Player start position along `x`
pub const START_X: f32 = 14.7;

/// Player start position along `y`
pub const START_Y: f32 = 5.09;

/// Player start facing angle
pub const START_ANGLE: f32 = 0.0;

/// The built-in level. One line per `x` slice; `#` is a wall, `.` is open.
pub const LEVEL: [&str; MAP_WIDTH] = [
    "#########.......",
    "#...............",
    "#.......########",
    "#..............#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "###............#",
    "##.............#",
    "#......####..###",
    "#......#.......#",
    "#......#.......#",
    "#..............#",
    "#......#########",
    "#..............#",
    "################",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_matches_declared_dimensions() {
        assert_eq!(LEVEL.len(), MAP_WIDTH);
        for line in LEVEL {
            assert_eq!(line.chars().count(), MAP_HEIGHT);
        }
    }

    #[test]
    fn start_cell_is_open() {
        let line = LEVEL[START_X as usize];
        let ch = line.chars().nth(START_Y as usize).unwrap();
        assert_eq!(Tile::from_glyph(ch), Some(Tile::Open));
    }

    #[test]
    fn shade_tables_have_blank_terminal_band() {
        assert_eq!(WALL_SHADES[4], BLANK_GLYPH);
        assert_eq!(FLOOR_SHADES[4], BLANK_GLYPH);
        assert!(FLOOR_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Open,
}

impl Tile {
    /// Parse a level glyph
    ///
    /// ```
    /// use tui_fps_types::Tile;
    ///
    /// assert_eq!(Tile::from_glyph('#'), Some(Tile::Wall));
    /// assert_eq!(Tile::from_glyph('?'), None);
    /// ```
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Open),
            _ => None,
        }
    }

    /// Glyph used by the level text and the mini-map
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => '.',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Continuous player pose in map-cell units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    /// Facing angle in radians; `0` points along `+y`.
    pub angle: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Pose the player spawns with
    pub const fn start() -> Self {
        Self::new(START_X, START_Y, START_ANGLE)
    }

    /// Unit forward vector `(sin, cos)` for the current angle
    pub fn forward(&self) -> (f32, f32) {
        (self.angle.sin(), self.angle.cos())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::start()
    }
}

/// The four logical movement keys
///
/// Each key owns one bit in the packed [`Intents`] representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Forward, Key::Back, Key::TurnLeft, Key::TurnRight];

    /// Bit mask within a packed intent byte
    pub const fn bit(self) -> u8 {
        match self {
            Key::Forward => 1 << 0,
            Key::Back => 1 << 1,
            Key::TurnLeft => 1 << 2,
            Key::TurnRight => 1 << 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Forward => "forward",
            Key::Back => "back",
            Key::TurnLeft => "turnLeft",
            Key::TurnRight => "turnRight",
        }
    }
}

/// Movement intents sampled once per frame
///
/// Flags are independent: opposing intents may both be set and both apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub forward: bool,
    pub back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl Intents {
    pub const NONE: Intents = Intents {
        forward: false,
        back: false,
        turn_left: false,
        turn_right: false,
    };

    /// Builder-style setter for a single key
    pub fn with(mut self, key: Key, down: bool) -> Self {
        self.set(key, down);
        self
    }

    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Forward => self.forward = down,
            Key::Back => self.back = down,
            Key::TurnLeft => self.turn_left = down,
            Key::TurnRight => self.turn_right = down,
        }
    }

    pub fn get(&self, key: Key) -> bool {
        match key {
            Key::Forward => self.forward,
            Key::Back => self.back,
            Key::TurnLeft => self.turn_left,
            Key::TurnRight => self.turn_right,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Intents::NONE
    }

    /// Pack into the low four bits of a byte
    pub fn bits(&self) -> u8 {
        Key::ALL
            .iter()
            .filter(|k| self.get(**k))
            .fold(0, |acc, k| acc | k.bit())
    }

    /// Unpack from a byte; bits outside the four key bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        let mut out = Intents::NONE;
        for key in Key::ALL {
            out.set(key, bits & key.bit() != 0);
        }
        out
    }
}
