//! Map module - the immutable world grid
//!
//! Cells are stored in a flat vector, column-major: the index of `(x, y)` is
//! `x * height + y`. Storage, collision and ray hits all go through
//! [`Map::index`] so the convention lives in exactly one place.
//!
//! Every lookup fails closed: anything outside `[0, width) x [0, height)` is a wall.

use std::fmt;

use crate::types::{Tile, LEVEL};

/// Errors produced while parsing level text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No lines, or a zero-length first line
    Empty,
    /// A line whose length differs from the first line
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A glyph that is neither `#` nor `.`
    UnknownGlyph { line: usize, column: usize, glyph: char },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "map: level text is empty"),
            MapError::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {} has {} cells, expected {}",
                line, found, expected
            ),
            MapError::UnknownGlyph {
                line,
                column,
                glyph,
            } => write!(
                f,
                "map: unknown glyph {:?} at line {}, column {}",
                glyph, line, column
            ),
        }
    }
}

impl std::error::Error for MapError {}

/// The world grid. Dimensions are fixed at construction and tiles are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Map {
    /// Parse level text.
    ///
    /// Each line is one `x` slice; the characters of a line walk `y` from 0.
    /// So `lines.len()` is the width and the line length is the height.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, MapError> {
        let width = lines.len();
        let height = lines
            .first()
            .map(|l| l.as_ref().chars().count())
            .unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (x, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != height {
                return Err(MapError::Ragged {
                    line: x,
                    expected: height,
                    found,
                });
            }
            for (y, glyph) in line.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(MapError::UnknownGlyph {
                    line: x,
                    column: y,
                    glyph,
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// The built-in 16x16 level
    pub fn level() -> Result<Self, MapError> {
        Self::parse(&LEVEL)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index of `(x, y)`, or `None` when out of bounds
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((x as usize) * self.height + (y as usize))
    }

    /// Get tile at `(x, y)`; `None` if out of bounds
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Wall test on integer cells. Out of bounds counts as a wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).map_or(true, |t| t.is_wall())
    }

    /// Cell containing a continuous point, or `None` when the point lies outside the grid.
    ///
    /// Coordinates are truncated toward zero, so negative inputs are rejected
    /// up front rather than folded into row/column 0.
    #[inline(always)]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i32, i32)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (cx, cy) = (x as i32, y as i32);
        self.index(cx, cy).map(|_| (cx, cy))
    }

    /// Wall test on a continuous point. Out of bounds (and NaN) counts as a wall.
    pub fn is_wall_at(&self, x: f32, y: f32) -> bool {
        match self.cell_at(x, y) {
            Some((cx, cy)) => self.is_wall(cx, cy),
            None => true,
        }
    }

    /// Iterate `(x, y, tile)` in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let h = self.height;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (i / h, i % h, *t))
    }
}
