//! Ray caster - fixed-step ray marching against the tile grid
//!
//! Each screen column casts one ray from the player. The ray advances in
//! `RAY_STEP` increments until it enters a wall cell, leaves the grid, or
//! reaches `DEPTH`. Leaving the grid is reported as "nothing hit" at `DEPTH`.
//!
//! Wall hits also run tile-corner boundary detection: the corners of the hit
//! cell are ranked by distance, and if the ray points almost exactly at one of
//! the nearest three (within `BOUNDARY_THRESHOLD` radians) the column is a
//! tile edge and gets blacked out to separate adjacent blocks.

use arrayvec::ArrayVec;

use crate::map::Map;
use crate::types::{
    BLANK_GLYPH, BOUNDARY_THRESHOLD, DEPTH, FLOOR_SHADES, FLOOR_THRESHOLDS, FOV, RAY_STEP,
    WALL_SHADES,
};

/// Per-column ray result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance to the wall; exactly `DEPTH` when nothing was hit.
    pub distance: f32,
    /// Wall cell that stopped the ray, if any
    pub cell: Option<(i32, i32)>,
    /// The ray grazes a corner of the hit cell
    pub boundary: bool,
}

impl RayHit {
    pub const MISS: RayHit = RayHit {
        distance: DEPTH,
        cell: None,
        boundary: false,
    };

    pub fn is_hit(&self) -> bool {
        self.cell.is_some()
    }
}

/// Distance and alignment of one corner of a hit cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSample {
    pub distance: f32,
    /// Cosine similarity between the ray and the direction to the corner
    pub alignment: f32,
}

impl CornerSample {
    /// Angle between the ray and the corner direction
    pub fn deviation(&self) -> f32 {
        self.alignment.clamp(-1.0, 1.0).acos()
    }
}

/// Angle of the ray for screen column `column`.
pub fn ray_angle(player_angle: f32, column: u16, screen_width: u16) -> f32 {
    player_angle - FOV / 2.0 + (column as f32 / screen_width as f32) * FOV
}

/// March a ray from `(origin_x, origin_y)` along `angle`.
pub fn cast_ray(map: &Map, origin_x: f32, origin_y: f32, angle: f32) -> RayHit {
    let eye_x = angle.sin();
    let eye_y = angle.cos();

    let mut steps: u32 = 0;
    let mut distance = 0.0f32;
    while distance < DEPTH {
        steps += 1;
        distance = steps as f32 * RAY_STEP;

        let px = origin_x + eye_x * distance;
        let py = origin_y + eye_y * distance;
        let Some((cx, cy)) = map.cell_at(px, py) else {
            return RayHit::MISS;
        };

        if map.is_wall(cx, cy) {
            let corners = corner_samples((cx, cy), origin_x, origin_y, eye_x, eye_y);
            return RayHit {
                distance,
                cell: Some((cx, cy)),
                boundary: is_boundary(&closest_corners(corners)),
            };
        }
    }

    RayHit::MISS
}

/// Distance and alignment for each of the four corners of `cell`.
pub fn corner_samples(
    cell: (i32, i32),
    origin_x: f32,
    origin_y: f32,
    eye_x: f32,
    eye_y: f32,
) -> [CornerSample; 4] {
    let mut out = [CornerSample {
        distance: f32::MAX,
        alignment: 0.0,
    }; 4];
    for tx in 0..2 {
        for ty in 0..2 {
            let vx = (cell.0 + tx) as f32 - origin_x;
            let vy = (cell.1 + ty) as f32 - origin_y;
            let d = (vx * vx + vy * vy).sqrt();
            out[(tx + ty * 2) as usize] = CornerSample {
                distance: d,
                alignment: eye_x * vx / d + eye_y * vy / d,
            };
        }
    }
    out
}

/// Order four samples nearest-first with a fixed five-comparator network.
pub fn sort_by_distance(s: &mut [CornerSample; 4]) {
    #[inline(always)]
    fn cmp_swap(s: &mut [CornerSample; 4], a: usize, b: usize) {
        if s[b].distance < s[a].distance {
            s.swap(a, b);
        }
    }
    cmp_swap(s, 0, 1);
    cmp_swap(s, 2, 3);
    cmp_swap(s, 0, 2);
    cmp_swap(s, 1, 3);
    cmp_swap(s, 1, 2);
}

/// The three nearest corners, nearest first.
///
/// The farthest corner is never visible. Corners the player stands exactly on
/// have no direction and are skipped.
pub fn closest_corners(mut samples: [CornerSample; 4]) -> ArrayVec<CornerSample, 3> {
    sort_by_distance(&mut samples);
    samples
        .into_iter()
        .take(3)
        .filter(|s| s.distance > 0.0 && s.alignment.is_finite())
        .collect()
}

fn is_boundary(candidates: &[CornerSample]) -> bool {
    candidates
        .iter()
        .any(|c| c.deviation() < BOUNDARY_THRESHOLD)
}

/// Screen rows bounding the wall slice for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Last sky row; rows `<= ceiling` are sky. May be negative when the wall is close.
    pub ceiling: i32,
    /// First floor row; rows `>= floor` are floor.
    pub floor: i32,
}

/// Project a wall distance onto screen rows.
///
/// Distance is clamped to at least `RAY_STEP` so the division stays finite.
pub fn project(distance: f32, screen_height: u16) -> Projection {
    let h = screen_height as f32;
    let d = distance.max(RAY_STEP);
    let ceiling = (h / 2.0 - h / d) as i32;
    Projection {
        ceiling,
        floor: screen_height as i32 - ceiling,
    }
}

/// Density band for a wall distance: 0 is nearest, 4 is too far to draw.
pub fn wall_band(distance: f32) -> usize {
    if distance <= DEPTH / 4.0 {
        0
    } else if distance < DEPTH / 3.0 {
        1
    } else if distance < DEPTH / 2.0 {
        2
    } else if distance < DEPTH {
        3
    } else {
        4
    }
}

/// Wall glyph for a column; boundary columns are always blank.
pub fn wall_shade(distance: f32, boundary: bool) -> char {
    if boundary {
        return BLANK_GLYPH;
    }
    WALL_SHADES[wall_band(distance)]
}

/// Floor glyph for screen row `row`.
///
/// `b` runs from 1 at the horizon to 0 at the bottom edge.
pub fn floor_shade(row: u16, screen_height: u16) -> char {
    let half = screen_height as f32 / 2.0;
    let b = 1.0 - (row as f32 - half) / half;
    let band = FLOOR_THRESHOLDS
        .iter()
        .position(|t| b < *t)
        .unwrap_or(FLOOR_THRESHOLDS.len());
    FLOOR_SHADES[band]
}
