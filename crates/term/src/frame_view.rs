//! FrameView: maps a `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! One frame is drawn in three passes: a ray-cast column for every screen
//! column (sky, wall slice, floor), then the status line over row 0, then the
//! mini-map over the top-left corner. Every cell is rewritten each frame, so no
//! state carries over between frames in the buffer.

use crate::core::{cast_ray, floor_shade, project, ray_angle, wall_band, wall_shade, RayHit, World};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Pose, BLANK_GLYPH, MINIMAP_X, MINIMAP_Y, PLAYER_GLYPH, SCREEN_HEIGHT, SCREEN_WIDTH,
    STATUS_MAX_LEN,
};

/// Per-frame values shown in the status line that are not part of the world.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hud {
    pub fps: f32,
}

/// Full-frame renderer for the first-person view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView {
    width: u16,
    height: u16,
    show_status: bool,
    show_minimap: bool,
}

impl Default for FrameView {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

const SKY: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: false,
};

const FLOOR: CellStyle = CellStyle {
    fg: Rgb::new(150, 140, 120),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: true,
};

const HUD: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};

const MINIMAP: CellStyle = CellStyle {
    fg: Rgb::new(180, 180, 190),
    bg: Rgb::new(20, 20, 30),
    bold: false,
    dim: false,
};

const PLAYER: CellStyle = CellStyle {
    fg: Rgb::new(240, 220, 80),
    bg: Rgb::new(20, 20, 30),
    bold: true,
    dim: false,
};

/// Wall colour per density band, nearest first.
const WALL_FG: [Rgb; 5] = [
    Rgb::new(235, 235, 235),
    Rgb::new(200, 200, 200),
    Rgb::new(165, 165, 165),
    Rgb::new(130, 130, 130),
    Rgb::new(0, 0, 0),
];

impl FrameView {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            show_status: true,
            show_minimap: true,
        }
    }

    pub fn with_status(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    pub fn with_minimap(mut self, show: bool) -> Self {
        self.show_minimap = show;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Render the current world into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames.
    pub fn render_into(&self, world: &World, hud: Hud, fb: &mut FrameBuffer) {
        fb.resize(self.width, self.height);

        let pose = world.pose();
        for x in 0..self.width {
            let angle = ray_angle(pose.angle, x, self.width);
            let hit = cast_ray(world.map(), pose.x, pose.y, angle);
            self.draw_column(fb, x, &hit);
        }

        if self.show_status {
            self.draw_status(fb, pose, hud);
        }
        if self.show_minimap {
            self.draw_minimap(fb, world);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World, hud: Hud) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width, self.height);
        self.render_into(world, hud, &mut fb);
        fb
    }

    fn draw_column(&self, fb: &mut FrameBuffer, x: u16, hit: &RayHit) {
        let proj = project(hit.distance, self.height);
        let shade = wall_shade(hit.distance, hit.boundary);
        let wall = CellStyle {
            fg: WALL_FG[wall_band(hit.distance)],
            ..SKY
        };

        for y in 0..self.height {
            let row = y as i32;
            if row <= proj.ceiling {
                fb.put_char(x, y, BLANK_GLYPH, SKY);
            } else if row < proj.floor {
                fb.put_char(x, y, shade, wall);
            } else {
                fb.put_char(x, y, floor_shade(y, self.height), FLOOR);
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, pose: Pose, hud: Hud) {
        fb.put_fmt(
            0,
            0,
            STATUS_MAX_LEN,
            HUD,
            format_args!(
                "X={:3.2}, Y={:3.2}, A={:3.2} FPS={:3.2} ",
                pose.x, pose.y, pose.angle, hud.fps
            ),
        );
    }

    /// Map cell `(x, y)` is drawn at screen column `MINIMAP_X + y`, row `MINIMAP_Y + x`,
    /// so the mini-map reads like the level text.
    fn draw_minimap(&self, fb: &mut FrameBuffer, world: &World) {
        for (x, y, tile) in world.map().iter() {
            let (col, row) = minimap_origin(x, y);
            fb.put_char(col, row, tile.glyph(), MINIMAP);
        }

        let pose = world.pose();
        if let Some((cx, cy)) = world.map().cell_at(pose.x, pose.y) {
            let (col, row) = minimap_origin(cx as usize, cy as usize);
            fb.put_char(col, row, PLAYER_GLYPH, PLAYER);
        }
    }
}

fn minimap_origin(x: usize, y: usize) -> (u16, u16) {
    let clamp = |v: usize| u16::try_from(v).unwrap_or(u16::MAX);
    (
        MINIMAP_X.saturating_add(clamp(y)),
        MINIMAP_Y.saturating_add(clamp(x)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Map;

    fn corridor_world() -> World {
        // 3 x-slices, 12 cells along y; open down the middle.
        let map = Map::parse(&["############", "#..........#", "############"]).unwrap();
        World::new(map, Pose::new(1.5, 1.5, 0.0))
    }

    #[test]
    fn every_column_has_sky_wall_floor_order() {
        let view = FrameView::new(40, 20).with_status(false).with_minimap(false);
        let fb = view.render(&corridor_world(), Hud::default());

        for x in 0..fb.width() {
            let mut phase = 0; // 0 sky, 1 wall, 2 floor
            for y in 0..fb.height() {
                let cell = fb.get(x, y).unwrap();
                let p = if cell.style == SKY {
                    assert_eq!(cell.ch, BLANK_GLYPH);
                    0
                } else if cell.style == FLOOR {
                    2
                } else {
                    1
                };
                assert!(p >= phase, "column {} row {} went backwards", x, y);
                phase = p;
            }
        }
    }

    #[test]
    fn status_line_is_limited_to_row_zero() {
        let view = FrameView::new(60, 20).with_minimap(false);
        let fb = view.render(&corridor_world(), Hud { fps: 60.0 });
        assert!(fb.row_text(0).starts_with("X=1.50, Y=1.50, A=0.00 FPS=60.00 "));
    }

    #[test]
    fn minimap_marks_player_cell() {
        let view = FrameView::new(60, 20);
        let fb = view.render(&corridor_world(), Hud::default());
        // Player cell (1, 1) lands at column 2 + 1, row 1 + 1.
        assert_eq!(fb.get(3, 2).unwrap().ch, PLAYER_GLYPH);
        assert_eq!(fb.get(2, 1).unwrap().ch, '#');
        assert_eq!(fb.get(4, 2).unwrap().ch, '.');
    }

    #[test]
    fn render_into_resizes_foreign_buffer() {
        let view = FrameView::new(30, 10);
        let mut fb = FrameBuffer::new(3, 3);
        view.render_into(&corridor_world(), Hud::default(), &mut fb);
        assert_eq!((fb.width(), fb.height()), (30, 10));
    }
}
