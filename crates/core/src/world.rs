//! World module - map plus player pose
//!
//! The world owns the map and the pose and is the only place the pose changes.
//! Movement is a full revert on collision: if the tentative position lands in
//! a wall cell the move is dropped entirely (no sliding along the other axis).

use std::f32::consts::{PI, TAU};

use crate::map::Map;
use crate::types::{Intents, Pose, MOVE_SPEED, TURN_RATE_FACTOR};

/// Wrap an angle into `[-PI, PI)`.
///
/// Angles already inside `[-PI, PI]` are returned untouched so small turns stay exact.
pub fn wrap_angle(angle: f32) -> f32 {
    if (-PI..=PI).contains(&angle) {
        return angle;
    }
    (angle + PI).rem_euclid(TAU) - PI
}

#[derive(Debug, Clone)]
pub struct World {
    map: Map,
    pose: Pose,
    speed: f32,
}

impl World {
    pub fn new(map: Map, pose: Pose) -> Self {
        Self {
            map,
            pose,
            speed: MOVE_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Collision test on a continuous position; fails closed outside the grid.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        self.map.is_wall_at(x, y)
    }

    /// Advance the pose by one frame and return the new pose.
    ///
    /// Turning happens first, then forward, then back. Both turn flags (and
    /// both move flags) may apply in the same frame.
    pub fn advance(&mut self, elapsed_secs: f32, intents: Intents) -> Pose {
        let movement = self.speed * elapsed_secs;
        let angle_delta = self.speed * TURN_RATE_FACTOR * elapsed_secs;

        let mut angle = self.pose.angle;
        if intents.turn_left {
            angle -= angle_delta;
        }
        if intents.turn_right {
            angle += angle_delta;
        }
        self.pose.angle = wrap_angle(angle);

        let (sin, cos) = self.pose.forward();
        let dx = sin * movement;
        let dy = cos * movement;

        if intents.forward {
            self.try_move(dx, dy);
        }
        if intents.back {
            self.try_move(-dx, -dy);
        }

        self.pose
    }

    /// Commit a move unless the destination cell is a wall. Returns true if committed.
    fn try_move(&mut self, dx: f32, dy: f32) -> bool {
        let x = self.pose.x + dx;
        let y = self.pose.y + dy;
        if self.is_wall(x, y) {
            return false;
        }
        self.pose.x = x;
        self.pose.y = y;
        true
    }
}
