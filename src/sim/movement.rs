//! Frame-by-frame movement for the floating player
//!
//! Idle: gravity pulls the player down. Moving: a small sine wobble is layered
//! on the horizontal position. `delta` is the only timing input.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementModel {
    pub gravity: f32,
    pub float_amplitude: f32,
    pub float_step: f32,
    /// Phase accumulator for the wobble
    pub time: f32,
}

impl MovementModel {
    pub fn new(gravity: f32, float_amplitude: f32, float_step: f32) -> Self {
        Self {
            gravity,
            float_amplitude,
            float_step,
            time: 0.0,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.gravity, tuning.float_amplitude, tuning.float_step)
    }

    /// Advance `pos`/`vel` by one tick.
    ///
    /// `floor` is the lowest y the entity centre may reach; landing on it
    /// zeroes vertical velocity.
    pub fn step(&mut self, pos: &mut Vec2, vel: &mut Vec2, delta: f32, floor: f32) {
        if vel.x == 0.0 && vel.y == 0.0 {
            vel.y += self.gravity;
        } else {
            pos.x += self.time.sin() * self.float_amplitude;
            self.time += self.float_step;
            pos.x -= self.time.sin() * self.float_amplitude;
        }

        *pos += *vel * delta;

        if pos.y > floor {
            pos.y = floor;
            vel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f32 = 1000.0;

    fn model() -> MovementModel {
        MovementModel::new(0.5, 10.0, 0.1)
    }

    #[test]
    fn test_idle_applies_gravity() {
        let mut m = model();
        let mut pos = Vec2::new(100.0, 100.0);
        let mut vel = Vec2::ZERO;

        m.step(&mut pos, &mut vel, 1.0, FLOOR);
        assert_eq!(vel, Vec2::new(0.0, 0.5));
        assert_eq!(pos, Vec2::new(100.0, 100.5));

        // Velocity is now non-zero, so gravity stops accumulating
        m.step(&mut pos, &mut vel, 1.0, FLOOR);
        assert_eq!(vel.y, 0.5);
        assert_eq!(pos.y, 101.0);
    }

    #[test]
    fn test_moving_applies_wobble() {
        let mut m = model();
        let mut pos = Vec2::new(100.0, 100.0);
        let mut vel = Vec2::new(5.0, 0.0);

        m.step(&mut pos, &mut vel, 1.0, FLOOR);
        let wobble = 0.0f32.sin() * 10.0 - 0.1f32.sin() * 10.0;
        assert!((pos.x - (100.0 + wobble + 5.0)).abs() < 1e-4);
        assert_eq!(pos.y, 100.0);
        assert!((m.time - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_delta_scales_velocity() {
        let mut m = MovementModel::new(0.5, 0.0, 0.1);
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::new(5.0, -5.0);
        m.step(&mut pos, &mut vel, 2.0, FLOOR);
        assert_eq!(pos, Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_floor_clamps_and_stops_fall() {
        let mut m = model();
        let mut pos = Vec2::new(0.0, 999.8);
        let mut vel = Vec2::new(0.0, 4.0);
        m.step(&mut pos, &mut vel, 1.0, FLOOR);
        assert_eq!(pos.y, FLOOR);
        assert_eq!(vel.y, 0.0);
    }
}
