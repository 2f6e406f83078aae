//! Enemy pursuit AI
//!
//! Each tick an enemy measures its distance to the player. Inside the chase
//! radius it steps straight toward the player; inside the contact radius it
//! reports contact, every tick, with no cooldown of its own. The player's
//! invulnerability window is what rate-limits damage.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Readiness, WorldEntity};
use crate::level::EnemySlot;
use crate::tuning::Tuning;
use crate::{heading, polar_to_cartesian};

/// Behaviour chosen on the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PursuitState {
    #[default]
    Idle,
    Chasing,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EntityId,
    pub pos: Vec2,
    pub chase_radius: f32,
    pub contact_radius: f32,
    /// Distance covered per tick while chasing
    pub speed: f32,
    pub boss: bool,
    pub texture: String,
    pub state: PursuitState,
    pub readiness: Readiness,
    invulnerable_until: Option<f64>,
    invulnerability_ms: f64,
}

impl Enemy {
    pub fn new(id: EntityId, slot: &EnemySlot, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: Vec2::new(slot.x, slot.y),
            chase_radius: tuning.chase_radius,
            contact_radius: tuning.contact_radius,
            speed: tuning.enemy_speed,
            boss: slot.boss,
            texture: slot.texture.clone(),
            state: PursuitState::Idle,
            readiness: Readiness::Loading,
            invulnerable_until: None,
            invulnerability_ms: tuning.enemy_invulnerability_ms,
        }
    }

    /// Run one pursuit tick toward `target`.
    ///
    /// Returns true when the target is within contact range. Both checks use
    /// the distance measured before this tick's step. The step is a fixed
    /// per-tick distance, not scaled by frame delta. An enemy whose sprite is
    /// not ready does nothing.
    pub fn pursue(&mut self, target: Vec2) -> bool {
        if let Err(e) = self.require_ready() {
            log::trace!("Enemy {:?} skipped: {e}", self.id);
            return false;
        }

        let distance = self.pos.distance(target);

        if distance <= self.chase_radius {
            self.state = PursuitState::Chasing;
            self.pos += polar_to_cartesian(self.speed, heading(self.pos, target));
        } else {
            self.state = PursuitState::Idle;
        }

        distance <= self.contact_radius
    }

    /// Enter the timed damage-taken overlay
    pub fn start_invulnerability(&mut self, now_ms: f64) {
        let until = now_ms + self.invulnerability_ms;
        self.invulnerable_until = Some(until);
        log::debug!("Enemy {:?} invulnerable until {until:.0}ms", self.id);
    }

    pub fn is_invulnerable(&self, now_ms: f64) -> bool {
        self.invulnerable_until.is_some_and(|until| now_ms < until)
    }
}

impl WorldEntity for Enemy {
    const KIND: EntityKind = EntityKind::Enemy;

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn readiness(&self) -> &Readiness {
        &self.readiness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{RenderHandle, SpriteInfo};
    use proptest::prelude::*;

    fn ready_enemy(x: f32, y: f32) -> Enemy {
        let slot = EnemySlot {
            x,
            y,
            texture: "e.png".into(),
            boss: false,
        };
        let mut enemy = Enemy::new(EntityId(1), &slot, &Tuning::default());
        enemy.readiness = Readiness::Ready(SpriteInfo {
            handle: RenderHandle(1),
            size: Vec2::new(40.0, 40.0),
        });
        enemy
    }

    #[test]
    fn test_chases_inside_radius() {
        let mut enemy = ready_enemy(0.0, 0.0);
        let contact = enemy.pursue(Vec2::new(250.0, 0.0));
        assert!(!contact);
        assert_eq!(enemy.state, PursuitState::Chasing);
        assert!((enemy.pos.x - 1.85).abs() < 1e-5);
        assert!(enemy.pos.y.abs() < 1e-5);
    }

    #[test]
    fn test_idle_outside_radius() {
        let mut enemy = ready_enemy(0.0, 0.0);
        let contact = enemy.pursue(Vec2::new(350.0, 0.0));
        assert!(!contact);
        assert_eq!(enemy.state, PursuitState::Idle);
        assert_eq!(enemy.pos, Vec2::ZERO);
    }

    #[test]
    fn test_steps_along_heading() {
        let mut enemy = ready_enemy(0.0, 0.0);
        enemy.pursue(Vec2::new(120.0, 160.0));
        // 3-4-5 triangle
        assert!((enemy.pos.x - 1.85 * 0.6).abs() < 1e-5);
        assert!((enemy.pos.y - 1.85 * 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_contact_every_tick_in_range() {
        let mut enemy = ready_enemy(0.0, 0.0);
        for _ in 0..5 {
            assert!(enemy.pursue(Vec2::new(50.0, 0.0)));
        }
    }

    #[test]
    fn test_contact_boundary_is_inclusive() {
        let mut enemy = ready_enemy(0.0, 0.0);
        assert!(enemy.pursue(Vec2::new(100.0, 0.0)));
        let mut enemy = ready_enemy(0.0, 0.0);
        assert!(!enemy.pursue(Vec2::new(100.5, 0.0)));
    }

    #[test]
    fn test_not_ready_is_noop() {
        let slot = EnemySlot {
            x: 0.0,
            y: 0.0,
            texture: "e.png".into(),
            boss: false,
        };
        let mut enemy = Enemy::new(EntityId(1), &slot, &Tuning::default());
        assert!(!enemy.pursue(Vec2::new(10.0, 0.0)));
        assert_eq!(enemy.pos, Vec2::ZERO);
        assert_eq!(enemy.state, PursuitState::Idle);
    }

    #[test]
    fn test_invulnerability_overlay_expires() {
        let mut enemy = ready_enemy(0.0, 0.0);
        assert!(!enemy.is_invulnerable(0.0));
        enemy.start_invulnerability(1000.0);
        assert!(enemy.is_invulnerable(2999.0));
        assert!(!enemy.is_invulnerable(3000.0));
    }

    proptest! {
        #[test]
        fn prop_no_contact_beyond_radius(
            angle in 0.0f32..std::f32::consts::TAU,
            extra in 0.01f32..1000.0,
        ) {
            let mut enemy = ready_enemy(0.0, 0.0);
            let target = polar_to_cartesian(enemy.contact_radius + extra, angle);
            prop_assert!(!enemy.pursue(target));
        }

        #[test]
        fn prop_chasing_closes_distance(
            angle in 0.0f32..std::f32::consts::TAU,
            dist in 2.0f32..299.0,
        ) {
            let mut enemy = ready_enemy(0.0, 0.0);
            let target = polar_to_cartesian(dist, angle);
            enemy.pursue(target);
            prop_assert!(enemy.pos.distance(target) < dist);
        }
    }
}
