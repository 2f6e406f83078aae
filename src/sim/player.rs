//! Player state machine
//!
//! Owns movement, the health/invulnerability cycle, the shooting unlock and
//! the single live projectile.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, Readiness, WorldEntity};
use super::inventory::Inventory;
use super::movement::MovementModel;
use super::projectile::Projectile;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Result of a damage event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invulnerable or already defeated
    Ignored,
    /// Lost a life, invulnerability window started
    Hurt { lives: u8 },
    /// Lost the last life
    Defeated,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub can_shoot: bool,
    pub inventory: Inventory,
    pub readiness: Readiness,
    /// At most one, replaced only by a new shot
    pub projectile: Option<Projectile>,
    lives: u8,
    max_lives: u8,
    invulnerable: bool,
    invulnerable_until: f64,
    invulnerability_ms: f64,
    speed: f32,
    movement: MovementModel,
    shots: u32,
    generation: u32,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            facing: Facing::Right,
            can_shoot: false,
            inventory: Inventory::new(tuning.inventory_size),
            readiness: Readiness::Loading,
            projectile: None,
            lives: tuning.max_lives,
            max_lives: tuning.max_lives,
            invulnerable: false,
            invulnerable_until: 0.0,
            invulnerability_ms: tuning.invulnerability_window(),
            speed: tuning.player_speed,
            movement: MovementModel::from_tuning(tuning),
            shots: 0,
            generation: 0,
        }
    }

    /// Fresh player for a new level. The shot counter carries over and the
    /// generation moves on, so loads still in flight for the previous level's
    /// sprite or projectile can never match the new ones.
    pub fn reset(&mut self, spawn: Vec2, tuning: &Tuning) {
        let shots = self.shots;
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(spawn, tuning);
        self.shots = shots;
        self.generation = generation;
    }

    /// Bumped on every reset; tags the player's sprite load
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn is_defeated(&self) -> bool {
        self.lives == 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    /// Directional key pressed
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.vel.y = -self.speed,
            Direction::Down => self.vel.y = self.speed,
            Direction::Left => {
                self.vel.x = -self.speed;
                self.facing = Facing::Left;
            }
            Direction::Right => {
                self.vel.x = self.speed;
                self.facing = Facing::Right;
            }
        }
    }

    /// Directional key released
    pub fn release(&mut self, direction: Direction) {
        match direction {
            Direction::Up | Direction::Down => self.vel.y = 0.0,
            Direction::Left | Direction::Right => self.vel.x = 0.0,
        }
    }

    /// Start a new shot if allowed.
    ///
    /// Returns the shot number to load a sprite for, or `None` when shooting
    /// is locked or the previous projectile is still live (loading or flying).
    pub fn fire(&mut self, tuning: &Tuning) -> Option<u32> {
        if !self.can_shoot {
            log::debug!("Fire ignored: shooting not unlocked");
            return None;
        }
        if self.projectile.as_ref().is_some_and(|p| !p.is_finished()) {
            return None;
        }
        self.shots += 1;
        self.projectile = Some(Projectile::new(self.shots, tuning));
        Some(self.shots)
    }

    /// The live projectile matching a load ticket
    pub fn projectile_for_shot(&mut self, shot: u32) -> Option<&mut Projectile> {
        self.projectile.as_mut().filter(|p| p.shot == shot)
    }

    /// Close the invulnerability window once it has run out
    pub fn refresh_invulnerability(&mut self, now_ms: f64) {
        if self.invulnerable && now_ms >= self.invulnerable_until {
            self.invulnerable = false;
            log::debug!("Invulnerability ended at {now_ms:.0}ms");
        }
    }

    pub fn take_damage(&mut self, now_ms: f64) -> DamageOutcome {
        self.refresh_invulnerability(now_ms);
        if self.invulnerable || self.is_defeated() {
            return DamageOutcome::Ignored;
        }

        self.lives -= 1;
        if self.lives == 0 {
            log::info!("Player defeated");
            return DamageOutcome::Defeated;
        }

        self.invulnerable = true;
        self.invulnerable_until = now_ms + self.invulnerability_ms;
        log::debug!("Player hit, {} lives left", self.lives);
        DamageOutcome::Hurt { lives: self.lives }
    }

    /// Restore one life, capped at the maximum. Returns the new count.
    pub fn heal(&mut self) -> u8 {
        if !self.is_defeated() {
            self.lives = self.lives.saturating_add(1).min(self.max_lives);
        }
        self.lives
    }

    /// Advance movement by one tick; a no-op until the sprite is ready.
    /// The floor keeps the sprite's bottom edge on screen.
    pub fn update(&mut self, delta: f32, screen_height: f32) -> bool {
        let half_height = match self.require_ready() {
            Ok(sprite) => sprite.size.y / 2.0,
            Err(e) => {
                log::trace!("Player update skipped: {e}");
                return false;
            }
        };
        let floor = screen_height - half_height;
        self.movement.step(&mut self.pos, &mut self.vel, delta, floor);
        true
    }
}

impl WorldEntity for Player {
    const KIND: EntityKind = EntityKind::Player;

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn readiness(&self) -> &Readiness {
        &self.readiness
    }
}
