//! The player's in-flight shot
//!
//! `Unfired -> Flying -> Destroyed` (or `Unfired -> Failed` when the texture
//! never arrives). Both end states are terminal: firing again builds a new
//! projectile.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::overlaps;
use super::enemy::Enemy;
use super::entity::{EntityKind, Readiness, WorldEntity};
use super::player::Facing;
use super::world::WorldRegistry;
use crate::host::{RenderHost, SpriteInfo};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileState {
    /// Waiting for the sprite to load
    Unfired,
    Flying,
    Destroyed,
    /// Sprite failed to load; never flew
    Failed,
}

/// What happened to a projectile on one tick
#[derive(Debug)]
pub enum ProjectileOutcome {
    /// Not flying (still loading or already finished)
    Inactive,
    Moved,
    /// Traveled past its range
    Expired { traveled: f32 },
    /// Struck an enemy, which is now out of the registry and off stage
    Hit(Enemy),
}

#[derive(Debug, Clone)]
pub struct Projectile {
    /// Shot number, matches the load ticket
    pub shot: u32,
    pub origin_x: f32,
    pub pos: Vec2,
    /// Signed per-tick speed; sign is the facing at launch
    pub speed: f32,
    pub max_distance: f32,
    pub scale: f32,
    state: ProjectileState,
    readiness: Readiness,
}

impl Projectile {
    pub fn new(shot: u32, tuning: &Tuning) -> Self {
        Self {
            shot,
            origin_x: 0.0,
            pos: Vec2::ZERO,
            speed: tuning.projectile_speed.abs(),
            max_distance: tuning.projectile_max_distance,
            scale: tuning.projectile_scale,
            state: ProjectileState::Unfired,
            readiness: Readiness::Loading,
        }
    }

    pub fn state(&self) -> ProjectileState {
        self.state
    }

    pub fn is_flying(&self) -> bool {
        self.state == ProjectileState::Flying
    }

    /// Destroyed or failed; the owner may fire again
    pub fn is_finished(&self) -> bool {
        matches!(self.state, ProjectileState::Destroyed | ProjectileState::Failed)
    }

    /// Distance covered since launch
    pub fn traveled(&self) -> f32 {
        (self.pos.x - self.origin_x).abs()
    }

    /// Sprite arrived: capture the origin, pick a direction and start flying
    pub fn launch(
        &mut self,
        sprite: SpriteInfo,
        from: Vec2,
        facing: Facing,
        render: &mut impl RenderHost,
    ) -> bool {
        if self.state != ProjectileState::Unfired || !self.readiness.attach(sprite, render) {
            return false;
        }
        self.origin_x = from.x;
        self.pos = from;
        self.speed = match facing {
            Facing::Left => -self.speed.abs(),
            Facing::Right => self.speed.abs(),
        };
        self.state = ProjectileState::Flying;
        true
    }

    /// Texture failed to load; the projectile stays inert
    pub fn fail(&mut self) {
        if self.state == ProjectileState::Unfired {
            self.readiness.fail();
            self.state = ProjectileState::Failed;
        }
    }

    /// Move, check range, then check enemies in registry order.
    ///
    /// At most one enemy is removed per tick (first match wins). The struck
    /// enemy leaves both the registry and the stage before this returns.
    pub fn update(
        &mut self,
        world: &mut WorldRegistry,
        render: &mut impl RenderHost,
    ) -> ProjectileOutcome {
        if !self.is_flying() {
            return ProjectileOutcome::Inactive;
        }

        self.pos.x += self.speed;

        let traveled = self.traveled();
        if traveled >= self.max_distance {
            self.destroy(render);
            return ProjectileOutcome::Expired { traveled };
        }

        let own = self.bounds();
        let hit = world
            .enemies()
            .iter()
            .find(|enemy| overlaps(own.as_ref(), enemy.bounds().as_ref()))
            .map(|enemy| enemy.id);

        let Some(id) = hit else {
            return ProjectileOutcome::Moved;
        };

        self.destroy(render);
        match world.remove_enemy(id) {
            Some(mut enemy) => {
                enemy.readiness.detach(render);
                ProjectileOutcome::Hit(enemy)
            }
            None => ProjectileOutcome::Moved,
        }
    }

    /// Drop the projectile whatever its state (level teardown)
    pub fn discard(&mut self, render: &mut impl RenderHost) {
        self.destroy(render);
        self.fail();
    }

    /// Take the sprite off stage; safe to call more than once
    fn destroy(&mut self, render: &mut impl RenderHost) {
        if self.state == ProjectileState::Flying {
            self.readiness.detach(render);
            self.state = ProjectileState::Destroyed;
        }
    }
}

impl WorldEntity for Projectile {
    const KIND: EntityKind = EntityKind::Projectile;

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn readiness(&self) -> &Readiness {
        &self.readiness
    }

    fn sprite_size(&self) -> Option<Vec2> {
        self.readiness.sprite().map(|s| s.size * self.scale)
    }
}
