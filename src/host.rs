//! Collaborator contracts
//!
//! The simulation never talks to a renderer, asset pipeline, audio device or
//! screen router directly. A host implements these traits and is handed to
//! every entry point that needs it.

use std::collections::{HashMap, VecDeque};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::sim::EntityId;

/// Opaque handle to a sprite in the host's render tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderHandle(pub u64);

/// A loaded sprite: its handle plus the texture size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInfo {
    pub handle: RenderHandle,
    pub size: Vec2,
}

/// Render tree and viewport
pub trait RenderHost {
    fn add_entity(&mut self, handle: RenderHandle);
    fn remove_entity(&mut self, handle: RenderHandle);
    fn screen_width(&self) -> f32;
    fn screen_height(&self) -> f32;
    /// Re-centre the camera horizontally on `x`
    fn follow(&mut self, x: f32);
}

/// Which entity a pending texture load belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadTicket {
    /// Player generation the sprite was requested for
    Player(u32),
    Enemy(EntityId),
    Pickup(EntityId),
    /// Shot number of the player's projectile
    Projectile(u32),
}

/// Asynchronous asset loading.
///
/// `request` must not block. The host delivers the outcome later through
/// [`crate::sim::complete_load`].
pub trait ResourceLoader {
    fn request(&mut self, ticket: LoadTicket, path: &str);
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Projectile leaves the player
    Shot,
    /// Projectile destroys an enemy
    EnemyHit,
    /// Pickup collected
    Pickup,
    /// Player loses a life
    PlayerHurt,
    /// Last life lost
    GameOver,
}

/// Fire-and-forget audio
pub trait AudioCue {
    fn play(&mut self, cue: SoundCue);
}

/// Screen routing
pub trait Navigation {
    /// Invoked once when the player is defeated
    fn game_over(&mut self);
}

/// Everything the simulation needs from its surroundings
pub trait Host: RenderHost + ResourceLoader + AudioCue + Navigation {}

impl<T: RenderHost + ResourceLoader + AudioCue + Navigation> Host for T {}

/// In-memory host that records every call.
///
/// Loads are queued and only resolved when [`HeadlessHost::resolve_loads`]
/// runs, so callers see the same "sprite arrives later" ordering a real
/// asset pipeline produces.
#[derive(Debug)]
pub struct HeadlessHost {
    width: f32,
    height: f32,
    stage: Vec<RenderHandle>,
    camera_x: f32,
    pending: VecDeque<(LoadTicket, String)>,
    assets: HashMap<String, Vec2>,
    cues: Vec<SoundCue>,
    game_over_calls: u32,
    next_handle: u64,
}

impl HeadlessHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            stage: Vec::new(),
            camera_x: width / 2.0,
            pending: VecDeque::new(),
            assets: HashMap::new(),
            cues: Vec::new(),
            game_over_calls: 0,
            next_handle: 1,
        }
    }

    /// Register a texture the loader can serve; unknown paths fail to load
    pub fn with_asset(mut self, path: impl Into<String>, size: Vec2) -> Self {
        self.assets.insert(path.into(), size);
        self
    }

    /// Resolve every queued request in the order it was made
    pub fn resolve_loads(&mut self) -> Vec<(LoadTicket, Result<SpriteInfo, LoadError>)> {
        let mut resolved = Vec::with_capacity(self.pending.len());
        while let Some((ticket, path)) = self.pending.pop_front() {
            let result = match self.assets.get(&path) {
                Some(&size) => {
                    let handle = RenderHandle(self.next_handle);
                    self.next_handle += 1;
                    Ok(SpriteInfo { handle, size })
                }
                None => Err(LoadError::new(path, "asset not found")),
            };
            resolved.push((ticket, result));
        }
        resolved
    }

    pub fn pending_loads(&self) -> usize {
        self.pending.len()
    }

    pub fn stage(&self) -> &[RenderHandle] {
        &self.stage
    }

    pub fn is_on_stage(&self, handle: RenderHandle) -> bool {
        self.stage.contains(&handle)
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }

    pub fn game_over_calls(&self) -> u32 {
        self.game_over_calls
    }
}

impl RenderHost for HeadlessHost {
    fn add_entity(&mut self, handle: RenderHandle) {
        if !self.stage.contains(&handle) {
            self.stage.push(handle);
        }
    }

    fn remove_entity(&mut self, handle: RenderHandle) {
        self.stage.retain(|&h| h != handle);
    }

    fn screen_width(&self) -> f32 {
        self.width
    }

    fn screen_height(&self) -> f32 {
        self.height
    }

    fn follow(&mut self, x: f32) {
        self.camera_x = x;
    }
}

impl ResourceLoader for HeadlessHost {
    fn request(&mut self, ticket: LoadTicket, path: &str) {
        self.pending.push_back((ticket, path.to_string()));
    }
}

impl AudioCue for HeadlessHost {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

impl Navigation for HeadlessHost {
    fn game_over(&mut self) {
        self.game_over_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_resolve_in_request_order() {
        let mut host =
            HeadlessHost::new(800.0, 600.0).with_asset("bunny.png", Vec2::new(26.0, 37.0));
        host.request(LoadTicket::Player(1), "bunny.png");
        host.request(LoadTicket::Enemy(EntityId(1)), "missing.png");
        assert_eq!(host.pending_loads(), 2);

        let resolved = host.resolve_loads();
        assert_eq!(host.pending_loads(), 0);
        assert_eq!(resolved[0].0, LoadTicket::Player(1));
        let sprite = resolved[0].1.as_ref().unwrap();
        assert_eq!(sprite.size, Vec2::new(26.0, 37.0));
        assert_eq!(resolved[1].0, LoadTicket::Enemy(EntityId(1)));
        assert!(resolved[1].1.is_err());
    }

    #[test]
    fn test_stage_add_remove() {
        let mut host = HeadlessHost::new(800.0, 600.0);
        host.add_entity(RenderHandle(3));
        host.add_entity(RenderHandle(3));
        assert_eq!(host.stage().len(), 1);
        host.remove_entity(RenderHandle(3));
        assert!(host.stage().is_empty());
    }
}
