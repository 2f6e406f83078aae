//! Per-frame simulation tick
//!
//! Order within a tick: inputs, player movement, enemy pursuit, projectile,
//! pickups. Entities are visited in registry order.

use glam::Vec2;

use super::entity::{Readiness, WorldEntity};
use super::inventory::InventoryItem;
use super::pickup::PickupKind;
use super::player::{DamageOutcome, Direction};
use super::projectile::ProjectileOutcome;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::FRAME_MS;
use crate::error::{LoadError, SimError};
use crate::host::{Host, LoadTicket, SoundCue, SpriteInfo};
use crate::level::LevelDef;

/// Discrete input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(Direction),
    Release(Direction),
    Fire,
}

/// Input for a single tick
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Frame-scale factor (1.0 at the nominal frame rate)
    pub delta: f32,
    /// Wall time covered by this tick, drives timed windows
    pub delta_ms: f32,
    /// Input events since the previous tick, in delivery order
    pub events: Vec<InputEvent>,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            delta: 1.0,
            delta_ms: FRAME_MS,
            events: Vec::new(),
        }
    }
}

impl TickInput {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Tear down whatever is on stage and lay out `level`.
///
/// Every entity starts out `Loading`; textures are requested from the host
/// and nothing takes part in the tick until its sprite arrives.
pub fn build_level<H: Host>(state: &mut GameState, level: &LevelDef, host: &mut H) {
    state.player.readiness.detach(host);
    if let Some(projectile) = state.player.projectile.as_mut() {
        projectile.discard(host);
    }
    let (enemies, pickups) = state.world.clear();
    for mut enemy in enemies {
        enemy.readiness.detach(host);
    }
    for mut pickup in pickups {
        pickup.readiness.detach(host);
    }

    let spawn = level
        .player_spawn
        .map(|(x, y)| Vec2::new(x, y))
        .unwrap_or_else(|| Vec2::new(host.screen_width() / 2.0, host.screen_height() / 2.0));
    state.player.reset(spawn, &state.tuning);
    host.request(LoadTicket::Player(state.player.generation()), &level.player_texture);

    for slot in &level.enemies {
        let id = state.world.spawn_enemy(slot, &state.tuning);
        host.request(LoadTicket::Enemy(id), &slot.texture);
    }
    for slot in &level.pickups {
        let id = state.world.spawn_pickup(slot);
        host.request(LoadTicket::Pickup(id), &slot.texture);
    }

    state.phase = GamePhase::Playing;
    state.level_name = Some(level.name.clone());
    log::info!(
        "Level '{}': {} enemies, {} pickups",
        level.name,
        level.enemies.len(),
        level.pickups.len()
    );
}

/// Deliver the outcome of a texture load requested earlier.
///
/// Success flips the entity to ready and puts its sprite on stage. Failure
/// leaves it permanently inert. Results for entities that are gone are
/// dropped.
pub fn complete_load<H: Host>(
    state: &mut GameState,
    ticket: LoadTicket,
    result: Result<SpriteInfo, LoadError>,
    host: &mut H,
) {
    let readiness: Option<&mut Readiness> = match ticket {
        LoadTicket::Projectile(shot) => return complete_projectile_load(state, shot, result, host),
        LoadTicket::Player(generation) if generation == state.player.generation() => {
            Some(&mut state.player.readiness)
        }
        LoadTicket::Player(_) => None,
        LoadTicket::Enemy(id) => state.world.enemy_mut(id).map(|e| &mut e.readiness),
        LoadTicket::Pickup(id) => state.world.pickup_mut(id).map(|p| &mut p.readiness),
    };

    let Some(readiness) = readiness else {
        log::debug!("Load for {ticket:?} arrived after the entity left the world");
        return;
    };

    match result {
        Ok(sprite) => {
            if !readiness.attach(sprite, host) {
                log::debug!("Ignoring repeated load for {ticket:?}");
            }
        }
        Err(err) => {
            readiness.fail();
            report_load_failure(state, ticket, err);
        }
    }
}

/// Deliver a batch of load results in order
pub fn complete_loads<H: Host>(
    state: &mut GameState,
    results: impl IntoIterator<Item = (LoadTicket, Result<SpriteInfo, LoadError>)>,
    host: &mut H,
) {
    for (ticket, result) in results {
        complete_load(state, ticket, result, host);
    }
}

fn complete_projectile_load<H: Host>(
    state: &mut GameState,
    shot: u32,
    result: Result<SpriteInfo, LoadError>,
    host: &mut H,
) {
    let from = state.player.pos;
    let facing = state.player.facing;
    let Some(projectile) = state.player.projectile_for_shot(shot) else {
        log::debug!("Projectile sprite for stale shot {shot} dropped");
        return;
    };

    match result {
        Ok(sprite) => {
            if projectile.launch(sprite, from, facing, host) {
                let event = GameEvent::Fired {
                    origin_x: projectile.origin_x,
                    speed: projectile.speed,
                };
                host.play(SoundCue::Shot);
                state.push_event(event);
            }
        }
        Err(err) => {
            projectile.fail();
            report_load_failure(state, LoadTicket::Projectile(shot), err);
        }
    }
}

fn report_load_failure(state: &mut GameState, ticket: LoadTicket, err: LoadError) {
    let reason = err.reason.clone();
    log::warn!("{ticket:?} stays inert: {}", SimError::from(err));
    state.push_event(GameEvent::LoadFailed { ticket, reason });
}

/// Advance the game state by one frame
pub fn tick<H: Host>(state: &mut GameState, input: &TickInput, host: &mut H) {
    if state.phase.is_terminal() {
        return;
    }

    state.clock_ms += f64::from(input.delta_ms);
    state.time_ticks += 1;
    let now = state.clock_ms;

    for event in &input.events {
        match *event {
            InputEvent::Press(direction) => state.player.press(direction),
            InputEvent::Release(direction) => state.player.release(direction),
            InputEvent::Fire => {
                if let Some(shot) = state.player.fire(&state.tuning) {
                    host.request(LoadTicket::Projectile(shot), &state.tuning.projectile_texture);
                }
            }
        }
    }

    state.player.refresh_invulnerability(now);

    if state.player.update(input.delta, host.screen_height()) {
        host.follow(state.player.pos.x);
    }

    update_enemies(state, now, host);
    if state.phase.is_terminal() {
        return;
    }

    update_projectile(state, host);
    if state.phase.is_terminal() {
        return;
    }

    update_pickups(state, host);
}

/// Pursuit for every enemy, then one damage attempt per enemy in contact.
///
/// The first successful hit opens the invulnerability window, so the rest of
/// the attempts in the same tick are ignored: at most one life per tick.
fn update_enemies<H: Host>(state: &mut GameState, now: f64, host: &mut H) {
    if !state.player.readiness.is_ready() {
        return;
    }
    let target = state.player.pos;

    let mut contacts = 0usize;
    for enemy in state.world.enemies_mut() {
        if enemy.pursue(target) {
            contacts += 1;
        }
    }

    for _ in 0..contacts {
        match state.player.take_damage(now) {
            DamageOutcome::Ignored => state.push_event(GameEvent::DamageIgnored),
            DamageOutcome::Hurt { lives } => {
                host.play(SoundCue::PlayerHurt);
                state.push_event(GameEvent::PlayerDamaged { lives });
            }
            DamageOutcome::Defeated => {
                state.push_event(GameEvent::PlayerDamaged { lives: 0 });
                enter_defeated(state, host);
                return;
            }
        }
    }
}

fn enter_defeated<H: Host>(state: &mut GameState, host: &mut H) {
    state.phase = GamePhase::Defeated;
    host.play(SoundCue::GameOver);
    host.game_over();
    state.push_event(GameEvent::GameOver);
    log::info!("Game over after {} ticks", state.time_ticks);
}

fn update_projectile<H: Host>(state: &mut GameState, host: &mut H) {
    let outcome = match state.player.projectile.as_mut() {
        Some(projectile) => projectile.update(&mut state.world, host),
        None => return,
    };

    match outcome {
        ProjectileOutcome::Inactive | ProjectileOutcome::Moved => {}
        ProjectileOutcome::Expired { traveled } => {
            state.push_event(GameEvent::ProjectileExpired { traveled });
        }
        ProjectileOutcome::Hit(enemy) => {
            host.play(SoundCue::EnemyHit);
            state.push_event(GameEvent::EnemyDestroyed {
                id: enemy.id,
                pos: enemy.pos,
                boss: enemy.boss,
            });
            if enemy.boss {
                log::info!("Boss {:?} defeated", enemy.id);
                state.phase = GamePhase::LevelCleared;
                state.push_event(GameEvent::BossDefeated);
            }
        }
    }
}

fn update_pickups<H: Host>(state: &mut GameState, host: &mut H) {
    let player_box = state.player.bounds();

    let mut collected = Vec::new();
    for pickup in state.world.pickups_mut() {
        if let Some(kind) = pickup.try_collect(player_box.as_ref()) {
            collected.push((pickup.id, kind));
        }
    }

    for (id, kind) in collected {
        if let Some(mut pickup) = state.world.remove_pickup(id) {
            pickup.readiness.detach(host);
        }
        host.play(SoundCue::Pickup);
        state.push_event(GameEvent::PickupCollected { id, kind });
        apply_pickup(state, kind);
    }
}

fn apply_pickup(state: &mut GameState, kind: PickupKind) {
    match kind {
        PickupKind::Blaster => {
            state.player.can_shoot = true;
            match state.player.inventory.add(InventoryItem::Blaster) {
                Some(slot) => state.push_event(GameEvent::InventoryChanged {
                    slot,
                    item: Some(InventoryItem::Blaster),
                }),
                None => log::warn!("Inventory full, blaster not shown"),
            }
        }
        PickupKind::Heart => {
            let lives = state.player.heal();
            state.push_event(GameEvent::PlayerHealed { lives });
        }
    }
}
