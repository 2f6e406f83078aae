//! Entity simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one `tick` per rendered frame
//! - Entities are inert until their sprite has loaded
//! - Registry order is the collision tie-break order
//! - No rendering, audio or platform dependencies (see `crate::host`)

pub mod bounds;
pub mod enemy;
pub mod entity;
pub mod inventory;
pub mod movement;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod world;

pub use bounds::{Aabb, overlaps};
pub use enemy::{Enemy, PursuitState};
pub use entity::{EntityId, EntityKind, Readiness, WorldEntity};
pub use inventory::{Inventory, InventoryItem};
pub use movement::MovementModel;
pub use pickup::{Pickup, PickupKind};
pub use player::{DamageOutcome, Direction, Facing, Player};
pub use projectile::{Projectile, ProjectileOutcome, ProjectileState};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{InputEvent, TickInput, build_level, complete_load, complete_loads, tick};
pub use world::WorldRegistry;
