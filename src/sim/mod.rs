//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Injected, seedable RNG only
//! - Stable iteration order (adversaries by index)
//! - No rendering or platform dependencies

pub mod adversary;
pub mod collectibles;
pub mod entity;
pub mod grid;
pub mod movement;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use adversary::{Encounter, WanderDraw, resolve_encounter, reroll, wander};
pub use collectibles::{BonusPickup, check_bonus_collisions, check_pellet_collisions};
pub use entity::{Adversary, Body, Bonus, Direction, Pellet, Player};
pub use grid::{Cell, DEFAULT_TEMPLATE, GridMap, Template, Tile};
pub use movement::{Wrap, move_body, steer};
pub use snapshot::Snapshot;
pub use state::{GameEvent, GameState, Level, Session};
pub use tick::tick;
