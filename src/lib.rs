//! Maze Muncher - a tile-grid maze chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, movement, pickups, adversaries, game state)
//! - `tuning`: Data-driven game balance
//! - `input`: Keyboard/touch/button adapters that produce a desired direction
//!
//! Rendering, audio and layout are left to the host. The host reads a
//! [`sim::Snapshot`] after every tick and drains [`sim::GameEvent`]s.

pub mod error;
pub mod input;
pub mod sim;
pub mod tuning;

pub use error::{GameError, TemplateError};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Side of one square tile, in pixels
    pub const TILE_SIZE: f32 = 20.0;

    /// Pixels per tick
    pub const PLAYER_SPEED: f32 = 2.0;
    pub const ADVERSARY_SPEED: f32 = 1.2;

    /// Proximity box half-widths (pixels)
    pub const PELLET_TOLERANCE: f32 = TILE_SIZE / 2.0;
    pub const BONUS_TOLERANCE: f32 = 12.0;
    pub const CONTACT_TOLERANCE: f32 = TILE_SIZE / 2.0;

    /// Score rewards
    pub const PELLET_REWARD: u64 = 10;
    pub const BONUS_REWARD: u64 = 50;
    pub const ADVERSARY_REWARD: u64 = 200;

    /// Empowerment length in ticks (~8 seconds at 60 Hz)
    pub const POWER_DURATION: u32 = 500;

    /// Chance per tick that an adversary picks a new direction
    pub const REROLL_CHANCE: f32 = 0.05;

    pub const STARTING_LIVES: u8 = 3;

    /// Adversary count is `min(BASE_ADVERSARIES + level, MAX_ADVERSARIES)`
    pub const BASE_ADVERSARIES: u32 = 3;
    pub const MAX_ADVERSARIES: u32 = 6;

    /// Shortest swipe (pixels) that counts as a direction gesture
    pub const SWIPE_MIN_DISTANCE: f32 = 24.0;
}

/// Axis-aligned proximity test: both axis distances under `tolerance`
#[inline]
pub fn within(a: glam::Vec2, b: glam::Vec2, tolerance: f32) -> bool {
    (a - b).abs().max_element() < tolerance
}
