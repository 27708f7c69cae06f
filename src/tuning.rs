//! Game balance knobs
//!
//! Supplied by the host (JSON or code). Missing JSON fields fall back to the
//! defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Tunable game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Tile side in pixels
    pub tile_size: f32,

    // === Movement ===
    /// Player pixels per tick
    pub player_speed: f32,
    /// Adversary pixels per tick
    pub adversary_speed: f32,

    // === Proximity ===
    /// Pellet pickup half-width
    pub pellet_tolerance: f32,
    /// Bonus pickup half-width (slightly larger than pellets)
    pub bonus_tolerance: f32,
    /// Player/adversary contact half-width
    pub contact_tolerance: f32,

    // === Scoring ===
    pub pellet_reward: u64,
    pub bonus_reward: u64,
    pub adversary_reward: u64,

    // === Power ===
    /// Ticks of empowerment granted by a bonus
    pub power_duration: u32,

    // === Adversaries ===
    /// Probability per tick of re-rolling direction
    pub reroll_chance: f32,
    pub base_adversaries: u32,
    pub max_adversaries: u32,

    // === Session ===
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,

            player_speed: PLAYER_SPEED,
            adversary_speed: ADVERSARY_SPEED,

            pellet_tolerance: PELLET_TOLERANCE,
            bonus_tolerance: BONUS_TOLERANCE,
            contact_tolerance: CONTACT_TOLERANCE,

            pellet_reward: PELLET_REWARD,
            bonus_reward: BONUS_REWARD,
            adversary_reward: ADVERSARY_REWARD,

            power_duration: POWER_DURATION,

            reroll_chance: REROLL_CHANCE,
            base_adversaries: BASE_ADVERSARIES,
            max_adversaries: MAX_ADVERSARIES,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Decode from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.tile_size > 0.0) {
            return Err(invalid("tile_size must be positive"));
        }
        let non_negative = [
            ("player_speed", self.player_speed),
            ("adversary_speed", self.adversary_speed),
            ("pellet_tolerance", self.pellet_tolerance),
            ("bonus_tolerance", self.bonus_tolerance),
            ("contact_tolerance", self.contact_tolerance),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(invalid(format!("{name} must be non-negative")));
            }
        }
        if !(0.0..=1.0).contains(&self.reroll_chance) {
            return Err(invalid("reroll_chance must be within [0, 1]"));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives must be at least 1"));
        }
        if self.max_adversaries == 0 {
            return Err(invalid("max_adversaries must be at least 1"));
        }
        Ok(())
    }

    /// Adversaries spawned for a level: `min(base + level, max)`
    pub fn adversary_count(&self, level: u32) -> usize {
        self.base_adversaries
            .saturating_add(level)
            .min(self.max_adversaries) as usize
    }

    /// Width of a map with `cols` columns, in pixels
    #[inline]
    pub fn playfield_width(&self, cols: usize) -> f32 {
        cols as f32 * self.tile_size
    }
}

fn invalid(reason: impl Into<String>) -> GameError {
    GameError::InvalidTuning(reason.into())
}
