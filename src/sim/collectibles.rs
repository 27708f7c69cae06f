//! Pellet and bonus pickup
//!
//! Pickup uses a proximity box around the item rather than exact overlap, so
//! the player collects anything it passes within half a tile of.

use super::entity::{Bonus, Pellet, Player};
use crate::tuning::Tuning;
use crate::within;

/// Result of a bonus sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BonusPickup {
    pub score: u64,
    /// Number of bonuses taken this sweep
    pub taken: u32,
}

impl BonusPickup {
    #[inline]
    pub fn power_granted(&self) -> bool {
        self.taken > 0
    }
}

/// Eat every pellet within reach of the player. Returns the score gained.
pub fn check_pellet_collisions(player: &Player, pellets: &mut [Pellet], tuning: &Tuning) -> u64 {
    let mut score = 0;
    for pellet in pellets.iter_mut().filter(|p| !p.eaten) {
        if within(player.body.pos, pellet.pos, tuning.pellet_tolerance) {
            pellet.eaten = true;
            score += tuning.pellet_reward;
        }
    }
    score
}

/// Take every bonus within reach. Each one refills the power timer to the
/// full duration; timers never stack past it.
pub fn check_bonus_collisions(player: &mut Player, bonuses: &mut [Bonus], tuning: &Tuning) -> BonusPickup {
    let mut pickup = BonusPickup::default();
    for bonus in bonuses.iter_mut().filter(|b| !b.taken) {
        if within(player.body.pos, bonus.pos, tuning.bonus_tolerance) {
            bonus.taken = true;
            player.power_ticks = tuning.power_duration;
            pickup.score += tuning.bonus_reward;
            pickup.taken += 1;
        }
    }
    pickup
}
