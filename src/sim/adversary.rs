//! Adversary wandering policy and player contact
//!
//! Adversaries never look at the player. Each tick every adversary rolls the
//! dice once: on a hit it takes a uniformly random cardinal heading. A heading
//! into a wall simply stalls the adversary until a later roll frees it.

use rand::Rng;

use super::entity::{Adversary, Direction, Player};
use crate::within;

/// One tick's worth of randomness for one adversary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderDraw {
    /// Uniform in [0, 1)
    pub roll: f32,
    /// Index into [`Direction::CARDINAL`]
    pub choice: usize,
}

impl WanderDraw {
    /// Always draws both values so the stream advances identically every tick
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f32 = rng.random();
        let choice = rng.random_range(0..Direction::CARDINAL.len());
        Self { roll, choice }
    }
}

/// Pure re-roll rule: new heading when `roll < chance`, else keep `current`
pub fn reroll(current: Direction, draw: WanderDraw, chance: f32) -> Direction {
    if draw.roll < chance {
        Direction::CARDINAL
            .get(draw.choice)
            .copied()
            .unwrap_or(current)
    } else {
        current
    }
}

/// Apply the wandering policy to one adversary
pub fn wander<R: Rng + ?Sized>(adversary: &mut Adversary, rng: &mut R, chance: f32) {
    let draw = WanderDraw::sample(rng);
    adversary.body.dir = reroll(adversary.body.dir, draw, chance);
}

/// Outcome of a player/adversary contact check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    /// Not touching
    Clear,
    /// Empowered player ate the adversary; it has been sent back to spawn
    Consumed,
    /// Vulnerable player was caught
    Caught,
}

/// Resolve contact between the player and one adversary
pub fn resolve_encounter(player: &Player, adversary: &mut Adversary, tolerance: f32) -> Encounter {
    if !within(player.body.pos, adversary.body.pos, tolerance) {
        return Encounter::Clear;
    }

    if player.is_empowered() {
        adversary.respawn();
        Encounter::Consumed
    } else {
        Encounter::Caught
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use glam::Vec2;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Emits the same word forever
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct ConstRng(pub u32);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.0) << 32 | u64::from(self.0)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(4) {
                let bytes = self.0.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    /// Plays back a fixed list of words, then `u32::MAX` forever, counting
    /// every word handed out
    #[derive(Debug, Clone, Default)]
    pub(crate) struct SeqRng {
        pub words: Vec<u32>,
        pub drawn: usize,
    }

    impl SeqRng {
        pub(crate) fn new(words: &[u32]) -> Self {
            Self {
                words: words.to_vec(),
                drawn: 0,
            }
        }
    }

    impl RngCore for SeqRng {
        fn next_u32(&mut self) -> u32 {
            let word = self.words.get(self.drawn).copied().unwrap_or(u32::MAX);
            self.drawn += 1;
            word
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32()) << 32 | u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn test_sample_draws_roll_then_choice() {
        // Top two bits pick the heading: 0b10 is index 2
        let mut rng = SeqRng::new(&[0, 0x8000_0000]);
        let draw = WanderDraw::sample(&mut rng);
        assert_eq!(draw.roll, 0.0);
        assert_eq!(draw.choice, 2);
        assert_eq!(rng.drawn, 2);
    }

    #[test]
    fn test_reroll_rule() {
        let hit = WanderDraw {
            roll: 0.01,
            choice: 2,
        };
        let miss = WanderDraw {
            roll: 0.05,
            choice: 2,
        };
        assert_eq!(reroll(Direction::Up, hit, 0.05), Direction::Down);
        assert_eq!(reroll(Direction::Up, miss, 0.05), Direction::Up);
        assert_eq!(reroll(Direction::None, hit, 0.0), Direction::None);
        assert_eq!(reroll(Direction::Left, miss, 1.0), Direction::Down);
    }

    #[test]
    fn test_every_choice_maps_to_a_cardinal() {
        for choice in 0..4 {
            let draw = WanderDraw { roll: 0.0, choice };
            assert_eq!(reroll(Direction::None, draw, 0.05), Direction::CARDINAL[choice]);
        }
    }

    #[test]
    fn test_sample_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let draw = WanderDraw::sample(&mut rng);
            assert!((0.0..1.0).contains(&draw.roll));
            assert!(draw.choice < 4);
        }
    }

    #[test]
    fn test_wander_with_injected_rng() {
        let mut adversary = Adversary::spawn(Vec2::ZERO);

        // All-zero bits: roll 0.0 always re-rolls, choice 0 is Right
        wander(&mut adversary, &mut ConstRng(0), 0.05);
        assert_eq!(adversary.body.dir, Direction::Right);

        // All-one bits: roll just under 1.0 never re-rolls
        adversary.body.dir = Direction::Up;
        for _ in 0..50 {
            wander(&mut adversary, &mut ConstRng(u32::MAX), 0.05);
        }
        assert_eq!(adversary.body.dir, Direction::Up);
    }

    #[test]
    fn test_seeded_wander_is_reproducible() {
        let mut a = Adversary::spawn(Vec2::ZERO);
        let mut b = Adversary::spawn(Vec2::ZERO);
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        for _ in 0..500 {
            wander(&mut a, &mut rng_a, 0.05);
            wander(&mut b, &mut rng_b, 0.05);
            assert_eq!(a.body.dir, b.body.dir);
        }
    }

    #[test]
    fn test_encounter_outcomes() {
        let mut player = Player::spawn(Vec2::new(100.0, 100.0));
        let mut adversary = Adversary::spawn(Vec2::new(20.0, 20.0));
        adversary.body.dir = Direction::Left;

        adversary.body.pos = Vec2::new(130.0, 100.0);
        assert_eq!(resolve_encounter(&player, &mut adversary, 10.0), Encounter::Clear);

        adversary.body.pos = Vec2::new(105.0, 96.0);
        assert_eq!(resolve_encounter(&player, &mut adversary, 10.0), Encounter::Caught);
        assert_eq!(adversary.body.pos, Vec2::new(105.0, 96.0));

        player.power_ticks = 1;
        assert_eq!(resolve_encounter(&player, &mut adversary, 10.0), Encounter::Consumed);
        assert_eq!(adversary.body.pos, Vec2::new(20.0, 20.0));
        assert_eq!(adversary.body.dir, Direction::Left);
    }
}
