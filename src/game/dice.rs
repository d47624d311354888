use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the uniform draws the update engine needs.
pub trait Dice {
    /// A uniform draw from `0..sides`. Rolling zero sides yields 0.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Adapts any `rand` generator.
pub struct RandomDice<R>(R);

impl<R: Rng> RandomDice<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RandomDice<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomDice<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.0.gen_range(0..sides)
    }
}

/// Replays a fixed list of draws, then keeps rolling 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self.script.pop_front().unwrap_or(0);
        // Keep replays inside the requested range.
        if sides == 0 {
            0
        } else {
            value.min(sides - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_dice_stays_in_range() {
        let mut dice = RandomDice::seeded(7);
        for _ in 0..1000 {
            assert!(dice.roll(100) < 100);
        }
    }

    #[test]
    fn zero_sides_rolls_zero() {
        let mut dice = RandomDice::seeded(7);
        assert_eq!(dice.roll(0), 0);
        let mut scripted = ScriptedDice::new([42]);
        assert_eq!(scripted.roll(0), 0);
    }

    #[test]
    fn seeded_dice_repeat() {
        let mut a = RandomDice::seeded(99);
        let mut b = RandomDice::seeded(99);
        let left: Vec<u32> = (0..32).map(|_| a.roll(100)).collect();
        let right: Vec<u32> = (0..32).map(|_| b.roll(100)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn scripted_dice_replays_then_rolls_zero() {
        let mut dice = ScriptedDice::new([95, 12]);
        assert_eq!(dice.roll(100), 95);
        assert_eq!(dice.roll(100), 12);
        assert_eq!(dice.remaining(), 0);
        assert_eq!(dice.roll(100), 0);
    }

    #[test]
    fn scripted_dice_clamps_to_sides() {
        let mut dice = ScriptedDice::new([500]);
        assert_eq!(dice.roll(20), 19);
    }
}
