use std::fmt::{self, Debug, Display};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{error::{Result, RulesError}, misc::TinyVec};

/// The pip values still available in a turn, in the order they were rolled.
///
/// A fresh roll holds two values, or four equal values for doubles. Values are
/// consumed one by one as moves are applied.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct DiceRoll {
    values: TinyVec<u8, 4>,
}

impl DiceRoll {
    pub fn empty() -> Self {
        DiceRoll { values: TinyVec::new() }
    }

    /// Expands two dice into a roll. Doubles give four uses of the same value.
    pub fn from_dice(die1: u8, die2: u8) -> Result<Self> {
        for die in [die1, die2] {
            check_die(die)?;
        }
        Ok(Self::pair(die1, die2))
    }

    /// Both values must already be in 1..=6.
    fn pair(die1: u8, die2: u8) -> Self {
        let values = if die1 == die2 {
            TinyVec::from_slice(&[die1; 4])
        } else {
            TinyVec::from_slice(&[die1, die2])
        };
        DiceRoll { values }
    }

    /// Builds a roll from explicit values, e.g. to script a turn.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        if values.is_empty() || values.len() > 4 {
            return Err(RulesError::InvalidRollSize(values.len()));
        }
        for &value in values {
            check_die(value)?;
        }
        Ok(DiceRoll { values: TinyVec::from_slice(values) })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, die: u8) -> bool {
        self.values.contains(&die)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.iter().copied()
    }

    /// Distinct remaining values, in first-rolled order.
    pub fn distinct(&self) -> Vec<u8> {
        let mut distinct = Vec::with_capacity(2);
        for die in self.iter() {
            if !distinct.contains(&die) {
                distinct.push(die);
            }
        }
        distinct
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Uses up one die of the given value. Returns false if none is left.
    pub fn consume(&mut self, die: u8) -> bool {
        self.values.remove(&die)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

fn check_die(die: u8) -> Result<u8> {
    if (1..=6).contains(&die) {
        Ok(die)
    } else {
        Err(RulesError::InvalidDieValue(die))
    }
}

impl Debug for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.iter().map(|d| d.to_string()).collect::<Vec<_>>();
        write!(f, "{}", values.join("/"))
    }
}

/// Rolls two dice per turn and remembers the last result.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: StdRng,
    last: DiceRoll,
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller {
    pub fn new() -> Self {
        DiceRoller { rng: StdRng::from_os_rng(), last: DiceRoll::empty() }
    }

    /// Deterministic roller, same seed gives the same sequence of rolls.
    pub fn seeded(seed: u64) -> Self {
        DiceRoller { rng: StdRng::seed_from_u64(seed), last: DiceRoll::empty() }
    }

    pub fn roll(&mut self) -> DiceRoll {
        let die1 = self.rng.random_range(1..=6);
        let die2 = self.rng.random_range(1..=6);
        self.last = DiceRoll::pair(die1, die2);
        self.last
    }

    pub fn last_roll(&self) -> DiceRoll {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice() {
        for i in 1..=6 {
            for j in 1..=6 {
                let roll = DiceRoll::from_dice(i, j).unwrap();
                if i == j {
                    assert_eq!(roll.to_vec(), vec![i; 4]);
                    assert_eq!(roll.distinct(), vec![i]);
                } else {
                    assert_eq!(roll.to_vec(), vec![i, j]);
                    assert_eq!(roll.distinct(), vec![i, j]);
                }
            }
        }
    }

    #[test]
    fn test_from_dice_validates() {
        assert_eq!(DiceRoll::from_dice(0, 3), Err(RulesError::InvalidDieValue(0)));
        assert_eq!(DiceRoll::from_dice(4, 9), Err(RulesError::InvalidDieValue(9)));
    }

    #[test]
    fn test_roll_is_never_empty() {
        let mut roller = DiceRoller::seeded(99);
        for _ in 0..200 {
            assert!(!roller.roll().is_empty());
        }
    }

    #[test]
    fn test_consume_double() {
        let mut roll = DiceRoll::from_dice(3, 3).unwrap();
        let mut count = 0;
        while roll.consume(3) {
            count += 1;
        }
        assert_eq!(count, 4);
        assert!(roll.is_empty());
        assert!(!roll.consume(3));
    }

    #[test]
    fn test_from_values_validates() {
        assert_eq!(DiceRoll::from_values(&[0]), Err(RulesError::InvalidDieValue(0)));
        assert_eq!(DiceRoll::from_values(&[2, 7]), Err(RulesError::InvalidDieValue(7)));
        assert_eq!(DiceRoll::from_values(&[]), Err(RulesError::InvalidRollSize(0)));
        assert_eq!(DiceRoll::from_values(&[1; 5]), Err(RulesError::InvalidRollSize(5)));
        assert_eq!(DiceRoll::from_values(&[5]).unwrap().to_vec(), vec![5]);
    }

    #[test]
    fn test_dice_roll() {
        let mut roller = DiceRoller::seeded(7);
        for _ in 1..=100 {
            let roll = roller.roll();
            assert_eq!(roller.last_roll(), roll);
            assert!(roll.iter().all(|d| (1..=6).contains(&d)));
            match roll.len() {
                2 => assert_ne!(roll.to_vec()[0], roll.to_vec()[1]),
                4 => assert_eq!(roll.distinct().len(), 1),
                n => panic!("unexpected roll size {n}"),
            }
        }
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let mut a = DiceRoller::seeded(42);
        let mut b = DiceRoller::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
        }
    }
}
