use rand::Rng;

/// Rolls a six-sided die.
pub fn d6<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceOutcome {
    /// Snake eyes.
    Lose,
    /// Matching dice other than two ones.
    Win,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoDice {
    left: u8,
    right: u8,
}

impl TwoDice {
    pub fn new() -> Self {
        Self { left: 1, right: 2 }
    }

    pub fn left(&self) -> u8 {
        self.left
    }

    pub fn right(&self) -> u8 {
        self.right
    }

    pub fn roll_left<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.left = d6(rng);
    }

    pub fn roll_right<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.right = d6(rng);
    }

    pub fn outcome(&self) -> DiceOutcome {
        match (self.left, self.right) {
            (1, 1) => DiceOutcome::Lose,
            (left, right) if left == right => DiceOutcome::Win,
            _ => DiceOutcome::Pending,
        }
    }
}

impl Default for TwoDice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_initial_dice_differ() {
        let dice = TwoDice::new();
        assert_eq!((dice.left(), dice.right()), (1, 2));
        assert_eq!(dice.outcome(), DiceOutcome::Pending);
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dice = TwoDice::new();
        for _ in 0..200 {
            dice.roll_left(&mut rng);
            dice.roll_right(&mut rng);
            assert!((1..=6).contains(&dice.left()));
            assert!((1..=6).contains(&dice.right()));
        }
    }

    #[test]
    fn test_rolling_eventually_matches() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut dice = TwoDice::new();
        let mut rolls = 0;
        while dice.outcome() == DiceOutcome::Pending && rolls < 1000 {
            dice.roll_left(&mut rng);
            rolls += 1;
        }
        assert_ne!(dice.outcome(), DiceOutcome::Pending);
        assert_eq!(dice.left(), dice.right());
    }

    #[test]
    fn test_outcome_rules() {
        let snake_eyes = TwoDice { left: 1, right: 1 };
        assert_eq!(snake_eyes.outcome(), DiceOutcome::Lose);
        let pair = TwoDice { left: 4, right: 4 };
        assert_eq!(pair.outcome(), DiceOutcome::Win);
        let mixed = TwoDice { left: 6, right: 3 };
        assert_eq!(mixed.outcome(), DiceOutcome::Pending);
    }
}
