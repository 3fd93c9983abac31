use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::Tab;
use crate::widgets::{ChangeType, CycleHoliday, DoubleHalf, StartAttempt, TwoDice};

pub struct App {
    pub tab: Tab,
    pub double_half: DoubleHalf,
    pub cycle_holiday: CycleHoliday,
    pub change_type: ChangeType,
    pub start_attempt: StartAttempt,
    pub two_dice: TwoDice,
    rng: StdRng,
}

impl App {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Gallery whose dice follow a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            tab: Tab::DoubleHalf,
            double_half: DoubleHalf::new(),
            cycle_holiday: CycleHoliday::new(),
            change_type: ChangeType::new(),
            start_attempt: StartAttempt::new(),
            two_dice: TwoDice::new(),
            rng,
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    pub fn roll_left(&mut self) {
        self.two_dice.roll_left(&mut self.rng);
    }

    pub fn roll_right(&mut self) {
        self.two_dice.roll_right(&mut self.rng);
    }

    /// Puts every widget back in its starting state, keeping the selected tab.
    pub fn reset(&mut self) {
        self.double_half = DoubleHalf::new();
        self.cycle_holiday = CycleHoliday::new();
        self.change_type = ChangeType::new();
        self.start_attempt = StartAttempt::new();
        self.two_dice = TwoDice::new();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_cycle() {
        let mut app = App::with_seed(1);
        assert_eq!(app.tab, Tab::DoubleHalf);
        app.previous_tab();
        assert_eq!(app.tab, Tab::TwoDice);
        app.next_tab();
        app.next_tab();
        assert_eq!(app.tab, Tab::CycleHoliday);
    }

    #[test]
    fn test_reset_keeps_tab() {
        let mut app = App::with_seed(1);
        app.next_tab();
        app.double_half.double();
        app.start_attempt.start();
        app.roll_left();
        app.reset();
        assert_eq!(app.tab, Tab::CycleHoliday);
        assert_eq!(app.double_half.value(), 10.0);
        assert_eq!(app.start_attempt, StartAttempt::new());
        assert_eq!(app.two_dice, TwoDice::new());
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut first = App::with_seed(99);
        let mut second = App::with_seed(99);
        for _ in 0..10 {
            first.roll_left();
            first.roll_right();
            second.roll_left();
            second.roll_right();
        }
        assert_eq!(first.two_dice, second.two_dice);
    }
}
