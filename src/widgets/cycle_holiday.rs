/// Holidays the cycle widget moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    WorldParrotDay,
    CheeseDay,
    BestFriendDay,
    GoFishingDay,
    DogDay,
}

impl Holiday {
    pub fn name(self) -> &'static str {
        match self {
            Holiday::WorldParrotDay => "World Parrot Day",
            Holiday::CheeseDay => "Cheese Day",
            Holiday::BestFriendDay => "Best Friend Day",
            Holiday::GoFishingDay => "Go Fishing Day",
            Holiday::DogDay => "Dog Day",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Holiday::WorldParrotDay => "🦜",
            Holiday::CheeseDay => "🧀",
            Holiday::BestFriendDay => "🧑",
            Holiday::GoFishingDay => "🐟",
            Holiday::DogDay => "🐶",
        }
    }

    /// Next holiday in alphabetical order of name, wrapping around.
    pub fn next_alphabetically(self) -> Self {
        match self {
            Holiday::BestFriendDay => Holiday::CheeseDay,
            Holiday::CheeseDay => Holiday::DogDay,
            Holiday::DogDay => Holiday::GoFishingDay,
            Holiday::GoFishingDay => Holiday::WorldParrotDay,
            Holiday::WorldParrotDay => Holiday::BestFriendDay,
        }
    }

    /// Next holiday in calendar order, wrapping into the next year.
    pub fn next_in_year(self) -> Self {
        match self {
            Holiday::WorldParrotDay => Holiday::CheeseDay,
            Holiday::CheeseDay => Holiday::BestFriendDay,
            Holiday::BestFriendDay => Holiday::GoFishingDay,
            Holiday::GoFishingDay => Holiday::DogDay,
            Holiday::DogDay => Holiday::WorldParrotDay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleHoliday {
    holiday: Holiday,
}

impl CycleHoliday {
    pub fn new() -> Self {
        Self {
            holiday: Holiday::BestFriendDay,
        }
    }

    pub fn holiday(&self) -> Holiday {
        self.holiday
    }

    pub fn advance_by_alphabet(&mut self) {
        self.holiday = self.holiday.next_alphabetically();
    }

    pub fn advance_by_year(&mut self) {
        self.holiday = self.holiday.next_in_year();
    }
}

impl Default for CycleHoliday {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        let mut widget = CycleHoliday::new();
        let mut names = vec![widget.holiday().name()];
        for _ in 0..5 {
            widget.advance_by_alphabet();
            names.push(widget.holiday().name());
        }
        assert_eq!(
            names,
            vec![
                "Best Friend Day",
                "Cheese Day",
                "Dog Day",
                "Go Fishing Day",
                "World Parrot Day",
                "Best Friend Day",
            ]
        );
    }

    #[test]
    fn test_year_order() {
        let mut widget = CycleHoliday::new();
        widget.advance_by_year();
        assert_eq!(widget.holiday(), Holiday::GoFishingDay);
        widget.advance_by_year();
        assert_eq!(widget.holiday(), Holiday::DogDay);
        widget.advance_by_year();
        assert_eq!(widget.holiday(), Holiday::WorldParrotDay);
        widget.advance_by_year();
        assert_eq!(widget.holiday(), Holiday::CheeseDay);
        widget.advance_by_year();
        assert_eq!(widget.holiday(), Holiday::BestFriendDay);
    }

    #[test]
    fn test_mixed_directions() {
        let mut widget = CycleHoliday::new();
        widget.advance_by_alphabet();
        widget.advance_by_year();
        assert_eq!(widget.holiday(), Holiday::BestFriendDay);
        assert_eq!(widget.holiday().emoji(), "🧑");
    }
}
