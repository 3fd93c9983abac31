mod answer;
mod question;

pub use answer::Answer;
pub use question::{Question, QuestionType};

/// Widget currently shown by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    DoubleHalf,
    CycleHoliday,
    ChangeType,
    StartAttempt,
    TwoDice,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::DoubleHalf,
        Tab::CycleHoliday,
        Tab::ChangeType,
        Tab::StartAttempt,
        Tab::TwoDice,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::DoubleHalf => "Double Half",
            Tab::CycleHoliday => "Cycle Holiday",
            Tab::ChangeType => "Change Type",
            Tab::StartAttempt => "Start Attempt",
            Tab::TwoDice => "Two Dice",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_wraps_both_ways() {
        assert_eq!(Tab::TwoDice.next(), Tab::DoubleHalf);
        assert_eq!(Tab::DoubleHalf.previous(), Tab::TwoDice);
        assert_eq!(Tab::CycleHoliday.next().previous(), Tab::CycleHoliday);
    }
}
