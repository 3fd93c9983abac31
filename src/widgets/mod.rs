//! State machines behind the gallery widgets.
//!
//! None of these types know how they are drawn; `ui` renders them and `app`
//! routes key presses to their transitions.

mod change_type;
mod cycle_holiday;
mod double_half;
mod start_attempt;
mod two_dice;

pub use change_type::ChangeType;
pub use cycle_holiday::{CycleHoliday, Holiday};
pub use double_half::DoubleHalf;
pub use start_attempt::StartAttempt;
pub use two_dice::{d6, DiceOutcome, TwoDice};
