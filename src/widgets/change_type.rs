use crate::models::QuestionType;

/// Toggles between the two question types, starting at short answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeType {
    kind: QuestionType,
}

impl ChangeType {
    pub fn new() -> Self {
        Self {
            kind: QuestionType::ShortAnswer,
        }
    }

    pub fn kind(&self) -> QuestionType {
        self.kind
    }

    pub fn swap(&mut self) {
        self.kind = self.kind.toggled();
    }
}

impl Default for ChangeType {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_toggles_type() {
        let mut widget = ChangeType::new();
        assert_eq!(widget.kind().label(), "Short Answer");
        widget.swap();
        assert_eq!(widget.kind(), QuestionType::MultipleChoice);
        assert_eq!(widget.kind().label(), "Multiple Choice");
        widget.swap();
        assert_eq!(widget.kind(), QuestionType::ShortAnswer);
    }
}
