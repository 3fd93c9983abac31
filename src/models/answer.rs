use serde::{Deserialize, Serialize};

/// A respondent's in-progress response to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    /// An unsubmitted, empty answer for the given question.
    pub fn blank(question_id: i64) -> Self {
        Self {
            question_id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_serializes_question_id_in_camel_case() {
        let json = serde_json::to_string(&Answer::blank(3)).unwrap();
        assert!(json.contains("\"questionId\":3"));
        assert!(json.contains("\"submitted\":false"));
    }
}
