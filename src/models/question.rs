use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of question a bank can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "short_answer_question")]
    ShortAnswer,
    #[serde(rename = "multiple_choice_question")]
    MultipleChoice,
}

impl QuestionType {
    /// Wire name used in JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::ShortAnswer => "short_answer_question",
            QuestionType::MultipleChoice => "multiple_choice_question",
        }
    }

    /// Human readable label shown by the widgets.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::MultipleChoice => "Multiple Choice",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            QuestionType::ShortAnswer => QuestionType::MultipleChoice,
            QuestionType::MultipleChoice => QuestionType::ShortAnswer,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short_answer_question" | "short" => Ok(QuestionType::ShortAnswer),
            "multiple_choice_question" | "multiple" => Ok(QuestionType::MultipleChoice),
            other => Err(format!(
                "unknown question type '{}' (expected short_answer_question or multiple_choice_question)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub body: String,
    pub expected: String,
    pub options: Vec<String>,
    pub points: u32,
    pub published: bool,
}

impl Question {
    /// A fresh, unpublished question worth one point with no content.
    pub fn blank(id: i64, name: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            body: String::new(),
            expected: String::new(),
            options: Vec::new(),
            points: 1,
            published: false,
        }
    }

    /// Copy of `original` under a new id, renamed "Copy of ..." and unpublished.
    pub fn duplicate(new_id: i64, original: &Question) -> Self {
        Self {
            id: new_id,
            name: format!("Copy of {}", original.name),
            published: false,
            ..original.clone()
        }
    }

    /// True when the question has no body, no expected answer and no options.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }
}
