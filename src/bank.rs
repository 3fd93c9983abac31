//! Query and edit operations over an ordered bank of questions.
//!
//! Every function borrows its input and hands back freshly built values, so a
//! caller's bank is never modified in place.

use std::fmt;

use tracing::{debug, warn};

use crate::models::{Answer, Question, QuestionType};

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "id,name,options,points,published";

/// Error returned by edits that need their target question to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// No question in the bank has this id.
    QuestionNotFound(i64),
    /// A negative option index other than -1.
    InvalidOptionIndex(i64),
    /// Replacement index past the end of the question's options.
    OptionOutOfRange {
        question_id: i64,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::QuestionNotFound(id) => write!(f, "No question with id {}", id),
            EditError::InvalidOptionIndex(index) => {
                write!(f, "Invalid option index {} (use -1 to append)", index)
            }
            EditError::OptionOutOfRange {
                question_id,
                index,
                len,
            } => write!(
                f,
                "Question {} has {} options, cannot replace option {}",
                question_id, len, index
            ),
        }
    }
}

impl std::error::Error for EditError {}

/// Where `edit_option` puts the new option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    /// Push onto the end of the options.
    Append,
    /// Overwrite the option at this index.
    Replace(usize),
}

impl OptionSlot {
    /// Maps the classic numeric form, where -1 means append.
    pub fn from_index(index: i64) -> Result<Self, EditError> {
        match index {
            -1 => Ok(OptionSlot::Append),
            i => usize::try_from(i)
                .map(OptionSlot::Replace)
                .map_err(|_| EditError::InvalidOptionIndex(i)),
        }
    }
}

fn position_of(questions: &[Question], id: i64) -> Result<usize, EditError> {
    questions
        .iter()
        .position(|question| question.id == id)
        .ok_or_else(|| {
            warn!(id, "question not found");
            EditError::QuestionNotFound(id)
        })
}

pub fn get_published_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| q.published).cloned().collect()
}

/// Drops every question with no body, no expected answer and no options.
pub fn get_non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| !q.is_empty()).cloned().collect()
}

pub fn find_question(questions: &[Question], id: i64) -> Option<&Question> {
    questions.iter().find(|question| question.id == id)
}

/// Removes the first question with `id`; an unknown id yields an unchanged copy.
pub fn remove_question(questions: &[Question], id: i64) -> Vec<Question> {
    let mut copy = questions.to_vec();
    if let Some(index) = copy.iter().position(|question| question.id == id) {
        copy.remove(index);
    } else {
        debug!(id, "nothing to remove");
    }
    copy
}

pub fn get_names(questions: &[Question]) -> Vec<String> {
    questions.iter().map(|q| q.name.clone()).collect()
}

/// Totals are widened to `u64` so banks of large point values cannot overflow.
pub fn sum_points(questions: &[Question]) -> u64 {
    questions.iter().map(|q| u64::from(q.points)).sum()
}

pub fn sum_published_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .filter(|q| q.published)
        .map(|q| u64::from(q.points))
        .sum()
}

/// Renders the bank as CSV.
///
/// The first line is [`CSV_HEADER`], followed by one `id,name,options,points,published`
/// row per question where `options` is the number of options. Fields are not
/// quoted and there is no trailing newline.
pub fn to_csv(questions: &[Question]) -> String {
    let mut lines = Vec::with_capacity(questions.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(questions.iter().map(|q| {
        format!(
            "{},{},{},{},{}",
            q.id,
            q.name,
            q.options.len(),
            q.points,
            q.published
        )
    }));
    lines.join("\n")
}

pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(|q| Answer::blank(q.id)).collect()
}

pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| Question {
            published: true,
            ..q.clone()
        })
        .collect()
}

/// True when every question shares one type. An empty bank counts as uniform.
pub fn same_type(questions: &[Question]) -> bool {
    match questions.first() {
        Some(first) => questions.iter().all(|q| q.kind == first.kind),
        None => true,
    }
}

pub fn add_new_question(
    questions: &[Question],
    id: i64,
    name: &str,
    kind: QuestionType,
) -> Vec<Question> {
    let mut copy = questions.to_vec();
    copy.push(Question::blank(id, name, kind));
    copy
}

/// Renames every question carrying `target_id`; other fields stay untouched.
pub fn rename_question_by_id(
    questions: &[Question],
    target_id: i64,
    new_name: &str,
) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id == target_id {
                Question {
                    name: new_name.to_string(),
                    ..q.clone()
                }
            } else {
                q.clone()
            }
        })
        .collect()
}

/// Changes the type of the question with `target_id`.
///
/// Switching to [`QuestionType::ShortAnswer`] also clears the options.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: i64,
    new_kind: QuestionType,
) -> Result<Vec<Question>, EditError> {
    let index = position_of(questions, target_id)?;
    let mut copy = questions.to_vec();
    let target = &mut copy[index];
    target.kind = new_kind;
    match new_kind {
        QuestionType::ShortAnswer => target.options = Vec::new(),
        QuestionType::MultipleChoice => {}
    }
    Ok(copy)
}

/// Appends or replaces one option of the question with `target_id`.
///
/// `Replace(i)` needs an existing option at `i`; an index at or past the end
/// is [`EditError::OptionOutOfRange`] rather than an implicit append. Use
/// [`OptionSlot::Append`] to add an option.
pub fn edit_option(
    questions: &[Question],
    target_id: i64,
    slot: OptionSlot,
    new_option: &str,
) -> Result<Vec<Question>, EditError> {
    let index = position_of(questions, target_id)?;
    let mut copy = questions.to_vec();
    let options = &mut copy[index].options;
    match slot {
        OptionSlot::Append => options.push(new_option.to_string()),
        OptionSlot::Replace(i) => {
            let len = options.len();
            let option = options.get_mut(i).ok_or(EditError::OptionOutOfRange {
                question_id: target_id,
                index: i,
                len,
            })?;
            *option = new_option.to_string();
        }
    }
    Ok(copy)
}

/// Inserts a duplicate of `target_id` (see [`Question::duplicate`]) directly after it.
pub fn duplicate_question_in_array(
    questions: &[Question],
    target_id: i64,
    new_id: i64,
) -> Result<Vec<Question>, EditError> {
    let index = position_of(questions, target_id)?;
    let mut copy = questions.to_vec();
    let duplicate = Question::duplicate(new_id, &copy[index]);
    copy.insert(index + 1, duplicate);
    Ok(copy)
}
