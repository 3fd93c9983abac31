//! Command-line subcommands and their execution against a question bank.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::bank::{self, EditError, OptionSlot};
use crate::models::{Answer, Question, QuestionType};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, env = "QUIZ_QUESTIONS", global = true)]
    pub questions: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List only the published questions
    Published,
    /// List questions that have a body, an expected answer or options
    NonEmpty,
    /// Show the question with the given id, or null
    Find { id: i64 },
    /// Remove the first question with the given id
    Remove { id: i64 },
    /// List question names
    Names,
    /// Sum the points of all (or only published) questions
    Points {
        #[arg(long)]
        published: bool,
    },
    /// Export the bank as CSV
    Csv,
    /// Create a blank answer for every question
    Answers,
    /// Mark every question as published
    PublishAll,
    /// Check whether all questions share one type
    SameType,
    /// Append a blank question
    Add {
        id: i64,
        name: String,
        #[arg(long = "type", default_value = "short_answer_question")]
        kind: QuestionType,
    },
    /// Rename the question with the given id
    Rename { id: i64, name: String },
    /// Change the type of the question with the given id
    ChangeType { id: i64, kind: QuestionType },
    /// Replace option INDEX of a question, or append it when INDEX is -1
    EditOption {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        index: i64,
        option: String,
    },
    /// Insert a copy of a question right after it
    Duplicate { id: i64, new_id: i64 },
    /// Open the interactive widget gallery
    Widgets,
}

impl Command {
    /// Whether this command reads a question bank.
    pub fn needs_questions(&self) -> bool {
        !matches!(self, Command::Widgets)
    }
}

/// Value produced by running a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Questions(Vec<Question>),
    Question(Option<Question>),
    Answers(Vec<Answer>),
    Names(Vec<String>),
    Points(u64),
    Flag(bool),
    Csv(String),
}

impl CommandOutput {
    /// Text printed for this output: JSON for records, plain text for scalars and CSV.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            CommandOutput::Questions(questions) => serde_json::to_string_pretty(questions),
            CommandOutput::Question(question) => serde_json::to_string_pretty(question),
            CommandOutput::Answers(answers) => serde_json::to_string_pretty(answers),
            CommandOutput::Names(names) => Ok(names.join("\n")),
            CommandOutput::Points(points) => Ok(points.to_string()),
            CommandOutput::Flag(flag) => Ok(flag.to_string()),
            CommandOutput::Csv(csv) => Ok(csv.clone()),
        }
    }
}

/// Runs a bank command. `Command::Widgets` has no bank output and yields `None`.
pub fn execute_command(
    command: &Command,
    questions: &[Question],
) -> Result<Option<CommandOutput>, EditError> {
    debug!(?command, count = questions.len(), "executing command");

    let output = match command {
        Command::Published => CommandOutput::Questions(bank::get_published_questions(questions)),
        Command::NonEmpty => CommandOutput::Questions(bank::get_non_empty_questions(questions)),
        Command::Find { id } => {
            CommandOutput::Question(bank::find_question(questions, *id).cloned())
        }
        Command::Remove { id } => CommandOutput::Questions(bank::remove_question(questions, *id)),
        Command::Names => CommandOutput::Names(bank::get_names(questions)),
        Command::Points { published: true } => {
            CommandOutput::Points(bank::sum_published_points(questions))
        }
        Command::Points { published: false } => CommandOutput::Points(bank::sum_points(questions)),
        Command::Csv => CommandOutput::Csv(bank::to_csv(questions)),
        Command::Answers => CommandOutput::Answers(bank::make_answers(questions)),
        Command::PublishAll => CommandOutput::Questions(bank::publish_all(questions)),
        Command::SameType => CommandOutput::Flag(bank::same_type(questions)),
        Command::Add { id, name, kind } => {
            CommandOutput::Questions(bank::add_new_question(questions, *id, name, *kind))
        }
        Command::Rename { id, name } => {
            CommandOutput::Questions(bank::rename_question_by_id(questions, *id, name))
        }
        Command::ChangeType { id, kind } => {
            CommandOutput::Questions(bank::change_question_type_by_id(questions, *id, *kind)?)
        }
        Command::EditOption { id, index, option } => {
            let slot = OptionSlot::from_index(*index)?;
            CommandOutput::Questions(bank::edit_option(questions, *id, slot, option)?)
        }
        Command::Duplicate { id, new_id } => {
            CommandOutput::Questions(bank::duplicate_question_in_array(questions, *id, *new_id)?)
        }
        Command::Widgets => return Ok(None),
    };

    Ok(Some(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Question> {
        let mut colors = Question::blank(5, "Colors", QuestionType::MultipleChoice);
        colors.options = vec!["red".to_string(), "blue".to_string()];
        colors.published = true;
        vec![Question::blank(1, "Addition", QuestionType::ShortAnswer), colors]
    }

    fn run(command: Command) -> CommandOutput {
        execute_command(&command, &bank()).unwrap().unwrap()
    }

    #[test]
    fn test_parse_edit_option_with_negative_index() {
        let args = Args::try_parse_from([
            "rust-quiz-editor",
            "--questions",
            "bank.json",
            "edit-option",
            "5",
            "-1",
            "green",
        ])
        .unwrap();
        assert_eq!(args.questions, Some(PathBuf::from("bank.json")));
        assert_eq!(
            args.command,
            Command::EditOption {
                id: 5,
                index: -1,
                option: "green".to_string()
            }
        );
    }

    #[test]
    fn test_parse_question_type_argument() {
        let args =
            Args::try_parse_from(["rust-quiz-editor", "change-type", "5", "short_answer_question"])
                .unwrap();
        assert_eq!(
            args.command,
            Command::ChangeType {
                id: 5,
                kind: QuestionType::ShortAnswer
            }
        );
        assert!(Args::try_parse_from(["rust-quiz-editor", "change-type", "5", "essay"]).is_err());
    }

    #[test]
    fn test_add_defaults_to_short_answer() {
        let args = Args::try_parse_from(["rust-quiz-editor", "add", "7", "New"]).unwrap();
        assert_eq!(
            args.command,
            Command::Add {
                id: 7,
                name: "New".to_string(),
                kind: QuestionType::ShortAnswer
            }
        );
    }

    #[test]
    fn test_execute_scalar_commands() {
        assert_eq!(run(Command::Points { published: false }), CommandOutput::Points(2));
        assert_eq!(run(Command::Points { published: true }), CommandOutput::Points(1));
        assert_eq!(run(Command::SameType), CommandOutput::Flag(false));
        assert_eq!(
            run(Command::Csv).render().unwrap(),
            "id,name,options,points,published\n1,Addition,0,1,false\n5,Colors,2,1,true"
        );
        assert_eq!(run(Command::Names).render().unwrap(), "Addition\nColors");
    }

    #[test]
    fn test_points_of_large_bank() {
        let mut big = Question::blank(1, "Big", QuestionType::ShortAnswer);
        big.points = u32::MAX;
        let questions = vec![big.clone(), big];
        let output = execute_command(&Command::Points { published: false }, &questions)
            .unwrap()
            .unwrap();
        assert_eq!(output.render().unwrap(), (2 * u64::from(u32::MAX)).to_string());
    }

    #[test]
    fn test_find_missing_renders_null() {
        assert_eq!(run(Command::Find { id: 9 }).render().unwrap(), "null");
    }

    #[test]
    fn test_execute_edit_commands() {
        let CommandOutput::Questions(duplicated) = run(Command::Duplicate { id: 1, new_id: 2 })
        else {
            panic!("expected questions");
        };
        assert_eq!(duplicated[1].name, "Copy of Addition");

        let CommandOutput::Questions(edited) = run(Command::EditOption {
            id: 5,
            index: 0,
            option: "green".to_string(),
        }) else {
            panic!("expected questions");
        };
        assert_eq!(edited[1].options, vec!["green", "blue"]);
    }

    #[test]
    fn test_execute_reports_missing_target() {
        let err = execute_command(
            &Command::ChangeType {
                id: 404,
                kind: QuestionType::ShortAnswer,
            },
            &bank(),
        )
        .unwrap_err();
        assert_eq!(err, EditError::QuestionNotFound(404));

        let err = execute_command(
            &Command::EditOption {
                id: 5,
                index: -3,
                option: "x".to_string(),
            },
            &bank(),
        )
        .unwrap_err();
        assert_eq!(err, EditError::InvalidOptionIndex(-3));
    }

    #[test]
    fn test_widgets_needs_no_bank() {
        assert!(!Command::Widgets.needs_questions());
        assert_eq!(execute_command(&Command::Widgets, &[]), Ok(None));
    }
}
