//! # rust-quiz-editor
//!
//! Question bank editing tools plus a small terminal widget gallery.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rust_quiz_editor::{bank, load_questions_from_json, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let questions = load_questions_from_json("questions.json")?;
//!
//!     println!("{}", bank::to_csv(&bank::get_published_questions(&questions)));
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod bank;
pub mod commands;
mod data;
pub mod logging;
mod models;
pub mod terminal;
mod ui;
pub mod widgets;

use std::fs;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

pub use app::App;
pub use bank::{EditError, OptionSlot};
pub use commands::{Args, Command, CommandOutput};
pub use data::{load_questions_from_json, save_questions_to_json, LoadError};
pub use models::{Answer, Question, QuestionType, Tab};

/// Error type for quiz editor operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error reading or writing a question bank.
    Load(LoadError),
    /// An edit referred to a question or option that does not exist.
    Edit(EditError),
    /// Failed to serialize a result.
    Json(serde_json::Error),
    /// IO error while printing results or driving the terminal.
    Io(io::Error),
    /// A bank command was given without `--questions`.
    MissingQuestions,
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Edit(e) => write!(f, "Cannot edit questions: {}", e),
            QuizError::Json(e) => write!(f, "Failed to serialize result: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
            QuizError::MissingQuestions => {
                write!(f, "No question bank given (use --questions or QUIZ_QUESTIONS)")
            }
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Edit(e) => Some(e),
            QuizError::Json(e) => Some(e),
            QuizError::Io(e) => Some(e),
            QuizError::MissingQuestions => None,
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<EditError> for QuizError {
    fn from(err: EditError) -> Self {
        QuizError::Edit(err)
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Json(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Runs one parsed command line: either a bank command or the widget gallery.
pub fn run(args: Args) -> Result<(), QuizError> {
    if !args.command.needs_questions() {
        return Gallery::new().run();
    }

    let path = args.questions.as_ref().ok_or(QuizError::MissingQuestions)?;
    let questions = load_questions_from_json(path)?;

    let Some(output) = commands::execute_command(&args.command, &questions)? else {
        return Ok(());
    };

    match (&args.output, &output) {
        (Some(path), CommandOutput::Questions(edited)) => {
            save_questions_to_json(path, edited)?;
            info!(path = %path.display(), count = edited.len(), "wrote edited bank");
        }
        (Some(path), _) => fs::write(path, output.render()? + "\n")?,
        (None, _) => println!("{}", output.render()?),
    }

    Ok(())
}

/// The interactive widget gallery.
pub struct Gallery {
    app: App,
}

impl Gallery {
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    /// Run the gallery in the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalGuard::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

fn run_event_loop(
    terminal: &mut terminal::GalleryTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the gallery should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Right => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left => app.previous_tab(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        _ => handle_widget_input(app, key),
    }
    false
}

fn handle_widget_input(app: &mut App, key: KeyCode) {
    match (app.tab, key) {
        (Tab::DoubleHalf, KeyCode::Char('d')) => app.double_half.double(),
        (Tab::DoubleHalf, KeyCode::Char('h')) => app.double_half.halve(),
        (Tab::CycleHoliday, KeyCode::Char('a')) => app.cycle_holiday.advance_by_alphabet(),
        (Tab::CycleHoliday, KeyCode::Char('y')) => app.cycle_holiday.advance_by_year(),
        (Tab::ChangeType, KeyCode::Char('c')) => app.change_type.swap(),
        (Tab::StartAttempt, KeyCode::Char('s')) => app.start_attempt.start(),
        (Tab::StartAttempt, KeyCode::Char('t')) => app.start_attempt.stop(),
        (Tab::StartAttempt, KeyCode::Char('m')) => app.start_attempt.mulligan(),
        (Tab::TwoDice, KeyCode::Char('1')) => app.roll_left(),
        (Tab::TwoDice, KeyCode::Char('2')) => app.roll_right(),
        _ => {}
    }
}
