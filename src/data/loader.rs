use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::Question;

/// Failure reading or writing a question bank file.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            LoadError::Parse { path, source } => {
                write!(f, "{} is not a valid question bank: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}

/// Reads a JSON array of questions. An empty array is a valid bank.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

/// Writes the bank as pretty-printed JSON, replacing any existing file.
pub fn save_questions_to_json<P: AsRef<Path>>(
    path: P,
    questions: &[Question],
) -> Result<(), LoadError> {
    let path = path.as_ref();

    let json_content =
        serde_json::to_string_pretty(questions).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, json_content + "\n").map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = questions.len(), "saved question bank");
    Ok(())
}
