use std::fmt;
use std::io;
use std::path::PathBuf;

use knight_core::NotationError;
use knight_paths::FindError;

/// Errors surfaced by the game layer.
#[derive(Debug)]
pub enum GameError {
    /// Reading or writing a state file failed.
    Io { path: PathBuf, source: io::Error },
    /// A state file holds malformed JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The search rejected its arguments.
    Find(FindError),
    /// A square could not be parsed.
    Notation(NotationError),
    /// Menu input failed validation; carries the user-facing messages.
    InvalidInput(Vec<String>),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "{}: invalid state file: {source}", path.display())
            }
            Self::Find(e) => write!(f, "{e}"),
            Self::Notation(e) => write!(f, "{e}"),
            Self::InvalidInput(msgs) => f.write_str(&msgs.join("\n")),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Find(e) => Some(e),
            Self::Notation(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<FindError> for GameError {
    fn from(e: FindError) -> Self {
        Self::Find(e)
    }
}

impl From<NotationError> for GameError {
    fn from(e: NotationError) -> Self {
        Self::Notation(e)
    }
}
