//! Game settings: input limits, defaults and the state directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Smallest board the menu accepts.
pub const MIN_BOARD_SIZE: i32 = 6;
/// Largest board the menu accepts.
pub const MAX_BOARD_SIZE: i32 = 16;
/// Board size used before the player picks one.
pub const DEFAULT_BOARD_SIZE: i32 = 8;
/// Move budget used before the player picks one.
pub const DEFAULT_MOVES: i32 = 3;

/// Environment variable naming the state directory.
pub const DATA_DIR_ENV: &str = "KNIGHT_GAME_HOME";
/// State directory used when neither the flag nor the variable is set.
pub const DEFAULT_DATA_DIR: &str = ".knight-game";

const PREFERENCES_FILE: &str = "preferences.json";
const SOLUTIONS_FILE: &str = "solutions.json";

/// Where the game keeps its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub data_dir: PathBuf,
}

impl GameConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the state directory: explicit flag, then `KNIGHT_GAME_HOME`,
    /// then `./.knight-game`.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        Self::resolve_with(flag, std::env::var_os(DATA_DIR_ENV))
    }

    fn resolve_with(flag: Option<PathBuf>, env: Option<OsString>) -> Self {
        let dir = flag
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::new(dir)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn solutions_path(&self) -> PathBuf {
        self.data_dir.join(SOLUTIONS_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
