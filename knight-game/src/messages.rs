//! User-facing strings.

pub const BOARD_SIZE_ERROR: &str = "Board size must be a number between 6 and 16";
pub const MOVES_ERROR: &str = "Moves must be a positive number";
pub const NO_SOLUTION: &str = "No solution found for the given number of moves";
pub const NO_SAVED_GAME: &str = "No saved game";
