use std::fmt;

use knight_core::{Board, Cell, NotationError};

/// Errors returned for arguments outside the search contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindError {
    /// Board size outside `1..=16`.
    InvalidBoardSize(i32),
    /// Negative move budget.
    NegativeMoves(i32),
    /// A source or destination cell off the board.
    OutOfBounds { cell: Cell, board_size: i32 },
    /// A reached cell could not be labelled.
    Notation(NotationError),
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize(n) => {
                write!(f, "board size {n} is outside 1..={}", Board::MAX_SIZE)
            }
            Self::NegativeMoves(m) => write!(f, "move count {m} is negative"),
            Self::OutOfBounds { cell, board_size } => {
                write!(f, "cell {cell} is outside the {board_size}x{board_size} board")
            }
            Self::Notation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Notation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NotationError> for FindError {
    fn from(e: NotationError) -> Self {
        Self::Notation(e)
    }
}
