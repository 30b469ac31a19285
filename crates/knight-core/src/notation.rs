//! Algebraic notation for board cells and knight moves.
//!
//! Columns map to file letters `a..p` (column 0 is `a`). Ranks are 1-based
//! and counted from the bottom edge, so on an `n`-sized board the rank of
//! row `r` is `n - r`. A knight move is labelled by the square it moves
//! into, prefixed with `N`: moving into row 2, column 1 of a 4x4 board is
//! `"Nb2"`.

use std::fmt;

use crate::geom::{Board, Cell};

/// File letters, indexed by column.
pub const FILES: [char; Board::MAX_SIZE as usize] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
];

/// Piece prefix for knight move labels.
pub const KNIGHT: char = 'N';

/// File letter of column `col`, if it is labelled.
#[inline]
pub fn file_letter(col: i32) -> Option<char> {
    usize::try_from(col).ok().and_then(|c| FILES.get(c).copied())
}

/// Rank number of `row` on `board`, counted from the bottom.
#[inline]
pub fn rank(board: Board, row: i32) -> i32 {
    board.size() - row
}

/// Square name such as `"b3"`.
pub fn square_name(board: Board, cell: Cell) -> Result<String, NotationError> {
    if !board.contains(cell) {
        return Err(NotationError::OffBoard { cell, board });
    }
    // contains() bounds col by MAX_SIZE, so the lookup always succeeds.
    let file = FILES[cell.col as usize];
    Ok(format!("{file}{}", rank(board, cell.row)))
}

/// Knight move label for moving into `cell`, such as `"Nb3"`.
pub fn move_label(board: Board, cell: Cell) -> Result<String, NotationError> {
    square_name(board, cell).map(|s| format!("{KNIGHT}{s}"))
}

/// Parse a square name (`"b3"`) back into a cell on `board`.
pub fn parse_square(board: Board, s: &str) -> Result<Cell, NotationError> {
    let mut chars = s.chars();
    let file = chars
        .next()
        .ok_or_else(|| NotationError::Malformed(s.to_string()))?
        .to_ascii_lowercase();
    let col = FILES
        .iter()
        .position(|&f| f == file)
        .ok_or_else(|| NotationError::Malformed(s.to_string()))?;
    let rank_str = chars.as_str();
    if rank_str.is_empty() || !rank_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotationError::Malformed(s.to_string()));
    }
    let rank: i32 = rank_str
        .parse()
        .map_err(|_| NotationError::Malformed(s.to_string()))?;
    let cell = Cell::new(board.size() - rank, col as i32);
    if rank < 1 || !board.contains(cell) {
        return Err(NotationError::OffBoard { cell, board });
    }
    Ok(cell)
}

/// Parse a knight move label (`"Nb3"`) into the cell it moves into.
pub fn parse_move(board: Board, s: &str) -> Result<Cell, NotationError> {
    match s.strip_prefix(KNIGHT) {
        Some(square) => parse_square(board, square),
        None => Err(NotationError::Malformed(s.to_string())),
    }
}

/// Errors produced when converting between cells and notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The text is not a square name or move label.
    Malformed(String),
    /// The cell does not lie on the board.
    OffBoard { cell: Cell, board: Board },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed square \u{201c}{s}\u{201d}"),
            Self::OffBoard { cell, board } => {
                write!(f, "cell {cell} is not on the {board} board")
            }
        }
    }
}

impl std::error::Error for NotationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: i32) -> Board {
        Board::new(n).unwrap()
    }

    #[test]
    fn rank_counts_from_bottom() {
        assert_eq!(rank(board(8), 7), 1);
        assert_eq!(rank(board(8), 0), 8);
        assert_eq!(rank(board(3), 1), 2);
    }

    #[test]
    fn names_and_labels() {
        assert_eq!(square_name(board(8), Cell::new(7, 0)).unwrap(), "a1");
        assert_eq!(square_name(board(8), Cell::new(0, 7)).unwrap(), "h8");
        assert_eq!(move_label(board(3), Cell::new(1, 2)).unwrap(), "Nc2");
        assert_eq!(move_label(board(16), Cell::new(0, 15)).unwrap(), "Np16");
    }

    #[test]
    fn off_board_cells_are_rejected() {
        let err = square_name(board(4), Cell::new(4, 0)).unwrap_err();
        assert!(matches!(err, NotationError::OffBoard { .. }));
    }

    #[test]
    fn parse_inverts_naming() {
        let b = board(12);
        for c in b {
            let name = square_name(b, c).unwrap();
            assert_eq!(parse_square(b, &name).unwrap(), c);
            let label = move_label(b, c).unwrap();
            assert_eq!(parse_move(b, &label).unwrap(), c);
        }
    }

    #[test]
    fn parse_accepts_uppercase_file() {
        assert_eq!(parse_square(board(8), "B3").unwrap(), Cell::new(5, 1));
    }

    #[test]
    fn parse_rejects_garbage() {
        let b = board(8);
        for bad in ["", "3", "z1", "a", "a-1", "a1x", "b 3"] {
            assert!(
                matches!(parse_square(b, bad), Err(NotationError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
        assert!(matches!(parse_square(b, "a0"), Err(NotationError::OffBoard { .. })));
        assert!(matches!(parse_square(b, "a9"), Err(NotationError::OffBoard { .. })));
        assert!(matches!(parse_square(b, "i1"), Err(NotationError::OffBoard { .. })));
        assert!(matches!(parse_move(b, "b3"), Err(NotationError::Malformed(_))));
    }

    #[test]
    fn file_letter_bounds() {
        assert_eq!(file_letter(0), Some('a'));
        assert_eq!(file_letter(15), Some('p'));
        assert_eq!(file_letter(16), None);
        assert_eq!(file_letter(-1), None);
    }
}
