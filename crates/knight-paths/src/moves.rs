use knight_core::{Board, Cell};

use crate::traits::Pather;

/// The eight knight offsets as `(drow, dcol)`, in expansion order.
///
/// Expansion order fixes the order in which paths are reported.
pub const KNIGHT_OFFSETS: [Cell; 8] = [
    Cell::new(2, -1),
    Cell::new(2, 1),
    Cell::new(-2, 1),
    Cell::new(-2, -1),
    Cell::new(1, 2),
    Cell::new(1, -2),
    Cell::new(-1, 2),
    Cell::new(-1, -2),
];

/// Knight move generator restricted to a board.
#[derive(Debug, Clone, Copy)]
pub struct KnightMoves {
    board: Board,
}

impl KnightMoves {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> Board {
        self.board
    }
}

impl Pather for KnightMoves {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for d in KNIGHT_OFFSETS {
            let n = c + d;
            if self.board.contains(n) {
                buf.push(n);
            }
        }
    }
}

/// Whether `from -> to` is a single knight move.
#[inline]
pub fn is_knight_move(from: Cell, to: Cell) -> bool {
    KNIGHT_OFFSETS.contains(&(to - from))
}
