use std::collections::VecDeque;

use knight_core::{Board, Cell, move_label};

use crate::error::FindError;
use crate::path::KnightPath;

/// Sentinel parent index for the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Search tree node
// ---------------------------------------------------------------------------

/// A cell reached after `distance` moves, linked to the node it was
/// expanded from. Nodes live in the finder's arena and are never modified
/// after being pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) cell: Cell,
    pub(crate) distance: i32,
    pub(crate) parent: usize,
}

// ---------------------------------------------------------------------------
// KnightPathFinder
// ---------------------------------------------------------------------------

/// Exact-length knight path search on a fixed board.
///
/// `KnightPathFinder` owns the node arena, queue and visited map, so
/// repeated queries on the same board reuse their allocations. It holds no
/// shared state; separate finders can run on separate threads.
#[derive(Debug, Clone)]
pub struct KnightPathFinder {
    pub(crate) board: Board,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) visited: Vec<bool>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Cell>,
}

impl KnightPathFinder {
    /// Create a finder for `board`.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            nodes: Vec::new(),
            queue: VecDeque::new(),
            visited: vec![false; board.len()],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a finder for a board of side `size`.
    pub fn with_size(size: i32) -> Result<Self, FindError> {
        let board = Board::new(size).ok_or(FindError::InvalidBoardSize(size))?;
        Ok(Self::new(board))
    }

    /// Replace the board, resizing the visited map if needed.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.nodes.clear();
        self.queue.clear();
        self.visited.clear();
        self.visited.resize(board.len(), false);
    }

    /// The board being searched.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Check that `c` is on the board.
    pub(crate) fn check(&self, c: Cell) -> Result<(), FindError> {
        if self.board.contains(c) {
            Ok(())
        } else {
            Err(FindError::OutOfBounds {
                cell: c,
                board_size: self.board.size(),
            })
        }
    }

    /// Clear per-search state.
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.queue.clear();
        self.visited.clear();
        self.visited.resize(self.board.len(), false);
    }

    /// Walk parent links from `end` back to the root and label every node
    /// except the root.
    pub(crate) fn reconstruct(&self, end: usize) -> Result<KnightPath, FindError> {
        let mut labels = Vec::with_capacity(self.nodes[end].distance.max(0) as usize);
        let mut i = end;
        while self.nodes[i].parent != NO_PARENT {
            labels.push(move_label(self.board, self.nodes[i].cell)?);
            i = self.nodes[i].parent;
        }
        labels.reverse();
        Ok(KnightPath::new(labels))
    }
}

/// Find every knight path of exactly `moves` moves from
/// `(source_row, source_col)` to `(dest_row, dest_col)` on a
/// `board_size x board_size` board.
///
/// This is a convenience wrapper that builds a fresh [`KnightPathFinder`];
/// see [`KnightPathFinder::find`] for the search semantics.
pub fn find_paths(
    board_size: i32,
    moves: i32,
    source_row: i32,
    source_col: i32,
    dest_row: i32,
    dest_col: i32,
) -> Result<Vec<KnightPath>, FindError> {
    let mut finder = KnightPathFinder::with_size(board_size)?;
    finder.find(
        moves,
        Cell::new(source_row, source_col),
        Cell::new(dest_row, dest_col),
    )
}
