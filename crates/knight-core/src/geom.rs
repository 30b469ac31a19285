//! Geometry primitives: [`Cell`] and [`Board`].
//!
//! Coordinates are `(row, col)`, 0-indexed, with row 0 at the top of the
//! board. Rank numbers for notation are counted from the bottom edge (see
//! [`crate::notation`]).

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A square on the board, addressed by row and column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Top-left corner (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the cell lies on `board`.
    #[inline]
    pub fn on(self, board: &Board) -> bool {
        board.contains(self)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A square board of side `size`; valid cells satisfy `0 <= row, col < size`.
///
/// A board is only constructed through [`Board::new`], which rejects sizes
/// outside `1..=Board::MAX_SIZE`, so every board can be labelled with
/// algebraic notation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct Board {
    size: i32,
}

impl Board {
    /// Largest board the file-letter table can label (`a` through `p`).
    pub const MAX_SIZE: i32 = 16;

    /// Create a board of side `size`, or `None` if `size` is outside
    /// `1..=MAX_SIZE`.
    #[inline]
    pub const fn new(size: i32) -> Option<Self> {
        if size < 1 || size > Self::MAX_SIZE {
            None
        } else {
            Some(Self { size })
        }
    }

    /// Side length.
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Always `false`: boards have at least one cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `c` is on the board.
    #[inline]
    pub const fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.size && c.col < self.size
    }

    /// Flat row-major index of `c`, or `None` if it is off the board.
    #[inline]
    pub fn idx(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.size as usize + c.col as usize)
    }

    /// Inverse of [`Board::idx`].
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let n = self.size as usize;
        Cell::new((idx / n) as i32, (idx % n) as i32)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoardIter {
        BoardIter {
            board: self,
            next: 0,
        }
    }
}

impl TryFrom<i32> for Board {
    type Error = String;

    fn try_from(size: i32) -> Result<Self, Self::Error> {
        Board::new(size).ok_or_else(|| {
            format!("board size {size} is outside 1..={}", Board::MAX_SIZE)
        })
    }
}

impl From<Board> for i32 {
    fn from(b: Board) -> Self {
        b.size
    }
}

impl IntoIterator for Board {
    type Item = Cell;
    type IntoIter = BoardIter;
    #[inline]
    fn into_iter(self) -> BoardIter {
        self.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.size)
    }
}

// ---------------------------------------------------------------------------
// BoardIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Board`].
#[derive(Clone, Debug)]
pub struct BoardIter {
    board: Board,
    next: usize,
}

impl Iterator for BoardIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.board.len() {
            return None;
        }
        let c = self.board.cell(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.board.len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for BoardIter {}
