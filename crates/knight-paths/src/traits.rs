use knight_core::Cell;

/// Neighbour enumeration for the path search.
pub trait Pather {
    /// Append the cells reachable in one move from `c` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}
