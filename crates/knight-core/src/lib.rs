//! **knight-core**: board geometry and algebraic notation shared by the
//! knight path crates.
//!
//! [`Cell`] and [`Board`] describe squares on an `n x n` board (`n <= 16`);
//! [`notation`] converts between cells and chess-style labels such as
//! `"Nb3"`.

pub mod geom;
pub mod notation;

pub use geom::{Board, BoardIter, Cell};
pub use notation::{NotationError, move_label, parse_move, parse_square, square_name};
