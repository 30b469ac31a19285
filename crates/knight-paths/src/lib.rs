//! Exact-length knight path enumeration.
//!
//! Given a board size, a move budget and two squares, [`find_paths`] lists
//! every knight route of exactly that many moves between the squares that a
//! visited-once breadth-first search discovers, each as algebraic move
//! labels (`"Nb3"`).
//!
//! [`KnightPathFinder`] is the reusable form: it owns its search buffers so
//! repeated queries on one board allocate nothing after warm-up.
//!
//! ```
//! use knight_paths::find_paths;
//!
//! let paths = find_paths(8, 2, 7, 0, 3, 2).unwrap();
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].to_string(), "Nb3 -> Nc5");
//! ```

mod error;
mod finder;
mod moves;
mod path;
mod search;
mod traits;

pub use error::FindError;
pub use finder::{KnightPathFinder, find_paths};
pub use moves::{KNIGHT_OFFSETS, KnightMoves, is_knight_move};
pub use path::KnightPath;
pub use traits::Pather;
