use std::fmt;

use knight_core::{Board, Cell, NotationError, parse_move};

/// One complete knight route, as the ordered move labels (`"Nb3"`) of the
/// squares moved into. The starting square is not part of the path, so
/// `len()` is the number of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KnightPath {
    moves: Vec<String>,
}

impl KnightPath {
    pub fn new(moves: Vec<String>) -> Self {
        Self { moves }
    }

    /// Move labels in source-to-destination order.
    #[inline]
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.moves.iter()
    }

    pub fn into_moves(self) -> Vec<String> {
        self.moves
    }

    /// Replay the labels into the cells visited after the start square.
    pub fn cells(&self, board: Board) -> Result<Vec<Cell>, NotationError> {
        self.moves.iter().map(|m| parse_move(board, m)).collect()
    }
}

impl FromIterator<String> for KnightPath {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KnightPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for KnightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.moves.join(" -> "))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_plain_list() {
        let p: KnightPath = ["Nc2", "Na3"].iter().map(|m| m.to_string()).collect();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"["Nc2","Na3"]"#);
        let back: KnightPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
