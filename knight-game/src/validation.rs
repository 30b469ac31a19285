//! Main-menu input checks.

use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::messages;

/// Outcome of checking the board size and move fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuValidation {
    pub board_size_error: Option<String>,
    pub moves_error: Option<String>,
}

impl MenuValidation {
    pub fn has_error(&self) -> bool {
        self.board_size_error.is_some() || self.moves_error.is_some()
    }

    /// The error messages, board size first.
    pub fn messages(&self) -> Vec<String> {
        self.board_size_error
            .iter()
            .chain(self.moves_error.iter())
            .cloned()
            .collect()
    }
}

/// Check both menu fields independently.
pub fn validate_menu_input(board_size: &str, moves: &str) -> MenuValidation {
    MenuValidation {
        board_size_error: (!is_board_size_valid(board_size))
            .then(|| messages::BOARD_SIZE_ERROR.to_string()),
        moves_error: (!is_moves_valid(moves)).then(|| messages::MOVES_ERROR.to_string()),
    }
}

/// Parse a whole-number field; empty, signed-only or fractional text is
/// rejected.
pub(crate) fn parse_number(s: &str) -> Option<i32> {
    s.parse().ok()
}

fn is_board_size_valid(s: &str) -> bool {
    parse_number(s).is_some_and(|n| (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n))
}

fn is_moves_valid(s: &str) -> bool {
    parse_number(s).is_some_and(|n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_has_no_errors() {
        let v = validate_menu_input("8", "3");
        assert!(!v.has_error());
        assert!(v.messages().is_empty());
    }

    #[test]
    fn bad_board_sizes() {
        for s in ["", "-", "5", "17", "8.5", "abc", " 8"] {
            let v = validate_menu_input(s, "3");
            assert_eq!(
                v.board_size_error.as_deref(),
                Some(messages::BOARD_SIZE_ERROR),
                "{s:?}"
            );
            assert!(v.moves_error.is_none());
        }
    }

    #[test]
    fn board_size_limits_are_inclusive() {
        assert!(!validate_menu_input("6", "1").has_error());
        assert!(!validate_menu_input("16", "1").has_error());
    }

    #[test]
    fn bad_moves() {
        for s in ["", "-", "0", "-2", "1.5"] {
            let v = validate_menu_input("8", s);
            assert_eq!(v.moves_error.as_deref(), Some(messages::MOVES_ERROR), "{s:?}");
            assert!(v.board_size_error.is_none());
        }
    }

    #[test]
    fn both_fields_reported() {
        let v = validate_menu_input("", "");
        assert_eq!(
            v.messages(),
            vec![
                messages::BOARD_SIZE_ERROR.to_string(),
                messages::MOVES_ERROR.to_string()
            ]
        );
    }
}
