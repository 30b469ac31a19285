//! Text rendering of solutions.

use knight_paths::KnightPath;

use crate::messages;

/// Number each path from 1 and join its moves with arrows:
/// `"1. Nc2 -> Na3\n2. Nb3 -> Nc5"`. No trailing newline.
pub fn format_solutions(paths: &[KnightPath]) -> String {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {p}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formatted paths, or the no-solution message for an empty list.
pub fn solutions_or_message(paths: &[KnightPath]) -> String {
    if paths.is_empty() {
        messages::NO_SOLUTION.to_string()
    } else {
        format_solutions(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(moves: &[&str]) -> KnightPath {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn numbered_arrow_lines() {
        let paths = [path(&["Nc2", "Na3"]), path(&["Nb3", "Nc5"])];
        assert_eq!(format_solutions(&paths), "1. Nc2 -> Na3\n2. Nb3 -> Nc5");
    }

    #[test]
    fn single_move_has_no_arrow() {
        assert_eq!(format_solutions(&[path(&["Nc2"])]), "1. Nc2");
    }

    #[test]
    fn empty_list() {
        assert_eq!(format_solutions(&[]), "");
        assert_eq!(solutions_or_message(&[]), messages::NO_SOLUTION);
    }
}
