use knight_core::{Board, Cell};
use knight_paths::{KnightPathFinder, find_paths, is_knight_move};
use proptest::prelude::*;

fn query() -> impl Strategy<Value = (i32, i32, i32, i32, i32, i32)> {
    (1..=10i32).prop_flat_map(|n| (Just(n), 0..=6i32, 0..n, 0..n, 0..n, 0..n))
}

proptest! {
    #[test]
    fn prop_paths_are_exact_knight_routes((n, moves, sr, sc, dr, dc) in query()) {
        let board = Board::new(n).unwrap();
        let paths = find_paths(n, moves, sr, sc, dr, dc).unwrap();
        for p in &paths {
            prop_assert_eq!(p.len(), moves as usize);
            let cells = p.cells(board).unwrap();
            let mut prev = Cell::new(sr, sc);
            for c in cells {
                prop_assert!(is_knight_move(prev, c));
                prev = c;
            }
            prop_assert_eq!(prev, Cell::new(dr, dc));
        }
    }

    #[test]
    fn prop_search_is_idempotent((n, moves, sr, sc, dr, dc) in query()) {
        let first = find_paths(n, moves, sr, sc, dr, dc).unwrap();
        let second = find_paths(n, moves, sr, sc, dr, dc).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reused_finder_matches_fresh((n, moves, sr, sc, dr, dc) in query()) {
        let mut finder = KnightPathFinder::with_size(n).unwrap();
        // Dirty the buffers with an unrelated query first.
        finder.find(moves, Cell::new(dr, dc), Cell::new(sr, sc)).unwrap();
        let reused = finder.find(moves, Cell::new(sr, sc), Cell::new(dr, dc)).unwrap();
        prop_assert_eq!(reused, find_paths(n, moves, sr, sc, dr, dc).unwrap());
    }

    #[test]
    fn prop_zero_moves_only_matches_source((n, _moves, sr, sc, dr, dc) in query()) {
        let paths = find_paths(n, 0, sr, sc, dr, dc).unwrap();
        if (sr, sc) == (dr, dc) {
            prop_assert_eq!(paths.len(), 1);
            prop_assert!(paths[0].is_empty());
        } else {
            prop_assert!(paths.is_empty());
        }
    }

    #[test]
    fn prop_paths_are_distinct((n, moves, sr, sc, dr, dc) in query()) {
        let paths = find_paths(n, moves, sr, sc, dr, dc).unwrap();
        let mut sorted = paths.clone();
        sorted.sort_by(|a, b| a.moves().cmp(b.moves()));
        sorted.dedup();
        prop_assert_eq!(sorted.len(), paths.len());
    }
}
