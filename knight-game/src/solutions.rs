//! Stored knight paths.
//!
//! Each path is one row of comma-joined move labels (`"Nb3,Nc5"`).

use knight_paths::KnightPath;

use crate::error::GameError;
use crate::store::SolutionStore;

const SEPARATOR: &str = ",";

/// Encode a path as a stored row.
pub fn encode_path(path: &KnightPath) -> String {
    path.moves().join(SEPARATOR)
}

/// Decode a stored row. An empty row is the empty path.
pub fn decode_path(row: &str) -> KnightPath {
    if row.is_empty() {
        return KnightPath::default();
    }
    row.split(SEPARATOR).map(str::to_string).collect()
}

/// Saves and restores the latest solutions.
#[derive(Debug)]
pub struct KnightPathRepository<S> {
    store: S,
}

impl<S: SolutionStore> KnightPathRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn save(&mut self, paths: &[KnightPath]) -> Result<(), GameError> {
        self.store.insert_rows(paths.iter().map(encode_path).collect())
    }

    pub fn load(&self) -> Vec<KnightPath> {
        self.store.rows().iter().map(|r| decode_path(r)).collect()
    }

    pub fn delete_all(&mut self) -> Result<(), GameError> {
        self.store.delete_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySolutions;

    fn path(moves: &[&str]) -> KnightPath {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn encoding() {
        assert_eq!(encode_path(&path(&["Nb3", "Nc5"])), "Nb3,Nc5");
        assert_eq!(encode_path(&path(&["Nc2"])), "Nc2");
        assert_eq!(encode_path(&KnightPath::default()), "");
        assert_eq!(decode_path("Nb3,Nc5"), path(&["Nb3", "Nc5"]));
        assert!(decode_path("").is_empty());
    }

    #[test]
    fn save_load_delete() {
        let mut repo = KnightPathRepository::new(MemorySolutions::new());
        let paths = vec![path(&["Nb3", "Nd2", "Nb1"]), path(&["Nc2", "Na3", "Nb1"])];
        repo.save(&paths).unwrap();
        assert_eq!(repo.load(), paths);
        assert_eq!(repo.store().rows(), vec!["Nb3,Nd2,Nb1", "Nc2,Na3,Nb1"]);
        repo.delete_all().unwrap();
        assert!(repo.load().is_empty());
    }
}
