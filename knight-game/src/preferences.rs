//! Typed access to the stored game preferences.

use knight_core::Cell;

use crate::config::{DEFAULT_BOARD_SIZE, DEFAULT_MOVES};
use crate::error::GameError;
use crate::store::PreferenceStore;

const BOARD_SIZE_KEY: &str = "board_size";
const MOVES_KEY: &str = "moves";
const LAST_BOARD_SIZE_KEY: &str = "last_saved_board_size";
const SOURCE_ROW_KEY: &str = "last_saved_source_row";
const SOURCE_COL_KEY: &str = "last_saved_source_col";
const DESTINATION_ROW_KEY: &str = "last_saved_destination_row";
const DESTINATION_COL_KEY: &str = "last_saved_destination_col";

/// Stored coordinate meaning "no square selected".
pub const NO_COORDINATE: i32 = -1;

/// Preferred settings and the last solved game.
#[derive(Debug)]
pub struct PreferenceRepository<S> {
    store: S,
}

impl<S: PreferenceStore> PreferenceRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn preferred_board_size(&self) -> i32 {
        self.get(BOARD_SIZE_KEY, DEFAULT_BOARD_SIZE)
    }

    pub fn preferred_moves(&self) -> i32 {
        self.get(MOVES_KEY, DEFAULT_MOVES)
    }

    pub fn save_preferred_board_size(&mut self, size: i32) -> Result<(), GameError> {
        self.store.put_int(BOARD_SIZE_KEY, size)
    }

    pub fn save_preferred_moves(&mut self, moves: i32) -> Result<(), GameError> {
        self.store.put_int(MOVES_KEY, moves)
    }

    pub fn has_last_saved_board_size(&self) -> bool {
        self.store.contains(LAST_BOARD_SIZE_KEY)
    }

    pub fn last_saved_board_size(&self) -> i32 {
        self.get(LAST_BOARD_SIZE_KEY, DEFAULT_BOARD_SIZE)
    }

    pub fn save_last_board_size(&mut self, size: i32) -> Result<(), GameError> {
        self.store.put_int(LAST_BOARD_SIZE_KEY, size)
    }

    pub fn source(&self) -> Option<Cell> {
        self.cell(SOURCE_ROW_KEY, SOURCE_COL_KEY)
    }

    pub fn destination(&self) -> Option<Cell> {
        self.cell(DESTINATION_ROW_KEY, DESTINATION_COL_KEY)
    }

    pub fn save_source(&mut self, c: Cell) -> Result<(), GameError> {
        self.store.put_int(SOURCE_ROW_KEY, c.row)?;
        self.store.put_int(SOURCE_COL_KEY, c.col)
    }

    pub fn save_destination(&mut self, c: Cell) -> Result<(), GameError> {
        self.store.put_int(DESTINATION_ROW_KEY, c.row)?;
        self.store.put_int(DESTINATION_COL_KEY, c.col)
    }

    fn get(&self, key: &str, default: i32) -> i32 {
        self.store.get_int(key).unwrap_or(default)
    }

    fn cell(&self, row_key: &str, col_key: &str) -> Option<Cell> {
        let row = self.get(row_key, NO_COORDINATE);
        let col = self.get(col_key, NO_COORDINATE);
        (row != NO_COORDINATE && col != NO_COORDINATE).then(|| Cell::new(row, col))
    }
}
