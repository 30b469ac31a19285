//! The game's operations: validate the menu, find paths, load the last
//! game.

use knight_core::{Board, Cell};
use knight_paths::{FindError, KnightPath};

use crate::error::GameError;
use crate::messages;
use crate::preferences::PreferenceRepository;
use crate::solutions::KnightPathRepository;
use crate::store::{PreferenceStore, SolutionStore};
use crate::task::{SearchQuery, SearchResult};
use crate::validation::{MenuValidation, parse_number, validate_menu_input};

// ---------------------------------------------------------------------------
// Requests / responses
// ---------------------------------------------------------------------------

/// The two squares the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindRequest {
    pub source: Cell,
    pub destination: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindResponse {
    pub solutions: Vec<KnightPath>,
    /// Set when no path was found.
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadGameResponse {
    pub board_size: i32,
    pub source: Option<Cell>,
    pub destination: Option<Cell>,
    pub solutions: Vec<KnightPath>,
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// Game operations over a preference store and a solution store.
#[derive(Debug)]
pub struct Game<P, S> {
    preferences: PreferenceRepository<P>,
    solutions: KnightPathRepository<S>,
}

impl<P: PreferenceStore, S: SolutionStore> Game<P, S> {
    pub fn new(preferences: P, solutions: S) -> Self {
        Self {
            preferences: PreferenceRepository::new(preferences),
            solutions: KnightPathRepository::new(solutions),
        }
    }

    pub fn preferences(&self) -> &PreferenceRepository<P> {
        &self.preferences
    }

    pub fn solutions(&self) -> &KnightPathRepository<S> {
        &self.solutions
    }

    /// Check the menu fields and, if both are valid, store them as the
    /// preferred board size and move count.
    pub fn validate_menu_input(
        &mut self,
        board_size: &str,
        moves: &str,
    ) -> Result<MenuValidation, GameError> {
        let validation = validate_menu_input(board_size, moves);
        if validation.has_error() {
            log::info!("menu input rejected: {:?}", validation.messages());
            return Ok(validation);
        }
        // Both parse: validation just succeeded.
        if let (Some(size), Some(moves)) = (parse_number(board_size), parse_number(moves)) {
            self.preferences.save_preferred_board_size(size)?;
            self.preferences.save_preferred_moves(moves)?;
            log::info!("preferred board size {size}, {moves} moves");
        }
        Ok(validation)
    }

    /// The search described by `request` under the preferred settings.
    pub fn query(&self, request: FindRequest) -> Result<SearchQuery, GameError> {
        let size = self.preferences.preferred_board_size();
        let board = Board::new(size).ok_or(FindError::InvalidBoardSize(size))?;
        Ok(SearchQuery {
            board,
            moves: self.preferences.preferred_moves(),
            source: request.source,
            destination: request.destination,
        })
    }

    /// Run the search for `request` and record the outcome.
    pub fn find_knight_paths(&mut self, request: FindRequest) -> Result<FindResponse, GameError> {
        let query = self.query(request)?;
        let result = query.run();
        self.complete(query, result)
    }

    /// Record the result of `query`, typically produced by a
    /// [`SearchTask`](crate::task::SearchTask).
    ///
    /// An empty result stores nothing. Otherwise the old solutions are
    /// replaced and the board size, source and destination are saved, in
    /// that order.
    pub fn complete(
        &mut self,
        query: SearchQuery,
        result: SearchResult,
    ) -> Result<FindResponse, GameError> {
        let solutions = result?;
        if solutions.is_empty() {
            log::info!(
                "no {}-move path from {} to {}",
                query.moves,
                query.source,
                query.destination
            );
            return Ok(FindResponse {
                solutions,
                error_message: Some(messages::NO_SOLUTION.to_string()),
            });
        }

        self.solutions.delete_all()?;
        self.solutions.save(&solutions)?;
        self.preferences.save_last_board_size(query.board.size())?;
        self.preferences.save_source(query.source)?;
        self.preferences.save_destination(query.destination)?;
        log::info!("saved {} solutions", solutions.len());

        Ok(FindResponse {
            solutions,
            error_message: None,
        })
    }

    /// The last solved game, or an empty board at the preferred size if
    /// nothing was solved yet.
    pub fn load_game(&self) -> LoadGameResponse {
        if self.preferences.has_last_saved_board_size() {
            LoadGameResponse {
                board_size: self.preferences.last_saved_board_size(),
                source: self.preferences.source(),
                destination: self.preferences.destination(),
                solutions: self.solutions.load(),
            }
        } else {
            LoadGameResponse {
                board_size: self.preferences.preferred_board_size(),
                source: None,
                destination: None,
                solutions: Vec::new(),
            }
        }
    }
}
