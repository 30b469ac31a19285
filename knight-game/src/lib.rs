//! Knight path puzzle game: menu validation, stored preferences and
//! solutions, and text output around the [`knight_paths`] search.

pub mod config;
pub mod error;
pub mod format;
pub mod messages;
pub mod preferences;
pub mod solutions;
pub mod store;
pub mod task;
pub mod usecase;
pub mod validation;

pub use config::GameConfig;
pub use error::GameError;
pub use format::{format_solutions, solutions_or_message};
pub use store::{JsonPreferences, JsonSolutions, MemoryPreferences, MemorySolutions};
pub use task::{Context, SearchQuery, SearchTask};
pub use usecase::{FindRequest, FindResponse, Game, LoadGameResponse};
pub use validation::{MenuValidation, validate_menu_input};
