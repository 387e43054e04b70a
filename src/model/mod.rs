//! Domain model types (pure).
//!
//! All types in this module are pure data; the parsing pipeline constructs
//! them and never mutates them afterwards.

pub mod error;
pub mod record;

// Re-export for convenience
pub use error::{AppError, InputError, MatchError};
pub use record::{
    CardsPlayed, GameRecord, MatchRecord, Players, Role, RoleMap, StartingHands, Winner,
};
