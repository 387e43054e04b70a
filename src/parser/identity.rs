//! Identity resolution: find the two players from the dice-roll lines.

use crate::model::record::RoleMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use thiserror::Error;

/// Dice-roll announcement carrying a player identifier.
static ROLL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@P(\w+) rolled").expect("roll pattern is valid"));

/// Why the two participants could not be pinned down.
///
/// These are soft failures: the caller logs them and yields no record
/// rather than aborting the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The log did not mention exactly two distinct roll identifiers.
    #[error("Expected exactly 2 players in the log, found {count}")]
    NotTwoPlayers {
        /// Number of distinct identifiers seen.
        count: usize,
    },
    /// A preferred player was requested but matches neither identifier.
    #[error("Preferred player '{name}' does not appear in the log")]
    PreferredNotFound {
        /// The requested name.
        name: String,
    },
}

/// Determine which identifier is the player and which the opponent.
///
/// All roll identifiers in the text are collected; there must be exactly
/// two distinct ones. With no preference the assignment is deterministic:
/// the lexicographically smaller identifier becomes the player. With a
/// preference, that identifier becomes the player and must be one of the
/// two found.
///
/// # Errors
///
/// Returns `IdentityError` when the identifier count is not two or the
/// preferred name is absent.
pub fn resolve_identities(text: &str, preferred: Option<&str>) -> Result<RoleMap, IdentityError> {
    let identifiers: BTreeSet<&str> = ROLL_LINE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    if identifiers.len() != 2 {
        return Err(IdentityError::NotTwoPlayers {
            count: identifiers.len(),
        });
    }

    let mut iter = identifiers.into_iter();
    let first = iter.next().expect("set has two elements");
    let second = iter.next().expect("set has two elements");

    match preferred {
        None => Ok(RoleMap::new(first, second)),
        Some(name) if name == first => Ok(RoleMap::new(first, second)),
        Some(name) if name == second => Ok(RoleMap::new(second, first)),
        Some(name) => Err(IdentityError::PreferredNotFound {
            name: name.to_string(),
        }),
    }
}
