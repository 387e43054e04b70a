//! Match log parsing pipeline.
//!
//! A raw log goes through six stages: loading, identity resolution, card
//! collection and rewriting, line filtering, game segmentation, and
//! per-game extraction. The stages are independently testable; this
//! module wires them together into [`parse_match`].

pub mod cards;
pub mod extract;
pub mod identity;
pub mod lines;
pub mod loader;
pub mod segment;

use crate::model::error::AppError;
use crate::model::record::{MatchRecord, Players};
use crate::resolve::WinnerResolver;
use std::path::Path;
use tracing::warn;

/// A log describing fewer games than this is not a match.
const MIN_GAMES: usize = 2;

/// Parse a match log file into a structured record.
///
/// Returns `Ok(None)` for logs that are readable but do not describe a
/// usable match, either because the participants cannot be identified or
/// because fewer than two games are present. Both cases are logged.
///
/// # Errors
///
/// Returns `AppError::Input` when the file cannot be read and
/// `AppError::Match` when a segmented game is malformed.
pub fn parse_match(
    path: impl AsRef<Path>,
    preferred_player: Option<&str>,
    resolver: &mut dyn WinnerResolver,
) -> Result<Option<MatchRecord>, AppError> {
    let log = loader::load_log(path)?;

    let roles = match identity::resolve_identities(&log.text, preferred_player) {
        Ok(roles) => roles,
        Err(err) => {
            warn!(error = %err, "Could not resolve player identities, skipping log");
            return Ok(None);
        }
    };

    let (cards_played, rewritten) = cards::collect_and_rewrite(&log.text, &roles);
    let filtered = lines::filter_lines(&rewritten);
    let games = segment::split_games(&filtered);

    if games.len() < MIN_GAMES {
        warn!(
            games = games.len(),
            "Log describes fewer than {MIN_GAMES} games, skipping"
        );
        return Ok(None);
    }

    let id_match = filtered.first().cloned().unwrap_or_default();

    let mut game_records = Vec::with_capacity(games.len());
    for (i, game) in games.iter().enumerate() {
        let game_n = i as u32 + 1;
        game_records.push(extract::extract_game(game_n, game, &roles, resolver)?);
    }

    Ok(Some(MatchRecord {
        players: Players::from(&roles),
        cards_played,
        id_match,
        date: log.modified,
        games: game_records,
    }))
}
