//! Match record types (pure data).
//!
//! Types describe the structured output of the pipeline: who played, what
//! they played, and how each game ended. Serialization follows the external
//! interchange contract exactly, so field names and enum renames here are
//! load-bearing.

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

// ===== Role =====

/// Logical seat assigned to a participant for one match.
///
/// The caller's preferred participant becomes `Player`; the remaining
/// identifier becomes `Opponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The participant the record is centered on.
    Player,
    /// The other participant.
    Opponent,
}

impl Role {
    /// The opposite seat.
    pub fn other(self) -> Role {
        match self {
            Role::Player => Role::Opponent,
            Role::Opponent => Role::Player,
        }
    }
}

// ===== Winner =====

/// Outcome of a single game.
///
/// `Draw` and `Unknown` only ever come from the escalation resolver; the
/// textual win/concede/lose patterns always name a concrete role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The player's seat won.
    Player,
    /// The opponent's seat won.
    Opponent,
    /// The game ended without a winner.
    Draw,
    /// The outcome could not be determined.
    Unknown,
}

impl From<Role> for Winner {
    fn from(role: Role) -> Self {
        match role {
            Role::Player => Winner::Player,
            Role::Opponent => Winner::Opponent,
        }
    }
}

// ===== RoleMap =====

/// Immutable mapping between the two raw participant identifiers and their
/// logical roles.
///
/// Invariant: exactly two identifiers, one per role. Constructed only by
/// identity resolution, which enforces the two-player requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMap {
    player: String,
    opponent: String,
}

impl RoleMap {
    /// Build a role map from the resolved identifiers.
    pub fn new(player: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            opponent: opponent.into(),
        }
    }

    /// Role of a raw identifier, or `None` for names outside the match.
    pub fn role_of(&self, name: &str) -> Option<Role> {
        if name == self.player {
            Some(Role::Player)
        } else if name == self.opponent {
            Some(Role::Opponent)
        } else {
            None
        }
    }

    /// Raw identifier occupying a seat.
    pub fn name_of(&self, role: Role) -> &str {
        match role {
            Role::Player => &self.player,
            Role::Opponent => &self.opponent,
        }
    }
}

// ===== Players =====

/// Participant names keyed by role; the record's `players` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Players {
    /// Name of the participant recorded as "player".
    pub player: String,
    /// Name of the participant recorded as "opponent".
    pub opponent: String,
}

impl From<&RoleMap> for Players {
    fn from(roles: &RoleMap) -> Self {
        Self {
            player: roles.name_of(Role::Player).to_string(),
            opponent: roles.name_of(Role::Opponent).to_string(),
        }
    }
}

// ===== CardsPlayed =====

/// Distinct card names each seat played during the match.
///
/// `BTreeSet` both collapses duplicates and keeps serialization order
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardsPlayed {
    /// Cards played by the player's seat.
    pub player: BTreeSet<String>,
    /// Cards played by the opponent's seat.
    pub opponent: BTreeSet<String>,
}

impl CardsPlayed {
    /// Record one card for a seat. Duplicates collapse.
    pub fn insert(&mut self, role: Role, name: impl Into<String>) {
        match role {
            Role::Player => self.player.insert(name.into()),
            Role::Opponent => self.opponent.insert(name.into()),
        };
    }

    /// The card set for a seat.
    pub fn for_role(&self, role: Role) -> &BTreeSet<String> {
        match role {
            Role::Player => &self.player,
            Role::Opponent => &self.opponent,
        }
    }
}

// ===== StartingHands =====

/// Starting hand sizes for one game.
///
/// A seat whose "begins the game with ... cards" line was not found stays
/// `None`: the fact is absent, not an error, and the field is omitted from
/// the serialized record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StartingHands {
    /// Player's starting hand size, if observed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<u8>,
    /// Opponent's starting hand size, if observed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<u8>,
}

impl StartingHands {
    /// Set a seat's hand size.
    pub fn set(&mut self, role: Role, cards: u8) {
        match role {
            Role::Player => self.player = Some(cards),
            Role::Opponent => self.opponent = Some(cards),
        }
    }

    /// A seat's hand size, if observed.
    pub fn get(self, role: Role) -> Option<u8> {
        match role {
            Role::Player => self.player,
            Role::Opponent => self.opponent,
        }
    }
}

// ===== GameRecord =====

/// Facts extracted from one game within the match. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// 1-based position of the game within the match.
    pub game_n: u32,
    /// Seat that chose to play first.
    pub on_play: Role,
    /// Observed starting hand sizes.
    pub starting_hands: StartingHands,
    /// Outcome of the game.
    pub winner: Winner,
    /// Number of the last `Turn <n>` marker reached.
    pub last_turn: u32,
}

// ===== MatchRecord =====

/// Top-level structured output for one match log.
///
/// Only complete matches produce a `MatchRecord`: construction requires two
/// resolved identities and at least two games, enforced by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    /// Participant names by role.
    pub players: Players,
    /// Distinct cards played by each seat.
    pub cards_played: CardsPlayed,
    /// Opaque match identifier: the first filtered line of the log.
    pub id_match: String,
    /// Modification time of the log file, rendered as a string.
    #[serde(serialize_with = "serialize_date")]
    pub date: DateTime<Local>,
    /// Per-game records, in match order.
    pub games: Vec<GameRecord>,
}

fn serialize_date<S>(date: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format("%Y-%m-%d %H:%M:%S"))
}
