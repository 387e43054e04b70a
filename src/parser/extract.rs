//! Per-game extraction: on-play, starting hands, winner, and last turn.

use crate::model::error::MatchError;
use crate::model::record::{GameRecord, Role, RoleMap, StartingHands, Winner};
use crate::resolve::WinnerResolver;
use once_cell::sync::Lazy;
use regex::Regex;

static ON_PLAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+) chooses to play first").expect("on-play pattern is valid"));

static STARTING_HAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.+) begins the game with (\w+) cards").expect("hand pattern is valid")
});

static WINS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+) wins the game").expect("wins pattern is valid"));

static CONCEDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+) has conceded").expect("conceded pattern is valid"));

static LOSES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+) loses the game").expect("loses pattern is valid"));

static TURN: Lazy<Regex> = Lazy::new(|| Regex::new(r"Turn (\d+)").expect("turn pattern is valid"));

/// Lines of trailing context shown when outcome resolution escalates.
const RESOLVER_CONTEXT_LINES: usize = 8;

/// Translate a spelled-out hand size into its numeric value.
pub fn hand_size(word: &str) -> Option<u8> {
    match word {
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        _ => None,
    }
}

/// Extract a complete game record from one game's lines.
///
/// The winner is determined by the first matching signal in priority
/// order: an explicit win, then a concession, then a loss. Signals whose
/// subject maps to neither role are skipped. When no signal resolves, the
/// outcome is escalated to the resolver with the game's trailing lines as
/// context.
///
/// # Errors
///
/// Returns `MatchError` when the game lacks an on-play line or a turn
/// marker, or announces a hand size outside one through seven.
pub fn extract_game(
    game_n: u32,
    lines: &[String],
    roles: &RoleMap,
    resolver: &mut dyn WinnerResolver,
) -> Result<GameRecord, MatchError> {
    let first = lines.first().map(String::as_str).unwrap_or_default();
    let on_play = ON_PLAY
        .captures(first)
        .and_then(|c| c.get(1))
        .and_then(|m| roles.role_of(m.as_str()))
        .ok_or(MatchError::MissingOnPlay { game_n })?;

    let mut starting_hands = StartingHands::default();
    for line in lines {
        if let Some(caps) = STARTING_HAND.captures(line) {
            let subject = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let word = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            // The identifier is the first whitespace-separated token of
            // the subject capture.
            let name = subject.split_whitespace().next().unwrap_or_default();
            let Some(role) = roles.role_of(name) else {
                continue;
            };
            let size = hand_size(word).ok_or_else(|| MatchError::UnknownHandSize {
                game_n,
                word: word.to_string(),
            })?;
            starting_hands.set(role, size);
        }
    }

    let joined = lines.join(" ");
    let winner = find_winner(&joined, roles).unwrap_or_else(|| {
        let context_start = lines.len().saturating_sub(RESOLVER_CONTEXT_LINES);
        resolver.resolve(
            &lines[context_start..],
            roles.name_of(Role::Player),
            roles.name_of(Role::Opponent),
        )
    });

    let last_turn = TURN
        .captures_iter(&joined)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .last()
        .ok_or(MatchError::MissingTurnMarker { game_n })?;

    Ok(GameRecord {
        game_n,
        on_play,
        starting_hands,
        winner,
        last_turn,
    })
}

/// Find the winner from explicit outcome signals, in priority order.
fn find_winner(joined: &str, roles: &RoleMap) -> Option<Winner> {
    let role_of = |caps: regex::Captures<'_>| {
        caps.get(1).and_then(|m| roles.role_of(m.as_str()))
    };

    if let Some(role) = WINS.captures_iter(joined).find_map(role_of) {
        return Some(Winner::from(role));
    }
    if let Some(role) = CONCEDED.captures_iter(joined).find_map(role_of) {
        return Some(Winner::from(role.other()));
    }
    if let Some(role) = LOSES.captures_iter(joined).find_map(role_of) {
        return Some(Winner::from(role.other()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::FixedResolver;

    fn roles() -> RoleMap {
        RoleMap::new("Alice", "Bob")
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn extract(game: &[String]) -> Result<GameRecord, MatchError> {
        let mut resolver = FixedResolver(Winner::Unknown);
        extract_game(1, game, &roles(), &mut resolver)
    }

    #[test]
    fn full_game_extracts_every_field() {
        let game = lines(&[
            "Alice chooses to play first",
            "Alice begins the game with seven cards",
            "Bob begins the game with six cards",
            "Turn 1: Alice",
            "Turn 2: Bob",
            "Bob wins the game",
        ]);
        let record = extract(&game).unwrap();
        assert_eq!(record.on_play, Role::Player);
        assert_eq!(record.starting_hands.get(Role::Player), Some(7));
        assert_eq!(record.starting_hands.get(Role::Opponent), Some(6));
        assert_eq!(record.winner, Winner::Opponent);
        assert_eq!(record.last_turn, 2);
    }

    #[test]
    fn missing_on_play_line_is_an_error() {
        let game = lines(&["Turn 1: Alice", "Alice wins the game"]);
        assert_eq!(extract(&game), Err(MatchError::MissingOnPlay { game_n: 1 }));
    }

    #[test]
    fn unknown_on_play_subject_is_an_error() {
        let game = lines(&["Mallory chooses to play first", "Turn 1: Alice"]);
        assert_eq!(extract(&game), Err(MatchError::MissingOnPlay { game_n: 1 }));
    }

    #[test]
    fn empty_game_is_missing_on_play() {
        assert_eq!(extract(&[]), Err(MatchError::MissingOnPlay { game_n: 1 }));
    }

    #[test]
    fn hand_subject_is_the_first_token() {
        let game = lines(&[
            "Bob chooses to play first",
            "Alice mulliganed and begins the game with six cards",
            "Turn 1: Bob",
            "Alice wins the game",
        ]);
        let record = extract(&game).unwrap();
        assert_eq!(record.starting_hands.get(Role::Player), Some(6));
        assert_eq!(record.starting_hands.get(Role::Opponent), None);
    }

    #[test]
    fn unknown_hand_subject_is_skipped() {
        let game = lines(&[
            "Alice chooses to play first",
            "Mallory begins the game with seven cards",
            "Turn 1: Alice",
            "Alice wins the game",
        ]);
        let record = extract(&game).unwrap();
        assert_eq!(record.starting_hands.get(Role::Player), None);
        assert_eq!(record.starting_hands.get(Role::Opponent), None);
    }

    #[test]
    fn unknown_hand_word_is_an_error() {
        let game = lines(&[
            "Alice chooses to play first",
            "Alice begins the game with eight cards",
            "Turn 1: Alice",
        ]);
        assert_eq!(
            extract(&game),
            Err(MatchError::UnknownHandSize {
                game_n: 1,
                word: "eight".to_string()
            })
        );
    }

    #[test]
    fn win_signal_outranks_concession() {
        let game = lines(&[
            "Alice chooses to play first",
            "Turn 3: Bob",
            "Bob has conceded",
            "Alice wins the game",
        ]);
        // Both signals name the same outcome here; the win signal is the
        // one consulted first.
        let record = extract(&game).unwrap();
        assert_eq!(record.winner, Winner::Player);
    }

    #[test]
    fn concession_awards_the_other_role() {
        let game = lines(&[
            "Alice chooses to play first",
            "Turn 4: Alice",
            "Alice has conceded",
        ]);
        let record = extract(&game).unwrap();
        assert_eq!(record.winner, Winner::Opponent);
    }

    #[test]
    fn loss_awards_the_other_role() {
        let game = lines(&[
            "Bob chooses to play first",
            "Turn 9: Bob",
            "Bob loses the game",
        ]);
        let record = extract(&game).unwrap();
        assert_eq!(record.winner, Winner::Player);
    }

    #[test]
    fn unresolvable_signal_falls_through_to_next() {
        let game = lines(&[
            "Alice chooses to play first",
            "Turn 5: Alice",
            "Mallory wins the game",
            "Alice has conceded",
        ]);
        let record = extract(&game).unwrap();
        assert_eq!(record.winner, Winner::Opponent);
    }

    #[test]
    fn no_signal_escalates_to_the_resolver() {
        let game = lines(&[
            "Alice chooses to play first",
            "Turn 6: Bob",
            "connection lost",
        ]);
        let mut resolver = FixedResolver(Winner::Draw);
        let record = extract_game(2, &game, &roles(), &mut resolver).unwrap();
        assert_eq!(record.winner, Winner::Draw);
    }

    #[test]
    fn resolver_sees_only_trailing_context() {
        struct Capture(Vec<String>);
        impl WinnerResolver for Capture {
            fn resolve(&mut self, context: &[String], _: &str, _: &str) -> Winner {
                self.0 = context.to_vec();
                Winner::Unknown
            }
        }

        let mut game = lines(&["Alice chooses to play first"]);
        for i in 1..=12 {
            game.push(format!("Turn {i}: Alice"));
        }
        let mut resolver = Capture(Vec::new());
        extract_game(1, &game, &roles(), &mut resolver).unwrap();
        assert_eq!(resolver.0.len(), 8);
        assert_eq!(resolver.0[0], "Turn 5: Alice");
        assert_eq!(resolver.0[7], "Turn 12: Alice");
    }

    #[test]
    fn last_turn_is_the_final_marker() {
        let game = lines(&[
            "Bob chooses to play first",
            "Turn 1: Bob",
            "Turn 2: Alice",
            "Turn 10: Bob",
            "Bob wins the game",
        ]);
        let record = extract(&game).unwrap();
        assert_eq!(record.last_turn, 10);
    }

    #[test]
    fn missing_turn_marker_is_an_error() {
        let game = lines(&["Alice chooses to play first", "Alice wins the game"]);
        assert_eq!(
            extract(&game),
            Err(MatchError::MissingTurnMarker { game_n: 1 })
        );
    }

    #[test]
    fn hand_size_covers_one_through_seven() {
        assert_eq!(hand_size("one"), Some(1));
        assert_eq!(hand_size("four"), Some(4));
        assert_eq!(hand_size("seven"), Some(7));
        assert_eq!(hand_size("eight"), None);
        assert_eq!(hand_size(""), None);
    }
}
