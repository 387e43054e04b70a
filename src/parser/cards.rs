//! Card references: record who played what, then flatten the markup.

use crate::model::record::{CardsPlayed, RoleMap};
use once_cell::sync::Lazy;
use regex::Regex;

/// A card reference anywhere in the text. Group 1 is the card name.
static CARD_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\[([a-zA-Z\s,'-]+)@:[0-9,]+:@\]").expect("card pattern is valid"));

/// A play action attributing a card to a player. Group 1 is the player
/// identifier, group 3 the card name.
static PLAY_ACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@P(\w+) (casts|plays|discards|cycles|reveals) @\[([a-zA-Z\s,'-]+)@:[0-9,]+:@\]")
        .expect("play pattern is valid")
});

/// Collect attributed card plays, then rewrite every card reference in the
/// text down to its bare name.
///
/// Collection runs against the original markup before any rewriting, so
/// the two passes cannot interfere. Plays attributed to an identifier that
/// maps to neither role are skipped.
pub fn collect_and_rewrite(text: &str, roles: &RoleMap) -> (CardsPlayed, String) {
    let mut cards = CardsPlayed::default();

    for caps in PLAY_ACTION.captures_iter(text) {
        let who = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let name = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
        if let Some(role) = roles.role_of(who) {
            cards.insert(role, name);
        }
    }

    let rewritten = CARD_REF.replace_all(text, "$1").into_owned();
    (cards, rewritten)
}
