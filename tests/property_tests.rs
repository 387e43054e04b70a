//! Property-based tests for the text transformation stages.

use matchrec::model::record::{Role, RoleMap};
use matchrec::parser::cards::collect_and_rewrite;
use matchrec::parser::extract::hand_size;
use matchrec::parser::lines::filter_lines;
use matchrec::parser::segment::split_games;
use proptest::prelude::*;

proptest! {
    /// Filtering is idempotent: re-filtering the output joined by a
    /// delimiter character reproduces it exactly.
    #[test]
    fn line_filter_is_idempotent(text in "[ -~\x07\u{FFFD}]{0,200}") {
        let once = filter_lines(&text);
        let again = filter_lines(&once.join("\x07"));
        prop_assert_eq!(once, again);
    }

    /// Every surviving line is longer than three characters.
    #[test]
    fn filtered_lines_are_long_enough(text in "\\PC{0,200}") {
        for line in filter_lines(&text) {
            prop_assert!(line.chars().count() > 3);
        }
    }

    /// No surviving line still carries a marker prefix.
    #[test]
    fn filtered_lines_have_no_marker(text in "[ -~\x07]{0,200}") {
        for line in filter_lines(&text) {
            prop_assert!(
                !line.contains("@P"),
                "Marker should have been stripped from {:?}", line
            );
        }
    }

    /// An attributed play is both recorded under the right role and
    /// flattened to its bare name in the rewritten text.
    #[test]
    fn attributed_plays_are_recorded_and_flattened(
        name in "[A-Za-z][A-Za-z' -]{0,18}[A-Za-z]",
        object_id in "[0-9]{1,6}",
        by_player in any::<bool>(),
    ) {
        let roles = RoleMap::new("Alice", "Bob");
        let who = if by_player { "Alice" } else { "Bob" };
        let text = format!("@P{who} casts @[{name}@:{object_id}:@]");

        let (cards, rewritten) = collect_and_rewrite(&text, &roles);

        let role = if by_player { Role::Player } else { Role::Opponent };
        prop_assert!(cards.for_role(role).contains(&name));
        prop_assert!(cards.for_role(role.other()).is_empty());
        prop_assert_eq!(rewritten, format!("@P{who} casts {name}"));
    }

    /// Segmentation covers every game line exactly once, in order, and
    /// never re-includes the preamble or the trailing line.
    #[test]
    fn segmentation_preserves_line_order(
        games in prop::collection::vec(1usize..6, 0..5),
        preamble in 0usize..4,
    ) {
        let mut lines: Vec<String> = Vec::new();
        for i in 0..preamble {
            lines.push(format!("preamble {i}"));
        }
        for (g, &len) in games.iter().enumerate() {
            lines.push(format!("g{g} chooses to play first"));
            for t in 0..len {
                lines.push(format!("game {g} line {t}"));
            }
        }
        lines.push("trailer".to_string());

        let segments = split_games(&lines);
        prop_assert_eq!(segments.len(), games.len());

        let flattened: Vec<&String> = segments.iter().flat_map(|s| s.iter()).collect();
        let expected: Vec<&String> = lines[preamble..lines.len() - 1].iter().collect();
        prop_assert_eq!(flattened, expected);
    }

    /// Hand words outside the known table are rejected.
    #[test]
    fn unknown_hand_words_are_rejected(word in "[a-z]{1,12}") {
        let known = ["one", "two", "three", "four", "five", "six", "seven"];
        prop_assume!(!known.contains(&word.as_str()));
        prop_assert_eq!(hand_size(&word), None);
    }
}

#[test]
fn hand_size_table_is_exact() {
    let expected = [
        ("one", 1u8),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
    ];
    for (word, n) in expected {
        assert_eq!(hand_size(word), Some(n), "hand word {word}");
    }
    assert_eq!(hand_size("zero"), None);
    assert_eq!(hand_size("eight"), None);
}
