//! Line filtering: split the raw text on junk characters and keep only
//! meaningful fragments.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that delimit fragments: control bytes, high bytes, the
/// replacement character, and a set of structural punctuation. Note that
/// newline, carriage return, and tab are deliberately absent.
static SPLIT_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F-\u{FF}\u{FFFD}\.\{\}\|\\=#\^><\$]")
        .expect("split class is valid")
});

/// Leading marker noise. Greedy, so everything through the last `@P` on
/// the fragment goes.
static MARKER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*@P").expect("marker prefix pattern is valid"));

/// Split the text into fragments, strip marker prefixes, and drop
/// fragments of three or fewer characters.
///
/// The operation is idempotent: filtering already-filtered lines changes
/// nothing.
pub fn filter_lines(text: &str) -> Vec<String> {
    SPLIT_CLASS
        .split(text)
        .map(|fragment| MARKER_PREFIX.replace(fragment, "").into_owned())
        .filter(|line| line.chars().count() > 3)
        .collect()
}
