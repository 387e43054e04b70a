//! Game segmentation: cut the filtered line stream into per-game slices.

/// Phrase that opens every game.
pub const GAME_START_MARKER: &str = "chooses to play first";

/// Split filtered lines into per-game slices.
///
/// A new segment starts at each line containing the start marker. The
/// leading segment (everything before the first marker) is the match
/// preamble and is discarded. The final segment excludes the very last
/// line of the input.
pub fn split_games(lines: &[String]) -> Vec<&[String]> {
    let mut games: Vec<&[String]> = Vec::new();
    let mut start = 0;

    for (i, line) in lines.iter().enumerate() {
        if line.contains(GAME_START_MARKER) {
            games.push(&lines[start..i]);
            start = i;
        }
    }
    games.push(&lines[start..lines.len().saturating_sub(1)]);

    // The first segment is the preamble, possibly empty when the input
    // opens on a marker.
    games.remove(0);
    games
}
