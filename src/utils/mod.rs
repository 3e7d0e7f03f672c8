//! Utility functions and helpers.

/// Replace every occurrence of `character` with a space.
pub fn convert_to_spaces(value: &str, character: char) -> String {
    value.replace(character, " ")
}

/// Pad or truncate `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text}{}", " ".repeat(width - count))
    }
}
