//! The fixed substitution table used to author trial prompts.

mod table;

pub use table::SYMBOLS;

pub fn symbol_for(c: char) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    SYMBOLS
        .iter()
        .find(|(plain, _)| *plain == upper)
        .map(|(_, symbol)| *symbol)
}

pub fn char_for(symbol: char) -> Option<char> {
    SYMBOLS
        .iter()
        .find(|(_, s)| *s == symbol)
        .map(|(plain, _)| *plain)
}

pub fn is_symbol(c: char) -> bool {
    char_for(c).is_some()
}

/// Encode plain text. Characters outside the table pass through unchanged.
pub fn encode(text: &str) -> String {
    text.chars().map(|c| symbol_for(c).unwrap_or(c)).collect()
}

/// Decode cipher text. Characters that are not cipher symbols pass through.
pub fn decode(text: &str) -> String {
    text.chars().map(|c| char_for(c).unwrap_or(c)).collect()
}
