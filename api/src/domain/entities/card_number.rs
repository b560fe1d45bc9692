//! Card number domain entity
//!
//! A candidate payment-card number as submitted by a client, held in its
//! canonical (normalized) form.

/// A card number with formatting spaces removed.
///
/// Only U+0020 spaces are stripped. Any other character, including tabs and
/// dashes, is kept so the checksum can reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    /// Normalize raw user input into a card number
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(|c| *c != ' ').collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters, safe to write to logs
    pub fn masked(&self) -> String {
        let tail: Vec<char> = self.0.chars().rev().take(4).collect();
        let tail: String = tail.into_iter().rev().collect();
        format!("****{}", tail)
    }
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.masked())
    }
}
