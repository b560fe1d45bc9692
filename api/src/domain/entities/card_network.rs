//! Card network domain entity
//!
//! The issuing scheme a card number most likely belongs to.

/// Card network identified from a number's prefix and length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    Visa,
    MasterCard,
    AmericanExpress,
    Unknown,
}

impl CardNetwork {
    /// Label reported to clients
    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::MasterCard => "MasterCard",
            CardNetwork::AmericanExpress => "American Express",
            CardNetwork::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CardNetwork::Unknown)
    }
}

impl std::fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
