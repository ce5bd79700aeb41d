use std::fmt;

/// The fixed estimation deck, in display order.
pub const DECK: [CardValue; 10] = [
    CardValue::Zero,
    CardValue::One,
    CardValue::Two,
    CardValue::Three,
    CardValue::Five,
    CardValue::Eight,
    CardValue::Thirteen,
    CardValue::NinetyNine,
    CardValue::Question,
    CardValue::Coffee,
];

/// One face of the estimation deck. Values are opaque tokens; the client
/// performs no arithmetic on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardValue {
    Zero,
    One,
    Two,
    Three,
    Five,
    Eight,
    Thirteen,
    NinetyNine,
    Question,
    Coffee,
}

impl CardValue {
    /// The wire and display token for this card.
    pub fn as_str(self) -> &'static str {
        match self {
            CardValue::Zero => "0",
            CardValue::One => "1",
            CardValue::Two => "2",
            CardValue::Three => "3",
            CardValue::Five => "5",
            CardValue::Eight => "8",
            CardValue::Thirteen => "13",
            CardValue::NinetyNine => "99",
            CardValue::Question => "?",
            CardValue::Coffee => "☕",
        }
    }

    /// Parses a display token back into a card, if it names one.
    pub fn parse(token: &str) -> Option<CardValue> {
        DECK.iter().copied().find(|card| card.as_str() == token)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
