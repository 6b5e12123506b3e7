//! Card records.
//!
//! A card is only an id and a display text. What it does is decided by the
//! fixed id table in [`effect`](super::effect), keyed by the deck it came
//! from.

use serde::{Deserialize, Serialize};

/// Card identifier, unique within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The two decks on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    Bank,
    Action,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bank => f.write_str("bank"),
            Self::Action => f.write_str("action"),
        }
    }
}

/// An immutable card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    /// Create a card.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            text: text.into(),
        }
    }
}
