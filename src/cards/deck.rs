//! Decks and the eligible-card filter.
//!
//! Deck files look like
//!
//! ```json
//! { "name": "Bankkarten", "karten": [ { "id": 1, "text": "..." } ] }
//! ```
//!
//! Draws are uniform over the cards the filter admits and never remove a
//! card: the deck is immutable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Card, CardEffect, CardId, DeckKind, EffectCategory};
use crate::core::{GameRng, SetupError};

/// Which cards of a deck may be drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckFilter {
    /// Normal play.
    #[default]
    All,
    /// Only cards whose effect falls in one of these categories.
    Categories(Vec<EffectCategory>),
    /// Only these card ids.
    Cards(Vec<CardId>),
}

impl DeckFilter {
    fn admits(&self, deck: DeckKind, card: &Card) -> bool {
        match self {
            Self::All => true,
            Self::Categories(categories) => {
                categories.contains(&CardEffect::for_card(deck, card.id).category())
            }
            Self::Cards(ids) => ids.contains(&card.id),
        }
    }
}

#[derive(Deserialize)]
struct DeckFile {
    #[serde(default)]
    name: String,
    #[serde(default, alias = "karten")]
    cards: Vec<Card>,
}

/// An immutable deck.
#[derive(Clone, Debug)]
pub struct Deck {
    kind: DeckKind,
    name: String,
    cards: Vec<Card>,
}

impl Deck {
    /// A deck with the given cards.
    pub fn new(kind: DeckKind, name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            kind,
            name: name.into(),
            cards,
        }
    }

    /// A deck with no cards.
    #[must_use]
    pub fn empty(kind: DeckKind) -> Self {
        Self::new(kind, String::new(), Vec::new())
    }

    /// Parse a deck file.
    pub fn from_json(kind: DeckKind, json: &str) -> Result<Self, SetupError> {
        let file: DeckFile = serde_json::from_str(json)?;
        Ok(Self::new(kind, file.name, file.cards))
    }

    /// Read and parse a deck file.
    pub fn load(kind: DeckKind, path: &Path) -> Result<Self, SetupError> {
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(kind, &json)
    }

    /// Like [`load`](Self::load), but degrades to an empty deck.
    #[must_use]
    pub fn load_or_empty(kind: DeckKind, path: &Path) -> Self {
        match Self::load(kind, path) {
            Ok(deck) => {
                if deck.is_empty() {
                    warn!(deck = %kind, path = %path.display(), "deck is empty");
                }
                deck
            }
            Err(err) => {
                warn!(
                    deck = %kind,
                    path = %path.display(),
                    error = %err,
                    "deck unavailable, using empty deck",
                );
                Self::empty(kind)
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards the filter admits, in deck order.
    #[must_use]
    pub fn eligible(&self, filter: &DeckFilter) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| filter.admits(self.kind, card))
            .collect()
    }

    /// Draw one eligible card uniformly at random.
    ///
    /// `None` when no card is eligible.
    pub fn draw(&self, filter: &DeckFilter, rng: &mut GameRng) -> Option<&Card> {
        let eligible = self.eligible(filter);
        rng.choose(&eligible).copied()
    }
}
