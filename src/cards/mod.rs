//! Card system: records, decks, effect tables and resolution.
//!
//! ## Key Types
//!
//! - `Card`: immutable `{id, text}` record
//! - `Deck`: immutable list of cards with filtered uniform draws
//! - `CardEffect`: what a card id does, from a fixed per-deck table
//! - `CardResolver`: applies an effect and reports how the turn continues

pub mod deck;
pub mod definition;
pub mod effect;
pub mod resolver;

pub use deck::{Deck, DeckFilter};
pub use definition::{Card, CardId, DeckKind};
pub use effect::{CardEffect, EffectCategory, FieldChoice};
pub use resolver::{CardOutcome, CardResolver};
