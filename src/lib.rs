//! # bizboard
//!
//! Turn-based game-flow engine for a board game about founding and growing
//! companies. Landing on a company field offers a purchase that has to be
//! earned in a quiz; bank and action fields deal cards that move players,
//! pay them, make them skip or let them roll again.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: One `GameSession` holds all mutable state and
//!    is passed by reference. Nothing is looked up ambiently.
//!
//! 2. **Suspension as state**: Every step that waits on the outside world
//!    (dice, walk animation, offer prompt, quiz, card popup, field choice)
//!    is an `Awaiting` variant. Inputs that arrive out of order are refused
//!    and change nothing.
//!
//! 3. **Nothing is fatal**: Lookup failures, unaffordable purchases and
//!    illegal upgrades end the current turn early; they never stop the game.
//!
//! ## Modules
//!
//! - `core`: Players, session state, RNG, configuration, errors
//! - `board`: Field layout, company ownership and catalog
//! - `ledger`: Money and ownership mutation
//! - `cards`: Decks, fixed effect tables, card resolution
//! - `quiz`: Question bank, quiz series, quiz-gated purchases
//! - `turn`: Rotation, movement and landing, field selection, skips
//! - `engine`: The turn state machine and its builder
//! - `driver`: Async driver over pluggable collaborators

pub mod board;
pub mod cards;
pub mod core;
pub mod driver;
pub mod engine;
pub mod ledger;
pub mod quiz;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    FlowError, GameRng, GameSession, LedgerError, Money, Player, PlayerId, QuizRules, QuizSpec,
    SessionConfig, SetupError,
};

pub use crate::board::{
    Board, BoardLayout, CompanyCatalog, CompanyConfig, CompanyLevel, FieldIndex, FieldKind,
};

pub use crate::cards::{Card, CardEffect, CardId, Deck, DeckFilter, DeckKind, EffectCategory};

pub use crate::ledger::{Economy, Ownership, RentOutcome};

pub use crate::quiz::{PurchaseFlow, PurchaseOffer, QuestionBank, QuizRequest, QuizSeries};

pub use crate::turn::{FieldSelection, Landing, MovePlan, MovementResolver, TurnCoordinator};

pub use crate::engine::{Awaiting, GameBuilder, GameEngine, SessionSnapshot, Signal, Signals};

pub use crate::driver::{ChannelCollaborators, Collaborators, GameDriver, TurnReport};
