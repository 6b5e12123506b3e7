//! Core types: players, session state, RNG, configuration, errors.
//!
//! Everything else in the crate operates on a `GameSession` passed by
//! reference; nothing here knows about turn flow or cards.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{DiceConfig, QuizRules, QuizSpec, SessionConfig};
pub use error::{FlowError, LedgerError, SetupError};
pub use player::{Money, Player, PlayerId};
pub use rng::{GameRng, RngStreams};
pub use state::{GameSession, TurnState};
