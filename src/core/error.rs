//! Error types.
//!
//! Nothing in the game flow is fatal to the session: ledger and flow errors
//! are values the engine branches on, and the worst outcome of any of them
//! is that the current turn ends early. `SetupError` is only produced while
//! loading configuration and data files.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{CompanyLevel, FieldIndex};
use crate::core::{Money, PlayerId};

/// Errors raised while loading configuration or data files.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("board needs at least 2 fields, got {0}")]
    BoardTooSmall(usize),

    #[error("board layout has {layout} fields but the session expects {expected}")]
    BoardSizeMismatch { layout: usize, expected: usize },

    #[error("field 0 must be the start field")]
    MissingStartField,

    #[error("dice need at least one side and one die")]
    InvalidDice,

    #[error("quiz for {level} requires {required} correct answers out of {questions}")]
    InvalidQuizRules {
        level: CompanyLevel,
        questions: u8,
        required: u8,
    },

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("question file has no question block")]
    MissingQuestions,
}

/// Errors from money and ownership mutations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("unknown field {0}")]
    UnknownField(FieldIndex),

    #[error("{0} is not a company field")]
    NotACompany(FieldIndex),

    #[error("insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds { needed: Money, available: Money },

    #[error("illegal upgrade from {from} to {to}")]
    IllegalUpgrade { from: CompanyLevel, to: CompanyLevel },

    #[error("company already at maximum level")]
    AlreadyMaxLevel,

    #[error("{field} is owned by {owner}")]
    OwnedByOther { field: FieldIndex, owner: PlayerId },
}

/// Errors from driving the turn flow out of order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("a turn is already in progress")]
    TurnInProgress,

    #[error("expected {expected}, engine is awaiting {actual}")]
    NotAwaiting {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("no current player")]
    NoCurrentPlayer,

    #[error("a purchase is already pending")]
    PurchaseAlreadyPending,

    #[error("{0} is not selectable")]
    FieldNotSelectable(FieldIndex),

    #[error("no field previewed")]
    NothingPreviewed,

    #[error("field selection is not active")]
    SelectionInactive,

    #[error("no question is being asked")]
    NoActiveQuestion,

    #[error("collaborator went away")]
    CollaboratorGone,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_display() {
        let err = LedgerError::InsufficientFunds {
            needed: 400,
            available: 300,
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: needed 400, available 300"
        );
    }

    #[test]
    fn test_flow_error_wraps_ledger() {
        let err: FlowError = LedgerError::UnknownPlayer(PlayerId::new(9)).into();
        assert_eq!(err.to_string(), "unknown player Player 9");
    }
}
