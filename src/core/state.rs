//! Session state owned by the engine.
//!
//! ## GameSession
//!
//! The single owner of everything the turn flow mutates:
//! - Player roster in seating order
//! - Board with company ownership
//! - Skip registry
//! - Turn bookkeeping (current seat, in-progress and roll-again flags)
//! - RNG streams
//!
//! Components never look the session up ambiently; it is passed to them
//! by reference.

use serde::{Deserialize, Serialize};

use super::config::SessionConfig;
use super::player::{Player, PlayerId};
use super::rng::RngStreams;
use crate::board::Board;
use crate::turn::SkipRegistry;

/// Turn bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Seat index of the current player.
    pub current: usize,

    /// Set from the roll until the turn is advanced.
    pub in_progress: bool,

    /// Set when a card granted another roll to the current player.
    pub roll_again: bool,

    /// Turn number (starts at 1).
    pub turn_number: u32,
}

/// Complete mutable state of one game.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    players: Vec<Player>,

    /// Board with company ownership.
    pub board: Board,

    /// Owed skips.
    pub skips: SkipRegistry,

    /// Turn bookkeeping.
    pub turn: TurnState,

    /// Randomness, one stream per domain.
    pub rng: RngStreams,
}

impl GameSession {
    /// Create a session with the given roster and board.
    pub fn new(config: SessionConfig, players: Vec<Player>, board: Board) -> Self {
        let rng = RngStreams::from_seed(config.seed);
        Self {
            config,
            players,
            board,
            skips: SkipRegistry::new(),
            turn: TurnState {
                turn_number: 1,
                ..TurnState::default()
            },
            rng,
        }
    }

    /// Configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look up a player by id, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Player at a seat index.
    #[must_use]
    pub fn player_at(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// The player whose turn it is.
    ///
    /// `None` when the roster is empty or the seat index is out of range.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn.current)
    }

    /// Two distinct players, mutably.
    pub(crate) fn player_pair_mut(
        &mut self,
        a: PlayerId,
        b: PlayerId,
    ) -> Option<(&mut Player, &mut Player)> {
        if a == b {
            return None;
        }
        let ia = self.players.iter().position(|p| p.id == a)?;
        let ib = self.players.iter().position(|p| p.id == b)?;
        if ia < ib {
            let (left, right) = self.players.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.players.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }
}
