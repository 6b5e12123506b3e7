//! Turn rotation.
//!
//! A turn is in progress from the roll until `advance_turn`. While it is,
//! another roll is refused. Advancing moves to the next seat and consumes
//! owed skips along the way, checking at most one full round of seats so
//! a table where everyone owes skips still terminates.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{FlowError, GameSession, Player, PlayerId};

/// Result of advancing the turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnAdvance {
    pub previous: Option<PlayerId>,
    /// Player whose turn it is now.
    pub next: Option<PlayerId>,
    /// Players passed over, one owed skip consumed each.
    pub skipped: SmallVec<[PlayerId; 4]>,
    pub turn_number: u32,
}

/// Turn rotation on a session.
pub struct TurnCoordinator;

impl TurnCoordinator {
    /// The player whose turn it is.
    pub fn current_player(session: &GameSession) -> Result<&Player, FlowError> {
        session.current_player().ok_or(FlowError::NoCurrentPlayer)
    }

    /// Mark the turn in progress for a roll.
    ///
    /// Refused while a turn is already in progress; nothing changes then.
    pub fn begin_roll(session: &mut GameSession) -> Result<PlayerId, FlowError> {
        if session.turn.in_progress {
            debug!("roll refused, turn in progress");
            return Err(FlowError::TurnInProgress);
        }
        let player = Self::current_player(session)?.id;
        session.turn.in_progress = true;
        session.turn.roll_again = false;
        Ok(player)
    }

    /// Let the current player roll again without rotating.
    pub fn grant_roll_again(session: &mut GameSession) {
        session.turn.in_progress = false;
        session.turn.roll_again = true;
        if let Some(player) = session.current_player() {
            info!(player = %player.id, "roll again granted");
        }
    }

    /// Move to the next player, consuming owed skips.
    pub fn advance_turn(session: &mut GameSession) -> TurnAdvance {
        let previous = session.current_player().map(|p| p.id);
        session.turn.in_progress = false;
        session.turn.roll_again = false;

        let count = session.player_count();
        let mut skipped = SmallVec::new();
        if count == 0 {
            return TurnAdvance {
                previous,
                next: None,
                skipped,
                turn_number: session.turn.turn_number,
            };
        }

        session.turn.current = (session.turn.current + 1) % count;
        for _ in 0..count {
            let id = session.players()[session.turn.current].id;
            if !session.skips.consume(id) {
                break;
            }
            info!(player = %id, remaining = session.skips.owed(id), "turn skipped");
            skipped.push(id);
            session.turn.current = (session.turn.current + 1) % count;
        }

        session.turn.turn_number += 1;
        let next = session.current_player().map(|p| p.id);
        if let Some(next) = next {
            info!(player = %next, turn = session.turn.turn_number, "turn started");
        }

        TurnAdvance {
            previous,
            next,
            skipped,
            turn_number: session.turn.turn_number,
        }
    }
}
