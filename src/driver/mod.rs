//! Async driver: a whole turn as a sequence of awaits.
//!
//! The engine itself is a synchronous state machine. `GameDriver` reads
//! what the engine is waiting for, awaits the matching collaborator call
//! and feeds the completion back, until the turn ends.

pub mod channel;
pub mod collaborator;

pub use channel::{channel, ChannelCollaborators, Request, Responder};
pub use collaborator::Collaborators;

use tracing::warn;

use crate::board::FieldIndex;
use crate::core::{FlowError, PlayerId};
use crate::engine::{Awaiting, GameEngine, Signal, Signals};

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    /// Dice sums in order; more than one after a roll-again.
    pub rolls: Vec<u32>,
    pub signals: Vec<Signal>,
}

impl TurnReport {
    fn new(player: PlayerId) -> Self {
        Self {
            player,
            rolls: Vec::new(),
            signals: Vec::new(),
        }
    }
}

/// Runs turns of a [`GameEngine`] against a set of collaborators.
pub struct GameDriver<C> {
    engine: GameEngine,
    collaborators: C,
}

impl<C: Collaborators> GameDriver<C> {
    pub fn new(engine: GameEngine, collaborators: C) -> Self {
        Self {
            engine,
            collaborators,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn collaborators_mut(&mut self) -> &mut C {
        &mut self.collaborators
    }

    pub fn into_parts(self) -> (GameEngine, C) {
        (self.engine, self.collaborators)
    }

    /// Play the current player's turn to its end.
    pub async fn play_turn(&mut self) -> Result<TurnReport, FlowError> {
        let player = match self.engine.awaiting() {
            Awaiting::Roll { player } => *player,
            other => {
                return Err(FlowError::NotAwaiting {
                    expected: "roll",
                    actual: other.name(),
                })
            }
        };

        let mut report = TurnReport::new(player);
        loop {
            let signals = match self.engine.awaiting().clone() {
                Awaiting::Roll { player } => {
                    let sum = self.collaborators.roll_dice(player).await?;
                    report.rolls.push(sum);
                    self.engine.roll(sum)?
                }
                Awaiting::Movement(plan) => {
                    let at = self.collaborators.animate_move(&plan).await?;
                    self.engine.movement_finished(at)?
                }
                Awaiting::Offer(offer) => {
                    let accept = self.collaborators.offer_purchase(&offer).await?;
                    self.engine.offer_decided(accept)?
                }
                Awaiting::Quiz(request) => {
                    let passed = self.collaborators.run_quiz(&request).await?;
                    self.engine.quiz_finished(passed)?
                }
                Awaiting::CardDismissal { player, deck, card } => {
                    self.collaborators.show_card(player, deck, &card).await?;
                    self.engine.card_dismissed()?
                }
                Awaiting::FieldSelection { player, allowed } => {
                    let choice = self.collaborators.select_field(player, &allowed).await?;
                    self.select(choice).await?
                }
                Awaiting::Idle => return Ok(report),
            };

            let ended = signals
                .iter()
                .any(|s| matches!(s, Signal::TurnEnded { .. }));
            for signal in &signals {
                self.collaborators.notify(signal).await?;
            }
            report.signals.extend(signals);
            if ended {
                return Ok(report);
            }
        }
    }

    /// Play `turns` turns back to back.
    pub async fn play_turns(&mut self, turns: usize) -> Result<Vec<TurnReport>, FlowError> {
        let mut reports = Vec::with_capacity(turns);
        for _ in 0..turns {
            reports.push(self.play_turn().await?);
        }
        Ok(reports)
    }

    async fn select(&mut self, choice: Option<FieldIndex>) -> Result<Signals, FlowError> {
        let Some(field) = choice else {
            return self.engine.cancel_field_selection();
        };
        match self.engine.preview_field(field) {
            Ok(previewed) => {
                for signal in &previewed {
                    self.collaborators.notify(signal).await?;
                }
                self.engine.confirm_field()
            }
            Err(err) => {
                warn!(field = %field, error = %err, "invalid field choice, cancelling");
                self.engine.cancel_field_selection()
            }
        }
    }
}
