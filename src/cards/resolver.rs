//! Card effect resolution.
//!
//! The `CardResolver` applies the immediate part of an effect (money,
//! skips) and tells the caller how the turn continues. Movement is not
//! performed here: the caller walks the token and re-enters landing
//! dispatch, so a movement card can chain into another resolution.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{CardEffect, FieldChoice};
use crate::board::FieldIndex;
use crate::core::{GameSession, LedgerError, PlayerId};
use crate::ledger::Economy;

/// How the turn continues after a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardOutcome {
    /// The turn is over.
    EndTurn,
    /// Walk forward; the landing decides the rest.
    Move { steps: usize },
    /// Let the player pick one of `allowed`, then walk there.
    ChooseField { allowed: Vec<FieldIndex> },
    /// The same player rolls again.
    RollAgain,
}

/// Applies card effects.
pub struct CardResolver;

impl CardResolver {
    /// Resolve `effect` for `player`.
    pub fn resolve(
        session: &mut GameSession,
        player: PlayerId,
        effect: CardEffect,
    ) -> Result<CardOutcome, LedgerError> {
        let position = session
            .player(player)
            .ok_or(LedgerError::UnknownPlayer(player))?
            .position;

        let outcome = match effect {
            CardEffect::MoveSteps(steps) => CardOutcome::Move { steps },

            CardEffect::MoveToField(target) => CardOutcome::Move {
                steps: session.board.distance(position, target),
            },

            CardEffect::MoveToChosenField(choice) => {
                let allowed = Self::allowed_fields(session, player, choice)?;
                if allowed.is_empty() {
                    info!(player = %player, ?choice, "no selectable field");
                    CardOutcome::EndTurn
                } else {
                    CardOutcome::ChooseField { allowed }
                }
            }

            CardEffect::MoveToNextOwnedCompany => {
                match Self::next_owned_distance(session, player)? {
                    Some(steps) => CardOutcome::Move { steps },
                    None => {
                        info!(player = %player, "no owned company to move to");
                        CardOutcome::EndTurn
                    }
                }
            }

            CardEffect::GrantMoney(amount) => {
                Economy::add_money(session, player, amount)?;
                CardOutcome::EndTurn
            }

            CardEffect::SkipTurn => {
                let owed = session.skips.add(player);
                info!(player = %player, owed, "skip registered");
                CardOutcome::EndTurn
            }

            CardEffect::RollAgain => CardOutcome::RollAgain,

            CardEffect::GrantMoneyAndRollAgain(amount) => {
                Economy::add_money(session, player, amount)?;
                CardOutcome::RollAgain
            }

            CardEffect::NoEffect => CardOutcome::EndTurn,
        };

        Ok(outcome)
    }

    /// Fields `player` may pick for a chosen-field move, in board order.
    pub fn allowed_fields(
        session: &GameSession,
        player: PlayerId,
        choice: FieldChoice,
    ) -> Result<Vec<FieldIndex>, LedgerError> {
        let owner = session
            .player(player)
            .ok_or(LedgerError::UnknownPlayer(player))?;

        let mut allowed: Vec<FieldIndex> = owner.owned_fields().collect();
        match choice {
            FieldChoice::OwnedCompany => {}
            FieldChoice::AnyCompany => {
                allowed.extend(session.board.unowned_company_fields());
            }
            FieldChoice::AnyField => {
                allowed.extend(session.board.unowned_company_fields());
                allowed.extend(session.board.card_fields());
            }
        }
        allowed.sort_unstable();
        allowed.dedup();
        Ok(allowed)
    }

    /// Steps to the nearest owned company strictly ahead.
    ///
    /// The field the player stands on does not count.
    fn next_owned_distance(
        session: &GameSession,
        player: PlayerId,
    ) -> Result<Option<usize>, LedgerError> {
        let owner = session
            .player(player)
            .ok_or(LedgerError::UnknownPlayer(player))?;
        Ok(owner
            .owned_fields()
            .map(|field| session.board.distance(owner.position, field))
            .filter(|&d| d > 0)
            .min())
    }
}
