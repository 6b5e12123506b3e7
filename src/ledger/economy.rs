//! Money mutation.
//!
//! Balances never go negative: a debit larger than the balance is refused
//! with [`LedgerError::InsufficientFunds`] and leaves the balance untouched.
//! Callers branch on that error; it is an expected outcome, not a fault.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{GameSession, LedgerError, Money, PlayerId};

/// Result of a rent charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentOutcome {
    /// Payer debited and owner credited.
    Paid { amount: Money },
    /// Payer could not afford it; nothing moved.
    Shortfall { amount: Money, available: Money },
    /// Nothing to charge (zero rent or payer is the owner).
    Waived,
}

/// Money operations on a session.
pub struct Economy;

impl Economy {
    /// Credit `amount`. Always succeeds for a seated player.
    pub fn add_money(
        session: &mut GameSession,
        player: PlayerId,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        let p = session
            .player_mut(player)
            .ok_or(LedgerError::UnknownPlayer(player))?;
        let balance = p.credit(amount);
        debug!(player = %player, amount, balance, "money added");
        Ok(balance)
    }

    /// Debit `amount` if the balance covers it.
    pub fn remove_money(
        session: &mut GameSession,
        player: PlayerId,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        let p = session
            .player_mut(player)
            .ok_or(LedgerError::UnknownPlayer(player))?;
        let available = p.money();
        match p.debit(amount) {
            Some(balance) => {
                debug!(player = %player, amount, balance, "money removed");
                Ok(balance)
            }
            None => {
                warn!(player = %player, needed = amount, available, "insufficient funds");
                Err(LedgerError::InsufficientFunds {
                    needed: amount,
                    available,
                })
            }
        }
    }

    /// Move `amount` from `payer` to `owner` as one step.
    ///
    /// A payer who cannot afford the rent pays nothing; the shortfall is
    /// logged and reported, and there is no further penalty.
    pub fn pay_rent(
        session: &mut GameSession,
        payer: PlayerId,
        owner: PlayerId,
        amount: Money,
    ) -> Result<RentOutcome, LedgerError> {
        if session.player(payer).is_none() {
            return Err(LedgerError::UnknownPlayer(payer));
        }
        if session.player(owner).is_none() {
            return Err(LedgerError::UnknownPlayer(owner));
        }
        if amount == 0 || payer == owner {
            return Ok(RentOutcome::Waived);
        }

        let Some((from, to)) = session.player_pair_mut(payer, owner) else {
            return Err(LedgerError::UnknownPlayer(payer));
        };
        let available = from.money();
        if from.debit(amount).is_none() {
            warn!(payer = %payer, owner = %owner, amount, available, "rent shortfall, not paid");
            return Ok(RentOutcome::Shortfall { amount, available });
        }
        to.credit(amount);

        info!(payer = %payer, owner = %owner, amount, "rent paid");
        Ok(RentOutcome::Paid { amount })
    }
}
