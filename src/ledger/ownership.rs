//! Company ownership: level steps and transactional purchase.

use tracing::{info, warn};

use crate::board::{CompanyLevel, FieldIndex};
use crate::core::{GameSession, LedgerError, Money, PlayerId};

use super::Economy;

/// Ownership operations on a session.
pub struct Ownership;

impl Ownership {
    /// A purchase may only move a field exactly one level up.
    pub fn validate_step(current: CompanyLevel, target: CompanyLevel) -> Result<(), LedgerError> {
        match current.next() {
            None => Err(LedgerError::AlreadyMaxLevel),
            Some(next) if next == target => Ok(()),
            Some(_) => Err(LedgerError::IllegalUpgrade {
                from: current,
                to: target,
            }),
        }
    }

    /// Buy `field` at `level` for `cost`.
    ///
    /// All checks run before anything is mutated: if the debit fails the
    /// field's owner and level are unchanged. On success the field belongs
    /// to `player` at `level` and appears once in their owned set.
    /// Returns the remaining balance.
    pub fn purchase(
        session: &mut GameSession,
        field: FieldIndex,
        player: PlayerId,
        level: CompanyLevel,
        cost: Money,
    ) -> Result<Money, LedgerError> {
        let current = session
            .board
            .company_field(field)
            .ok_or(LedgerError::UnknownField(field))?;
        if let Some(owner) = current.owner {
            if owner != player {
                warn!(
                    field = %field,
                    owner = %owner,
                    buyer = %player,
                    "purchase of foreign field refused",
                );
                return Err(LedgerError::OwnedByOther { field, owner });
            }
        }
        Self::validate_step(current.level, level)?;
        if session.player(player).is_none() {
            return Err(LedgerError::UnknownPlayer(player));
        }

        let balance = Economy::remove_money(session, player, cost)?;

        let record = session
            .board
            .company_field_mut(field)
            .ok_or(LedgerError::UnknownField(field))?;
        record.owner = Some(player);
        record.level = level;
        if let Some(p) = session.player_mut(player) {
            p.add_owned(field);
        }

        info!(
            player = %player,
            field = %field,
            level = %level,
            cost,
            balance,
            "purchase completed",
        );
        Ok(balance)
    }
}
