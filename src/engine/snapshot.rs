//! Serialisable read-only view of a session.

use serde::{Deserialize, Serialize};

use super::signal::Awaiting;
use crate::board::{CompanyField, FieldIndex};
use crate::core::{GameSession, Money, PlayerId};
use crate::quiz::{PendingTransaction, PurchaseFlow};

/// One player as a display sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub money: Money,
    pub position: FieldIndex,
    pub owned: Vec<FieldIndex>,
    pub skips_owed: u32,
}

/// Everything a display needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub turn_number: u32,
    pub current: Option<PlayerId>,
    pub turn_in_progress: bool,
    pub awaiting: Awaiting,
    pub players: Vec<PlayerView>,
    pub fields: Vec<CompanyField>,
    pub pending_purchase: Option<PendingTransaction>,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        session: &GameSession,
        purchase: &PurchaseFlow,
        awaiting: &Awaiting,
    ) -> Self {
        let players = session
            .players()
            .iter()
            .map(|p| PlayerView {
                id: p.id,
                name: p.name.clone(),
                money: p.money(),
                position: p.position,
                owned: p.owned_fields().collect(),
                skips_owed: session.skips.owed(p.id),
            })
            .collect();

        Self {
            turn_number: session.turn.turn_number,
            current: session.current_player().map(|p| p.id),
            turn_in_progress: session.turn.in_progress,
            awaiting: awaiting.clone(),
            players,
            fields: session.board.company_fields().to_vec(),
            pending_purchase: purchase.pending().cloned(),
        }
    }

    /// View of one player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }
}
