//! Signals the engine emits and the suspension points it waits on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{CompanyField, FieldIndex};
use crate::cards::{Card, DeckKind};
use crate::core::{Money, PlayerId};
use crate::quiz::{PurchaseOffer, QuizRequest};
use crate::turn::MovePlan;

/// Notifications for displays and collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    TurnStarted { player: PlayerId, turn_number: u32 },
    PlayerSkipped { player: PlayerId, remaining: u32 },
    DiceRolled { player: PlayerId, sum: u32 },
    /// Walk the token along `path`; report back when done.
    MoveStarted(MovePlan),
    MoveCompleted { player: PlayerId, field: FieldIndex, start_bonus: Money },
    /// Show the purchase/upgrade prompt.
    OfferPurchase(PurchaseOffer),
    /// Run a quiz series.
    StartQuiz(QuizRequest),
    PurchaseResolved { player: PlayerId, field: FieldIndex, completed: bool },
    /// Show the card and wait for dismissal.
    ShowCard { player: PlayerId, deck: DeckKind, card: Card },
    /// Let the player pick one of `allowed`.
    SelectField { player: PlayerId, allowed: Vec<FieldIndex> },
    /// Highlight changed; `None` clears it.
    FieldPreviewed { player: PlayerId, field: Option<FieldIndex> },
    MoneyChanged { player: PlayerId, balance: Money },
    /// Refresh a company field's visuals.
    FieldChanged(CompanyField),
    RollAgain { player: PlayerId },
    TurnEnded { player: PlayerId },
}

/// Signals from one engine step. Most steps emit only a few.
pub type Signals = SmallVec<[Signal; 4]>;

/// The external completion the engine is waiting for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Awaiting {
    /// A dice sum from `player`.
    Roll { player: PlayerId },
    /// The walk animation for this plan to finish.
    Movement(MovePlan),
    /// Accept or decline this offer.
    Offer(PurchaseOffer),
    /// The quiz outcome.
    Quiz(QuizRequest),
    /// The shown card to be dismissed.
    CardDismissal { player: PlayerId, deck: DeckKind, card: Card },
    /// A confirmed or cancelled field choice.
    FieldSelection { player: PlayerId, allowed: Vec<FieldIndex> },
    /// Nothing can happen (no players).
    Idle,
}

impl Awaiting {
    /// Short name for errors and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Roll { .. } => "roll",
            Self::Movement(_) => "movement",
            Self::Offer(_) => "offer",
            Self::Quiz(_) => "quiz",
            Self::CardDismissal { .. } => "card dismissal",
            Self::FieldSelection { .. } => "field selection",
            Self::Idle => "idle",
        }
    }

    /// Player the suspension belongs to.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Self::Roll { player }
            | Self::CardDismissal { player, .. }
            | Self::FieldSelection { player, .. } => Some(*player),
            Self::Movement(plan) => Some(plan.player),
            Self::Offer(offer) => Some(offer.player),
            Self::Quiz(request) => Some(request.player),
            Self::Idle => None,
        }
    }
}
