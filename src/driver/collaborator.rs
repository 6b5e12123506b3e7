//! The external parties a turn waits on.

use crate::board::FieldIndex;
use crate::cards::{Card, DeckKind};
use crate::core::{FlowError, PlayerId};
use crate::engine::Signal;
use crate::quiz::{PurchaseOffer, QuizRequest};
use crate::turn::MovePlan;

/// One async method per suspension point.
///
/// Each call resolves exactly once with the completion the engine needs
/// to continue. There is no timeout: a collaborator that never answers
/// stalls the turn. Returning an error (typically
/// [`FlowError::CollaboratorGone`]) aborts the driver.
#[allow(async_fn_in_trait)]
pub trait Collaborators {
    /// Roll the dice for `player` and return the sum.
    async fn roll_dice(&mut self, player: PlayerId) -> Result<u32, FlowError>;

    /// Walk the token along the plan; return where it ended up.
    async fn animate_move(&mut self, plan: &MovePlan) -> Result<FieldIndex, FlowError>;

    /// Ask whether to accept the purchase offer.
    async fn offer_purchase(&mut self, offer: &PurchaseOffer) -> Result<bool, FlowError>;

    /// Run the quiz series; return whether it was passed.
    async fn run_quiz(&mut self, request: &QuizRequest) -> Result<bool, FlowError>;

    /// Show the card until the player dismisses it.
    async fn show_card(
        &mut self,
        player: PlayerId,
        deck: DeckKind,
        card: &Card,
    ) -> Result<(), FlowError>;

    /// Let the player pick a field; `None` cancels.
    async fn select_field(
        &mut self,
        player: PlayerId,
        allowed: &[FieldIndex],
    ) -> Result<Option<FieldIndex>, FlowError>;

    /// Fire-and-forget notification.
    async fn notify(&mut self, _signal: &Signal) -> Result<(), FlowError> {
        Ok(())
    }
}
