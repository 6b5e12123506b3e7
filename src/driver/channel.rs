//! Collaborators over tokio channels.
//!
//! Every suspension point becomes a [`Request`] on an `mpsc` channel that
//! carries a single-use [`Responder`]. The other side (a UI task, a test,
//! the demo's auto-responder) answers through the responder. Dropping the
//! responder or the receiver surfaces as [`FlowError::CollaboratorGone`].

use tokio::sync::{mpsc, oneshot};

use super::Collaborators;
use crate::board::FieldIndex;
use crate::cards::{Card, DeckKind};
use crate::core::{FlowError, PlayerId};
use crate::engine::Signal;
use crate::quiz::{PurchaseOffer, QuizRequest};
use crate::turn::MovePlan;

/// Single-use resume handle.
#[derive(Debug)]
pub struct Responder<T>(oneshot::Sender<T>);

impl<T> Responder<T> {
    /// Resume the waiting turn with `value`.
    ///
    /// Returns `false` if the driver is gone.
    pub fn resume(self, value: T) -> bool {
        self.0.send(value).is_ok()
    }
}

/// One suspension point, or a notification.
#[derive(Debug)]
pub enum Request {
    RollDice {
        player: PlayerId,
        reply: Responder<u32>,
    },
    AnimateMove {
        plan: MovePlan,
        reply: Responder<FieldIndex>,
    },
    OfferPurchase {
        offer: PurchaseOffer,
        reply: Responder<bool>,
    },
    RunQuiz {
        request: QuizRequest,
        reply: Responder<bool>,
    },
    ShowCard {
        player: PlayerId,
        deck: DeckKind,
        card: Card,
        reply: Responder<()>,
    },
    SelectField {
        player: PlayerId,
        allowed: Vec<FieldIndex>,
        reply: Responder<Option<FieldIndex>>,
    },
    Notify(Signal),
}

/// [`Collaborators`] that forward every call as a [`Request`].
#[derive(Clone, Debug)]
pub struct ChannelCollaborators {
    requests: mpsc::Sender<Request>,
}

/// Create a connected collaborator/receiver pair.
pub fn channel(buffer: usize) -> (ChannelCollaborators, mpsc::Receiver<Request>) {
    let (tx, rx) = mpsc::channel(buffer.max(1));
    (ChannelCollaborators { requests: tx }, rx)
}

impl ChannelCollaborators {
    async fn ask<T>(&self, build: impl FnOnce(Responder<T>) -> Request) -> Result<T, FlowError> {
        let (tx, rx) = oneshot::channel();
        self.requests
            .send(build(Responder(tx)))
            .await
            .map_err(|_| FlowError::CollaboratorGone)?;
        rx.await.map_err(|_| FlowError::CollaboratorGone)
    }
}

impl Collaborators for ChannelCollaborators {
    async fn roll_dice(&mut self, player: PlayerId) -> Result<u32, FlowError> {
        self.ask(|reply| Request::RollDice { player, reply }).await
    }

    async fn animate_move(&mut self, plan: &MovePlan) -> Result<FieldIndex, FlowError> {
        let plan = plan.clone();
        self.ask(|reply| Request::AnimateMove { plan, reply }).await
    }

    async fn offer_purchase(&mut self, offer: &PurchaseOffer) -> Result<bool, FlowError> {
        let offer = offer.clone();
        self.ask(|reply| Request::OfferPurchase { offer, reply }).await
    }

    async fn run_quiz(&mut self, request: &QuizRequest) -> Result<bool, FlowError> {
        let request = *request;
        self.ask(|reply| Request::RunQuiz { request, reply }).await
    }

    async fn show_card(
        &mut self,
        player: PlayerId,
        deck: DeckKind,
        card: &Card,
    ) -> Result<(), FlowError> {
        let card = card.clone();
        self.ask(|reply| Request::ShowCard {
            player,
            deck,
            card,
            reply,
        })
        .await
    }

    async fn select_field(
        &mut self,
        player: PlayerId,
        allowed: &[FieldIndex],
    ) -> Result<Option<FieldIndex>, FlowError> {
        let allowed = allowed.to_vec();
        self.ask(|reply| Request::SelectField {
            player,
            allowed,
            reply,
        })
        .await
    }

    async fn notify(&mut self, signal: &Signal) -> Result<(), FlowError> {
        self.requests
            .send(Request::Notify(signal.clone()))
            .await
            .map_err(|_| FlowError::CollaboratorGone)
    }
}
