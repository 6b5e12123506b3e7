//! Async driver against scripted and channel-backed collaborators.

mod common;

use std::collections::VecDeque;

use bizboard::driver::{self, Request};
use bizboard::turn::MovePlan;
use bizboard::{
    Card, Collaborators, CompanyLevel, DeckKind, FieldIndex, FlowError, GameDriver,
    PurchaseOffer, QuizRequest, Signal,
};
use common::*;
use tokio::sync::mpsc;

/// Answers from fixed scripts and records notifications.
#[derive(Default)]
struct Scripted {
    rolls: VecDeque<u32>,
    accept: bool,
    pass: bool,
    shown: Vec<Card>,
    notified: Vec<Signal>,
}

impl Scripted {
    fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            accept: true,
            pass: true,
            ..Self::default()
        }
    }
}

impl Collaborators for Scripted {
    async fn roll_dice(&mut self, _player: bizboard::PlayerId) -> Result<u32, FlowError> {
        self.rolls.pop_front().ok_or(FlowError::CollaboratorGone)
    }

    async fn animate_move(&mut self, plan: &MovePlan) -> Result<FieldIndex, FlowError> {
        Ok(plan.to)
    }

    async fn offer_purchase(&mut self, _offer: &PurchaseOffer) -> Result<bool, FlowError> {
        Ok(self.accept)
    }

    async fn run_quiz(&mut self, _request: &QuizRequest) -> Result<bool, FlowError> {
        Ok(self.pass)
    }

    async fn show_card(
        &mut self,
        _player: bizboard::PlayerId,
        _deck: DeckKind,
        card: &Card,
    ) -> Result<(), FlowError> {
        self.shown.push(card.clone());
        Ok(())
    }

    async fn select_field(
        &mut self,
        _player: bizboard::PlayerId,
        allowed: &[FieldIndex],
    ) -> Result<Option<FieldIndex>, FlowError> {
        Ok(allowed.first().copied())
    }

    async fn notify(&mut self, signal: &Signal) -> Result<(), FlowError> {
        self.notified.push(signal.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_turn_with_purchase() {
    let mut driver = GameDriver::new(engine(2, &[], &[]), Scripted::new(&[1]));

    let report = driver.play_turn().await.unwrap();
    assert_eq!(report.player, P1);
    assert_eq!(report.rolls, vec![1]);
    assert!(report.signals.contains(&Signal::PurchaseResolved {
        player: P1,
        field: FieldIndex::new(1),
        completed: true,
    }));
    assert_eq!(report.signals.last(), Some(&Signal::TurnStarted {
        player: P2,
        turn_number: 2,
    }));

    let (engine, scripted) = driver.into_parts();
    assert_eq!(scripted.notified, report.signals);
    let field = engine.session().board.company_field(FieldIndex::new(1)).unwrap();
    assert_eq!((field.owner, field.level), (Some(P1), CompanyLevel::Founded));
}

#[tokio::test]
async fn test_roll_again_stays_in_one_turn() {
    // 0 -> 5 (bank, roll again) -> 7 (bank, roll again) -> 10 (action, nothing)
    let engine = engine(2, &[4], &[5]);
    let mut driver = GameDriver::new(engine, Scripted::new(&[5, 2, 3]));

    let report = driver.play_turn().await.unwrap();
    assert_eq!(report.player, P1);
    assert_eq!(report.rolls, vec![5, 2, 3]);
    assert_eq!(driver.collaborators_mut().shown.len(), 3);
    assert_eq!(position(driver.engine(), P1), FieldIndex::new(10));
    assert_eq!(driver.engine().current_player(), Ok(P2));
}

#[tokio::test]
async fn test_declined_offers_over_several_turns() {
    let mut scripted = Scripted::new(&[1, 2, 3, 4]);
    scripted.accept = false;
    let mut driver = GameDriver::new(engine(2, &[], &[]), scripted);

    let reports = driver.play_turns(4).await.unwrap();
    let players: Vec<_> = reports.iter().map(|r| r.player).collect();
    assert_eq!(players, [P1, P2, P1, P2]);
    assert!(driver.engine().session().board.company_fields().iter().all(|f| f.owner.is_none()));
    assert_eq!(driver.engine().session().turn.turn_number, 5);
}

#[tokio::test]
async fn test_failing_collaborator_aborts_turn() {
    let mut driver = GameDriver::new(engine(2, &[], &[]), Scripted::new(&[]));
    assert_eq!(driver.play_turn().await, Err(FlowError::CollaboratorGone));
}

/// Answer channel requests: rolls from the script, everything else accepted.
/// Selections answer with `choice` or the first allowed field.
async fn respond(
    mut requests: mpsc::Receiver<Request>,
    rolls: Vec<u32>,
    choice: Option<FieldIndex>,
) -> Vec<Signal> {
    let mut rolls = rolls.into_iter();
    let mut notified = Vec::new();
    while let Some(request) = requests.recv().await {
        match request {
            Request::RollDice { reply, .. } => match rolls.next() {
                Some(sum) => {
                    reply.resume(sum);
                }
                None => drop(reply),
            },
            Request::AnimateMove { plan, reply } => {
                reply.resume(plan.to);
            }
            Request::OfferPurchase { reply, .. } => {
                reply.resume(true);
            }
            Request::RunQuiz { reply, .. } => {
                reply.resume(true);
            }
            Request::ShowCard { reply, .. } => {
                reply.resume(());
            }
            Request::SelectField { allowed, reply, .. } => {
                reply.resume(choice.or_else(|| allowed.first().copied()));
            }
            Request::Notify(signal) => notified.push(signal),
        }
    }
    notified
}

#[tokio::test]
async fn test_channel_field_selection() {
    let (collaborators, requests) = driver::channel(8);
    let responder = tokio::spawn(respond(requests, vec![5], None));

    // Bank card 2 lets the player pick a company field; the first is field 1
    let mut driver = GameDriver::new(engine(2, &[2], &[]), collaborators);
    let report = driver.play_turn().await.unwrap();
    drop(driver.into_parts());

    let notified = responder.await.unwrap();
    assert!(notified.contains(&Signal::FieldPreviewed {
        player: P1,
        field: Some(FieldIndex::new(1)),
    }));
    assert!(report.signals.contains(&Signal::MoveCompleted {
        player: P1,
        field: FieldIndex::new(1),
        start_bonus: 500,
    }));
    assert!(report.signals.contains(&Signal::PurchaseResolved {
        player: P1,
        field: FieldIndex::new(1),
        completed: true,
    }));
}

#[tokio::test]
async fn test_channel_invalid_choice_cancels() {
    let (collaborators, requests) = driver::channel(8);
    let responder = tokio::spawn(respond(requests, vec![5], Some(FieldIndex::new(0))));

    let mut driver = GameDriver::new(engine(2, &[2], &[]), collaborators);
    let report = driver.play_turn().await.unwrap();
    let (engine, collaborators) = driver.into_parts();
    drop(collaborators);
    responder.await.unwrap();

    assert!(report.signals.contains(&Signal::TurnEnded { player: P1 }));
    assert_eq!(position(&engine, P1), FieldIndex::new(5));
    assert!(!engine.selection().is_active());
}

#[tokio::test]
async fn test_dropped_receiver_is_collaborator_gone() {
    let (collaborators, requests) = driver::channel(1);
    drop(requests);

    let mut driver = GameDriver::new(engine(2, &[], &[]), collaborators);
    assert_eq!(driver.play_turn().await, Err(FlowError::CollaboratorGone));
}

#[tokio::test]
async fn test_dropped_responder_is_collaborator_gone() {
    let (collaborators, requests) = driver::channel(1);
    let responder = tokio::spawn(respond(requests, Vec::new(), None));

    let mut driver = GameDriver::new(engine(2, &[], &[]), collaborators);
    assert_eq!(driver.play_turn().await, Err(FlowError::CollaboratorGone));
    drop(driver);
    responder.await.unwrap();
}
