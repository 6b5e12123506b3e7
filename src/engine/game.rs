//! The turn state machine.
//!
//! `GameEngine` owns the session and sequences one turn as a series of
//! suspension points:
//!
//! ```text
//! Roll -> Movement -> landing
//!                      |- Start / rent / own AG / unresolved -> end turn
//!                      |- Offer -> (accept) Quiz -> end turn
//!                      |        -> (decline) end turn
//!                      '- CardDismissal -> effect
//!                                           |- money / skip / none -> end turn
//!                                           |- move -> Movement -> landing ...
//!                                           |- choose -> FieldSelection -> Movement ...
//!                                           '- roll again -> Roll (same player)
//! ```
//!
//! Every input method checks it matches the current [`Awaiting`] state; an
//! input that arrives out of order is refused with an error and changes
//! nothing. Each method returns the [`Signals`] the step produced.

use tracing::{debug, info, warn};

use super::signal::{Awaiting, Signal, Signals};
use super::snapshot::SessionSnapshot;
use crate::board::FieldIndex;
use crate::cards::{CardEffect, CardOutcome, CardResolver, Deck, DeckKind};
use crate::core::{FlowError, GameSession, Money, PlayerId};
use crate::ledger::RentOutcome;
use crate::quiz::{PurchaseFlow, PurchaseResolution};
use crate::turn::{FieldSelection, Landing, MovementResolver, TurnCoordinator};

/// The game-flow engine.
#[derive(Clone, Debug)]
pub struct GameEngine {
    session: GameSession,
    bank: Deck,
    action: Deck,
    purchase: PurchaseFlow,
    selection: FieldSelection,
    awaiting: Awaiting,
}

impl GameEngine {
    /// Wrap a session. The current player is asked to roll.
    pub fn new(session: GameSession, bank: Deck, action: Deck) -> Self {
        let awaiting = match session.current_player() {
            Some(player) => Awaiting::Roll { player: player.id },
            None => Awaiting::Idle,
        };
        Self {
            session,
            bank,
            action,
            purchase: PurchaseFlow::new(),
            selection: FieldSelection::new(),
            awaiting,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Direct state access for scenario setup. Bypasses the turn checks.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// What the engine waits for.
    #[must_use]
    pub fn awaiting(&self) -> &Awaiting {
        &self.awaiting
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<PlayerId, FlowError> {
        TurnCoordinator::current_player(&self.session).map(|p| p.id)
    }

    #[must_use]
    pub fn purchase(&self) -> &PurchaseFlow {
        &self.purchase
    }

    #[must_use]
    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Bank => &self.bank,
            DeckKind::Action => &self.action,
        }
    }

    /// Read-only view for displays.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, &self.purchase, &self.awaiting)
    }

    // === Inputs ===

    /// Roll the configured dice from the session's dice stream.
    pub fn roll_dice(&mut self) -> Result<(u32, Signals), FlowError> {
        self.check_roll()?;
        let dice = self.session.config().dice;
        let sum = self.session.rng.dice.roll_dice(dice.count, dice.sides);
        Ok((sum, self.roll(sum)?))
    }

    /// A dice roll produced `sum`.
    ///
    /// Refused with [`FlowError::TurnInProgress`] while a turn runs.
    pub fn roll(&mut self, sum: u32) -> Result<Signals, FlowError> {
        self.check_roll()?;
        let player = TurnCoordinator::begin_roll(&mut self.session)?;
        info!(player = %player, sum, "dice rolled");

        let mut signals = Signals::new();
        signals.push(Signal::DiceRolled { player, sum });
        let steps = usize::try_from(sum).unwrap_or(usize::MAX);
        self.start_move(player, steps, &mut signals);
        Ok(signals)
    }

    /// The walk animation finished with the token on `position`.
    pub fn movement_finished(&mut self, position: FieldIndex) -> Result<Signals, FlowError> {
        let Awaiting::Movement(plan) = &self.awaiting else {
            return Err(self.not_awaiting("movement"));
        };
        let plan = plan.clone();
        if position != plan.to {
            warn!(
                player = %plan.player,
                reported = %position,
                expected = %plan.to,
                "position mismatch, using computed target",
            );
        }

        let mut signals = Signals::new();
        match MovementResolver::complete(&mut self.session, &plan) {
            Ok(bonus) => {
                signals.push(Signal::MoveCompleted {
                    player: plan.player,
                    field: plan.to,
                    start_bonus: bonus,
                });
                if bonus > 0 {
                    self.push_money(plan.player, &mut signals);
                }
                self.dispatch_landing(plan.player, &mut signals);
            }
            Err(err) => {
                warn!(player = %plan.player, error = %err, "move could not complete");
                self.end_turn(&mut signals);
            }
        }
        Ok(signals)
    }

    /// The player accepted or declined the purchase offer.
    pub fn offer_decided(&mut self, accept: bool) -> Result<Signals, FlowError> {
        let Awaiting::Offer(offer) = &self.awaiting else {
            return Err(self.not_awaiting("offer"));
        };
        let offer = offer.clone();

        let mut signals = Signals::new();
        if !accept {
            info!(player = %offer.player, field = %offer.field, "offer declined");
            self.end_turn(&mut signals);
            return Ok(signals);
        }

        match self.purchase.begin(&self.session, offer.into_pending()) {
            Ok(request) => {
                signals.push(Signal::StartQuiz(request));
                self.awaiting = Awaiting::Quiz(request);
            }
            Err(err) => {
                warn!(error = %err, "purchase not started");
                self.end_turn(&mut signals);
            }
        }
        Ok(signals)
    }

    /// The quiz series finished.
    pub fn quiz_finished(&mut self, passed: bool) -> Result<Signals, FlowError> {
        let Awaiting::Quiz(request) = &self.awaiting else {
            return Err(self.not_awaiting("quiz"));
        };
        let request = *request;

        let mut signals = Signals::new();
        let resolution = self.purchase.resolve(&mut self.session, passed);
        if let PurchaseResolution::Completed { .. } = resolution {
            self.push_money(request.player, &mut signals);
            if let Some(field) = self.session.board.company_field(request.field) {
                signals.push(Signal::FieldChanged(field.clone()));
            }
        }
        signals.push(Signal::PurchaseResolved {
            player: request.player,
            field: request.field,
            completed: resolution.is_completed(),
        });
        self.end_turn(&mut signals);
        Ok(signals)
    }

    /// The shown card was dismissed; apply its effect.
    pub fn card_dismissed(&mut self) -> Result<Signals, FlowError> {
        let Awaiting::CardDismissal { player, deck, card } = &self.awaiting else {
            return Err(self.not_awaiting("card dismissal"));
        };
        let (player, effect) = (*player, CardEffect::for_card(*deck, card.id));
        debug!(player = %player, card = %card.id, ?effect, "resolving card");

        let mut signals = Signals::new();
        let before = self.balance(player);
        let outcome = CardResolver::resolve(&mut self.session, player, effect);
        if self.balance(player) != before {
            self.push_money(player, &mut signals);
        }

        match outcome {
            Ok(CardOutcome::EndTurn) => self.end_turn(&mut signals),
            Ok(CardOutcome::Move { steps }) => self.start_move(player, steps, &mut signals),
            Ok(CardOutcome::ChooseField { allowed }) => {
                self.selection.begin(player, allowed.clone());
                signals.push(Signal::SelectField {
                    player,
                    allowed: allowed.clone(),
                });
                self.awaiting = Awaiting::FieldSelection { player, allowed };
            }
            Ok(CardOutcome::RollAgain) => {
                TurnCoordinator::grant_roll_again(&mut self.session);
                signals.push(Signal::RollAgain { player });
                self.awaiting = Awaiting::Roll { player };
            }
            Err(err) => {
                warn!(player = %player, error = %err, "card could not be resolved");
                self.end_turn(&mut signals);
            }
        }
        Ok(signals)
    }

    /// Highlight a candidate field.
    pub fn preview_field(&mut self, field: FieldIndex) -> Result<Signals, FlowError> {
        let player = self.expect_selection()?;
        self.selection.preview(field)?;
        let mut signals = Signals::new();
        signals.push(Signal::FieldPreviewed {
            player,
            field: Some(field),
        });
        Ok(signals)
    }

    /// Remove the highlight.
    pub fn clear_preview(&mut self) -> Result<Signals, FlowError> {
        let player = self.expect_selection()?;
        self.selection.clear_preview();
        let mut signals = Signals::new();
        signals.push(Signal::FieldPreviewed {
            player,
            field: None,
        });
        Ok(signals)
    }

    /// Confirm the highlighted field and walk there.
    pub fn confirm_field(&mut self) -> Result<Signals, FlowError> {
        let player = self.expect_selection()?;
        let target = self.selection.confirm()?;
        let position = self
            .session
            .player(player)
            .map(|p| p.position)
            .ok_or(FlowError::NoCurrentPlayer)?;

        let mut signals = Signals::new();
        let steps = self.session.board.distance(position, target);
        info!(player = %player, field = %target, steps, "field chosen");
        self.start_move(player, steps, &mut signals);
        Ok(signals)
    }

    /// Abandon the selection; the turn ends.
    pub fn cancel_field_selection(&mut self) -> Result<Signals, FlowError> {
        self.expect_selection()?;
        self.selection.cancel()?;
        let mut signals = Signals::new();
        self.end_turn(&mut signals);
        Ok(signals)
    }

    // === Internals ===

    fn check_roll(&self) -> Result<(), FlowError> {
        if matches!(self.awaiting, Awaiting::Roll { .. }) {
            return Ok(());
        }
        if self.session.turn.in_progress {
            debug!(awaiting = self.awaiting.name(), "roll ignored, turn in progress");
            return Err(FlowError::TurnInProgress);
        }
        Err(self.not_awaiting("roll"))
    }

    fn expect_selection(&self) -> Result<PlayerId, FlowError> {
        match &self.awaiting {
            Awaiting::FieldSelection { player, .. } => Ok(*player),
            _ => Err(self.not_awaiting("field selection")),
        }
    }

    fn not_awaiting(&self, expected: &'static str) -> FlowError {
        debug!(expected, actual = self.awaiting.name(), "input out of order");
        FlowError::NotAwaiting {
            expected,
            actual: self.awaiting.name(),
        }
    }

    fn balance(&self, player: PlayerId) -> Option<Money> {
        self.session.player(player).map(|p| p.money())
    }

    fn push_money(&self, player: PlayerId, signals: &mut Signals) {
        if let Some(balance) = self.balance(player) {
            signals.push(Signal::MoneyChanged { player, balance });
        }
    }

    fn start_move(&mut self, player: PlayerId, steps: usize, signals: &mut Signals) {
        match MovementResolver::plan(&self.session, player, steps) {
            Ok(plan) => {
                signals.push(Signal::MoveStarted(plan.clone()));
                self.awaiting = Awaiting::Movement(plan);
            }
            Err(err) => {
                warn!(player = %player, error = %err, "move could not be planned");
                self.end_turn(signals);
            }
        }
    }

    fn dispatch_landing(&mut self, player: PlayerId, signals: &mut Signals) {
        let landing = match MovementResolver::land(&mut self.session, player) {
            Ok(landing) => landing,
            Err(err) => {
                warn!(player = %player, error = %err, "landing failed");
                self.end_turn(signals);
                return;
            }
        };

        match landing {
            Landing::Offer(offer) => {
                signals.push(Signal::OfferPurchase(offer.clone()));
                self.awaiting = Awaiting::Offer(offer);
            }
            Landing::Draw(deck) => self.draw_card(player, deck, signals),
            Landing::Rent { owner, outcome, .. } => {
                if let RentOutcome::Paid { .. } = outcome {
                    self.push_money(player, signals);
                    self.push_money(owner, signals);
                }
                self.end_turn(signals);
            }
            Landing::Start | Landing::MaxLevel(_) | Landing::Unresolved(_) => {
                self.end_turn(signals)
            }
        }
    }

    fn draw_card(&mut self, player: PlayerId, deck: DeckKind, signals: &mut Signals) {
        let filter = match deck {
            DeckKind::Bank => self.session.config().bank_filter.clone(),
            DeckKind::Action => self.session.config().action_filter.clone(),
        };
        let (cards, rng) = match deck {
            DeckKind::Bank => (&self.bank, &mut self.session.rng.bank),
            DeckKind::Action => (&self.action, &mut self.session.rng.action),
        };

        let drawn = cards.draw(&filter, rng).cloned();
        match drawn {
            Some(card) => {
                info!(player = %player, deck = %deck, card = %card.id, "card drawn");
                signals.push(Signal::ShowCard {
                    player,
                    deck,
                    card: card.clone(),
                });
                self.awaiting = Awaiting::CardDismissal { player, deck, card };
            }
            None => {
                warn!(player = %player, deck = %deck, "no eligible card, ending turn");
                self.end_turn(signals);
            }
        }
    }

    fn end_turn(&mut self, signals: &mut Signals) {
        self.selection.reset();
        if let Some(player) = self.session.current_player().map(|p| p.id) {
            info!(player = %player, "turn ended");
            signals.push(Signal::TurnEnded { player });
        }

        let advance = TurnCoordinator::advance_turn(&mut self.session);
        for &skipped in &advance.skipped {
            signals.push(Signal::PlayerSkipped {
                player: skipped,
                remaining: self.session.skips.owed(skipped),
            });
        }
        self.awaiting = match advance.next {
            Some(player) => {
                signals.push(Signal::TurnStarted {
                    player,
                    turn_number: advance.turn_number,
                });
                Awaiting::Roll { player }
            }
            None => Awaiting::Idle,
        };
    }
}
