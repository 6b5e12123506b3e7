//! Quiz-gated purchase flow.
//!
//! ```text
//! Idle --begin--> QuizPending --resolve--> Idle
//! ```
//!
//! At most one transaction is pending at a time. A second `begin` while
//! one is pending is rejected and the first stays intact. Every `resolve`
//! returns the flow to idle, whatever the outcome.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::{CompanyConfig, CompanyLevel, FieldIndex};
use crate::core::{FlowError, GameSession, LedgerError, Money, PlayerId, QuizSpec};
use crate::ledger::Ownership;

/// A purchase or upgrade offered to the player who landed on a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOffer {
    pub player: PlayerId,
    pub field: FieldIndex,
    pub company: CompanyConfig,
    /// Level the field is at now.
    pub current: CompanyLevel,
    /// Level the purchase would reach.
    pub target: CompanyLevel,
    pub cost: Money,
}

impl PurchaseOffer {
    /// The transaction accepting this offer starts.
    #[must_use]
    pub fn into_pending(self) -> PendingTransaction {
        PendingTransaction {
            company: self.company,
            field: self.field,
            player: self.player,
            level: self.target,
        }
    }
}

/// The single in-flight purchase awaiting its quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub company: CompanyConfig,
    pub field: FieldIndex,
    pub player: PlayerId,
    pub level: CompanyLevel,
}

impl PendingTransaction {
    #[must_use]
    pub fn cost(&self) -> Money {
        self.company.cost(self.level)
    }
}

/// What the quiz collaborator is asked to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub player: PlayerId,
    pub field: FieldIndex,
    pub level: CompanyLevel,
    pub spec: QuizSpec,
}

/// How a pending transaction ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseResolution {
    /// A quiz result arrived with nothing pending.
    NoPending,
    QuizFailed(PendingTransaction),
    Unaffordable {
        pending: PendingTransaction,
        needed: Money,
        available: Money,
    },
    Completed {
        pending: PendingTransaction,
        cost: Money,
        balance: Money,
    },
    /// The ledger refused for another reason (e.g. the field changed hands).
    Rejected {
        pending: PendingTransaction,
        error: LedgerError,
    },
}

impl PurchaseResolution {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// The purchase state machine.
#[derive(Clone, Debug, Default)]
pub struct PurchaseFlow {
    pending: Option<PendingTransaction>,
}

impl PurchaseFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending transaction, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingTransaction> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate and store a transaction, returning the quiz to run.
    ///
    /// The target level must be exactly one above the field's level.
    pub fn begin(
        &mut self,
        session: &GameSession,
        transaction: PendingTransaction,
    ) -> Result<QuizRequest, FlowError> {
        if let Some(active) = &self.pending {
            warn!(
                pending_field = %active.field,
                field = %transaction.field,
                player = %transaction.player,
                "purchase already pending, rejecting"
            );
            return Err(FlowError::PurchaseAlreadyPending);
        }

        let field = session
            .board
            .company_field(transaction.field)
            .ok_or(LedgerError::UnknownField(transaction.field))?;
        if let Err(err) = Ownership::validate_step(field.level, transaction.level) {
            warn!(field = %transaction.field, error = %err, "illegal purchase step");
            return Err(err.into());
        }

        let request = QuizRequest {
            player: transaction.player,
            field: transaction.field,
            level: transaction.level,
            spec: session.config().quiz.for_level(transaction.level),
        };
        info!(
            player = %transaction.player,
            field = %transaction.field,
            level = %transaction.level,
            "purchase quiz started"
        );
        self.pending = Some(transaction);
        Ok(request)
    }

    /// Settle the pending transaction with the quiz outcome.
    pub fn resolve(&mut self, session: &mut GameSession, passed: bool) -> PurchaseResolution {
        let Some(pending) = self.pending.take() else {
            warn!("quiz result without pending purchase");
            return PurchaseResolution::NoPending;
        };

        if !passed {
            info!(
                player = %pending.player,
                field = %pending.field,
                "quiz failed, purchase dropped",
            );
            return PurchaseResolution::QuizFailed(pending);
        }

        let cost = pending.cost();
        match Ownership::purchase(session, pending.field, pending.player, pending.level, cost) {
            Ok(balance) => PurchaseResolution::Completed {
                pending,
                cost,
                balance,
            },
            Err(LedgerError::InsufficientFunds { needed, available }) => {
                PurchaseResolution::Unaffordable {
                    pending,
                    needed,
                    available,
                }
            }
            Err(error) => {
                warn!(field = %pending.field, error = %error, "purchase rejected");
                PurchaseResolution::Rejected { pending, error }
            }
        }
    }
}
