//! Movement and landing dispatch.
//!
//! A move is planned first (target and per-tile path, for the walk
//! animation) and completed once the walk is done: only completion updates
//! the authoritative position and pays the start bonus. Landing then
//! dispatches on the field kind.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{FieldIndex, FieldKind};
use crate::cards::DeckKind;
use crate::core::{GameSession, LedgerError, Money, PlayerId};
use crate::ledger::{Economy, RentOutcome};
use crate::quiz::PurchaseOffer;

/// A planned walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    pub player: PlayerId,
    pub from: FieldIndex,
    pub steps: usize,
    pub to: FieldIndex,
    /// Fields stepped on, target included; at most the last lap.
    pub path: Vec<FieldIndex>,
}

/// What the field a player stopped on asks for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Start field; the bonus was paid on arrival.
    Start,
    /// Unowned or own upgradable company.
    Offer(PurchaseOffer),
    /// Someone else's company; rent already settled.
    Rent {
        field: FieldIndex,
        owner: PlayerId,
        outcome: RentOutcome,
    },
    /// Own company at the top level.
    MaxLevel(FieldIndex),
    Draw(DeckKind),
    /// The field could not be resolved.
    Unresolved(FieldIndex),
}

/// Movement on a session.
pub struct MovementResolver;

impl MovementResolver {
    /// Plan a walk of `steps` for `player`.
    pub fn plan(
        session: &GameSession,
        player: PlayerId,
        steps: usize,
    ) -> Result<MovePlan, LedgerError> {
        let from = session
            .player(player)
            .ok_or(LedgerError::UnknownPlayer(player))?
            .position;
        Ok(MovePlan {
            player,
            from,
            steps,
            to: session.board.advance(from, steps),
            path: session.board.path(from, steps),
        })
    }

    /// Put the token on the plan's target and pay start bonuses.
    ///
    /// Returns the bonus paid.
    pub fn complete(session: &mut GameSession, plan: &MovePlan) -> Result<Money, LedgerError> {
        let passes = session.board.start_passes(plan.from, plan.steps);
        let bonus = session.config().start_bonus.saturating_mul(passes);

        let player = session
            .player_mut(plan.player)
            .ok_or(LedgerError::UnknownPlayer(plan.player))?;
        player.position = plan.to;
        debug!(
            player = %plan.player,
            from = %plan.from,
            to = %plan.to,
            steps = plan.steps,
            "move completed",
        );

        if bonus > 0 {
            Economy::add_money(session, plan.player, bonus)?;
            info!(player = %plan.player, passes, bonus, "start bonus paid");
        }
        Ok(bonus)
    }

    /// Resolve the field `player` stands on.
    ///
    /// Rent is settled here. Purchases and card draws are returned for the
    /// caller to drive.
    pub fn land(session: &mut GameSession, player: PlayerId) -> Result<Landing, LedgerError> {
        let position = session
            .player(player)
            .ok_or(LedgerError::UnknownPlayer(player))?
            .position;

        let landing = match session.board.kind(position) {
            Some(FieldKind::Start) => Landing::Start,
            Some(FieldKind::Bank) => Landing::Draw(DeckKind::Bank),
            Some(FieldKind::Action) => Landing::Draw(DeckKind::Action),
            Some(FieldKind::Company) => Self::land_on_company(session, player, position)?,
            None => Landing::Unresolved(position),
        };

        if let Landing::Unresolved(field) = &landing {
            warn!(player = %player, field = %field, "field not found, ending turn");
        }
        Ok(landing)
    }

    fn land_on_company(
        session: &mut GameSession,
        player: PlayerId,
        position: FieldIndex,
    ) -> Result<Landing, LedgerError> {
        let (Some(field), Some(company)) = (
            session.board.company_field(position),
            session.board.company_config(position),
        ) else {
            return Ok(Landing::Unresolved(position));
        };

        match field.owner {
            Some(owner) if owner != player => {
                let rent = session.board.rent(position).unwrap_or_default();
                let outcome = Economy::pay_rent(session, player, owner, rent)?;
                Ok(Landing::Rent {
                    field: position,
                    owner,
                    outcome,
                })
            }
            _ => match field.level.next() {
                Some(target) => Ok(Landing::Offer(PurchaseOffer {
                    player,
                    field: position,
                    company: company.clone(),
                    current: field.level,
                    target,
                    cost: company.cost(target),
                })),
                None => Ok(Landing::MaxLevel(position)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardLayout, CompanyCatalog, CompanyConfig, CompanyLevel};
    use crate::core::{Player, SessionConfig};
    use crate::ledger::Ownership;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn company(id: u32) -> CompanyConfig {
        CompanyConfig {
            id,
            name: format!("C{id}"),
            cost_found: 100,
            cost_invest: 200,
            cost_ag: 300,
            revenue_found: 15,
            revenue_invest: 25,
            revenue_ag: 35,
        }
    }

    fn session() -> GameSession {
        // Field 4 has no catalog entry
        let catalog = [1, 2, 3, 6, 8, 9].into_iter().map(company).collect();
        let board = Board::new(BoardLayout::standard(40), catalog);
        let players = vec![Player::new(P1, "A", 1000), Player::new(P2, "B", 1000)];
        GameSession::new(SessionConfig::default(), players, board)
    }

    fn place(session: &mut GameSession, player: PlayerId, field: usize) {
        session.player_mut(player).unwrap().position = FieldIndex::new(field);
    }

    #[test]
    fn test_plan_and_complete_wraps_with_bonus() {
        let mut s = session();
        place(&mut s, P1, 38);

        let plan = MovementResolver::plan(&s, P1, 5).unwrap();
        assert_eq!(plan.to, FieldIndex::new(3));
        assert_eq!(plan.path.len(), 5);
        // Position only changes on completion
        assert_eq!(s.player(P1).unwrap().position, FieldIndex::new(38));

        let bonus = MovementResolver::complete(&mut s, &plan).unwrap();
        assert_eq!(bonus, 500);
        assert_eq!(s.player(P1).unwrap().position, FieldIndex::new(3));
        assert_eq!(s.player(P1).unwrap().money(), 1500);
    }

    #[test]
    fn test_landing_on_start_pays_once() {
        let mut s = session();
        place(&mut s, P1, 36);
        let plan = MovementResolver::plan(&s, P1, 4).unwrap();
        assert_eq!(MovementResolver::complete(&mut s, &plan).unwrap(), 500);
        assert_eq!(MovementResolver::land(&mut s, P1).unwrap(), Landing::Start);
    }

    #[test]
    fn test_no_bonus_without_pass() {
        let mut s = session();
        let plan = MovementResolver::plan(&s, P1, 7).unwrap();
        assert_eq!(MovementResolver::complete(&mut s, &plan).unwrap(), 0);
        assert_eq!(s.player(P1).unwrap().money(), 1000);
    }

    #[test]
    fn test_unowned_company_offers_found() {
        let mut s = session();
        place(&mut s, P1, 2);
        match MovementResolver::land(&mut s, P1).unwrap() {
            Landing::Offer(offer) => {
                assert_eq!(offer.current, CompanyLevel::None);
                assert_eq!(offer.target, CompanyLevel::Founded);
                assert_eq!(offer.cost, 100);
            }
            other => panic!("expected offer, got {other:?}"),
        }
    }

    #[test]
    fn test_own_invested_company_offers_ag() {
        let mut s = session();
        Ownership::purchase(&mut s, FieldIndex::new(2), P1, CompanyLevel::Founded, 0).unwrap();
        Ownership::purchase(&mut s, FieldIndex::new(2), P1, CompanyLevel::Invested, 0).unwrap();
        place(&mut s, P1, 2);

        match MovementResolver::land(&mut s, P1).unwrap() {
            Landing::Offer(offer) => assert_eq!(offer.target, CompanyLevel::Ag),
            other => panic!("expected offer, got {other:?}"),
        }
        assert_eq!(s.player(P1).unwrap().money(), 1000);
    }

    #[test]
    fn test_own_ag_company_ends_turn() {
        let mut s = session();
        for level in [CompanyLevel::Founded, CompanyLevel::Invested, CompanyLevel::Ag] {
            Ownership::purchase(&mut s, FieldIndex::new(3), P1, level, 0).unwrap();
        }
        place(&mut s, P1, 3);
        let landing = MovementResolver::land(&mut s, P1).unwrap();
        assert_eq!(landing, Landing::MaxLevel(FieldIndex::new(3)));
    }

    #[test]
    fn test_foreign_company_charges_rent() {
        let mut s = session();
        Ownership::purchase(&mut s, FieldIndex::new(6), P2, CompanyLevel::Founded, 0).unwrap();
        place(&mut s, P1, 6);

        let landing = MovementResolver::land(&mut s, P1).unwrap();
        assert_eq!(
            landing,
            Landing::Rent {
                field: FieldIndex::new(6),
                owner: P2,
                outcome: RentOutcome::Paid { amount: 15 }
            }
        );
        assert_eq!(s.player(P1).unwrap().money(), 985);
        assert_eq!(s.player(P2).unwrap().money(), 1015);
    }

    #[test]
    fn test_rent_follows_owner_level() {
        let mut s = session();
        for level in [CompanyLevel::Founded, CompanyLevel::Invested] {
            Ownership::purchase(&mut s, FieldIndex::new(6), P2, level, 0).unwrap();
        }
        place(&mut s, P1, 6);

        let landing = MovementResolver::land(&mut s, P1).unwrap();
        assert!(matches!(
            landing,
            Landing::Rent {
                outcome: RentOutcome::Paid { amount: 25 },
                ..
            }
        ));
        assert_eq!(s.player(P2).unwrap().money(), 1025);
    }

    #[test]
    fn test_card_fields_draw() {
        let mut s = session();
        place(&mut s, P1, 5);
        assert_eq!(MovementResolver::land(&mut s, P1).unwrap(), Landing::Draw(DeckKind::Bank));
        place(&mut s, P1, 30);
        assert_eq!(MovementResolver::land(&mut s, P1).unwrap(), Landing::Draw(DeckKind::Action));
    }

    #[test]
    fn test_missing_company_is_unresolved() {
        let mut s = session();
        place(&mut s, P1, 4);
        let landing = MovementResolver::land(&mut s, P1).unwrap();
        assert_eq!(landing, Landing::Unresolved(FieldIndex::new(4)));
    }
}
