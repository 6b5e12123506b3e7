//! Turn flow through the engine: rolls, walks, landings and rotation.

mod common;

use bizboard::{
    Awaiting, BoardLayout, CompanyLevel, Economy, FieldIndex, FieldKind, FlowError, Ownership,
    SessionConfig, Signal, TurnCoordinator,
};
use common::*;

#[test]
fn test_wrap_around_onto_bank_field_draws_before_turn_ends() {
    let layout = BoardLayout::standard(40).with_kind(3, FieldKind::Bank);
    let config = SessionConfig::default().with_players(["A", "B", "C", "D"]);
    let mut engine = engine_with(config, layout, &[81], &[]);
    place(&mut engine, P1, 38);

    let signals = engine.roll(5).unwrap();
    let Some(Signal::MoveStarted(plan)) = signals.get(1) else {
        panic!("expected a move, got {signals:?}");
    };
    assert_eq!(plan.to, FieldIndex::new(3));
    assert_eq!(
        plan.path,
        [39, 0, 1, 2, 3].map(FieldIndex::new).to_vec()
    );

    let signals = finish_walk(&mut engine);
    assert!(signals.contains(&Signal::MoveCompleted {
        player: P1,
        field: FieldIndex::new(3),
        start_bonus: 500,
    }));
    assert!(!turn_ended(&signals));
    assert!(matches!(
        engine.awaiting(),
        Awaiting::CardDismissal { player, .. } if *player == P1
    ));

    let signals = engine.card_dismissed().unwrap();
    assert!(signals.contains(&Signal::MoneyChanged {
        player: P1,
        balance: 3500,
    }));
    assert!(signals.contains(&Signal::TurnEnded { player: P1 }));
    assert_eq!(engine.awaiting(), &Awaiting::Roll { player: P2 });
    assert_eq!(position(&engine, P1), FieldIndex::new(3));
}

#[test]
fn test_roll_refused_while_turn_in_progress() {
    let mut engine = engine(2, &[], &[]);
    engine.roll(4).unwrap();
    let before = engine.awaiting().clone();

    assert_eq!(engine.roll(3), Err(FlowError::TurnInProgress));
    assert!(engine.roll_dice().is_err());
    assert_eq!(engine.awaiting(), &before);
    assert_eq!(position(&engine, P1), FieldIndex::new(0));
}

#[test]
fn test_out_of_order_input_changes_nothing() {
    let mut engine = engine(2, &[], &[]);

    let err = engine.offer_decided(true).unwrap_err();
    assert_eq!(
        err,
        FlowError::NotAwaiting {
            expected: "offer",
            actual: "roll",
        }
    );
    assert!(engine.card_dismissed().is_err());
    assert!(engine.confirm_field().is_err());
    assert!(engine.movement_finished(FieldIndex::new(4)).is_err());
    assert_eq!(engine.awaiting(), &Awaiting::Roll { player: P1 });
    assert_eq!(position(&engine, P1), FieldIndex::new(0));
}

#[test]
fn test_reported_position_mismatch_uses_computed_target() {
    let mut engine = engine(2, &[], &[]);
    engine.roll(3).unwrap();
    engine.movement_finished(FieldIndex::new(9)).unwrap();
    assert_eq!(position(&engine, P1), FieldIndex::new(3));
}

#[test]
fn test_landing_on_start_pays_bonus_and_ends_turn() {
    let mut engine = engine(2, &[], &[]);
    place(&mut engine, P1, 35);

    let signals = roll_and_walk(&mut engine, 5);
    assert!(turn_ended(&signals));
    assert_eq!(position(&engine, P1), FieldIndex::new(0));
    assert_eq!(money(&engine, P1), 3000);
}

#[test]
fn test_two_laps_pay_two_bonuses() {
    // Field 5 is a bank field; the empty deck ends the turn
    let mut engine = engine(2, &[], &[]);
    let signals = roll_and_walk(&mut engine, 85);

    assert!(signals.contains(&Signal::MoveCompleted {
        player: P1,
        field: FieldIndex::new(5),
        start_bonus: 1000,
    }));
    assert!(turn_ended(&signals));
    assert_eq!(money(&engine, P1), 3500);
}

#[test]
fn test_huge_roll_walks_in_bounded_time() {
    let mut engine = engine(2, &[], &[]);

    let signals = engine.roll(u32::MAX).unwrap();
    let Some(Signal::MoveStarted(plan)) = signals.get(1) else {
        panic!("expected a move, got {signals:?}");
    };
    assert_eq!(plan.path.len(), 40);
    assert_eq!(plan.to, FieldIndex::new(15));

    finish_walk(&mut engine);
    assert_eq!(position(&engine, P1), FieldIndex::new(15));
    assert_eq!(money(&engine, P1), u32::MAX);
    assert!(matches!(engine.awaiting(), Awaiting::Offer(_)));
}

#[test]
fn test_rent_goes_to_owner() {
    let mut engine = engine(2, &[], &[]);
    Ownership::purchase(
        engine.session_mut(),
        FieldIndex::new(1),
        P2,
        CompanyLevel::Founded,
        400,
    )
    .unwrap();

    let signals = roll_and_walk(&mut engine, 1);
    assert!(signals.contains(&Signal::MoneyChanged {
        player: P1,
        balance: 2460,
    }));
    assert!(signals.contains(&Signal::MoneyChanged {
        player: P2,
        balance: 2140,
    }));
    assert!(turn_ended(&signals));
}

#[test]
fn test_rent_shortfall_moves_nothing() {
    let mut engine = engine(2, &[], &[]);
    Ownership::purchase(
        engine.session_mut(),
        FieldIndex::new(1),
        P2,
        CompanyLevel::Founded,
        400,
    )
    .unwrap();
    Economy::remove_money(engine.session_mut(), P1, 2490).unwrap();

    let signals = roll_and_walk(&mut engine, 1);
    assert!(turn_ended(&signals));
    assert_eq!(money(&engine, P1), 10);
    assert_eq!(money(&engine, P2), 2100);
}

#[test]
fn test_skip_card_costs_exactly_one_turn() {
    let mut engine = engine(2, &[3], &[5]);

    // P1 lands on bank field 5 and draws the skip card
    roll_and_walk(&mut engine, 5);
    let signals = engine.card_dismissed().unwrap();
    assert!(turn_ended(&signals));
    assert_eq!(engine.session().skips.owed(P1), 1);
    assert_eq!(engine.awaiting(), &Awaiting::Roll { player: P2 });

    // P2 lands on action field 10 and draws a card without effect
    roll_and_walk(&mut engine, 10);
    let signals = engine.card_dismissed().unwrap();
    assert!(signals.contains(&Signal::PlayerSkipped {
        player: P1,
        remaining: 0,
    }));
    assert_eq!(engine.awaiting(), &Awaiting::Roll { player: P2 });
    assert_eq!(engine.session().skips.owed(P1), 0);
}

#[test]
fn test_roll_again_keeps_current_player() {
    let mut engine = engine(3, &[4], &[]);

    roll_and_walk(&mut engine, 5);
    let signals = engine.card_dismissed().unwrap();
    assert!(signals.contains(&Signal::RollAgain { player: P1 }));
    assert!(!turn_ended(&signals));
    assert_eq!(engine.awaiting(), &Awaiting::Roll { player: P1 });
    assert_eq!(engine.session().turn.current, 0);
    assert_eq!(engine.session().turn.turn_number, 1);
    assert!(!engine.session().turn.in_progress);

    // Second roll of the same turn: 5 -> 7, another bank field
    roll_and_walk(&mut engine, 2);
    assert_eq!(position(&engine, P1), FieldIndex::new(7));
    assert_eq!(engine.current_player(), Ok(P1));
}

#[test]
fn test_advance_turn_cycles_net_of_skips() {
    let mut engine = engine(4, &[], &[]);
    let session = engine.session_mut();
    session.skips.add(P3);

    let order: Vec<_> = (0..4)
        .map(|_| TurnCoordinator::advance_turn(session).next)
        .collect();
    assert_eq!(order, [Some(P2), Some(P4), Some(P1), Some(P2)]);
    assert_eq!(session.skips.owed(P3), 0);

    for _ in 0..4 {
        TurnCoordinator::advance_turn(session);
    }
    assert_eq!(session.turn.current, 1);
}

#[test]
fn test_dice_rolls_are_reproducible() {
    let rolls = |seed| {
        let mut engine = engine_with(
            SessionConfig::default().with_seed(seed),
            BoardLayout::standard(40),
            &[],
            &[],
        );
        let (sum, _) = engine.roll_dice().unwrap();
        sum
    };
    assert_eq!(rolls(11), rolls(11));
    assert!((2..=12).contains(&rolls(11)));
}

#[test]
fn test_snapshot_reflects_turn() {
    let mut engine = engine(2, &[3], &[]);
    roll_and_walk(&mut engine, 5);
    engine.card_dismissed().unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current, Some(P2));
    assert_eq!(snapshot.turn_number, 2);
    let p1 = snapshot.player(P1).unwrap();
    assert_eq!(p1.position, FieldIndex::new(5));
    assert_eq!(p1.skips_owed, 1);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"skips_owed\":1"));
}
