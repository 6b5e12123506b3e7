//! Shared setup for the integration tests.

#![allow(dead_code)]

use bizboard::{
    Awaiting, BoardLayout, Card, CompanyCatalog, CompanyConfig, Deck, DeckKind, FieldIndex,
    GameBuilder, GameEngine, Money, PlayerId, SessionConfig, Signal, Signals,
};

pub const P1: PlayerId = PlayerId::new(1);
pub const P2: PlayerId = PlayerId::new(2);
pub const P3: PlayerId = PlayerId::new(3);
pub const P4: PlayerId = PlayerId::new(4);

/// Company with founding cost `cost`; upgrades cost double and triple.
pub fn company(id: u32, cost: Money) -> CompanyConfig {
    CompanyConfig {
        id,
        name: format!("Company {id}"),
        cost_found: cost,
        cost_invest: cost * 2,
        cost_ag: cost * 3,
        revenue_found: cost / 10,
        revenue_invest: cost / 5,
        revenue_ag: cost / 2,
    }
}

/// Catalog entries for every company field of `layout`, all at `cost`.
pub fn catalog_for(layout: &BoardLayout, cost: Money) -> CompanyCatalog {
    layout
        .iter()
        .filter(|(_, kind)| *kind == bizboard::FieldKind::Company)
        .map(|(index, _)| company(index.raw() as u32, cost))
        .collect()
}

pub fn deck(kind: DeckKind, ids: &[u32]) -> Deck {
    let cards = ids
        .iter()
        .map(|&id| Card::new(id, format!("card {id}")))
        .collect();
    Deck::new(kind, format!("{kind} test deck"), cards)
}

/// Standard 40-field board, companies at cost 400, one-card decks.
pub fn engine_with(
    config: SessionConfig,
    layout: BoardLayout,
    bank: &[u32],
    action: &[u32],
) -> GameEngine {
    GameBuilder::new(config)
        .with_catalog(catalog_for(&layout, 400))
        .with_layout(layout)
        .with_bank_deck(deck(DeckKind::Bank, bank))
        .with_action_deck(deck(DeckKind::Action, action))
        .build()
        .expect("test game builds")
}

pub fn engine(players: usize, bank: &[u32], action: &[u32]) -> GameEngine {
    let names: Vec<String> = (1..=players).map(|i| format!("P{i}")).collect();
    engine_with(
        SessionConfig::default().with_players(names),
        BoardLayout::standard(40),
        bank,
        action,
    )
}

pub fn place(engine: &mut GameEngine, player: PlayerId, field: usize) {
    engine
        .session_mut()
        .player_mut(player)
        .expect("seated player")
        .position = FieldIndex::new(field);
}

pub fn money(engine: &GameEngine, player: PlayerId) -> Money {
    engine.session().player(player).expect("seated player").money()
}

pub fn position(engine: &GameEngine, player: PlayerId) -> FieldIndex {
    engine.session().player(player).expect("seated player").position
}

/// Roll `sum` and report the computed target back as reached.
pub fn roll_and_walk(engine: &mut GameEngine, sum: u32) -> Signals {
    let mut signals = engine.roll(sum).expect("roll accepted");
    signals.extend(finish_walk(engine));
    signals
}

/// Complete the pending walk at its computed target.
pub fn finish_walk(engine: &mut GameEngine) -> Signals {
    let Awaiting::Movement(plan) = engine.awaiting().clone() else {
        panic!("expected movement, got {:?}", engine.awaiting());
    };
    engine.movement_finished(plan.to).expect("walk accepted")
}

pub fn turn_ended(signals: &[Signal]) -> bool {
    signals.iter().any(|s| matches!(s, Signal::TurnEnded { .. }))
}
