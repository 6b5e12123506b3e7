//! Fixed card id to effect tables.
//!
//! The mapping is part of the game rules, not data: deck files only carry
//! ids and texts. Ids missing from a table have no effect.

use serde::{Deserialize, Serialize};

use super::{CardId, DeckKind};
use crate::board::FieldIndex;
use crate::core::Money;

/// Which fields a chosen-field move may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldChoice {
    /// Own company fields and unowned company fields.
    AnyCompany,
    /// Own company fields, unowned company fields, bank and action fields.
    AnyField,
    /// Own company fields only.
    OwnedCompany,
}

/// What a card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Walk a fixed number of fields.
    MoveSteps(usize),
    /// Walk forward to a fixed field.
    MoveToField(FieldIndex),
    /// Walk forward to a field the player picks.
    MoveToChosenField(FieldChoice),
    /// Walk forward to the nearest owned company field.
    MoveToNextOwnedCompany,
    GrantMoney(Money),
    /// The player sits out their next turn.
    SkipTurn,
    RollAgain,
    GrantMoneyAndRollAgain(Money),
    NoEffect,
}

/// Coarse grouping of effects, used to restrict decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectCategory {
    MovementFixed,
    MovementToField,
    MovementToChosenField,
    MovementToNextOwned,
    MoneyGrant,
    SkipTurn,
    RollAgain,
    MoneyGrantRollAgain,
    NoEffect,
}

impl CardEffect {
    /// Effect of card `id` drawn from `deck`.
    #[must_use]
    pub fn for_card(deck: DeckKind, id: CardId) -> Self {
        match deck {
            DeckKind::Bank => bank_effect(id.raw()),
            DeckKind::Action => action_effect(id.raw()),
        }
    }

    #[must_use]
    pub fn category(self) -> EffectCategory {
        match self {
            Self::MoveSteps(_) => EffectCategory::MovementFixed,
            Self::MoveToField(_) => EffectCategory::MovementToField,
            Self::MoveToChosenField(_) => EffectCategory::MovementToChosenField,
            Self::MoveToNextOwnedCompany => EffectCategory::MovementToNextOwned,
            Self::GrantMoney(_) => EffectCategory::MoneyGrant,
            Self::SkipTurn => EffectCategory::SkipTurn,
            Self::RollAgain => EffectCategory::RollAgain,
            Self::GrantMoneyAndRollAgain(_) => EffectCategory::MoneyGrantRollAgain,
            Self::NoEffect => EffectCategory::NoEffect,
        }
    }
}

fn bank_effect(id: u32) -> CardEffect {
    use CardEffect::*;

    match id {
        1 | 32 | 38 | 56 => MoveSteps(3),
        19 | 70 => MoveSteps(4),
        23 => MoveSteps(1),
        24 | 45 | 79 => MoveSteps(2),

        29 => MoveToField(FieldIndex::new(2)),
        35 => MoveToField(FieldIndex::new(39)),
        44 => MoveToField(FieldIndex::new(1)),
        52 => MoveToField(FieldIndex::new(31)),
        72 => MoveToField(FieldIndex::new(9)),
        74 => MoveToField(FieldIndex::new(27)),

        2 | 12 | 30 => MoveToChosenField(FieldChoice::AnyCompany),
        7 | 77 => MoveToChosenField(FieldChoice::AnyField),
        85 => MoveToNextOwnedCompany,

        4 | 5 | 11 | 14 | 16 | 21 | 25 | 27 | 37 | 39 | 43 | 46 | 49 | 58 | 62 | 66 | 67
        | 69 | 76 => RollAgain,

        3 | 9 | 15 | 40 | 57 | 60 | 80 | 207 => SkipTurn,

        22 => GrantMoney(50),
        13 | 34 | 41 | 64 | 73 | 82 => GrantMoney(100),
        18 | 59 | 75 | 78 => GrantMoney(150),
        17 | 26 | 28 | 31 | 33 | 55 => GrantMoney(200),
        36 | 65 | 71 => GrantMoney(250),
        47 | 48 => GrantMoney(300),
        81 => GrantMoney(500),

        50 => GrantMoneyAndRollAgain(500),
        83 => GrantMoneyAndRollAgain(100),

        _ => NoEffect,
    }
}

fn action_effect(id: u32) -> CardEffect {
    use CardEffect::*;

    match id {
        1 | 2 => MoveToChosenField(FieldChoice::AnyCompany),
        3 => MoveToNextOwnedCompany,
        4 => MoveToChosenField(FieldChoice::OwnedCompany),
        6 => GrantMoney(200),
        7 => SkipTurn,
        8 => RollAgain,
        _ => NoEffect,
    }
}
