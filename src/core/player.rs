//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Stable player identifier assigned at game setup. Ids are not required
//! to be dense or 0-based; the roster order defines the turn rotation.
//!
//! ## Player
//!
//! Money balance, board position and the set of owned company fields.
//! Balances are unsigned: a debit that would go below zero is refused by
//! the economy ledger instead of being applied.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::board::FieldIndex;

/// Currency units.
pub type Money = u32;

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
///
/// Created at game setup and never removed during a session. Money and
/// ownership are only mutated through the ledger (`crate::ledger`), which
/// is why the mutators here are crate-private.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Current board position.
    pub position: FieldIndex,

    money: Money,

    /// Owned company fields. A set, so repeated grants never duplicate.
    owned: OrdSet<FieldIndex>,
}

impl Player {
    /// Create a player standing on field 0.
    pub fn new(id: PlayerId, name: impl Into<String>, money: Money) -> Self {
        Self {
            id,
            name: name.into(),
            position: FieldIndex::new(0),
            money,
            owned: OrdSet::new(),
        }
    }

    /// Current balance.
    #[must_use]
    pub fn money(&self) -> Money {
        self.money
    }

    /// Does this player own the given field?
    #[must_use]
    pub fn owns(&self, field: FieldIndex) -> bool {
        self.owned.contains(&field)
    }

    /// Owned fields in ascending board order.
    pub fn owned_fields(&self) -> impl Iterator<Item = FieldIndex> + '_ {
        self.owned.iter().copied()
    }

    /// Number of owned fields.
    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    pub(crate) fn credit(&mut self, amount: Money) -> Money {
        self.money = self.money.saturating_add(amount);
        self.money
    }

    /// Debit `amount`, or leave the balance untouched and return `None`.
    pub(crate) fn debit(&mut self, amount: Money) -> Option<Money> {
        let remaining = self.money.checked_sub(amount)?;
        self.money = remaining;
        Some(remaining)
    }

    /// Record ownership. Returns `false` if the field was already owned.
    pub(crate) fn add_owned(&mut self, field: FieldIndex) -> bool {
        self.owned.insert(field).is_none()
    }
}
