//! Board layout and ring arithmetic.
//!
//! The board is a ring of `N` fields. All position arithmetic is modulo
//! `N`:
//!
//! - `advance(p, s) = (p + s) mod N`
//! - `distance(p, f) = (f - p + N) mod N`, always in `0..N`
//!
//! so that `advance(p, distance(p, f)) == f` for every pair.

use serde::{Deserialize, Serialize};

use super::{FieldIndex, FieldKind};

/// Bank fields of the standard board.
const STANDARD_BANK: [usize; 6] = [5, 7, 13, 23, 27, 37];

/// Action fields of the standard board.
const STANDARD_ACTION: [usize; 3] = [10, 20, 30];

/// Field kinds in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    kinds: Vec<FieldKind>,
}

impl BoardLayout {
    /// The standard layout: start at 0, fixed bank and action fields,
    /// everything else a company. Fields beyond `size` are dropped.
    #[must_use]
    pub fn standard(size: usize) -> Self {
        let mut kinds = vec![FieldKind::Company; size];
        if let Some(first) = kinds.first_mut() {
            *first = FieldKind::Start;
        }
        for &i in &STANDARD_BANK {
            if let Some(kind) = kinds.get_mut(i) {
                *kind = FieldKind::Bank;
            }
        }
        for &i in &STANDARD_ACTION {
            if let Some(kind) = kinds.get_mut(i) {
                *kind = FieldKind::Action;
            }
        }
        Self { kinds }
    }

    /// A layout from explicit kinds.
    #[must_use]
    pub fn from_kinds(kinds: Vec<FieldKind>) -> Self {
        Self { kinds }
    }

    /// Override one field's kind. Out-of-range indices are ignored.
    #[must_use]
    pub fn with_kind(mut self, index: usize, kind: FieldKind) -> Self {
        if let Some(slot) = self.kinds.get_mut(index) {
            *slot = kind;
        }
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Kind at `index`.
    #[must_use]
    pub fn kind(&self, index: usize) -> Option<FieldKind> {
        self.kinds.get(index).copied()
    }

    /// `(index, kind)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldIndex, FieldKind)> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| (FieldIndex::new(i), kind))
    }
}

/// Position after walking `steps` from `from` on a ring of `size`.
#[must_use]
pub fn advance(from: FieldIndex, steps: usize, size: usize) -> FieldIndex {
    if size == 0 {
        return from;
    }
    FieldIndex::new((from.raw() % size + steps % size) % size)
}

/// Forward steps from `from` to `to` on a ring of `size`.
#[must_use]
pub fn distance(from: FieldIndex, to: FieldIndex, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    (to.raw() % size + size - from.raw() % size) % size
}
