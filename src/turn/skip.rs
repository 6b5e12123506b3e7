//! Owed turn skips per player.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Per-player count of owed skips.
///
/// Incremented by skip cards, consumed one at a time when the turn
/// rotation reaches the player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRegistry {
    owed: FxHashMap<PlayerId, u32>,
}

impl SkipRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Owe `player` one more skip.
    pub fn add(&mut self, player: PlayerId) -> u32 {
        let count = self.owed.entry(player).or_insert(0);
        *count += 1;
        *count
    }

    /// Consume one owed skip. Returns `false` if none was owed.
    pub fn consume(&mut self, player: PlayerId) -> bool {
        match self.owed.get_mut(&player) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.owed.remove(&player);
                }
                true
            }
            _ => false,
        }
    }

    /// Skips currently owed by `player`.
    #[must_use]
    pub fn owed(&self, player: PlayerId) -> u32 {
        self.owed.get(&player).copied().unwrap_or(0)
    }

    /// Every player with owed skips, ordered by id.
    #[must_use]
    pub fn entries(&self) -> Vec<(PlayerId, u32)> {
        let mut entries: Vec<_> = self.owed.iter().map(|(&p, &n)| (p, n)).collect();
        entries.sort_unstable();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_consume() {
        let mut skips = SkipRegistry::new();
        let p = PlayerId::new(2);

        assert_eq!(skips.owed(p), 0);
        assert!(!skips.consume(p));

        assert_eq!(skips.add(p), 1);
        assert_eq!(skips.add(p), 2);
        assert!(skips.consume(p));
        assert_eq!(skips.owed(p), 1);
        assert!(skips.consume(p));
        assert!(!skips.consume(p));
        assert!(skips.entries().is_empty());
    }

    #[test]
    fn test_entries_sorted() {
        let mut skips = SkipRegistry::new();
        skips.add(PlayerId::new(3));
        skips.add(PlayerId::new(1));
        skips.add(PlayerId::new(3));
        assert_eq!(
            skips.entries(),
            vec![(PlayerId::new(1), 1), (PlayerId::new(3), 2)]
        );
    }
}
