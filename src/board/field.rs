//! Field identity, kinds and company ownership levels.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Position on the board, `0..board_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldIndex(pub usize);

impl FieldIndex {
    /// Create a new field index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field {}", self.0)
    }
}

/// What happens when a token stops on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Pays the start bonus.
    Start,
    /// Can be founded, upgraded and charges rent.
    Company,
    /// Draws from the bank deck.
    Bank,
    /// Draws from the action deck.
    Action,
}

/// Ownership stage of a company field.
///
/// Only ever advances one step at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompanyLevel {
    #[default]
    None,
    Founded,
    Invested,
    #[serde(rename = "AG")]
    Ag,
}

impl CompanyLevel {
    /// The only level a purchase from this level may reach.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::None => Some(Self::Founded),
            Self::Founded => Some(Self::Invested),
            Self::Invested => Some(Self::Ag),
            Self::Ag => None,
        }
    }

    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, Self::Ag)
    }
}

impl std::fmt::Display for CompanyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Founded => "Founded",
            Self::Invested => "Invested",
            Self::Ag => "AG",
        };
        f.write_str(name)
    }
}

/// Ownership record of one company field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyField {
    pub index: FieldIndex,

    /// Catalog entry backing this field.
    pub company_id: u32,

    /// `None` while unowned.
    pub owner: Option<PlayerId>,

    pub level: CompanyLevel,
}

impl CompanyField {
    /// An unowned field.
    #[must_use]
    pub fn new(index: FieldIndex, company_id: u32) -> Self {
        Self {
            index,
            company_id,
            owner: None,
            level: CompanyLevel::None,
        }
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_display() {
        assert_eq!(FieldIndex::new(7).to_string(), "Field 7");
        assert_eq!(FieldIndex::new(7).raw(), 7);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(CompanyLevel::None.next(), Some(CompanyLevel::Founded));
        assert_eq!(CompanyLevel::Founded.next(), Some(CompanyLevel::Invested));
        assert_eq!(CompanyLevel::Invested.next(), Some(CompanyLevel::Ag));
        assert_eq!(CompanyLevel::Ag.next(), None);
        assert!(CompanyLevel::Ag.is_max());
        assert!(CompanyLevel::None < CompanyLevel::Ag);
    }

    #[test]
    fn test_level_serde_names() {
        assert_eq!(serde_json::to_string(&CompanyLevel::Ag).unwrap(), "\"AG\"");
        let level: CompanyLevel = serde_json::from_str("\"Invested\"").unwrap();
        assert_eq!(level, CompanyLevel::Invested);
    }

    #[test]
    fn test_new_company_field_is_unowned() {
        let field = CompanyField::new(FieldIndex::new(3), 3);
        assert!(!field.is_owned());
        assert_eq!(field.level, CompanyLevel::None);
    }
}
