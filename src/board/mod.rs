//! The board: field kinds, company ownership and the company catalog.
//!
//! ## Key Types
//!
//! - `FieldIndex`: position on the ring
//! - `FieldKind`: Start, Company, Bank or Action
//! - `CompanyField`: owner and level of one company field
//! - `CompanyCatalog`: cost and revenue per level
//! - `Board`: all of the above, built once at setup
//!
//! A company field is identified with the catalog entry whose id equals the
//! field index. Company fields without a catalog entry are left out of the
//! maintained field list; landing on one is a lookup failure.

pub mod catalog;
pub mod field;
pub mod layout;

pub use catalog::{CompanyCatalog, CompanyConfig};
pub use field::{CompanyField, CompanyLevel, FieldIndex, FieldKind};
pub use layout::{advance, distance, BoardLayout};

use tracing::warn;

/// Board state.
#[derive(Clone, Debug)]
pub struct Board {
    layout: BoardLayout,
    catalog: CompanyCatalog,
    /// Sorted by index.
    companies: Vec<CompanyField>,
}

impl Board {
    /// Build the board, attaching catalog entries to company fields.
    pub fn new(layout: BoardLayout, catalog: CompanyCatalog) -> Self {
        let mut companies = Vec::new();
        for (index, kind) in layout.iter() {
            if kind != FieldKind::Company {
                continue;
            }
            let Ok(company_id) = u32::try_from(index.raw()) else {
                warn!(field = %index, "field index exceeds company id range");
                continue;
            };
            if catalog.get(company_id).is_some() {
                companies.push(CompanyField::new(index, company_id));
            } else {
                warn!(field = %index, company_id, "no catalog entry for company field");
            }
        }

        Self {
            layout,
            catalog,
            companies,
        }
    }

    /// Number of fields.
    #[must_use]
    pub fn size(&self) -> usize {
        self.layout.len()
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[must_use]
    pub fn catalog(&self) -> &CompanyCatalog {
        &self.catalog
    }

    /// Kind of the field at `index`.
    #[must_use]
    pub fn kind(&self, index: FieldIndex) -> Option<FieldKind> {
        self.layout.kind(index.raw())
    }

    /// All maintained company fields in board order.
    #[must_use]
    pub fn company_fields(&self) -> &[CompanyField] {
        &self.companies
    }

    /// The maintained company field at `index`.
    #[must_use]
    pub fn company_field(&self, index: FieldIndex) -> Option<&CompanyField> {
        self.companies
            .binary_search_by_key(&index, |f| f.index)
            .ok()
            .map(|i| &self.companies[i])
    }

    pub(crate) fn company_field_mut(&mut self, index: FieldIndex) -> Option<&mut CompanyField> {
        match self.companies.binary_search_by_key(&index, |f| f.index) {
            Ok(i) => Some(&mut self.companies[i]),
            Err(_) => None,
        }
    }

    /// Catalog entry behind the company field at `index`.
    #[must_use]
    pub fn company_config(&self, index: FieldIndex) -> Option<&CompanyConfig> {
        let field = self.company_field(index)?;
        self.catalog.get(field.company_id)
    }

    /// Rent charged on `index` at its current level.
    #[must_use]
    pub fn rent(&self, index: FieldIndex) -> Option<crate::core::Money> {
        let field = self.company_field(index)?;
        let config = self.catalog.get(field.company_id)?;
        Some(config.revenue(field.level))
    }

    /// Company fields nobody owns yet.
    #[must_use]
    pub fn unowned_company_fields(&self) -> Vec<FieldIndex> {
        self.companies
            .iter()
            .filter(|f| !f.is_owned())
            .map(|f| f.index)
            .collect()
    }

    /// Every bank and action field.
    #[must_use]
    pub fn card_fields(&self) -> Vec<FieldIndex> {
        self.layout
            .iter()
            .filter(|(_, kind)| matches!(kind, FieldKind::Bank | FieldKind::Action))
            .map(|(index, _)| index)
            .collect()
    }

    /// Position after walking `steps` from `from`.
    #[must_use]
    pub fn advance(&self, from: FieldIndex, steps: usize) -> FieldIndex {
        advance(from, steps, self.size())
    }

    /// Forward steps from `from` to `to`.
    #[must_use]
    pub fn distance(&self, from: FieldIndex, to: FieldIndex) -> usize {
        distance(from, to, self.size())
    }

    /// Fields stepped on walking `steps` from `from`, target included.
    ///
    /// Walks longer than a lap keep only the last lap.
    #[must_use]
    pub fn path(&self, from: FieldIndex, steps: usize) -> Vec<FieldIndex> {
        let shown = steps.min(self.size());
        if shown == 0 {
            return Vec::new();
        }
        (steps - shown + 1..=steps)
            .map(|s| self.advance(from, s))
            .collect()
    }

    /// Start fields passed or landed on while walking `steps` from `from`.
    #[must_use]
    pub fn start_passes(&self, from: FieldIndex, steps: usize) -> u32 {
        let size = self.size();
        let passes: usize = self
            .layout
            .iter()
            .filter(|(_, kind)| *kind == FieldKind::Start)
            .map(|(start, _)| {
                let first = match self.distance(from, start) {
                    0 => size,
                    d => d,
                };
                if steps < first {
                    0
                } else {
                    (steps - first) / size + 1
                }
            })
            .sum();
        u32::try_from(passes).unwrap_or(u32::MAX)
    }
}
