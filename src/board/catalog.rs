//! Company catalog: static cost and revenue per ownership level.
//!
//! Loaded once from JSON shaped like
//!
//! ```json
//! { "companies": [ { "companyID": 1, "companyName": "Alpha",
//!   "costFound": 200, "costInvest": 300, "costAG": 500,
//!   "revenueFound": 40, "revenueInvest": 80, "revenueAG": 150 } ] }
//! ```
//!
//! and immutable afterwards.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::CompanyLevel;
use crate::core::{Money, SetupError};

/// Reference data for one company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyConfig {
    #[serde(rename = "companyID")]
    pub id: u32,

    #[serde(rename = "companyName")]
    pub name: String,

    #[serde(rename = "costFound")]
    pub cost_found: Money,
    #[serde(rename = "costInvest")]
    pub cost_invest: Money,
    #[serde(rename = "costAG")]
    pub cost_ag: Money,

    #[serde(rename = "revenueFound")]
    pub revenue_found: Money,
    #[serde(rename = "revenueInvest")]
    pub revenue_invest: Money,
    #[serde(rename = "revenueAG")]
    pub revenue_ag: Money,
}

impl CompanyConfig {
    /// Price of reaching `level`.
    #[must_use]
    pub fn cost(&self, level: CompanyLevel) -> Money {
        match level {
            CompanyLevel::None => 0,
            CompanyLevel::Founded => self.cost_found,
            CompanyLevel::Invested => self.cost_invest,
            CompanyLevel::Ag => self.cost_ag,
        }
    }

    /// Rent charged at `level`.
    #[must_use]
    pub fn revenue(&self, level: CompanyLevel) -> Money {
        match level {
            CompanyLevel::None => 0,
            CompanyLevel::Founded => self.revenue_found,
            CompanyLevel::Invested => self.revenue_invest,
            CompanyLevel::Ag => self.revenue_ag,
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    companies: Vec<CompanyConfig>,
}

/// All companies keyed by id.
#[derive(Clone, Debug, Default)]
pub struct CompanyCatalog {
    companies: FxHashMap<u32, CompanyConfig>,
}

impl CompanyCatalog {
    /// A catalog with no companies.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the catalog JSON.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(file.companies.into_iter().collect())
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Like [`load`](Self::load), but degrades to an empty catalog.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => {
                if catalog.is_empty() {
                    warn!(path = %path.display(), "company catalog is empty");
                }
                catalog
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "company catalog unavailable, using empty catalog",
                );
                Self::empty()
            }
        }
    }

    /// Add or replace a company.
    #[must_use]
    pub fn with_company(mut self, company: CompanyConfig) -> Self {
        self.companies.insert(company.id, company);
        self
    }

    /// Look up a company by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CompanyConfig> {
        self.companies.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl FromIterator<CompanyConfig> for CompanyCatalog {
    fn from_iter<I: IntoIterator<Item = CompanyConfig>>(iter: I) -> Self {
        Self {
            companies: iter.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "companies": [
            { "companyID": 1, "companyName": "Alpha",
              "costFound": 200, "costInvest": 300, "costAG": 500,
              "revenueFound": 40, "revenueInvest": 80, "revenueAG": 150 },
            { "companyID": 2, "companyName": "Beta",
              "costFound": 400, "costInvest": 600, "costAG": 900,
              "revenueFound": 60, "revenueInvest": 120, "revenueAG": 250 }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = CompanyCatalog::from_json(JSON).unwrap();
        assert_eq!(catalog.len(), 2);

        let beta = catalog.get(2).unwrap();
        assert_eq!(beta.name, "Beta");
        assert_eq!(beta.cost(CompanyLevel::Founded), 400);
        assert_eq!(beta.cost(CompanyLevel::Ag), 900);
        assert_eq!(beta.revenue(CompanyLevel::Invested), 120);
        assert_eq!(beta.revenue(CompanyLevel::None), 0);
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_missing_companies_key_is_empty() {
        let catalog = CompanyCatalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let dir = tempfile::tempdir().unwrap();

        let missing = CompanyCatalog::load_or_empty(&dir.path().join("nope.json"));
        assert!(missing.is_empty());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(CompanyCatalog::load_or_empty(&broken).is_empty());

        let good = dir.path().join("companies.json");
        std::fs::write(&good, JSON).unwrap();
        assert_eq!(CompanyCatalog::load_or_empty(&good).len(), 2);
    }
}
