//! Question bank.
//!
//! Questions are grouped by the level a purchase is aiming for. The file
//! format groups them under `gruendung` (founding), `investition`
//! (investing) and `ag`, either at the top level or nested under an
//! edition key:
//!
//! ```json
//! { "junior_de": {
//!     "gruendung":   [ { "id": 1, "text": "...", "options": ["a", "b"], "correctIndex": 0 } ],
//!     "investition": [],
//!     "ag":          []
//! } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::board::CompanyLevel;
use crate::core::SetupError;

const LEVEL_KEYS: [&str; 3] = ["gruendung", "investition", "ag"];

/// A multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctIndex", alias = "correct_index")]
    pub correct_index: usize,
}

impl Question {
    /// Is `option` the right answer?
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}

#[derive(Default, Deserialize)]
struct LevelBlock {
    #[serde(default)]
    gruendung: Vec<Question>,
    #[serde(default)]
    investition: Vec<Question>,
    #[serde(default)]
    ag: Vec<Question>,
}

/// Questions by target level.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    founded: Vec<Question>,
    invested: Vec<Question>,
    ag: Vec<Question>,
}

impl QuestionBank {
    /// A bank with no questions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from per-level lists.
    #[must_use]
    pub fn new(founded: Vec<Question>, invested: Vec<Question>, ag: Vec<Question>) -> Self {
        Self {
            founded,
            invested,
            ag,
        }
    }

    /// Parse a question file.
    ///
    /// With `edition` set, that nested block is used; otherwise a top-level
    /// block, or else the first nested block in key order.
    pub fn from_json(json: &str, edition: Option<&str>) -> Result<Self, SetupError> {
        let root: Value = serde_json::from_str(json)?;
        let block = match edition {
            Some(key) => root.get(key).cloned(),
            None if is_level_block(&root) => Some(root),
            None => root
                .as_object()
                .and_then(|map| map.values().find(|v| is_level_block(v)).cloned()),
        }
        .ok_or(SetupError::MissingQuestions)?;

        let block: LevelBlock = serde_json::from_value(block)?;
        Ok(Self::new(block.gruendung, block.investition, block.ag))
    }

    /// Read and parse a question file.
    pub fn load(path: &Path, edition: Option<&str>) -> Result<Self, SetupError> {
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, edition)
    }

    /// Like [`load`](Self::load), but degrades to an empty bank.
    #[must_use]
    pub fn load_or_empty(path: &Path, edition: Option<&str>) -> Self {
        Self::load(path, edition).unwrap_or_else(|err| {
            warn!(
                path = %path.display(),
                error = %err,
                "question bank unavailable, using empty bank",
            );
            Self::empty()
        })
    }

    /// Questions guarding a purchase of `level`.
    #[must_use]
    pub fn questions(&self, level: CompanyLevel) -> &[Question] {
        match level {
            CompanyLevel::None | CompanyLevel::Founded => &self.founded,
            CompanyLevel::Invested => &self.invested,
            CompanyLevel::Ag => &self.ag,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.founded.len() + self.invested.len() + self.ag.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_level_block(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| LEVEL_KEYS.iter().any(|k| map.contains_key(*k)))
}
