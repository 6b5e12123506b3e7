//! Session configuration.
//!
//! A `SessionConfig` fixes everything about a game that is chosen before the
//! first roll: board size, starting money, the start bonus, the dice, the
//! seating order, how long each purchase quiz is, and (for demos and tests)
//! which cards each deck may deal.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. `SessionConfig::load` layers an optional file under
//! `BIZBOARD__*` environment variables:
//!
//! ```text
//! BIZBOARD__STARTING_MONEY=4000
//! BIZBOARD__DICE__COUNT=1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::CompanyLevel;
use crate::cards::DeckFilter;
use crate::core::{Money, SetupError};

/// Dice the players roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    pub count: u8,
    pub sides: u8,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self { count: 2, sides: 6 }
    }
}

/// Length of one quiz series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSpec {
    /// Questions asked.
    pub questions: u8,
    /// Correct answers needed to pass.
    pub required: u8,
}

impl QuizSpec {
    #[must_use]
    pub const fn new(questions: u8, required: u8) -> Self {
        Self {
            questions,
            required,
        }
    }
}

/// Quiz length per target level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizRules {
    pub founded: QuizSpec,
    pub invested: QuizSpec,
    pub ag: QuizSpec,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            founded: QuizSpec::new(1, 1),
            invested: QuizSpec::new(2, 2),
            ag: QuizSpec::new(3, 2),
        }
    }
}

impl QuizRules {
    /// The series guarding a purchase of `level`.
    ///
    /// `CompanyLevel::None` is never a purchase target; it maps to the
    /// founding quiz.
    #[must_use]
    pub fn for_level(&self, level: CompanyLevel) -> QuizSpec {
        match level {
            CompanyLevel::None | CompanyLevel::Founded => self.founded,
            CompanyLevel::Invested => self.invested,
            CompanyLevel::Ag => self.ag,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of fields on the board.
    pub board_size: usize,

    /// Balance every player starts with.
    pub starting_money: Money,

    /// Paid for every pass over (or landing on) the start field.
    pub start_bonus: Money,

    pub dice: DiceConfig,

    /// Seed for all session randomness.
    pub seed: u64,

    /// Seating order. Player ids are assigned 1..=N in this order.
    pub player_names: Vec<String>,

    pub quiz: QuizRules,

    /// Restricts which bank cards can be drawn.
    pub bank_filter: DeckFilter,

    /// Restricts which action cards can be drawn.
    pub action_filter: DeckFilter,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: 40,
            starting_money: 2500,
            start_bonus: 500,
            dice: DiceConfig::default(),
            seed: 0,
            player_names: ["Hanx", "Momo", "Tonii", "Vici"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            quiz: QuizRules::default(),
            bank_filter: DeckFilter::All,
            action_filter: DeckFilter::All,
        }
    }
}

impl SessionConfig {
    /// Load from an optional file, then `BIZBOARD__*` environment overrides.
    ///
    /// A missing file is not an error; the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, SetupError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "loading session config");
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix("BIZBOARD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Check the numeric constraints.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.board_size < 2 {
            return Err(SetupError::BoardTooSmall(self.board_size));
        }
        if self.dice.count == 0 || self.dice.sides == 0 {
            return Err(SetupError::InvalidDice);
        }
        if self.player_names.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if self.player_names.len() > usize::from(u8::MAX) {
            return Err(SetupError::TooManyPlayers(self.player_names.len()));
        }
        for level in [CompanyLevel::Founded, CompanyLevel::Invested, CompanyLevel::Ag] {
            let spec = self.quiz.for_level(level);
            if spec.required == 0 || spec.required > spec.questions {
                return Err(SetupError::InvalidQuizRules {
                    level,
                    questions: spec.questions,
                    required: spec.required,
                });
            }
        }
        Ok(())
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_starting_money(mut self, money: Money) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the start bonus.
    #[must_use]
    pub fn with_start_bonus(mut self, bonus: Money) -> Self {
        self.start_bonus = bonus;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the seating order.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the quiz rules.
    #[must_use]
    pub fn with_quiz(mut self, quiz: QuizRules) -> Self {
        self.quiz = quiz;
        self
    }

    /// Restrict the bank deck.
    #[must_use]
    pub fn with_bank_filter(mut self, filter: DeckFilter) -> Self {
        self.bank_filter = filter;
        self
    }

    /// Restrict the action deck.
    #[must_use]
    pub fn with_action_filter(mut self, filter: DeckFilter) -> Self {
        self.action_filter = filter;
        self
    }
}
