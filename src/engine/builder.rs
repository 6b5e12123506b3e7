//! Top-level assembly of a game.
//!
//! ```
//! use bizboard::board::{CompanyCatalog, CompanyConfig};
//! use bizboard::core::SessionConfig;
//! use bizboard::engine::{Awaiting, GameBuilder};
//!
//! let engine = GameBuilder::new(SessionConfig::default().with_players(["Ada", "Bo"]))
//!     .build()
//!     .unwrap();
//! assert!(matches!(engine.awaiting(), Awaiting::Roll { .. }));
//! assert_eq!(engine.session().player_count(), 2);
//! ```

use std::path::Path;

use tracing::info;

use super::GameEngine;
use crate::board::{Board, BoardLayout, CompanyCatalog, FieldKind};
use crate::cards::{Deck, DeckKind};
use crate::core::{GameSession, Player, PlayerId, SessionConfig, SetupError};

/// File names inside a data directory.
pub const COMPANIES_FILE: &str = "companies.json";
pub const BANK_CARDS_FILE: &str = "bank_cards.json";
pub const ACTION_CARDS_FILE: &str = "action_cards.json";
pub const QUESTIONS_FILE: &str = "questions.json";

/// Builder for [`GameEngine`].
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: SessionConfig,
    layout: Option<BoardLayout>,
    catalog: CompanyCatalog,
    bank: Deck,
    action: Deck,
}

impl GameBuilder {
    /// Start with no companies and empty decks.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            layout: None,
            catalog: CompanyCatalog::empty(),
            bank: Deck::empty(DeckKind::Bank),
            action: Deck::empty(DeckKind::Action),
        }
    }

    /// Load catalog and decks from a data directory.
    ///
    /// Missing or broken files degrade to empty collections.
    pub fn from_data_dir(config: SessionConfig, dir: &Path) -> Self {
        Self::new(config)
            .with_catalog(CompanyCatalog::load_or_empty(&dir.join(COMPANIES_FILE)))
            .with_bank_deck(Deck::load_or_empty(DeckKind::Bank, &dir.join(BANK_CARDS_FILE)))
            .with_action_deck(Deck::load_or_empty(
                DeckKind::Action,
                &dir.join(ACTION_CARDS_FILE),
            ))
    }

    /// Use a custom layout instead of the standard one.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: CompanyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_bank_deck(mut self, deck: Deck) -> Self {
        self.bank = deck;
        self
    }

    #[must_use]
    pub fn with_action_deck(mut self, deck: Deck) -> Self {
        self.action = deck;
        self
    }

    /// Validate and assemble.
    ///
    /// Players get ids `1..=N` in the configured seating order.
    pub fn build(self) -> Result<GameEngine, SetupError> {
        self.config.validate()?;

        let layout = self
            .layout
            .unwrap_or_else(|| BoardLayout::standard(self.config.board_size));
        if layout.len() != self.config.board_size {
            return Err(SetupError::BoardSizeMismatch {
                layout: layout.len(),
                expected: self.config.board_size,
            });
        }
        if layout.kind(0) != Some(FieldKind::Start) {
            return Err(SetupError::MissingStartField);
        }

        let players = self
            .config
            .player_names
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                let id = u8::try_from(seat + 1)
                    .map_err(|_| SetupError::TooManyPlayers(self.config.player_names.len()))?;
                Ok(Player::new(PlayerId::new(id), name.clone(), self.config.starting_money))
            })
            .collect::<Result<Vec<_>, SetupError>>()?;

        let board = Board::new(layout, self.catalog);
        info!(
            players = players.len(),
            fields = board.size(),
            companies = board.company_fields().len(),
            bank_cards = self.bank.len(),
            action_cards = self.action.len(),
            "game assembled"
        );

        let session = GameSession::new(self.config, players, board);
        Ok(GameEngine::new(session, self.bank, self.action))
    }
}
