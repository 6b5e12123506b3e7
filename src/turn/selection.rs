//! Field selection: preview, then confirm one field from an allowed set.
//!
//! Confirming or cancelling ends the invocation and clears everything, so
//! the next card starts without a stale allowed set or highlight.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::FieldIndex;
use crate::core::{FlowError, PlayerId};

/// One field-selection invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelection {
    player: Option<PlayerId>,
    allowed: Vec<FieldIndex>,
    preview: Option<FieldIndex>,
}

impl FieldSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a selection for `player` among `allowed`.
    ///
    /// Replaces whatever selection was active.
    pub fn begin(&mut self, player: PlayerId, allowed: Vec<FieldIndex>) {
        debug!(player = %player, allowed = allowed.len(), "field selection started");
        self.player = Some(player);
        self.allowed = allowed;
        self.preview = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.player.is_some()
    }

    /// Player choosing, while active.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        self.player
    }

    #[must_use]
    pub fn allowed(&self) -> &[FieldIndex] {
        &self.allowed
    }

    /// Tentatively highlighted field.
    #[must_use]
    pub fn previewed(&self) -> Option<FieldIndex> {
        self.preview
    }

    /// Highlight `field`. Only allowed fields can be previewed.
    pub fn preview(&mut self, field: FieldIndex) -> Result<(), FlowError> {
        if !self.is_active() {
            return Err(FlowError::SelectionInactive);
        }
        if !self.allowed.contains(&field) {
            return Err(FlowError::FieldNotSelectable(field));
        }
        self.preview = Some(field);
        Ok(())
    }

    /// Drop the highlight, keeping the selection open.
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Confirm the previewed field and end the invocation.
    pub fn confirm(&mut self) -> Result<FieldIndex, FlowError> {
        if !self.is_active() {
            return Err(FlowError::SelectionInactive);
        }
        let field = self.preview.ok_or(FlowError::NothingPreviewed)?;
        self.reset();
        Ok(field)
    }

    /// End the invocation without a choice.
    pub fn cancel(&mut self) -> Result<(), FlowError> {
        if !self.is_active() {
            return Err(FlowError::SelectionInactive);
        }
        self.reset();
        Ok(())
    }

    /// Clear all selection state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
