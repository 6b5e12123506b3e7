//! Turn flow building blocks.
//!
//! ## Key Types
//!
//! - `TurnCoordinator`: rotation, in-progress flag, skips
//! - `MovementResolver`: move planning, start bonus, landing dispatch
//! - `FieldSelection`: preview/confirm protocol for chosen-field cards
//! - `SkipRegistry`: owed skips per player
//!
//! These operate on a `GameSession`; sequencing them into turns is the
//! engine's job.

pub mod coordinator;
pub mod movement;
pub mod selection;
pub mod skip;

pub use coordinator::{TurnAdvance, TurnCoordinator};
pub use movement::{Landing, MovePlan, MovementResolver};
pub use selection::FieldSelection;
pub use skip::SkipRegistry;
