//! Game-flow engine: the turn state machine and its assembler.
//!
//! ## Key Types
//!
//! - `GameEngine`: owns the session, consumes collaborator completions,
//!   emits `Signal`s
//! - `Awaiting`: the suspension point the engine is paused on
//! - `GameBuilder`: validates configuration and wires everything together
//! - `SessionSnapshot`: serialisable view for displays

pub mod builder;
pub mod game;
pub mod signal;
pub mod snapshot;

pub use builder::GameBuilder;
pub use game::GameEngine;
pub use signal::{Awaiting, Signal, Signals};
pub use snapshot::{PlayerView, SessionSnapshot};
