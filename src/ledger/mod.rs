//! Ownership and economy ledger.
//!
//! The only code that mutates balances and company ownership. Both halves
//! are stateless: they operate on a `GameSession` passed in by the caller.

pub mod economy;
pub mod ownership;

pub use economy::{Economy, RentOutcome};
pub use ownership::Ownership;
