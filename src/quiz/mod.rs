//! Quiz-gated purchases.
//!
//! ## Key Types
//!
//! - `QuestionBank`: questions grouped by target level
//! - `QuizSeries`: one multi-question run, pass or fail
//! - `PurchaseFlow`: holds the single pending transaction between the
//!   quiz starting and its result arriving

pub mod purchase;
pub mod question;
pub mod series;

pub use purchase::{
    PendingTransaction, PurchaseFlow, PurchaseOffer, PurchaseResolution, QuizRequest,
};
pub use question::{Question, QuestionBank};
pub use series::{QuizSeries, SeriesStep};
