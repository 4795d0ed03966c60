//! Pennywise Core - savings goal progress and projection engine.
//!
//! This crate contains the savings calculations behind the Pennywise
//! budgeting app. It owns no storage: goals and transactions arrive through
//! repository traits implemented by the data-access layer, already loaded
//! and scoped to the current user.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod savings;
pub mod settings;
pub mod transactions;
pub mod utils;

pub use goals::{GoalKind, GoalSchedule, SavingsGoal};
pub use savings::*;
pub use settings::SavingsConfig;
pub use transactions::SavingsTransaction;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
