//! Goals module - savings goal models, lifecycle service, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_model::{
    goals_to_close, GoalKind, GoalRecord, GoalSchedule, NewSavingsGoal, SavingsGoal,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
