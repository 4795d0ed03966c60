use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::goals::goals_model::{NewSavingsGoal, SavingsGoal};

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<SavingsGoal>>;
    fn insert_goal(&self, goal: SavingsGoal) -> Result<SavingsGoal>;
    fn update_goal(&self, goal: SavingsGoal) -> Result<SavingsGoal>;
}

/// Trait for goal service operations
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<SavingsGoal>>;
    fn create_goal(&self, new_goal: NewSavingsGoal, now: DateTime<Utc>) -> Result<SavingsGoal>;
    fn update_goal(&self, goal: SavingsGoal) -> Result<SavingsGoal>;
    fn end_goal(&self, goal_id: &str, now: DateTime<Utc>) -> Result<SavingsGoal>;
}
