use chrono::NaiveDate;

use crate::errors::Result;
use crate::goals::SavingsGoal;
use crate::savings::savings_model::{GoalOverview, PortfolioOverview};
use crate::transactions::SavingsTransaction;

/// Data-access collaborator that supplies already-loaded savings data.
pub trait SavingsRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<SavingsGoal>>;
    /// Savings-category transactions of the current user, in any order.
    fn load_savings_transactions(&self) -> Result<Vec<SavingsTransaction>>;
}

/// Trait for savings overview operations
pub trait SavingsServiceTrait: Send + Sync {
    fn get_goal_overview(&self, goal_id: &str, as_of: NaiveDate) -> Result<GoalOverview>;
    fn get_portfolio_overview(&self, as_of: NaiveDate) -> Result<PortfolioOverview>;
}
