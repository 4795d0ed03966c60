use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{goals_to_close, NewSavingsGoal, SavingsGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }

    fn find_goal(&self, goal_id: &str) -> Result<SavingsGoal> {
        self.goal_repo
            .load_goals()?
            .into_iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::NotFound(format!("Goal {} not found", goal_id)))
    }

    fn validate_goal(goal: &SavingsGoal) -> Result<()> {
        if goal.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        goal.validate()?;
        Ok(())
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<SavingsGoal>> {
        self.goal_repo.load_goals()
    }

    /// Creates a goal. Any open recurring goal of the same kind is ended on
    /// the creation date first, so only one stays active per kind.
    fn create_goal(&self, new_goal: NewSavingsGoal, now: DateTime<Utc>) -> Result<SavingsGoal> {
        let goal = new_goal.into_goal(now);
        Self::validate_goal(&goal)?;

        let existing = self.goal_repo.load_goals()?;
        for previous in goals_to_close(&existing, goal.kind()) {
            let mut closed = previous.clone();
            closed.end(now.date_naive());
            info!(
                "Closing {} goal {} before creating {}",
                closed.kind(),
                closed.id,
                goal.id
            );
            self.goal_repo.update_goal(closed)?;
        }

        debug!("Inserting {} goal {}", goal.kind(), goal.id);
        self.goal_repo.insert_goal(goal)
    }

    fn update_goal(&self, goal: SavingsGoal) -> Result<SavingsGoal> {
        let current = self.find_goal(&goal.id)?;
        if current.kind() != goal.kind() {
            return Err(ValidationError::KindChange {
                from: current.kind().to_string(),
                to: goal.kind().to_string(),
            }
            .into());
        }
        Self::validate_goal(&goal)?;
        self.goal_repo.update_goal(goal)
    }

    fn end_goal(&self, goal_id: &str, now: DateTime<Utc>) -> Result<SavingsGoal> {
        let mut goal = self.find_goal(goal_id)?;
        if let Some(end) = goal.period_end() {
            if goal.kind().is_recurring() {
                debug!("Goal {} already ended on {}", goal_id, end);
                return Ok(goal);
            }
        }
        goal.end(now.date_naive());
        self.goal_repo.update_goal(goal)
    }
}
