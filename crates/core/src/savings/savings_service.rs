use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::goals::SavingsGoal;
use crate::savings::metrics::{active_goals, aggregate_metrics};
use crate::savings::monthly_series::build_monthly_series;
use crate::savings::progress::progress_from_series;
use crate::savings::projection::project_savings;
use crate::savings::savings_model::{GoalOverview, PortfolioOverview};
use crate::savings::savings_traits::{SavingsRepositoryTrait, SavingsServiceTrait};
use crate::settings::SavingsConfig;
use crate::transactions::{transactions_for_goal, SavingsTransaction};

pub struct SavingsService {
    repository: Arc<dyn SavingsRepositoryTrait>,
    config: SavingsConfig,
}

impl SavingsService {
    /// Fails with [`Error::InvalidConfigValue`] when `config` does not validate.
    pub fn new(repository: Arc<dyn SavingsRepositoryTrait>, config: SavingsConfig) -> Result<Self> {
        config.validate()?;
        Ok(SavingsService { repository, config })
    }

    /// Runs the per-goal pipeline: scope transactions, build the monthly
    /// series, then progress and projections from that series.
    fn build_overview(
        &self,
        goal: &SavingsGoal,
        transactions: &[SavingsTransaction],
        as_of: NaiveDate,
    ) -> Result<GoalOverview> {
        let scoped = transactions_for_goal(goal, transactions, as_of);
        let monthly_series = build_monthly_series(&scoped, goal, &self.config);
        let progress = progress_from_series(goal, &scoped, &monthly_series, as_of, &self.config)?;
        let projections = project_savings(
            &monthly_series,
            self.config.default_projection_months,
            &self.config,
        );

        Ok(GoalOverview {
            goal: goal.clone(),
            progress,
            monthly_series,
            projections,
        })
    }
}

impl SavingsServiceTrait for SavingsService {
    fn get_goal_overview(&self, goal_id: &str, as_of: NaiveDate) -> Result<GoalOverview> {
        let goal = self
            .repository
            .load_goals()?
            .into_iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::NotFound(format!("Goal {} not found", goal_id)))?;
        let transactions = self.repository.load_savings_transactions()?;

        self.build_overview(&goal, &transactions, as_of)
    }

    /// Overviews of the active goals. Goals whose data is incomplete are left
    /// out here and reported by the metrics instead of failing the whole view.
    fn get_portfolio_overview(&self, as_of: NaiveDate) -> Result<PortfolioOverview> {
        let goals = self.repository.load_goals()?;
        let transactions = self.repository.load_savings_transactions()?;
        let active = active_goals(&goals, as_of);

        let mut overviews = Vec::with_capacity(active.len());
        for goal in &active {
            match self.build_overview(goal, &transactions, as_of) {
                Ok(overview) => overviews.push(overview),
                Err(Error::InvalidGoalState(e)) => {
                    warn!("Skipping overview for goal {}: {}", goal.id, e);
                }
                Err(e) => return Err(e),
            }
        }

        let metrics = if active.len() > 1 {
            Some(aggregate_metrics(&goals, as_of))
        } else {
            None
        };

        debug!(
            "Portfolio overview as of {}: {} of {} goals active",
            as_of,
            active.len(),
            goals.len()
        );

        Ok(PortfolioOverview {
            as_of,
            goals: overviews,
            metrics,
        })
    }
}
