//! Savings goal domain models.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::GoalStateError;
use crate::utils::time_utils::month_start;

/// Plain tag for the three goal kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalKind {
    OneTime,
    RecurringMonthly,
    RecurringYearly,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::OneTime => "ONE_TIME",
            GoalKind::RecurringMonthly => "RECURRING_MONTHLY",
            GoalKind::RecurringYearly => "RECURRING_YEARLY",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "ONE_TIME" => Some(GoalKind::OneTime),
            "RECURRING_MONTHLY" => Some(GoalKind::RecurringMonthly),
            "RECURRING_YEARLY" => Some(GoalKind::RecurringYearly),
            _ => None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, GoalKind::OneTime)
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific schedule of a goal. Each variant carries only the fields
/// that kind uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalSchedule {
    /// Save `target_amount` between the period start and the deadline.
    /// The start falls back to the goal's creation date.
    #[serde(rename_all = "camelCase")]
    OneTime {
        period_start: Option<NaiveDate>,
        period_end: Option<NaiveDate>,
    },

    /// Save `recurring_amount` every calendar month from `period_start`.
    /// A set `period_end` means the goal has been ended.
    #[serde(rename_all = "camelCase")]
    RecurringMonthly {
        recurring_amount: Decimal,
        period_start: NaiveDate,
        period_end: Option<NaiveDate>,
    },

    /// Save `recurring_amount` every year from `period_start`, accrued monthly.
    #[serde(rename_all = "camelCase")]
    RecurringYearly {
        recurring_amount: Decimal,
        period_start: NaiveDate,
        period_end: Option<NaiveDate>,
    },
}

impl GoalSchedule {
    pub fn kind(&self) -> GoalKind {
        match self {
            GoalSchedule::OneTime { .. } => GoalKind::OneTime,
            GoalSchedule::RecurringMonthly { .. } => GoalKind::RecurringMonthly,
            GoalSchedule::RecurringYearly { .. } => GoalKind::RecurringYearly,
        }
    }

    pub fn recurring_amount(&self) -> Option<Decimal> {
        match self {
            GoalSchedule::OneTime { .. } => None,
            GoalSchedule::RecurringMonthly {
                recurring_amount, ..
            }
            | GoalSchedule::RecurringYearly {
                recurring_amount, ..
            } => Some(*recurring_amount),
        }
    }

    pub fn period_end(&self) -> Option<NaiveDate> {
        match self {
            GoalSchedule::OneTime { period_end, .. }
            | GoalSchedule::RecurringMonthly { period_end, .. }
            | GoalSchedule::RecurringYearly { period_end, .. } => *period_end,
        }
    }

    fn set_period_end(&mut self, end: NaiveDate) {
        match self {
            GoalSchedule::OneTime { period_end, .. }
            | GoalSchedule::RecurringMonthly { period_end, .. }
            | GoalSchedule::RecurringYearly { period_end, .. } => *period_end = Some(end),
        }
    }
}

/// Domain model representing a savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    #[serde(flatten)]
    pub schedule: GoalSchedule,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Stored progress percentage (0-100, may exceed 100)
    #[serde(default)]
    pub progress: Decimal,
}

impl SavingsGoal {
    pub fn kind(&self) -> GoalKind {
        self.schedule.kind()
    }

    pub fn period_start(&self) -> NaiveDate {
        match &self.schedule {
            GoalSchedule::OneTime { period_start, .. } => {
                period_start.unwrap_or_else(|| self.created_at.date_naive())
            }
            GoalSchedule::RecurringMonthly { period_start, .. }
            | GoalSchedule::RecurringYearly { period_start, .. } => *period_start,
        }
    }

    pub fn period_end(&self) -> Option<NaiveDate> {
        self.schedule.period_end()
    }

    /// A recurring goal with no period end is still running.
    pub fn is_open(&self) -> bool {
        self.kind().is_recurring() && self.period_end().is_none()
    }

    /// Nominal size of the goal, used to weight it against other goals.
    pub fn weight(&self) -> Decimal {
        self.schedule.recurring_amount().unwrap_or(self.target_amount)
    }

    /// Whether the goal counts toward portfolio metrics on `today`.
    ///
    /// One-time goals are always active. A recurring goal is active when it
    /// starts in the current month (monthly) or year (yearly) or later, or when
    /// it had not ended before that month/year began. Yearly goals compare the
    /// year component only.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match &self.schedule {
            GoalSchedule::OneTime { .. } => true,
            GoalSchedule::RecurringMonthly {
                period_start,
                period_end,
                ..
            } => {
                let current = month_start(today);
                *period_start >= current || period_end.map_or(true, |end| end >= current)
            }
            GoalSchedule::RecurringYearly {
                period_start,
                period_end,
                ..
            } => {
                period_start.year() >= today.year()
                    || period_end.map_or(true, |end| end.year() >= today.year())
            }
        }
    }

    /// Checks the values every calculator depends on.
    pub fn validate(&self) -> Result<(), GoalStateError> {
        if self.target_amount <= Decimal::ZERO {
            return Err(GoalStateError::non_positive(
                &self.id,
                "target_amount",
                self.target_amount,
            ));
        }

        match &self.schedule {
            GoalSchedule::OneTime { period_end, .. } => {
                let end = period_end.ok_or_else(|| GoalStateError::missing(&self.id, "period_end"))?;
                let start = self.period_start();
                if end <= start {
                    return Err(GoalStateError::NonPositiveSpan {
                        goal_id: self.id.clone(),
                        start,
                        end,
                    });
                }
            }
            GoalSchedule::RecurringMonthly {
                recurring_amount,
                period_start,
                period_end,
            }
            | GoalSchedule::RecurringYearly {
                recurring_amount,
                period_start,
                period_end,
            } => {
                if *recurring_amount <= Decimal::ZERO {
                    return Err(GoalStateError::non_positive(
                        &self.id,
                        "recurring_amount",
                        *recurring_amount,
                    ));
                }
                // Ending a goal on its start date is allowed.
                if let Some(end) = period_end {
                    if end < period_start {
                        return Err(GoalStateError::NonPositiveSpan {
                            goal_id: self.id.clone(),
                            start: *period_start,
                            end: *end,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Marks the goal as ended on `at`, never before its own start.
    pub fn end(&mut self, at: NaiveDate) {
        let end = at.max(self.period_start());
        self.schedule.set_period_end(end);
    }
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub id: Option<String>,
    pub name: String,
    pub target_amount: Decimal,
    #[serde(flatten)]
    pub schedule: GoalSchedule,
    pub notes: Option<String>,
}

impl NewSavingsGoal {
    pub fn into_goal(self, now: DateTime<Utc>) -> SavingsGoal {
        SavingsGoal {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: self.name,
            target_amount: self.target_amount,
            schedule: self.schedule,
            notes: self.notes,
            created_at: now,
            progress: Decimal::ZERO,
        }
    }
}

/// Flat goal row as delivered by the data-access layer, where every
/// kind-specific column is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub target_amount: Decimal,
    pub recurring_amount: Option<Decimal>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub progress: Option<Decimal>,
}

impl TryFrom<GoalRecord> for SavingsGoal {
    type Error = GoalStateError;

    fn try_from(record: GoalRecord) -> Result<Self, Self::Error> {
        let kind = GoalKind::parse(&record.kind).ok_or_else(|| GoalStateError::UnknownKind {
            goal_id: record.id.clone(),
            kind: record.kind.clone(),
        })?;

        let schedule = match kind {
            GoalKind::OneTime => GoalSchedule::OneTime {
                period_start: record.period_start,
                period_end: record.period_end,
            },
            GoalKind::RecurringMonthly | GoalKind::RecurringYearly => {
                let recurring_amount = record
                    .recurring_amount
                    .ok_or_else(|| GoalStateError::missing(&record.id, "recurring_amount"))?;
                let period_start = record
                    .period_start
                    .ok_or_else(|| GoalStateError::missing(&record.id, "period_start"))?;
                if kind == GoalKind::RecurringMonthly {
                    GoalSchedule::RecurringMonthly {
                        recurring_amount,
                        period_start,
                        period_end: record.period_end,
                    }
                } else {
                    GoalSchedule::RecurringYearly {
                        recurring_amount,
                        period_start,
                        period_end: record.period_end,
                    }
                }
            }
        };

        Ok(SavingsGoal {
            id: record.id,
            name: record.name,
            target_amount: record.target_amount,
            schedule,
            notes: record.notes,
            created_at: record.created_at,
            progress: record.progress.unwrap_or(Decimal::ZERO),
        })
    }
}

/// Open recurring goals of `kind` that must be closed before a new goal of
/// the same kind becomes the active one.
pub fn goals_to_close(existing: &[SavingsGoal], kind: GoalKind) -> Vec<&SavingsGoal> {
    if !kind.is_recurring() {
        return Vec::new();
    }
    existing
        .iter()
        .filter(|goal| goal.kind() == kind && goal.is_open())
        .collect()
}
