//! Savings engine configuration.

use std::path::Path;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONFIDENCE_DECAY, DEFAULT_MIN_MONTHS_FOR_PROJECTION, DEFAULT_ON_TRACK_THRESHOLD,
    DEFAULT_PROJECTION_MONTHS, DEFAULT_TREND_THRESHOLD,
};
use crate::errors::{Error, Result};

/// Thresholds used by the savings calculators.
///
/// Every calculator takes the config explicitly. Fields missing from a JSON
/// document fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsConfig {
    /// Absolute month-over-month change below which a trend is stable (default: 10)
    pub trend_threshold: Decimal,

    /// Progress percentage at or above which a goal is on track (default: 90)
    pub on_track_threshold: Decimal,

    /// Confidence lost per projected month (default: 0.2)
    pub confidence_decay: Decimal,

    /// Monthly data points needed before projecting (default: 3)
    pub min_months_for_projection: usize,

    /// Projection horizon used by the savings service (default: 3)
    pub default_projection_months: usize,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            trend_threshold: DEFAULT_TREND_THRESHOLD,
            on_track_threshold: DEFAULT_ON_TRACK_THRESHOLD,
            confidence_decay: DEFAULT_CONFIDENCE_DECAY,
            min_months_for_projection: DEFAULT_MIN_MONTHS_FOR_PROJECTION,
            default_projection_months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}

impl SavingsConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SavingsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading savings config from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trend_threshold.is_sign_negative() {
            return Err(Error::InvalidConfigValue(format!(
                "trendThreshold must not be negative, got {}",
                self.trend_threshold
            )));
        }
        if self.on_track_threshold.is_sign_negative() {
            return Err(Error::InvalidConfigValue(format!(
                "onTrackThreshold must not be negative, got {}",
                self.on_track_threshold
            )));
        }
        if self.confidence_decay <= Decimal::ZERO || self.confidence_decay > Decimal::ONE {
            return Err(Error::InvalidConfigValue(format!(
                "confidenceDecay must be in (0, 1], got {}",
                self.confidence_decay
            )));
        }
        // Averaging needs at least one month-over-month delta.
        if self.min_months_for_projection < 2 {
            return Err(Error::InvalidConfigValue(format!(
                "minMonthsForProjection must be at least 2, got {}",
                self.min_months_for_projection
            )));
        }
        Ok(())
    }
}
