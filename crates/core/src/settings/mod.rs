//! Settings module - calculator thresholds and their defaults.

mod settings_model;

pub use settings_model::SavingsConfig;
