//! User settings for the expense tracker
//!
//! Display currency, alert sensitivity, an optional overall spending limit
//! and an optional data file location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;
use crate::reports::DEFAULT_NEAR_LIMIT_RATIO;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Share of a category budget at which a "near limit" alert fires
    #[serde(default = "default_near_limit_ratio")]
    pub near_limit_ratio: f64,

    /// Overall spending limit checked by `expense limit` when no amount is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending_limit: Option<Money>,

    /// Data file location; defaults to `expenses_data.json` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_near_limit_ratio() -> f64 {
    DEFAULT_NEAR_LIMIT_RATIO
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            near_limit_ratio: default_near_limit_ratio(),
            spending_limit: None,
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk, creating the base directory if needed
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the near-limit ratio is in (0, 1]
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !(self.near_limit_ratio > 0.0 && self.near_limit_ratio <= 1.0) {
            return Err(TrackerError::Config(format!(
                "near_limit_ratio must be in (0, 1], got {}",
                self.near_limit_ratio
            )));
        }
        Ok(())
    }

    /// Data file to use, given an optional explicit override
    pub fn resolve_data_file(&self, paths: &TrackerPaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| paths.data_file())
    }
}
