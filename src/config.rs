use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::types::{
    DEFAULT_COMPLETE_THRESHOLD, DEFAULT_DROP_THRESHOLD, DEFAULT_DROP_WINDOW,
    DEFAULT_END_THRESHOLD,
};

/// Thresholds for one detection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Frame lag of the drop computation
    pub drop_window: usize,
    /// Minimum drop (`signal[i - drop_window] - signal[i]`) that starts a blink
    pub drop_threshold: f64,
    /// Level above which the eye counts as open
    pub end_threshold: f64,
    /// Minimum below which a blink counts as complete
    pub complete_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            drop_window: DEFAULT_DROP_WINDOW,
            drop_threshold: DEFAULT_DROP_THRESHOLD,
            end_threshold: DEFAULT_END_THRESHOLD,
            complete_threshold: DEFAULT_COMPLETE_THRESHOLD,
        }
    }
}

impl DetectionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            drop_window: env_parse("BLINK_DROP_WINDOW").unwrap_or(defaults.drop_window),
            drop_threshold: env_parse("BLINK_DROP_THRESHOLD").unwrap_or(defaults.drop_threshold),
            end_threshold: env_parse("BLINK_END_THRESHOLD").unwrap_or(defaults.end_threshold),
            complete_threshold: env_parse("BLINK_COMPLETE_THRESHOLD")
                .unwrap_or(defaults.complete_threshold),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.drop_window == 0 {
            return Err(AnalysisError::InvalidConfig(
                "drop_window must be at least 1".to_string(),
            ));
        }

        let thresholds = [
            ("drop_threshold", self.drop_threshold),
            ("end_threshold", self.end_threshold),
            ("complete_threshold", self.complete_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.complete_threshold > self.end_threshold {
            return Err(AnalysisError::InvalidConfig(format!(
                "complete_threshold {} exceeds end_threshold {}",
                self.complete_threshold, self.end_threshold
            )));
        }

        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
}
