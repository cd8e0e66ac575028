//! Common Types and Constants
//!
//! Shared data structures used across the detection and statistics modules.

use serde::{Deserialize, Serialize};

use crate::config::DetectionConfig;

// ==================== Constants ====================

/// Default frame lag used to compute the closure drop
pub const DEFAULT_DROP_WINDOW: usize = 3;

/// Default minimum drop magnitude that starts a blink
pub const DEFAULT_DROP_THRESHOLD: f64 = 0.2;

/// Default signal level considered "eye open" (blink termination)
pub const DEFAULT_END_THRESHOLD: f64 = 0.7;

/// Default closure depth below which a blink is complete
pub const DEFAULT_COMPLETE_THRESHOLD: f64 = 0.01;

/// Running-minimum reset value, above any valid normalized area
pub const MIN_TRACKER_SENTINEL: f64 = 1.0;

// ==================== Blink Types ====================

/// Blink classification by closure depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlinkKind {
    /// Minimum area fell below the complete threshold
    Complete,
    /// Minimum area stayed at or above the complete threshold
    Incomplete,
}

impl BlinkKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "complete" => Some(BlinkKind::Complete),
            "incomplete" => Some(BlinkKind::Incomplete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlinkKind::Complete => "complete",
            BlinkKind::Incomplete => "incomplete",
        }
    }

    /// Classify a blink minimum against the complete threshold (strict `<`)
    pub fn classify(min_value: f64, complete_threshold: f64) -> Self {
        if min_value < complete_threshold {
            BlinkKind::Complete
        } else {
            BlinkKind::Incomplete
        }
    }
}

/// A detected blink, located at its deepest closure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlinkEvent {
    /// Frame of the blink minimum
    pub frame_index: usize,
    /// Signal value at `frame_index`
    pub min_value: f64,
    pub kind: BlinkKind,
}

// ==================== Statistics Types ====================

/// Summary statistics of one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_blinks: usize,
    pub complete_count: usize,
    pub incomplete_count: usize,
    /// Incomplete blinks as a percentage of all blinks [0, 100]
    pub incomplete_ratio: f64,
    /// Mean of the whole signal (NaN for an empty signal)
    pub overall_mean: f64,
    /// Mean blink minimum (0 when no blinks were detected)
    pub blink_minimum_mean: f64,
}

// ==================== Analysis Types ====================

/// A signal with a caller-supplied label (typically the video name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSignal {
    pub label: String,
    pub samples: Vec<f64>,
}

impl LabeledSignal {
    pub fn new(label: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            samples,
        }
    }
}

/// Full result of analyzing one signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub label: String,
    pub frame_count: usize,
    pub config: DetectionConfig,
    pub events: Vec<BlinkEvent>,
    pub summary: Summary,
}

// ==================== Chart Types ====================

/// One frame of the time-series chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub frame: usize,
    pub value: f64,
    /// Set on frames that are a blink minimum
    pub blink_kind: Option<BlinkKind>,
}

/// Chart-ready series with its threshold reference lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub end_threshold: f64,
    pub complete_threshold: f64,
}

// ==================== Tests ====================
