use std::collections::HashMap;

use crate::config::DetectionConfig;
use crate::types::{BlinkEvent, BlinkKind, ChartPoint, ChartSeries};

impl ChartSeries {
    /// Per-frame series with blink minima marked, plus the end and complete
    /// threshold reference lines.
    pub fn build(signal: &[f64], events: &[BlinkEvent], config: &DetectionConfig) -> Self {
        let minima: HashMap<usize, BlinkKind> =
            events.iter().map(|e| (e.frame_index, e.kind)).collect();

        let points = signal
            .iter()
            .enumerate()
            .map(|(frame, &value)| ChartPoint {
                frame,
                value,
                blink_kind: minima.get(&frame).copied(),
            })
            .collect();

        Self {
            points,
            end_threshold: config.end_threshold,
            complete_threshold: config.complete_threshold,
        }
    }

    /// Marked points of one kind, for separate scatter overlays
    pub fn minima(&self, kind: BlinkKind) -> impl Iterator<Item = &ChartPoint> + '_ {
        self.points
            .iter()
            .filter(move |p| p.blink_kind == Some(kind))
    }
}
