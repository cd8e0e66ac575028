use rayon::prelude::*;
use tracing::{debug, warn};

use crate::blink::BlinkDetector;
use crate::config::DetectionConfig;
use crate::error::Result;
use crate::sanitize::validate_signal;
use crate::stats::aggregate;
use crate::types::{AnalysisReport, ChartSeries, LabeledSignal};

/// Detect blinks in one signal and summarize them.
///
/// Unlike [`crate::detect`] and [`crate::aggregate`], this rejects an invalid
/// config, an empty signal, and signals holding NaN or infinite samples.
pub fn analyze(label: &str, signal: &[f64], config: &DetectionConfig) -> Result<AnalysisReport> {
    config.validate()?;
    validate_signal(signal)?;

    let events = BlinkDetector::new(*config).detect(signal);
    let summary = aggregate(signal, &events);

    debug!(
        label,
        frames = signal.len(),
        total = summary.total_blinks,
        complete = summary.complete_count,
        incomplete = summary.incomplete_count,
        "signal analyzed"
    );

    Ok(AnalysisReport {
        label: label.to_string(),
        frame_count: signal.len(),
        config: *config,
        events,
        summary,
    })
}

/// Analyze independent signals in parallel; results keep input order.
pub fn analyze_batch(
    inputs: &[LabeledSignal],
    config: &DetectionConfig,
) -> Vec<Result<AnalysisReport>> {
    inputs
        .par_iter()
        .map(|input| {
            let result = analyze(&input.label, &input.samples, config);
            if let Err(err) = &result {
                warn!(label = %input.label, error = %err, "signal analysis failed");
            }
            result
        })
        .collect()
}

impl AnalysisReport {
    /// Chart series for the analyzed signal, which must be the one passed to
    /// [`analyze`].
    pub fn chart(&self, signal: &[f64]) -> ChartSeries {
        ChartSeries::build(signal, &self.events, &self.config)
    }
}
