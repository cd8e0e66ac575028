use std::fmt;

use crate::types::{BlinkEvent, BlinkKind, Summary};

/// Summarize a signal and the blinks detected in it.
///
/// `signal` must be non-empty for `overall_mean` to be defined; an empty
/// signal yields NaN there. An empty `events` yields a zero
/// `blink_minimum_mean` and a zero `incomplete_ratio`.
pub fn aggregate(signal: &[f64], events: &[BlinkEvent]) -> Summary {
    let overall_mean = signal.iter().sum::<f64>() / signal.len() as f64;

    let blink_minimum_mean = if events.is_empty() {
        0.0
    } else {
        events.iter().map(|e| e.min_value).sum::<f64>() / events.len() as f64
    };

    let complete_count = events
        .iter()
        .filter(|e| e.kind == BlinkKind::Complete)
        .count();
    let incomplete_count = events
        .iter()
        .filter(|e| e.kind == BlinkKind::Incomplete)
        .count();
    let total_blinks = complete_count + incomplete_count;

    let incomplete_ratio = if total_blinks > 0 {
        incomplete_count as f64 / total_blinks as f64 * 100.0
    } else {
        0.0
    };

    Summary {
        total_blinks,
        complete_count,
        incomplete_count,
        incomplete_ratio,
        overall_mean,
        blink_minimum_mean,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Blinks:       {}", self.total_blinks)?;
        writeln!(f, "Complete Blinks:    {}", self.complete_count)?;
        writeln!(f, "Incomplete Blinks:  {}", self.incomplete_count)?;
        writeln!(f, "Incomplete Ratio:   {:.1}%", self.incomplete_ratio)?;
        writeln!(f, "Overall Mean Area:  {:.4}", self.overall_mean)?;
        write!(f, "Blink Minimum Mean: {:.4}", self.blink_minimum_mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(frame_index: usize, min_value: f64, kind: BlinkKind) -> BlinkEvent {
        BlinkEvent {
            frame_index,
            min_value,
            kind,
        }
    }

    #[test]
    fn test_no_blinks() {
        let summary = aggregate(&[1.0, 1.0, 1.0, 1.0, 1.0], &[]);

        assert_eq!(summary.total_blinks, 0);
        assert_eq!(summary.complete_count, 0);
        assert_eq!(summary.incomplete_count, 0);
        assert_eq!(summary.incomplete_ratio, 0.0);
        assert_eq!(summary.overall_mean, 1.0);
        assert_eq!(summary.blink_minimum_mean, 0.0);
    }

    #[test]
    fn test_counts_and_ratio() {
        let events = [
            event(5, 0.0, BlinkKind::Complete),
            event(20, 0.3, BlinkKind::Incomplete),
            event(40, 0.005, BlinkKind::Complete),
            event(60, 0.5, BlinkKind::Incomplete),
        ];
        let summary = aggregate(&[0.5; 80], &events);

        assert_eq!(summary.total_blinks, 4);
        assert_eq!(summary.complete_count, 2);
        assert_eq!(summary.incomplete_count, 2);
        assert_eq!(summary.incomplete_ratio, 50.0);
        assert!((summary.blink_minimum_mean - 0.20125).abs() < 1e-12);
        assert_eq!(summary.overall_mean, 0.5);
    }

    #[test]
    fn test_all_incomplete_ratio_is_hundred() {
        let events = [event(5, 0.3, BlinkKind::Incomplete)];
        let summary = aggregate(&[1.0, 0.3], &events);

        assert_eq!(summary.incomplete_ratio, 100.0);
        assert_eq!(summary.blink_minimum_mean, 0.3);
        assert!((summary.overall_mean - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_empty_signal_mean_is_nan() {
        let summary = aggregate(&[], &[]);
        assert!(summary.overall_mean.is_nan());
        assert_eq!(summary.blink_minimum_mean, 0.0);
    }

    #[test]
    fn test_summary_display() {
        let events = [
            event(5, 0.0, BlinkKind::Complete),
            event(20, 0.3, BlinkKind::Incomplete),
            event(40, 0.0, BlinkKind::Complete),
        ];
        let text = aggregate(&[1.0, 0.5], &events).to_string();

        assert!(text.contains("Total Blinks:       3"));
        assert!(text.contains("Incomplete Ratio:   33.3%"));
        assert!(text.contains("Overall Mean Area:  0.7500"));
        assert!(text.contains("Blink Minimum Mean: 0.1000"));
    }
}
