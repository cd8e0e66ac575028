//! End-to-end analysis: file input -> sanitize -> analyze -> report.

use std::io::Write;

use blink_analysis::input::read_signal_file;
use blink_analysis::sanitize::sanitize_signal;
use blink_analysis::synthetic::{self, DEFAULT_FRAMES};
use blink_analysis::{
    aggregate, analyze, analyze_batch, detect, AnalysisError, BlinkKind, DetectionConfig,
    LabeledSignal,
};

#[test]
fn test_flat_signal_scenario() {
    let signal = [1.0, 1.0, 1.0, 1.0, 1.0];
    let events = detect(&signal, &DetectionConfig::default());
    let summary = aggregate(&signal, &events);

    assert!(events.is_empty());
    assert_eq!(summary.overall_mean, 1.0);
    assert_eq!(summary.blink_minimum_mean, 0.0);
    assert_eq!(summary.incomplete_ratio, 0.0);
}

#[test]
fn test_incomplete_blink_scenario() {
    let signal = [1.0, 1.0, 1.0, 1.0, 0.5, 0.3, 0.5, 1.0, 1.0, 1.0];
    let report = analyze("dip", &signal, &DetectionConfig::default()).unwrap();

    assert_eq!(report.events[0].kind, BlinkKind::Incomplete);
    assert_eq!(report.summary.incomplete_ratio, 100.0);
    assert_eq!(report.summary.blink_minimum_mean, 0.3);
}

#[test]
fn test_read_text_file_and_analyze() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# eyelid area per frame").unwrap();
    writeln!(file, "1.0 1.0 1.0 1.0").unwrap();
    writeln!(file, "0.5 0.0 0.5").unwrap();
    writeln!(file, "1.0 1.0 1.0").unwrap();

    let signal = read_signal_file(file.path()).unwrap();
    let report = analyze("file", &signal, &DetectionConfig::default()).unwrap();

    assert_eq!(report.frame_count, 10);
    assert_eq!(report.summary.complete_count, 1);
    assert_eq!(report.events[0].frame_index, 5);
}

#[test]
fn test_read_file_with_gap_needs_sanitize() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signal.txt");
    std::fs::write(&path, "1.0 1.0 1.0 1.0 0.5 NaN 0.0 0.5 1.0 1.2").unwrap();

    let mut signal = read_signal_file(&path).unwrap();
    let err = analyze("raw", &signal, &DetectionConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidSample { index: 5, .. }));

    assert_eq!(sanitize_signal(&mut signal), 2);
    let report = analyze("clean", &signal, &DetectionConfig::default()).unwrap();
    assert_eq!(report.events.len(), 1);
    assert_eq!(report.events[0].frame_index, 6);
    assert_eq!(report.events[0].kind, BlinkKind::Complete);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_signal_file(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, AnalysisError::Io(_)));
}

#[test]
fn test_synthetic_batch() {
    let inputs: Vec<LabeledSignal> = (0..8)
        .map(|seed| LabeledSignal::new(format!("synthetic-{seed}"), synthetic::generate(DEFAULT_FRAMES, seed)))
        .collect();
    let results = analyze_batch(&inputs, &DetectionConfig::default());

    for (input, result) in inputs.iter().zip(&results) {
        let report = result.as_ref().unwrap();
        assert_eq!(report.label, input.label);
        assert_eq!(report.summary.total_blinks, 3);
        assert_eq!(report.summary.complete_count, 2);
        assert_eq!(report.summary.incomplete_count, 1);
        assert!((report.summary.incomplete_ratio - 100.0 / 3.0).abs() < 1e-9);
        assert!((report.summary.blink_minimum_mean - 0.305 / 3.0).abs() < 1e-9);
    }
}
