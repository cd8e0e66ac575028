use tracing::{debug, trace};

use crate::config::DetectionConfig;
use crate::types::{BlinkEvent, BlinkKind, MIN_TRACKER_SENTINEL};

#[derive(Clone, Copy, Debug, PartialEq)]
enum BlinkState {
    Idle,
    InBlink,
}

/// Deepest closure seen in the current blink
#[derive(Clone, Copy, Debug)]
struct BlinkMinimum {
    value: f64,
    index: usize,
}

impl BlinkMinimum {
    fn sentinel() -> Self {
        Self {
            value: MIN_TRACKER_SENTINEL,
            index: 0,
        }
    }

    fn start(value: f64, index: usize) -> Self {
        Self { value, index }
    }

    // strict: ties keep the earliest frame
    fn observe(&mut self, value: f64, index: usize) {
        if value < self.value {
            self.value = value;
            self.index = index;
        }
    }
}

/// Single-pass blink detector over a normalized eyelid-area signal.
///
/// A blink starts when the signal has dropped by more than `drop_threshold`
/// relative to `drop_window` frames earlier while that earlier frame was open
/// (above `end_threshold`), and ends on the first later frame above
/// `end_threshold`. Each finished blink is reported at its minimum. A blink
/// still open when the signal runs out is not reported.
///
/// The detector keeps no state between calls to [`BlinkDetector::detect`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BlinkDetector {
    config: DetectionConfig,
}

impl BlinkDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn detect(&self, signal: &[f64]) -> Vec<BlinkEvent> {
        let window = self.config.drop_window;
        if signal.len() < window {
            return Vec::new();
        }

        let mut state = BlinkState::Idle;
        let mut minimum = BlinkMinimum::sentinel();
        let mut events = Vec::new();

        for (i, &current) in signal.iter().enumerate().skip(window) {
            let previous = signal[i - window];
            let drop_amount = previous - current;

            match state {
                BlinkState::Idle => {
                    if drop_amount > self.config.drop_threshold
                        && previous > self.config.end_threshold
                    {
                        state = BlinkState::InBlink;
                        minimum = BlinkMinimum::start(current, i);
                        trace!(frame = i, drop_amount, "blink started");
                    }
                }
                BlinkState::InBlink => {
                    minimum.observe(current, i);

                    if current > self.config.end_threshold {
                        let kind = BlinkKind::classify(minimum.value, self.config.complete_threshold);
                        let event = BlinkEvent {
                            frame_index: minimum.index,
                            min_value: minimum.value,
                            kind,
                        };
                        debug!(
                            frame = event.frame_index,
                            min_value = event.min_value,
                            kind = kind.as_str(),
                            end_frame = i,
                            "blink detected"
                        );
                        events.push(event);

                        minimum = BlinkMinimum::sentinel();
                        state = BlinkState::Idle;
                    }
                }
            }
        }

        if state == BlinkState::InBlink {
            debug!(
                frame = minimum.index,
                min_value = minimum.value,
                "discarding blink unterminated at end of signal"
            );
        }

        events
    }
}

/// Detect blinks in `signal` with the given thresholds.
pub fn detect(signal: &[f64], config: &DetectionConfig) -> Vec<BlinkEvent> {
    BlinkDetector::new(*config).detect(signal)
}
