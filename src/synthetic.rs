//! Synthetic eyelid-area signal for demos and benchmarks.
//!
//! Roughly 10 seconds at 30 fps: an open-eye baseline with small noise and
//! three injected blinks (complete at frame 50, incomplete at 150,
//! near-complete at 250).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_FRAMES: usize = 300;

const BASELINE: f64 = 0.95;
const NOISE_AMPLITUDE: f64 = 0.05;

/// Generate a synthetic signal; identical `(frames, seed)` give identical output.
pub fn generate(frames: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..frames)
        .map(|i| {
            let mut val = BASELINE + (rng.gen::<f64>() * NOISE_AMPLITUDE - NOISE_AMPLITUDE / 2.0);

            if i > 45 && i < 55 {
                val = (i as f64 - 50.0).abs() / 5.0;
            }
            if i > 145 && i < 155 {
                val = 0.3 + (i as f64 - 150.0).abs() / 10.0;
            }
            if i > 245 && i < 255 {
                val = ((i as f64 - 250.0).abs() / 5.0).max(0.005);
            }

            val.clamp(0.0, 1.0)
        })
        .collect()
}
