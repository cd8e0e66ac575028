//! Signal Sanitization
//!
//! Input checks run before detection.
//!
//! Functions:
//! - Non-finite sample detection
//! - Signal validation
//! - Signal repair (hold last finite sample, clamp to [0, 1])

use tracing::warn;

use crate::error::{AnalysisError, Result};

/// Fully open eye
const OPEN_AREA: f64 = 1.0;

/// 检查数组是否包含无效值 (NaN 或 Inf)
pub fn has_invalid_values(signal: &[f64]) -> bool {
    signal.iter().any(|&x| !x.is_finite())
}

/// 校验信号：非空且全部为有限值
pub fn validate_signal(signal: &[f64]) -> Result<()> {
    if signal.is_empty() {
        return Err(AnalysisError::EmptySignal);
    }

    if let Some((index, &value)) = signal.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(AnalysisError::InvalidSample { index, value });
    }

    Ok(())
}

/// 修复信号，返回被修改的样本数
///
/// 无效值用前一个有效样本替换（开头无有效样本时视为睁眼 1.0），
/// 有效值截断到 [0, 1]。
pub fn sanitize_signal(signal: &mut [f64]) -> usize {
    let mut last_valid = OPEN_AREA;
    let mut replaced = 0;
    let mut clamped = 0;

    for val in signal.iter_mut() {
        if !val.is_finite() {
            *val = last_valid;
            replaced += 1;
            continue;
        }

        let bounded = (*val).clamp(0.0, 1.0);
        if bounded != *val {
            *val = bounded;
            clamped += 1;
        }
        last_valid = bounded;
    }

    if replaced + clamped > 0 {
        warn!(replaced, clamped, "signal samples sanitized");
    }

    replaced + clamped
}
