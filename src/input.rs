//! Signal input: JSON arrays or delimited plain-text numbers.

use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Parse a signal from text.
///
/// Accepts either a JSON array of numbers, or numbers separated by commas,
/// whitespace or newlines. Blank lines and lines starting with `#` are skipped.
pub fn parse_signal(text: &str) -> Result<Vec<f64>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str::<Vec<f64>>(trimmed)?);
    }

    let mut samples = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|e| AnalysisError::Parse {
                line: line_no + 1,
                message: format!("{token:?}: {e}"),
            })?;
            samples.push(value);
        }
    }

    Ok(samples)
}

pub fn read_signal_file(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)?;
    parse_signal(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let signal = parse_signal("  [1.0, 0.5, 0, 1]\n").unwrap();
        assert_eq!(signal, vec![1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_plain_text() {
        let text = "# frame areas\n1.0, 0.9\n0.5 0.0\n\n0.5\t1\n";
        let signal = parse_signal(text).unwrap();
        assert_eq!(signal, vec![1.0, 0.9, 0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_parse_reports_line() {
        let err = parse_signal("1.0\n0.5\nabc\n").unwrap_err();
        match err {
            AnalysisError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_bad_json() {
        assert!(matches!(
            parse_signal("[1.0, \"x\"]"),
            Err(AnalysisError::Json(_))
        ));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_signal("").unwrap().is_empty());
        assert!(parse_signal("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_accepts_nan_literal() {
        // 解析不做校验，交给 sanitize
        let signal = parse_signal("1.0 NaN inf").unwrap();
        assert!(signal[1].is_nan());
        assert!(signal[2].is_infinite());
    }
}
