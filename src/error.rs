use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("signal is empty")]
    EmptySignal,
    #[error("invalid sample at frame {index}: {value}")]
    InvalidSample { index: usize, value: f64 },
    #[error("invalid detection config: {0}")]
    InvalidConfig(String),
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
