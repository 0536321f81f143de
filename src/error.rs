use thiserror::Error;

/// Errors raised at the edges of the calculator. The sizing math itself
/// never fails; bad numbers degrade to zero instead.
#[derive(Debug, Error)]
pub enum SizerError {
    #[error("unknown sizing strategy '{0}' (expected absolute or signed)")]
    UnknownStrategy(String),

    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("failed to write result card: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize result card: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SizerError>;
