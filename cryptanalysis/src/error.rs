use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("xor key must not be empty")]
    EmptyKey,

    #[error("invalid hex token {0:?}")]
    InvalidHexToken(String),
}
