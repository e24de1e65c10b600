use thiserror::Error;

/// Failure conditions of the cipher crate.
///
/// `NotKeyed` is the only state error; everything else is a malformed
/// argument detected before any work is done. Operations never return a
/// partial result alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("cipher used before a key was scheduled")]
    NotKeyed,

    #[error("key must be at most 8 bytes, got {0}")]
    KeyTooLong(usize),

    #[error("binary group must be exactly 8 digits, got {0}")]
    InvalidBinaryLength(usize),

    #[error("invalid binary digit {0:?}")]
    InvalidBinaryDigit(char),
}
