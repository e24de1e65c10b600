//! Space-separated hex, the storage format for ciphertext bytes. Parsing
//! accepts 1- or 2-digit tokens so hand-edited files survive a stripped
//! leading zero.

use crate::error::AnalysisError;

pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn from_hex(input: &str) -> Result<Vec<u8>, AnalysisError> {
    input
        .split_whitespace()
        .map(|token| {
            if token.len() > 2 {
                return Err(AnalysisError::InvalidHexToken(token.to_string()));
            }
            u8::from_str_radix(token, 16)
                .map_err(|_| AnalysisError::InvalidHexToken(token.to_string()))
        })
        .collect()
}
