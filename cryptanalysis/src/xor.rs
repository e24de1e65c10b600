use crate::error::AnalysisError;

/// Repeating-key XOR: output byte `i` is `data[i] ^ key[i % key.len()]`.
/// Self-inverse for any non-empty key.
pub fn xor_repeat(data: &[u8], key: &[u8]) -> Result<Vec<u8>, AnalysisError> {
    if key.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect())
}
