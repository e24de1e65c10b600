//! Brute-force key recovery for repeating-key XOR. The searches yield
//! every candidate that passes the plausibility oracle, in ascending key
//! order (dictionary order for the dictionary search); choosing among the
//! reported candidates is the caller's problem.

use crate::xor::xor_repeat;

/// A key that produced plausible-looking plaintext. Reported, never
/// retained by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorCandidate {
    pub key: Vec<u8>,
    pub plaintext: Vec<u8>,
}

/// Acceptance oracle: printable ASCII, space or newline. A heuristic, not
/// proof of correctness; false positives are expected.
pub fn is_plausible_text(data: &[u8]) -> bool {
    data.iter()
        .all(|&b| b.is_ascii_graphic() || b == b' ' || b == b'\n')
}

pub struct XorBruteForce;

impl XorBruteForce {
    /// All 256 single-byte keys, in order 0..=255.
    pub fn single_byte(cipher: &[u8]) -> impl Iterator<Item = XorCandidate> + '_ {
        (0u8..=255).filter_map(move |key| Self::try_key(cipher, &[key]))
    }

    /// All 65536 two-byte keys, lexicographic by `(first, second)`.
    pub fn double_byte(cipher: &[u8]) -> impl Iterator<Item = XorCandidate> + '_ {
        (0u8..=255).flat_map(move |b1| {
            (0u8..=255).filter_map(move |b2| Self::try_key(cipher, &[b1, b2]))
        })
    }

    /// Caller-supplied candidate keys, tried in the given order. Empty
    /// entries cannot be XOR keys and are skipped.
    pub fn dictionary<'a>(
        cipher: &'a [u8],
        dictionary: &'a [String],
    ) -> impl Iterator<Item = XorCandidate> + 'a {
        dictionary
            .iter()
            .filter_map(move |key| Self::try_key(cipher, key.as_bytes()))
    }

    fn try_key(cipher: &[u8], key: &[u8]) -> Option<XorCandidate> {
        let plaintext = xor_repeat(cipher, key).ok()?;
        if !is_plausible_text(&plaintext) {
            return None;
        }
        log::trace!("key {key:02x?} yields plausible plaintext");
        Some(XorCandidate {
            key: key.to_vec(),
            plaintext,
        })
    }
}
