//! Random key material. Not a CSPRNG guarantee beyond what the OS RNG
//! provides; the toolkit only needs reproducible-length random inputs.

use rand::RngCore;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!#$%&/()=?+*-_.:,;";

/// Uniformly random bytes, suitable as XOR key material or an IV.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

/// Random printable password drawn from the selected character classes.
/// With every class disabled there is nothing to draw from, so the
/// lowercase class is used as a fallback.
pub fn random_password(
    len: usize,
    uppercase: bool,
    lowercase: bool,
    digits: bool,
    symbols: bool,
) -> String {
    use rand::Rng;

    let mut charset = String::new();
    if uppercase {
        charset.push_str(UPPERCASE);
    }
    if lowercase {
        charset.push_str(LOWERCASE);
    }
    if digits {
        charset.push_str(DIGITS);
    }
    if symbols {
        charset.push_str(SYMBOLS);
    }
    if charset.is_empty() {
        charset.push_str(LOWERCASE);
    }

    let chars: Vec<char> = charset.chars().collect();
    let mut rng = rand::rng();
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// Random key of at most 8 bytes for the block cipher, printable so it can
/// be typed back in.
pub fn random_des_key(len: usize) -> String {
    random_password(len.min(8), true, true, true, false)
}
