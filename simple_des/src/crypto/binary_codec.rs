//! Text/binary conversion used to display cipher material as '0'/'1'
//! strings: one space-separated 8-digit group per byte.

use crate::crypto::bits::{bits_to_bytes, bytes_to_bits};
use crate::crypto::error::CipherError;
use bitvec::prelude::BitVec;

/// Renders one byte as 8 binary digits, most significant first.
pub fn byte_to_binary(byte: u8) -> String {
    bytes_to_bits(&[byte])
        .iter()
        .map(|bit| if *bit { '1' } else { '0' })
        .collect()
}

/// Renders a string as space-separated 8-digit binary groups.
pub fn string_to_binary(input: &str) -> String {
    input
        .bytes()
        .map(byte_to_binary)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses one 8-digit binary group back into a byte.
pub fn binary_to_byte(group: &str) -> Result<u8, CipherError> {
    if group.len() != 8 {
        return Err(CipherError::InvalidBinaryLength(group.len()));
    }
    let mut bits = BitVec::with_capacity(8);
    for c in group.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => return Err(CipherError::InvalidBinaryDigit(other)),
        }
    }
    Ok(bits_to_bytes(&bits)[0])
}

/// Parses whitespace-separated binary groups back into text.
pub fn binary_to_string(input: &str) -> Result<String, CipherError> {
    let bytes = input
        .split_whitespace()
        .map(binary_to_byte)
        .collect::<Result<Vec<u8>, _>>()?;
    Ok(bytes.into_iter().map(char::from).collect())
}
