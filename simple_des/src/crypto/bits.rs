use crate::crypto::error::CipherError;
use bitvec::prelude::BitVec;

/// Low 48 bits of a word, the width of a round key.
pub const MASK48: u64 = 0x0000_FFFF_FFFF_FFFF;

/// Packs 8 bytes into a 64-bit block, first byte in the most significant
/// position: byte `i` occupies bits `[(7 - i) * 8, (7 - i) * 8 + 7]`.
pub fn pack_block(bytes: &[u8; 8]) -> u64 {
    u64::from_be_bytes(*bytes)
}

/// Inverse of [`pack_block`].
pub fn unpack_block(block: u64) -> [u8; 8] {
    block.to_be_bytes()
}

/// Packs key material of at most 8 bytes into a 64-bit block,
/// left-justified and zero-padded on the right. The padding convention
/// determines which bits of a short key are live, so it is fixed here
/// rather than left to callers.
pub fn pack_key(key: &[u8]) -> Result<u64, CipherError> {
    if key.len() > 8 {
        return Err(CipherError::KeyTooLong(key.len()));
    }
    let mut padded = [0u8; 8];
    padded[..key.len()].copy_from_slice(key);
    Ok(pack_block(&padded))
}

/// Bit `i` of a 64-bit block, with bit 0 the least significant position.
pub fn bit64(value: u64, i: usize) -> u64 {
    (value >> i) & 1
}

/// Bit `i` of a 32-bit half-block, with bit 0 the least significant position.
pub fn bit32(value: u32, i: usize) -> u32 {
    (value >> i) & 1
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}
