use crate::crypto::bits::{pack_key, unpack_block};
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::encryption_transformation::{DesTransformation, EncryptionTransformation};
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::{KeyExpansion, RotatingKeyExpansion, NUM_ROUNDS};
use rayon::prelude::*;
use std::sync::Arc;

const BLOCK_SIZE: usize = 8;

/// Inputs at least this large are worth fanning the ECB loop out to rayon.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Simplified DES: a 16-round Feistel cipher over 64-bit blocks with the
/// reduced tables from `des_tables` and a rotation key schedule. The cipher
/// is unusable until [`SymmetricCipher::set_key`] has scheduled the 16 round
/// keys.
pub struct SimpleDes {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: Vec<u64>,
}

impl SimpleDes {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        SimpleDes {
            feistel_network: FeistelNetwork::new(NUM_ROUNDS, transformation),
            key_expansion,
            round_keys: Vec::new(),
        }
    }

    /// Standard components plus an immediately scheduled key.
    pub fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        let mut cipher = SimpleDes::new(Arc::new(RotatingKeyExpansion), Arc::new(DesTransformation));
        cipher.set_key(key)?;
        Ok(cipher)
    }

    /// Identity in this simplified variant; kept so the encode path has the
    /// shape of the full cipher.
    pub fn initial_permutation(block: u64) -> u64 {
        block
    }

    /// Identity, mirroring [`SimpleDes::initial_permutation`].
    pub fn final_permutation(block: u64) -> u64 {
        block
    }

    /// Encrypts one 64-bit block.
    pub fn encode_block(&self, plaintext: u64) -> Result<u64, CipherError> {
        let round_keys = self.scheduled_round_keys()?;
        let data = Self::initial_permutation(plaintext);
        let coded = self.feistel_network.encrypt_with_round_keys(data, round_keys);
        Ok(Self::final_permutation(coded))
    }

    /// Decrypts one 64-bit block: the encode loop with round keys reversed.
    pub fn decode_block(&self, ciphertext: u64) -> Result<u64, CipherError> {
        let round_keys = self.scheduled_round_keys()?;
        let data = Self::initial_permutation(ciphertext);
        let coded = self.feistel_network.decrypt_with_round_keys(data, round_keys);
        Ok(Self::final_permutation(coded))
    }

    fn scheduled_round_keys(&self) -> Result<&[u64], CipherError> {
        if self.round_keys.len() != NUM_ROUNDS {
            return Err(CipherError::NotKeyed);
        }
        Ok(&self.round_keys)
    }

    /// Splits a buffer into 64-bit blocks, zero-padding the final short
    /// block. Padding is never stripped on the way back out; trailing NULs
    /// are the caller's to handle.
    fn blocks_of(data: &[u8]) -> Vec<u64> {
        data.chunks(BLOCK_SIZE)
            .map(|chunk| {
                let mut block = [0u8; BLOCK_SIZE];
                block[..chunk.len()].copy_from_slice(chunk);
                u64::from_be_bytes(block)
            })
            .collect()
    }

    fn process(&self, data: &[u8], decrypt: bool) -> Result<Vec<u8>, CipherError> {
        let round_keys = self.scheduled_round_keys()?;
        let blocks = Self::blocks_of(data);

        let code = |block: u64| {
            let permuted = Self::initial_permutation(block);
            let coded = if decrypt {
                self.feistel_network.decrypt_with_round_keys(permuted, round_keys)
            } else {
                self.feistel_network.encrypt_with_round_keys(permuted, round_keys)
            };
            Self::final_permutation(coded)
        };

        // Blocks are independent (no chaining), so large inputs can be coded
        // in parallel; collect keeps the block order.
        let coded: Vec<u64> = if data.len() >= PARALLEL_THRESHOLD {
            blocks.into_par_iter().map(code).collect()
        } else {
            blocks.into_iter().map(code).collect()
        };

        Ok(coded.into_iter().flat_map(unpack_block).collect())
    }
}

impl CipherAlgorithm for SimpleDes {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(data, false)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(data, true)
    }
}

impl SymmetricCipher for SimpleDes {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let packed = pack_key(key)?;
        self.round_keys = self.key_expansion.generate_round_keys(packed);
        log::debug!("scheduled {} round keys", self.round_keys.len());
        Ok(())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
