use crate::crypto::error::CipherError;

pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    /// Schedules round keys from raw key material. Until this succeeds the
    /// cipher rejects encrypt/decrypt with [`CipherError::NotKeyed`].
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;

    fn block_size(&self) -> usize;
}
