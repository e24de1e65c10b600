pub mod crypto;

pub use crypto::cipher_traits::*;
pub use crypto::des::SimpleDes;
pub use crypto::error::CipherError;
