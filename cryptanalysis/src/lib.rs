pub mod attacks;
pub mod caesar;
pub mod error;
pub mod hex_codec;
pub mod xor;

pub use error::AnalysisError;
