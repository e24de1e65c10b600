pub mod frequency;
pub mod xor_brute;

pub use frequency::{caesar_brute_force, evaluate_caesar_key};
pub use xor_brute::{is_plausible_text, XorBruteForce, XorCandidate};
