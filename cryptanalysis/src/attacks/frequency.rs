use crate::caesar::caesar_decode;

/// Estimates a Caesar shift from single-letter frequencies: the fullest
/// histogram bucket is assumed to be plaintext 'e'. Single shot, no
/// refinement; only as good as the frequency assumption for the text's
/// language. Ties keep the lowest letter index.
pub fn evaluate_caesar_key(text: &str) -> u8 {
    let mut frequency = [0usize; 26];
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            frequency[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
        }
    }

    let mut index_max = 0;
    for (i, &count) in frequency.iter().enumerate() {
        if count > frequency[index_max] {
            index_max = i;
        }
    }

    (index_max as u8 + 26 - (b'e' - b'a')) % 26
}

/// Every candidate decode of a Caesar ciphertext, shifts 1 through 25.
pub fn caesar_brute_force(text: &str) -> impl Iterator<Item = (u8, String)> + '_ {
    (1u8..26).map(move |shift| (shift, caesar_decode(text, i32::from(shift))))
}
