use cryptanalysis::caesar::{caesar_decode, caesar_shift};

#[test]
fn test_shift_lowercase_with_wraparound() {
    assert_eq!(caesar_shift("abc", 3), "def");
    assert_eq!(caesar_shift("xyz", 3), "abc");
}

#[test]
fn test_shift_uppercase_with_wraparound() {
    assert_eq!(caesar_shift("XYZ", 3), "ABC");
    assert_eq!(caesar_shift("HAL", 1), "IBM");
}

#[test]
fn test_shift_digits_mod_10() {
    assert_eq!(caesar_shift("019", 3), "342");
    assert_eq!(caesar_shift("9", 1), "0");
}

#[test]
fn test_non_alphanumeric_passthrough() {
    assert_eq!(caesar_shift("hola, mundo!? \n", 13), "ubyn, zhaqb!? \n");
    assert_eq!(caesar_shift("¡ñ€", 7), "¡ñ€");
}

#[test]
fn test_negative_shift_is_normalized() {
    assert_eq!(caesar_shift("abc", -1), "zab");
    assert_eq!(caesar_shift("abc", -27), "zab");
    assert_eq!(caesar_shift("abc", 25), "zab");
}

#[test]
fn test_large_shift_is_normalized() {
    assert_eq!(caesar_shift("abc", 26), "abc");
    assert_eq!(caesar_shift("abc", 53), "bcd");
}

#[test]
fn test_decode_inverts_letters() {
    let text = "Attack at dawn! Bring... everything?";
    for shift in 0..26 {
        assert_eq!(caesar_decode(&caesar_shift(text, shift), shift), text);
    }
}

#[test]
fn test_decode_rotates_digits_by_complement() {
    // 26 ≡ 6 (mod 10), so the 26-complement decode does not invert the
    // digit window: it applies 26 - s there too.
    assert_eq!(caesar_shift("7", 3), "0");
    assert_eq!(caesar_decode("0", 3), "3");
    // The mod-10 inverse of a digit shift is the 10-complement.
    assert_eq!(caesar_shift(&caesar_shift("7", 3), 7), "7");
}

use quickcheck::quickcheck;

quickcheck! {
    fn prop_decode_inverts_shift_on_digit_free_text(text: String, shift: i32) -> bool {
        let text: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        caesar_decode(&caesar_shift(&text, shift), shift) == text
    }
}
