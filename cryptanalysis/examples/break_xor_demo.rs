use cryptanalysis::attacks::{caesar_brute_force, evaluate_caesar_key, XorBruteForce};
use cryptanalysis::caesar::caesar_shift;
use cryptanalysis::hex_codec::to_hex;
use cryptanalysis::xor::xor_repeat;

fn main() {
    env_logger::init();

    let secret = b"meet me at the usual place at nine";
    let cipher = xor_repeat(secret, &[0x5A]).unwrap();
    println!("ciphertext: {}", to_hex(&cipher));

    println!("\n--- single byte search ---");
    for candidate in XorBruteForce::single_byte(&cipher).take(5) {
        println!(
            "key 0x{:02x} -> {}",
            candidate.key[0],
            String::from_utf8_lossy(&candidate.plaintext)
        );
    }

    let dictionary: Vec<String> = ["clave", "admin", "1234", "root", "test", "password"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let dict_cipher = xor_repeat(secret, b"root").unwrap();

    println!("\n--- dictionary search ---");
    for candidate in XorBruteForce::dictionary(&dict_cipher, &dictionary) {
        println!(
            "key {:?} -> {}",
            String::from_utf8_lossy(&candidate.key),
            String::from_utf8_lossy(&candidate.plaintext)
        );
    }

    println!("\n--- caesar frequency analysis ---");
    let caesar_cipher = caesar_shift("the general attacks at dawn with everyone he has", 11);
    let key = evaluate_caesar_key(&caesar_cipher);
    println!("ciphertext: {caesar_cipher}");
    println!("estimated shift: {key}");
    for (shift, decoded) in caesar_brute_force(&caesar_cipher).take(3) {
        println!("shift {shift:2} -> {decoded}");
    }
}
