use simple_des::crypto::binary_codec::string_to_binary;
use simple_des::crypto::keygen::random_des_key;
use simple_des::crypto::des::SimpleDes;
use simple_des::CipherAlgorithm;

fn main() {
    env_logger::init();

    let key = random_des_key(8);
    let message = "The quick brown fox jumps over the lazy dog";

    let cipher = SimpleDes::with_key(key.as_bytes()).unwrap();

    let encrypted = cipher.encrypt(message.as_bytes()).unwrap();
    println!("key        : {key}");
    println!("plaintext  : {message}");
    println!("ciphertext : {}", hex::encode(&encrypted));

    let decrypted = cipher.decrypt(&encrypted).unwrap();
    let recovered = String::from_utf8_lossy(&decrypted);
    let recovered = recovered.trim_end_matches('\0');
    println!("decrypted  : {recovered}");
    assert_eq!(recovered, message);

    println!(
        "first block as bits: {}",
        string_to_binary(&message[..8.min(message.len())])
    );
}
