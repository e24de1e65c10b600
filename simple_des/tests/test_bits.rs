#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use simple_des::crypto::bits::*;
    use simple_des::CipherError;

    #[test]
    fn test_pack_block_is_big_endian() {
        let block = pack_block(b"ABCDEFGH");
        assert_eq!(block >> 56, b'A' as u64);
        assert_eq!(block & 0xFF, b'H' as u64);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let bytes = *b"\x01\x23\x45\x67\x89\xAB\xCD\xEF";
        assert_eq!(unpack_block(pack_block(&bytes)), bytes);
        assert_eq!(pack_block(&bytes), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn test_pack_key_left_justifies_short_keys() {
        let key = pack_key(b"AB").unwrap();
        assert_eq!(key, pack_block(b"AB\0\0\0\0\0\0"));
    }

    #[test]
    fn test_pack_key_full_width() {
        assert_eq!(pack_key(b"ABCDEFGH").unwrap(), pack_block(b"ABCDEFGH"));
    }

    #[test]
    fn test_pack_key_rejects_over_long_keys() {
        assert_eq!(pack_key(b"ABCDEFGHI"), Err(CipherError::KeyTooLong(9)));
    }

    #[test]
    fn test_bit_accessors_are_lsb_indexed() {
        assert_eq!(bit64(0b100, 2), 1);
        assert_eq!(bit64(0b100, 1), 0);
        assert_eq!(bit64(1 << 63, 63), 1);
        assert_eq!(bit32(1 << 31, 31), 1);
        assert_eq!(bit32(1, 0), 1);
    }

    #[test]
    fn test_bytes_to_bits_msb_first() {
        let input = vec![0b10101010, 0b11001100];
        let expected = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
        assert_eq!(bytes_to_bits(&input), expected);
    }

    #[test]
    fn test_bits_to_bytes_inverts_bytes_to_bits() {
        let input = vec![0x00, 0xFF, 0x5A, 0xC3];
        assert_eq!(bits_to_bytes(&bytes_to_bits(&input)), input);
    }
}
