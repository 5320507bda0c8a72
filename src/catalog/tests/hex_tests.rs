//! Tests for hex signature decoding

extern crate std;

use crate::catalog::errors::CarveError;
use crate::utils::hex_utils::decode_hex;

#[test]
fn test_decode_valid_hex() {
    let result = decode_hex("89504E470D0A1A0A");
    std::assert!(result.is_ok());
    std::assert_eq!(result.unwrap(), vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn test_decode_lowercase_hex() {
    let result = decode_hex("47494638");
    std::assert_eq!(result.unwrap(), b"GIF8".to_vec());

    let result = decode_hex("ffd8ff");
    std::assert_eq!(result.unwrap(), vec![0xFF, 0xD8, 0xFF]);
}

#[test]
fn test_decode_odd_digit_count() {
    let result = decode_hex("ABC");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}

#[test]
fn test_decode_non_hex_characters() {
    let result = decode_hex("41G2");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}

#[test]
fn test_decode_multibyte_characters() {
    // Multi-byte UTF-8 passes an even byte-length check but is not hex;
    // it must fail cleanly rather than panic on a char boundary
    let result = decode_hex("a\u{e9}0");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));

    let result = decode_hex("\u{e9}\u{e9}");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}

#[test]
fn test_decode_rejects_signed_components() {
    // from_str_radix alone would accept a leading sign
    let result = decode_hex("+1");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));

    let result = decode_hex("-1");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));

    let result = decode_hex("41+2");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}

#[test]
fn test_decode_empty_string() {
    let result = decode_hex("");
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}
