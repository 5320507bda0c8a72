//! Hex string utilities
//!
//! Utilities for decoding the hex-encoded signature patterns
//! found in the definitions source.

use crate::catalog::errors::{CarveError, CarveResult};

/// Decodes a hex string into raw bytes
///
/// # Arguments
/// * `hex` - Hex string with an even number of digits (e.g. "89504E47")
///
/// # Returns
/// The decoded bytes, or a DecodeError if the string is empty,
/// has an odd digit count, or contains non-hex characters
pub fn decode_hex(hex: &str) -> CarveResult<Vec<u8>> {
    if hex.is_empty() {
        return Err(CarveError::DecodeError(
            "empty hex signature".to_string()
        ));
    }

    // Every character must be an ASCII hex digit. from_str_radix alone is
    // too lenient (it accepts a leading sign), and byte-index slicing on
    // multi-byte UTF-8 input would panic instead of failing cleanly.
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CarveError::DecodeError(
            format!("invalid hex signature: {}", hex)
        ));
    }

    if hex.len() % 2 != 0 {
        return Err(CarveError::DecodeError(
            format!("odd-length hex signature: {}", hex)
        ));
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| parse_hex_byte(&hex[i..i + 2], hex))
        .collect()
}

/// Helper function to parse a single hex byte
fn parse_hex_byte(hex_pair: &str, full_hex: &str) -> CarveResult<u8> {
    u8::from_str_radix(hex_pair, 16)
        .map_err(|_| CarveError::DecodeError(format!("invalid hex signature: {}", full_hex)))
}
