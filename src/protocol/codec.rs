//! Value codec
//!
//! Converts between wire byte representations and the internal encodings of
//! the scalar types. The integer encoding is fixed little-endian regardless
//! of the host platform, so stored buffers stay portable.

use crate::error::{KvError, Result};

/// Parse an ASCII decimal literal with an optional leading `-`.
///
/// Empty input, a lone `-`, or any non-digit byte is rejected. Literals whose
/// magnitude does not fit in `i64` are rejected with the same error rather
/// than wrapped; this includes `i64::MIN` itself, whose magnitude overflows
/// during accumulation.
pub fn bytes_to_int(raw: &[u8]) -> Result<i64> {
    let (negative, digits) = match raw {
        [] | [b'-'] => return Err(KvError::InvalidInteger),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, raw),
    };

    let mut result: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return Err(KvError::InvalidInteger);
        }
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(i64::from(byte - b'0')))
            .ok_or(KvError::InvalidInteger)?;
    }

    Ok(if negative { -result } else { result })
}

/// Encode an integer into its fixed 8-byte little-endian buffer
pub fn encode_int(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Decode an 8-byte little-endian buffer back to its decimal string
pub fn decode_int(buffer: &[u8]) -> String {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(buffer);
    i64::from_le_bytes(bytes).to_string()
}

/// Decode a boolean buffer to its wire literal.
///
/// Only `0x01` maps to `"true"`; every other byte value is `"false"`.
pub fn decode_bool(buffer: &[u8]) -> &'static str {
    if buffer[0] == 0x01 {
        "true"
    } else {
        "false"
    }
}
