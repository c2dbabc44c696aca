//! Big-endian primitive conversion
//!
//! Converts between signed integers and their big-endian byte encodings.
//! Seed hashing feeds seed words to the digest through [`long_to_bytes`] and
//! reads the digest output back through [`bytes_to_long_array`].

use thiserror::Error;

/// Errors that can occur while decoding byte buffers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Byte buffer of length {len} is not a whole number of 8-byte words")]
    TruncatedInput { len: usize },
}

/// Encode a 32-bit value as 4 big-endian bytes
pub fn int_to_bytes(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode 4 big-endian bytes into a 32-bit value
pub fn bytes_to_int(bytes: [u8; 4]) -> i32 {
    i32::from_be_bytes(bytes)
}

/// Encode a 64-bit value as 8 big-endian bytes
///
/// # Example
/// ```
/// use xorshift_generator::util::conversion::long_to_bytes;
///
/// assert_eq!(long_to_bytes(0x0102), [0, 0, 0, 0, 0, 0, 1, 2]);
/// ```
pub fn long_to_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Decode 8 big-endian bytes into a 64-bit value
pub fn bytes_to_long(bytes: [u8; 8]) -> i64 {
    i64::from_be_bytes(bytes)
}

/// Decode a buffer of consecutive big-endian 64-bit words
///
/// # Errors
/// Returns [`ConversionError::TruncatedInput`] if the buffer length is not a
/// multiple of 8. An empty buffer decodes to an empty vector.
pub fn bytes_to_long_array(bytes: &[u8]) -> Result<Vec<i64>, ConversionError> {
    if bytes.len() % 8 != 0 {
        return Err(ConversionError::TruncatedInput { len: bytes.len() });
    }

    let mut words = Vec::with_capacity(bytes.len() / 8);
    for chunk in bytes.chunks_exact(8) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        words.push(bytes_to_long(word));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_array_decodes_in_order() {
        let a = 0x12345678_23456789_i64;
        let b = 0x7890abcd_890abcde_i64;

        let mut buf = Vec::new();
        buf.extend_from_slice(&long_to_bytes(a));
        buf.extend_from_slice(&long_to_bytes(b));

        assert_eq!(bytes_to_long_array(&buf).unwrap(), vec![a, b]);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let result = bytes_to_long_array(&[0u8; 3]);
        assert_eq!(result, Err(ConversionError::TruncatedInput { len: 3 }));
    }

    #[test]
    fn test_negative_int_encoding() {
        let value = 0x890abcde_u32 as i32;
        assert_eq!(int_to_bytes(value), [0x89, 0x0a, 0xbc, 0xde]);
        assert_eq!(bytes_to_int(int_to_bytes(value)), value);
    }
}
