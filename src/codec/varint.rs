use bytes::BufMut;

use crate::internal::error::{Error, Result};

/// Longest uleb128 encoding of a u64 (ten 7-bit groups).
pub const MAX_ULEB128_LEN: usize = 10;

/// Encodes an unsigned 64-bit integer as uleb128 into `buf`.
/// Always emits the minimal number of groups.
pub fn encode_uleb128<B: BufMut>(buf: &mut B, value: u64) {
    let mut value = value;

    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.put_u8(byte);
        if value == 0 {
            break;
        }
    }
}

/// Number of bytes `encode_uleb128` writes for `value`.
pub fn uleb128_len(value: u64) -> usize {
    let significant_bits = 64 - value.leading_zeros() as usize;
    significant_bits.max(1).div_ceil(7)
}

/// Decodes a uleb128 integer from the front of `data`.
/// Returns the decoded value and the number of bytes read.
///
/// With `strict` set, a multi-byte encoding whose last group is zero is
/// rejected as non-canonical.
pub fn decode_uleb128(data: &[u8], strict: bool) -> Result<(u64, usize)> {
    let mut value = 0u64;

    for (index, &byte) in data.iter().enumerate() {
        let low_seven_bits = (byte & 0x7F) as u64;
        let shift = 7 * index as u32;
        // The tenth group only has room for bit 63.
        if shift == 63 && low_seven_bits > 1 {
            return Err(Error::Overflow("uleb128 value exceeds u64::MAX".to_string()));
        }
        value |= low_seven_bits << shift;

        if (byte & 0x80) == 0 {
            if strict && index > 0 && byte == 0 {
                return Err(Error::NonCanonicalEncoding(format!(
                    "uleb128 value {} encoded in {} bytes, minimal is {}",
                    value,
                    index + 1,
                    uleb128_len(value)
                )));
            }
            return Ok((value, index + 1));
        }
        if index + 1 == MAX_ULEB128_LEN {
            return Err(Error::Overflow(format!(
                "uleb128 longer than {} bytes",
                MAX_ULEB128_LEN
            )));
        }
    }

    // Continuation bit set on the last available byte, or no bytes at all
    Err(Error::end_of_input(data.len() + 1, data.len()))
}
