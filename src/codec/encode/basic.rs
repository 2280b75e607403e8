use bytes::BufMut;
use primitive_types::U256;

use super::Encoder;
use crate::codec::types::{AnyNumber, UintWidth};
use crate::codec::varint;
use crate::internal::error::{Error, Result};

/// Fixed-width integers, booleans and uleb128 integers.
impl Encoder {
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    pub fn write_u128(&mut self, value: u128) {
        self.buf.put_u128_le(value);
    }

    /// Writes a 256-bit integer as 32 little-endian bytes.
    pub fn write_u256(&mut self, value: U256) {
        let mut le = [0u8; 32];
        value.to_little_endian(&mut le);
        self.buf.put_slice(&le);
    }

    /// Writes any integer at the given width, failing with `OutOfRange`
    /// instead of truncating when it is negative or too large.
    pub fn write_uint(&mut self, width: UintWidth, value: impl Into<AnyNumber>) -> Result<()> {
        let value = value.into().to_uint(width)?;
        let mut le = [0u8; 32];
        value.to_little_endian(&mut le);
        self.buf.put_slice(&le[..width.byte_len()]);
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.put_u8(value as u8);
    }

    /// Writes a uleb128 variable-length integer.
    pub fn write_uleb128(&mut self, value: u64) {
        varint::encode_uleb128(&mut self.buf, value);
    }

    pub fn write_u32_as_uleb128(&mut self, value: u32) {
        self.write_uleb128(value as u64);
    }

    /// Writes a collection length prefix.
    pub(crate) fn write_len(&mut self, len: usize) -> Result<()> {
        let len = u64::try_from(len)
            .map_err(|_| Error::Overflow(format!("length {} does not fit in u64", len)))?;
        self.write_uleb128(len);
        Ok(())
    }
}
