use byteorder::{ByteOrder, LittleEndian};
use primitive_types::U256;

use super::Decoder;
use crate::codec::types::UintWidth;
use crate::codec::varint;
use crate::internal::error::{Error, Result};

/// Fixed-width integers, booleans and uleb128 integers.
impl<'a> Decoder<'a> {
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_u128(&mut self) -> Result<u128> {
        Ok(LittleEndian::read_u128(self.take(16)?))
    }

    /// Reads 32 little-endian bytes as a 256-bit integer.
    pub fn read_u256(&mut self) -> Result<U256> {
        Ok(U256::from_little_endian(self.take(32)?))
    }

    /// Reads an integer of the given width, widened to `U256`.
    pub fn read_uint(&mut self, width: UintWidth) -> Result<U256> {
        Ok(U256::from_little_endian(self.take(width.byte_len())?))
    }

    /// Reads a boolean; any byte other than 0x00 or 0x01 is `InvalidTag`.
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            tag => Err(Error::InvalidTag { kind: "bool", tag }),
        }
    }

    /// Reads a uleb128 integer, honouring the configured canonical strictness.
    pub fn read_uleb128(&mut self) -> Result<u64> {
        let strict = self.config.strict_canonical;
        let (value, bytes_read) =
            varint::decode_uleb128(self.remaining(), strict).inspect_err(|e| {
                if let Error::NonCanonicalEncoding(_) = e {
                    log::debug!("rejecting non-canonical uleb128 at offset {}", self.position);
                }
            })?;
        self.position += bytes_read;
        Ok(value)
    }

    /// Reads a uleb128 integer that must fit in a u32.
    pub fn read_u32_as_uleb128(&mut self) -> Result<u32> {
        let value = self.read_uleb128()?;
        u32::try_from(value)
            .map_err(|_| Error::Overflow(format!("uleb128 value {} exceeds u32::MAX", value)))
    }

    /// Reads a collection length prefix.
    pub(crate) fn read_len(&mut self) -> Result<usize> {
        let len = self.read_uleb128()?;
        usize::try_from(len)
            .map_err(|_| Error::Overflow(format!("length {} does not fit in usize", len)))
    }
}
