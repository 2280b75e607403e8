use bytes::BufMut;

use super::Encoder;
use crate::internal::error::Result;

/// Byte arrays, strings, sequences and options.
impl Encoder {
    /// Writes a uleb128 length followed by the raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.write_len(data.len())?;
        self.buf.put_slice(data);
        Ok(())
    }

    /// Writes raw bytes with no length prefix; the reader must know the length.
    pub fn write_fixed_bytes(&mut self, data: &[u8]) {
        self.buf.put_slice(data);
    }

    /// Writes a string as length-prefixed UTF-8.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Writes a uleb128 element count, then each item through `element_writer`.
    pub fn write_sequence<T, F>(&mut self, items: &[T], mut element_writer: F) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        self.write_len(items.len())?;
        for item in items {
            element_writer(self, item)?;
        }
        Ok(())
    }

    /// Writes `0x00` for `None`, or `0x01` followed by the inner value.
    pub fn write_option<T, F>(&mut self, value: Option<&T>, inner_writer: F) -> Result<()>
    where
        T: ?Sized,
        F: FnOnce(&mut Self, &T) -> Result<()>,
    {
        match value {
            None => {
                self.write_bool(false);
                Ok(())
            }
            Some(inner) => {
                self.write_bool(true);
                inner_writer(self, inner)
            }
        }
    }

    pub fn write_option_str(&mut self, value: Option<&str>) -> Result<()> {
        self.write_option(value, |e, s| e.write_str(s))
    }
}
