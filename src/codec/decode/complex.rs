use super::Decoder;
use crate::internal::error::{Error, Result};

/// Byte arrays, strings, sequences and options.
impl<'a> Decoder<'a> {
    /// Reads a uleb128 length L and returns a view of the next L bytes.
    pub fn read_bytes(&mut self) -> Result<&'a [u8]> {
        let start = self.position;
        let len = self.read_len()?;
        self.take(len).inspect_err(|_| self.position = start)
    }

    /// Reads exactly `len` bytes with no length prefix.
    pub fn read_fixed_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Reads `N` bytes with no length prefix into an owned array.
    pub fn read_byte_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Reads a length-prefixed UTF-8 string.
    pub fn read_str(&mut self) -> Result<&'a str> {
        let raw = self.read_bytes()?;
        std::str::from_utf8(raw).map_err(|e| Error::InvalidUtf8(e.to_string()))
    }

    /// Reads a uleb128 count C and then exactly C elements through `element_reader`.
    ///
    /// The count comes from untrusted input, so the initial allocation is capped
    /// by the bytes actually left; the vector grows as elements are read.
    /// Elements that consume no input are limited to the number of bytes left
    /// when the sequence started, so a huge count cannot spin the loop.
    pub fn read_sequence<T, F>(&mut self, mut element_reader: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let count = self.read_len()?;
        log::trace!("sequence of {} elements at offset {}", count, self.position);
        self.nested(|d| {
            let budget = d.remaining_len();
            let mut items = Vec::with_capacity(count.min(budget));
            let mut empty_reads = 0usize;
            for _ in 0..count {
                let before = d.position;
                items.push(element_reader(d)?);
                if d.position == before {
                    empty_reads += 1;
                    if empty_reads > budget {
                        log::debug!(
                            "sequence claims {} elements, only {} bytes available",
                            count,
                            budget
                        );
                        return Err(Error::end_of_input(count, budget));
                    }
                }
            }
            Ok(items)
        })
    }

    /// Reads an option tag: `0x00` is `None`, `0x01` is followed by the inner value.
    pub fn read_option<T, F>(&mut self, inner_reader: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        match self.read_u8()? {
            0 => Ok(None),
            1 => self.nested(inner_reader).map(Some),
            tag => Err(Error::InvalidTag { kind: "option", tag }),
        }
    }

    pub fn read_option_str(&mut self) -> Result<Option<&'a str>> {
        self.read_option(|d| d.read_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::config::DecoderConfig;
    use crate::codec::encode::Encoder;

    #[test]
    fn test_read_bytes() {
        let data = [0x05, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_bytes().unwrap(), b"hello");
        assert_eq!(decoder.read_bytes().unwrap(), b"");
        assert!(decoder.is_exhausted());
    }

    #[test]
    fn test_read_bytes_truncated() {
        // Claims 5 bytes, holds 3
        let data = [0x05, 0x68, 0x65, 0x6c];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_bytes().unwrap_err(), Error::end_of_input(5, 3));
        assert_eq!(decoder.position(), 0);

        // Length prefix itself cut off
        let mut decoder = Decoder::new(&[0x80]);
        assert!(matches!(decoder.read_bytes(), Err(Error::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn test_read_fixed_bytes() {
        let data = [1u8, 2, 3, 4];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_fixed_bytes(1).unwrap(), &[1]);
        assert_eq!(decoder.read_byte_array::<3>().unwrap(), [2, 3, 4]);
        assert!(decoder.read_byte_array::<1>().is_err());
    }

    #[test]
    fn test_read_str() {
        let mut encoder = Encoder::new();
        encoder.write_str("你好").unwrap();
        encoder.write_option_str(None).unwrap();
        encoder.write_option_str(Some("x")).unwrap();
        let data = encoder.finish();

        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_str().unwrap(), "你好");
        assert_eq!(decoder.read_option_str().unwrap(), None);
        assert_eq!(decoder.read_option_str().unwrap(), Some("x"));

        let invalid = [0x02, 0xff, 0xff];
        let result = Decoder::new(&invalid).read_str();
        assert!(result.unwrap_err().to_string().contains("Invalid UTF-8"));
    }

    #[test]
    fn test_read_sequence() {
        let data = [0x03, 0x01, 0x00, 0x02, 0x00, 0x00, 0x03];
        let mut decoder = Decoder::new(&data);
        let items = decoder.read_sequence(|d| d.read_u16()).unwrap();
        assert_eq!(items, vec![1, 2, 0x0300]);
    }

    #[test]
    fn test_read_sequence_count_mismatch() {
        // Declares 5 u8 elements, supplies 2
        let data = [0x05, 0x0a, 0x0b];
        let result = Decoder::new(&data).read_sequence(|d| d.read_u8());
        assert_eq!(result.unwrap_err(), Error::end_of_input(1, 0));
    }

    #[test]
    fn test_read_sequence_huge_count() {
        // u64::MAX - 1 elements claimed by a 10-byte prefix
        let data = [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x07];
        let result = Decoder::new(&data).read_sequence(|d| d.read_u8());
        assert!(matches!(result, Err(Error::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn test_read_sequence_empty_elements_huge_count() {
        // u64::MAX - 1 elements that each consume no input
        let data = [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let result = Decoder::new(&data).read_sequence(|d| d.read_byte_array::<0>());
        assert!(matches!(result, Err(Error::UnexpectedEndOfInput { remaining: 0, .. })));

        // Same with a few bytes still left in the input
        let data = [0x80, 0x80, 0x80, 0x80, 0x01, 0xAA, 0xBB];
        let mut decoder = Decoder::new(&data);
        let result = decoder.read_sequence(|d| d.read_byte_array::<0>());
        assert_eq!(result.unwrap_err(), Error::end_of_input(1 << 28, 2));
    }

    #[test]
    fn test_read_sequence_empty_elements_within_budget() {
        // Two empty elements while two bytes remain
        let data = [0x02, 0xAA, 0xBB];
        let mut decoder = Decoder::new(&data);
        let items = decoder.read_sequence(|d| d.read_byte_array::<0>()).unwrap();
        assert_eq!(items, vec![[0u8; 0]; 2]);
        assert_eq!(decoder.remaining(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_read_option() {
        let data = [0x00, 0x01, 0x2A, 0x02];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_option(|d| d.read_u8()).unwrap(), None);
        assert_eq!(decoder.read_option(|d| d.read_u8()).unwrap(), Some(42));
        assert_eq!(
            decoder.read_option(|d| d.read_u8()).unwrap_err().to_string(),
            "Invalid Tag: 0x02 is not a valid option tag"
        );
    }

    #[test]
    fn test_nested_sequence_depth() {
        // [[[]]] needs three container levels
        let data = [0x01, 0x01, 0x00];
        let config = DecoderConfig::default().with_max_depth(2);
        let mut decoder = Decoder::with_config(&data, config);
        let result =
            decoder.read_sequence(|d| d.read_sequence(|d| d.read_sequence(|d| d.read_u8())));
        assert_eq!(result.unwrap_err(), Error::DepthLimitExceeded(2));

        let mut decoder = Decoder::new(&data);
        let nested = decoder
            .read_sequence(|d| d.read_sequence(|d| d.read_sequence(|d| d.read_u8())))
            .unwrap();
        assert_eq!(nested, vec![vec![Vec::<u8>::new()]]);
    }
}
