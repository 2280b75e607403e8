// Encode module for the canonical binary format

pub mod basic;
pub mod complex;

use bytes::{Bytes, BytesMut};

// Initial reservation; BytesMut grows geometrically from here
const DEFAULT_CAPACITY: usize = 64;

/// Appends canonical encodings of typed values to an owned buffer.
///
/// Values must be written in the same order the receiving `Decoder` reads
/// them. The schema is never written to the wire.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    /// Creates an encoder with a small initial buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an encoder whose buffer can hold `capacity` bytes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes written so far, without consuming the encoder.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Discards everything written, keeping the allocation for the next message.
    /// Also the way to drop partial output after an error.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Consumes the encoder and returns an immutable snapshot of the output.
    pub fn finish(self) -> Bytes {
        log::trace!("encoder finished with {} bytes", self.buf.len());
        self.buf.freeze()
    }
}
