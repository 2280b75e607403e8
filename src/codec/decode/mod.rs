// Decode module for the canonical binary format

pub mod basic;
pub mod complex;

use crate::codec::config::DecoderConfig;
use crate::internal::error::{Error, Result};

/// A cursor over an immutable byte slice that reads canonical encodings
/// in the order they were written.
///
/// Every read is bounds-checked and the position only moves forward, so
/// `0 <= position <= data.len()` always holds. Values borrowed from the
/// input (`read_bytes`, `read_str`) are read-only views.
#[derive(Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    position: usize,
    config: DecoderConfig,
    depth: usize, // Current container nesting
}

impl<'a> Decoder<'a> {
    /// Creates a decoder with the default (strict) configuration.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecoderConfig::default())
    }

    pub fn with_config(data: &'a [u8], config: DecoderConfig) -> Self {
        Decoder {
            data,
            position: 0,
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes not yet consumed.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once every input byte has been consumed. Callers use this after a
    /// top-level decode to detect trailing garbage.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_len() == 0
    }

    /// The unread part of the input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Fails with `TrailingBytes` if any input is left.
    pub fn assert_finished(&self) -> Result<()> {
        match self.remaining_len() {
            0 => Ok(()),
            left => {
                log::debug!("rejecting input with {} trailing bytes", left);
                Err(Error::TrailingBytes(left))
            }
        }
    }

    /// Reads a composite value through `f`, counting it toward the nesting limit.
    /// Fields are read inside `f` in their declared order.
    pub fn read_composite<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.nested(f)
    }

    /// Consumes exactly `len` bytes or fails without moving the cursor.
    pub(crate) fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining_len();
        if len > remaining {
            return Err(Error::end_of_input(len, remaining));
        }
        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    /// Runs `f` one container level deeper, failing once `max_depth` is passed.
    pub(crate) fn nested<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if self.depth >= self.config.max_depth {
            log::debug!(
                "container depth limit {} reached at offset {}",
                self.config.max_depth,
                self.position
            );
            return Err(Error::DepthLimitExceeded(self.config.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
