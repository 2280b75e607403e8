// Decoder configuration

/// Maximum nesting of sequences, options and composites accepted by default.
pub const MAX_CONTAINER_DEPTH: usize = 500;

/// Settings that change how strictly a `Decoder` treats its input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DecoderConfig {
    /// Reject uleb128 integers that are not minimally encoded.
    pub strict_canonical: bool,
    /// Deepest container nesting accepted before `DepthLimitExceeded`.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            strict_canonical: true,
            max_depth: MAX_CONTAINER_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Accepts non-minimal uleb128 encodings, decoding them to the same value.
    pub fn lenient() -> Self {
        DecoderConfig {
            strict_canonical: false,
            ..Default::default()
        }
    }

    pub fn with_strict_canonical(mut self, strict: bool) -> Self {
        self.strict_canonical = strict;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
