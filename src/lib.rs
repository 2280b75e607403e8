// canon-bcs library entry point
//
// Canonical binary encoding for blockchain SDK values: fixed-width
// little-endian integers, uleb128 lengths, byte arrays, sequences, options
// and composite records framed only by their schema.

pub mod codec;
pub mod internal;

pub use codec::config::{DecoderConfig, MAX_CONTAINER_DEPTH};
pub use codec::decode::Decoder;
pub use codec::encode::Encoder;
pub use codec::traits::{from_bytes, from_bytes_with_config, to_bytes, Decode, Encode};
pub use codec::types::{AnyNumber, Uint128, Uint16, Uint256, Uint32, Uint64, Uint8, UintWidth};
pub use internal::error::{Error, Result};
pub use primitive_types::U256;
