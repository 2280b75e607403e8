// Codec module for the canonical (BCS-style) binary format

pub mod config;
pub mod decode;
pub mod encode;
pub mod traits;
pub mod types;
pub mod varint;
