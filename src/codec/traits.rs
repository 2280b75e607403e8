//! Schema-driven `Encode`/`Decode` traits.
//!
//! A type's schema is the order in which its `encode` writes and its
//! `decode` reads. Nothing about the schema reaches the wire, so both sides
//! must agree on it out of band.

use bytes::Bytes;
use primitive_types::U256;

use crate::codec::config::DecoderConfig;
use crate::codec::decode::Decoder;
use crate::codec::encode::Encoder;
use crate::internal::error::{Error, Result};

/// Types that can append their canonical encoding to an `Encoder`.
pub trait Encode {
    fn encode(&self, encoder: &mut Encoder) -> Result<()>;
}

/// Types that can be read back from a `Decoder`.
pub trait Decode: Sized {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self>;
}

/// Encodes `value` into a fresh buffer.
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Bytes> {
    let mut encoder = Encoder::new();
    value.encode(&mut encoder)?;
    Ok(encoder.finish())
}

/// Decodes a single top-level value that must span all of `data`.
pub fn from_bytes<T: Decode>(data: &[u8]) -> Result<T> {
    from_bytes_with_config(data, DecoderConfig::default())
}

pub fn from_bytes_with_config<T: Decode>(data: &[u8], config: DecoderConfig) -> Result<T> {
    let mut decoder = Decoder::with_config(data, config);
    let value = T::decode(&mut decoder)?;
    decoder.assert_finished()?;
    Ok(value)
}

macro_rules! impl_fixed_width {
    ($($t:ty => $write:ident, $read:ident;)*) => {
        $(
            impl Encode for $t {
                fn encode(&self, encoder: &mut Encoder) -> Result<()> {
                    encoder.$write(*self);
                    Ok(())
                }
            }

            impl Decode for $t {
                fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
                    decoder.$read()
                }
            }
        )*
    };
}

impl_fixed_width! {
    bool => write_bool, read_bool;
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    u128 => write_u128, read_u128;
    U256 => write_u256, read_u256;
}

impl Encode for str {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_str(self)
    }
}

impl Encode for String {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_str(self)
    }
}

impl Decode for String {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.read_str().map(str::to_owned)
    }
}

impl Encode for Bytes {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_bytes(self)
    }
}

impl Decode for Bytes {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        // Copy out so the decoded value does not pin the input buffer
        decoder.read_bytes().map(Bytes::copy_from_slice)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_sequence(self, |e, item| item.encode(e))
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        self.as_slice().encode(encoder)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.read_sequence(T::decode)
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_option(self.as_ref(), |e, inner| inner.encode(e))
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.read_option(T::decode)
    }
}

/// Fixed-length arrays carry no length prefix.
impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        for item in self {
            item.encode(encoder)?;
        }
        Ok(())
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.read_composite(|d| {
            let mut items = Vec::with_capacity(N);
            for _ in 0..N {
                items.push(T::decode(d)?);
            }
            <[T; N]>::try_from(items).map_err(|items| Error::end_of_input(N, items.len()))
        })
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        T::decode(decoder).map(Box::new)
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, encoder: &mut Encoder) -> Result<()> {
                let ($($name,)+) = self;
                $($name.encode(encoder)?;)+
                Ok(())
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
                decoder.read_composite(|d| Ok(($($name::decode(d)?,)+)))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);

/// Implements `Encode` and `Decode` for a struct by listing its fields.
///
/// Fields are written and read in the order listed, which should be the
/// declaration order. Listing them in a different order on two sides of a
/// connection is a schema mismatch that the wire format cannot detect.
///
/// ```
/// use canon_bcs::{impl_composite, from_bytes, to_bytes};
///
/// #[derive(Debug, PartialEq)]
/// struct Transfer {
///     amount: u64,
///     memo: Option<String>,
/// }
///
/// impl_composite!(Transfer { amount, memo });
///
/// let transfer = Transfer { amount: 5, memo: None };
/// let bytes = to_bytes(&transfer).unwrap();
/// assert_eq!(bytes.as_ref(), &[5, 0, 0, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(from_bytes::<Transfer>(&bytes).unwrap(), transfer);
/// ```
#[macro_export]
macro_rules! impl_composite {
    ($name:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::codec::traits::Encode for $name {
            fn encode(&self, encoder: &mut $crate::codec::encode::Encoder) -> $crate::Result<()> {
                $($crate::codec::traits::Encode::encode(&self.$field, encoder)?;)+
                Ok(())
            }
        }

        impl $crate::codec::traits::Decode for $name {
            fn decode(decoder: &mut $crate::codec::decode::Decoder<'_>) -> $crate::Result<Self> {
                decoder.read_composite(|d| {
                    Ok($name {
                        $($field: $crate::codec::traits::Decode::decode(d)?,)+
                    })
                })
            }
        }
    };
}
