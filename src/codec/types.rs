// Numeric aliases for values destined for the canonical wire format.

use std::fmt;

use primitive_types::U256;

use crate::internal::error::{Error, Result};

pub type Uint8 = u8;
pub type Uint16 = u16;
pub type Uint32 = u32;
pub type Uint64 = u64;
pub type Uint128 = u128;
pub type Uint256 = U256;

/// Any integer a caller may hand to the width-checked encoder entry point.
///
/// Native signed integers are kept signed so that negative values are caught
/// as `OutOfRange` instead of wrapping.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AnyNumber {
    Signed(i128),
    Unsigned(U256),
}

/// The six fixed widths of the wire format.
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UintWidth {
    U8 = 8,
    U16 = 16,
    U32 = 32,
    U64 = 64,
    U128 = 128,
    U256 = 256,
}

impl UintWidth {
    /// Number of bits in this width.
    pub fn bits(self) -> u16 {
        self as u16
    }

    /// Number of bytes written on the wire.
    pub fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Largest value representable at this width.
    pub fn max_value(self) -> U256 {
        match self {
            UintWidth::U256 => U256::MAX,
            width => (U256::one() << width.bits() as u32) - U256::one(),
        }
    }
}

impl AnyNumber {
    /// Checks that the number is non-negative and fits `width`, returning it
    /// as a `U256` ready to be written.
    pub fn to_uint(self, width: UintWidth) -> Result<U256> {
        let value = match self {
            AnyNumber::Signed(v) if v < 0 => return Err(self.out_of_range(width)),
            AnyNumber::Signed(v) => U256::from(v as u128),
            AnyNumber::Unsigned(v) => v,
        };
        if value > width.max_value() {
            return Err(self.out_of_range(width));
        }
        Ok(value)
    }

    fn out_of_range(self, width: UintWidth) -> Error {
        Error::OutOfRange { value: self.to_string(), bits: width.bits() }
    }
}

impl fmt::Display for AnyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyNumber::Signed(v) => write!(f, "{}", v),
            AnyNumber::Unsigned(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! any_number_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for AnyNumber {
            fn from(v: $t) -> Self {
                AnyNumber::Unsigned(U256::from(v))
            }
        })*
    };
}

macro_rules! any_number_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for AnyNumber {
            fn from(v: $t) -> Self {
                AnyNumber::Signed(v as i128)
            }
        })*
    };
}

any_number_from_unsigned!(u8, u16, u32, u64, u128);
any_number_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<usize> for AnyNumber {
    fn from(v: usize) -> Self {
        AnyNumber::Unsigned(U256::from(v as u64))
    }
}

impl From<U256> for AnyNumber {
    fn from(v: U256) -> Self {
        AnyNumber::Unsigned(v)
    }
}
