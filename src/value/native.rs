//! Conversions between width variants and the native integer of the same width.

use super::{Byte, Dword, UnsignedByte, UnsignedDword, UnsignedWord, Word};
use crate::Endianness;

/// Implements `from_native`, `value` and `From<$value> for $native` for a width alias
macro_rules! impl_native {
    ($value:ident, $native:ty) => {
        impl $value {
            #[doc = concat!("Creates a value holding `value` as a `", stringify!($native), "`, laid out for `endianness`")]
            #[must_use]
            pub fn from_native(value: $native, endianness: Endianness) -> Self {
                let bytes = match endianness {
                    Endianness::LittleEndian => value.to_le_bytes(),
                    Endianness::BigEndian => value.to_be_bytes(),
                };

                Self::from_array(bytes, endianness)
            }

            #[doc = concat!("Returns the value as a native `", stringify!($native), "`")]
            #[must_use]
            pub fn value(&self) -> $native {
                match self.endianness() {
                    Endianness::LittleEndian => <$native>::from_le_bytes(*self.bytes()),
                    Endianness::BigEndian => <$native>::from_be_bytes(*self.bytes()),
                }
            }
        }

        impl From<$value> for $native {
            fn from(value: $value) -> Self {
                value.value()
            }
        }
    };
}

impl_native!(Byte, i8);
impl_native!(UnsignedByte, u8);
impl_native!(Word, i16);
impl_native!(UnsignedWord, u16);
impl_native!(Dword, i32);
impl_native!(UnsignedDword, u32);
