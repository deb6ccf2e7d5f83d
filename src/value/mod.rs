//! Fixed-width binary values with explicit endianness and signedness.
//!
//! This module provides [`BinaryValue`], a single immutable container parametrized by its byte
//! width and signedness, together with the six width aliases used throughout the crate:
//!
//! | Alias               | Width   | Signed |
//! |---------------------|---------|--------|
//! | [`Byte`]            | 1 byte  | yes    |
//! | [`UnsignedByte`]    | 1 byte  | no     |
//! | [`Word`]            | 2 bytes | yes    |
//! | [`UnsignedWord`]    | 2 bytes | no     |
//! | [`Dword`]           | 4 bytes | yes    |
//! | [`UnsignedDword`]   | 4 bytes | no     |
//!
//! # Storage vs. Interpretation
//!
//! The raw bytes are stored exactly as they were supplied. The [`Endianness`] tag only decides
//! which stored byte is the least significant one when the value is converted with
//! [`BinaryValue::to_int`]. Numeric queries are computed on demand and never cached.
//!
//! # Examples
//!
//! ```rust
//! use binvalue::{Endianness, UnsignedWord, Word};
//!
//! let unsigned = UnsignedWord::new(&[0xFF, 0x7F], Endianness::LittleEndian)?;
//! assert_eq!(unsigned.to_int(), 32767);
//!
//! let signed = Word::new(&[0xFF, 0xFE], Endianness::BigEndian)?;
//! assert_eq!(signed.to_int(), -2);
//! assert_eq!(signed.bytes(), &[0xFF, 0xFE]);
//! # Ok::<(), binvalue::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All values are `Copy` and immutable after construction, so they can be shared freely
//! between threads without synchronization.

mod dword;
mod native;
mod unsigned;

use std::fmt;

use log::debug;

use crate::{Endianness, Error, Result};

pub use unsigned::SignedCounterpart;

/// Signed 1-byte value
pub type Byte = BinaryValue<1, true>;
/// Unsigned 1-byte value
pub type UnsignedByte = BinaryValue<1, false>;
/// Signed 2-byte value
pub type Word = BinaryValue<2, true>;
/// Unsigned 2-byte value
pub type UnsignedWord = BinaryValue<2, false>;
/// Signed 4-byte value
pub type Dword = BinaryValue<4, true>;
/// Unsigned 4-byte value
pub type UnsignedDword = BinaryValue<4, false>;

/// An immutable binary value of exactly `N` bytes.
///
/// `SIGNED` selects two's-complement interpretation in [`BinaryValue::to_int`]. Two values are
/// equal when their raw bytes and endianness are equal; signedness is part of the type.
///
/// Widths up to 7 bytes are accepted so that every value fits an `i64` without loss.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryValue<const N: usize, const SIGNED: bool> {
    bytes: [u8; N],
    endianness: Endianness,
}

impl<const N: usize, const SIGNED: bool> BinaryValue<N, SIGNED> {
    /// Fixed byte width of this type
    pub const WIDTH: usize = N;

    const SUPPORTED_WIDTH: () = assert!(N > 0 && N < 8, "unsupported binary value width");

    /// Creates a value from a byte slice, validating its length.
    ///
    /// ## Arguments
    /// * `bytes` - Raw bytes in storage order, must be exactly [`Self::WIDTH`] long
    /// * `endianness` - Byte order used for numeric interpretation
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] if `bytes` is shorter or longer than the type width.
    pub fn new(bytes: &[u8], endianness: Endianness) -> Result<Self> {
        let Ok(array) = <[u8; N]>::try_from(bytes) else {
            debug!(
                "rejected {} bytes for {} (expected {})",
                bytes.len(),
                Self::type_name(),
                N
            );
            return Err(Error::InvalidLength {
                type_name: Self::type_name(),
                expected: N,
                actual: bytes.len(),
            });
        };

        Ok(Self::from_array(array, endianness))
    }

    /// Creates a little-endian value from a byte slice, validating its length.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] if `bytes` is shorter or longer than the type width.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes, Endianness::default())
    }

    /// Creates a value from an array of the exact width. Cannot fail.
    #[must_use]
    pub const fn from_array(bytes: [u8; N], endianness: Endianness) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SUPPORTED_WIDTH;

        BinaryValue { bytes, endianness }
    }

    /// Returns the human readable name of this width variant
    #[must_use]
    pub const fn type_name() -> &'static str {
        match (N, SIGNED) {
            (1, true) => "Byte",
            (1, false) => "Unsigned Byte",
            (2, true) => "Word",
            (2, false) => "Unsigned Word",
            (4, true) => "Dword",
            (4, false) => "Unsigned Dword",
            (_, true) => "Binary Value",
            (_, false) => "Unsigned Binary Value",
        }
    }

    /// Returns the raw bytes exactly as they were supplied at construction
    #[must_use]
    pub const fn bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Returns a copy of the raw bytes
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Returns the byte order tag of this value
    #[must_use]
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns `true` if this value is interpreted as two's-complement
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        SIGNED
    }

    /// Returns the byte width of this value
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the most significant byte under the stored endianness
    #[must_use]
    pub const fn most_significant_byte(&self) -> u8 {
        match self.endianness {
            Endianness::LittleEndian => self.bytes[N - 1],
            Endianness::BigEndian => self.bytes[0],
        }
    }

    /// Returns `true` if the top bit of the logical integer is set.
    ///
    /// This is the sign bit for signed values and the overflow bit for unsigned to signed casts.
    #[must_use]
    pub const fn is_high_bit_set(&self) -> bool {
        self.most_significant_byte() & 0x80 != 0
    }

    /// Interprets the raw bytes as an integer.
    ///
    /// The bytes are ordered least significant first according to the endianness tag and
    /// accumulated as an unsigned magnitude. Signed values with the top bit set are then
    /// reinterpreted as two's-complement negatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binvalue::{Byte, Endianness, UnsignedByte};
    ///
    /// assert_eq!(UnsignedByte::new(&[0xFF], Endianness::LittleEndian)?.to_int(), 255);
    /// assert_eq!(Byte::new(&[0xFF], Endianness::LittleEndian)?.to_int(), -1);
    /// # Ok::<(), binvalue::Error>(())
    /// ```
    #[must_use]
    pub fn to_int(&self) -> i64 {
        let mut ordered = self.bytes;
        if self.endianness.is_big() {
            ordered.reverse();
        }

        let magnitude = ordered
            .iter()
            .enumerate()
            .fold(0_i64, |acc, (index, byte)| acc | (i64::from(*byte) << (8 * index)));

        if SIGNED && self.is_high_bit_set() {
            magnitude - (1_i64 << (8 * N))
        } else {
            magnitude
        }
    }

    /// Returns the same raw bytes tagged with a different endianness.
    ///
    /// The numeric value changes unless the bytes are a palindrome.
    #[must_use]
    pub const fn with_endianness(&self, endianness: Endianness) -> Self {
        Self::from_array(self.bytes, endianness)
    }

    /// Returns the same numeric value laid out for a different endianness.
    ///
    /// The raw bytes are reversed when the byte order changes, so `to_int` is preserved.
    #[must_use]
    pub fn to_endianness(&self, endianness: Endianness) -> Self {
        if endianness == self.endianness {
            return *self;
        }

        let mut bytes = self.bytes;
        bytes.reverse();
        Self::from_array(bytes, endianness)
    }
}

impl<const N: usize, const SIGNED: bool> AsRef<[u8]> for BinaryValue<N, SIGNED> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize, const SIGNED: bool> TryFrom<&[u8]> for BinaryValue<N, SIGNED> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize, const SIGNED: bool> From<BinaryValue<N, SIGNED>> for i64 {
    fn from(value: BinaryValue<N, SIGNED>) -> Self {
        value.to_int()
    }
}

impl<const N: usize, const SIGNED: bool> fmt::Debug for BinaryValue<N, SIGNED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}([", Self::type_name())?;
        for (index, byte) in self.bytes.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{byte:02x}")?;
        }
        write!(f, "], {})", self.endianness)
    }
}

impl<const N: usize, const SIGNED: bool> fmt::Display for BinaryValue<N, SIGNED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BIG_ENDIAN, LITTLE_ENDIAN};
    use std::collections::HashSet;

    #[test]
    fn test_widths() {
        assert_eq!(Byte::WIDTH, 1);
        assert_eq!(UnsignedByte::WIDTH, 1);
        assert_eq!(Word::WIDTH, 2);
        assert_eq!(UnsignedWord::WIDTH, 2);
        assert_eq!(Dword::WIDTH, 4);
        assert_eq!(UnsignedDword::WIDTH, 4);
    }

    #[test]
    fn test_signedness_flag() {
        assert!(Byte::from_bytes(&[0]).unwrap().is_signed());
        assert!(!UnsignedByte::from_bytes(&[0]).unwrap().is_signed());
        assert!(Word::from_bytes(&[0, 0]).unwrap().is_signed());
        assert!(!UnsignedWord::from_bytes(&[0, 0]).unwrap().is_signed());
        assert!(Dword::from_bytes(&[0; 4]).unwrap().is_signed());
        assert!(!UnsignedDword::from_bytes(&[0; 4]).unwrap().is_signed());
    }

    #[test]
    fn test_default_endianness() {
        let value = Word::from_bytes(&[0x01, 0x00]).unwrap();
        assert_eq!(value.endianness(), LITTLE_ENDIAN);
        assert_eq!(value.to_int(), 1);
    }

    #[test]
    fn test_invalid_length() {
        let result = Word::new(&[0x01, 0x02, 0x03], LITTLE_ENDIAN);
        assert_eq!(
            result,
            Err(Error::InvalidLength {
                type_name: "Word",
                expected: 2,
                actual: 3
            })
        );

        let result = UnsignedDword::new(&[], BIG_ENDIAN);
        assert!(matches!(
            result,
            Err(Error::InvalidLength {
                expected: 4,
                actual: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_length_message() {
        let err = UnsignedDword::from_bytes(&[0x00; 3]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid byte count of 3 for value of type Unsigned Dword (expected 4)"
        );
    }

    #[test]
    fn test_to_int_unsigned() {
        assert_eq!(UnsignedByte::new(&[0xFF], LITTLE_ENDIAN).unwrap().to_int(), 255);
        assert_eq!(
            UnsignedWord::new(&[0xFF, 0x7F], LITTLE_ENDIAN).unwrap().to_int(),
            32767
        );
        assert_eq!(
            UnsignedWord::new(&[0xFF, 0x7F], BIG_ENDIAN).unwrap().to_int(),
            0xFF7F
        );
        assert_eq!(
            UnsignedDword::new(&[0xFF; 4], LITTLE_ENDIAN).unwrap().to_int(),
            0xFFFF_FFFF
        );
        assert_eq!(
            UnsignedDword::new(&[0x12, 0x34, 0x56, 0x78], BIG_ENDIAN)
                .unwrap()
                .to_int(),
            0x1234_5678
        );
    }

    #[test]
    fn test_to_int_signed() {
        assert_eq!(Byte::new(&[0x80], LITTLE_ENDIAN).unwrap().to_int(), -128);
        assert_eq!(Byte::new(&[0x7F], BIG_ENDIAN).unwrap().to_int(), 127);
        assert_eq!(Word::new(&[0x00, 0x80], LITTLE_ENDIAN).unwrap().to_int(), -32768);
        assert_eq!(Word::new(&[0x00, 0x80], BIG_ENDIAN).unwrap().to_int(), 128);
        assert_eq!(Dword::new(&[0xFF; 4], BIG_ENDIAN).unwrap().to_int(), -1);
        assert_eq!(
            Dword::new(&[0x00, 0x00, 0x00, 0x80], LITTLE_ENDIAN)
                .unwrap()
                .to_int(),
            i64::from(i32::MIN)
        );
    }

    #[test]
    fn test_bytes_independent_of_endianness() {
        let little = Dword::new(&[0x01, 0x02, 0x03, 0x04], LITTLE_ENDIAN).unwrap();
        let big = Dword::new(&[0x01, 0x02, 0x03, 0x04], BIG_ENDIAN).unwrap();

        assert_eq!(little.bytes(), big.bytes());
        assert_eq!(little.to_vec(), vec![0x01, 0x02, 0x03, 0x04]);
        assert_ne!(little.to_int(), big.to_int());
        assert_ne!(little, big);
    }

    #[test]
    fn test_reversed_bytes_flipped_endianness() {
        let little = UnsignedDword::new(&[0x78, 0x56, 0x34, 0x12], LITTLE_ENDIAN).unwrap();
        let big = UnsignedDword::new(&[0x12, 0x34, 0x56, 0x78], BIG_ENDIAN).unwrap();
        assert_eq!(little.to_int(), big.to_int());
    }

    #[test]
    fn test_with_and_to_endianness() {
        let value = Word::new(&[0x34, 0x12], LITTLE_ENDIAN).unwrap();

        let relabeled = value.with_endianness(BIG_ENDIAN);
        assert_eq!(relabeled.bytes(), value.bytes());
        assert_eq!(relabeled.to_int(), 0x3412);

        let converted = value.to_endianness(BIG_ENDIAN);
        assert_eq!(converted.bytes(), &[0x12, 0x34]);
        assert_eq!(converted.to_int(), value.to_int());
        assert_eq!(converted.to_endianness(LITTLE_ENDIAN), value);
    }

    #[test]
    fn test_most_significant_byte() {
        let little = UnsignedWord::new(&[0x01, 0x80], LITTLE_ENDIAN).unwrap();
        assert_eq!(little.most_significant_byte(), 0x80);
        assert!(little.is_high_bit_set());

        let big = UnsignedWord::new(&[0x01, 0x80], BIG_ENDIAN).unwrap();
        assert_eq!(big.most_significant_byte(), 0x01);
        assert!(!big.is_high_bit_set());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Byte::type_name(), "Byte");
        assert_eq!(UnsignedByte::type_name(), "Unsigned Byte");
        assert_eq!(Word::type_name(), "Word");
        assert_eq!(UnsignedWord::type_name(), "Unsigned Word");
        assert_eq!(Dword::type_name(), "Dword");
        assert_eq!(UnsignedDword::type_name(), "Unsigned Dword");
    }

    #[test]
    fn test_debug_display() {
        let value = Word::new(&[0xFE, 0xFF], LITTLE_ENDIAN).unwrap();
        assert_eq!(format!("{value}"), "-2");
        assert_eq!(format!("{value:?}"), "Word([0xfe, 0xff], little-endian)");
    }

    #[test]
    fn test_try_from_slice() {
        let data: &[u8] = &[0x01, 0x02];
        let value = UnsignedWord::try_from(data).unwrap();
        assert_eq!(value.to_int(), 0x0201);
        assert_eq!(value.as_ref(), data);

        let too_short: &[u8] = &[0x01];
        assert!(UnsignedWord::try_from(too_short).is_err());
    }

    #[test]
    fn test_hash_equality() {
        let mut set = HashSet::new();
        set.insert(UnsignedWord::new(&[0x01, 0x02], LITTLE_ENDIAN).unwrap());
        set.insert(UnsignedWord::new(&[0x01, 0x02], LITTLE_ENDIAN).unwrap());
        set.insert(UnsignedWord::new(&[0x01, 0x02], BIG_ENDIAN).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_into_i64() {
        let value = Dword::new(&[0xFE, 0xFF, 0xFF, 0xFF], LITTLE_ENDIAN).unwrap();
        let int: i64 = value.into();
        assert_eq!(int, -2);
    }
}
