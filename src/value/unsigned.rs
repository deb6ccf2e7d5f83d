//! Conversions from unsigned values to their signed counterpart of equal width.

use log::debug;

use super::BinaryValue;
use crate::{Error, Result};

/// Conversion of an unsigned value to the signed type of the same byte width.
///
/// Implemented once for every unsigned [`BinaryValue`], so [`crate::UnsignedByte`],
/// [`crate::UnsignedWord`] and [`crate::UnsignedDword`] share the same sign-bit logic.
///
/// # Examples
///
/// ```rust
/// use binvalue::{Endianness, Error, SignedCounterpart, UnsignedByte};
///
/// let small = UnsignedByte::new(&[0x7F], Endianness::LittleEndian)?;
/// assert_eq!(small.to_signed()?.to_int(), 127);
///
/// let large = UnsignedByte::new(&[0xFF], Endianness::LittleEndian)?;
/// assert!(matches!(large.to_signed(), Err(Error::Overflow { .. })));
/// assert_eq!(large.as_signed().to_int(), -1);
/// # Ok::<(), binvalue::Error>(())
/// ```
pub trait SignedCounterpart {
    /// The signed type with the same byte width
    type Signed;

    /// Reinterprets the raw bytes and endianness as the signed counterpart.
    ///
    /// This is a bit reinterpretation, the result is negative whenever the top bit is set.
    fn as_signed(&self) -> Self::Signed;

    /// Converts to the signed counterpart, preserving the numeric value.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the top bit is set, as the value would turn negative.
    fn to_signed(&self) -> Result<Self::Signed>;
}

impl<const N: usize> SignedCounterpart for BinaryValue<N, false> {
    type Signed = BinaryValue<N, true>;

    fn as_signed(&self) -> Self::Signed {
        BinaryValue::from_array(*self.bytes(), self.endianness())
    }

    fn to_signed(&self) -> Result<Self::Signed> {
        let value = self.as_signed();

        if value.to_int() < 0 {
            debug!(
                "{} {} does not fit {}",
                Self::type_name(),
                self.to_int(),
                BinaryValue::<N, true>::type_name()
            );
            return Err(Error::Overflow {
                type_name: BinaryValue::<N, true>::type_name(),
                value: self.to_int(),
            });
        }

        Ok(value)
    }
}
