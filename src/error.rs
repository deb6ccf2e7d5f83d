use thiserror::Error;

use crate::Endianness;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every fallible operation either succeeds completely or fails with one of these variants
/// without any observable side effect. There is no recovery path inside the library.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::InvalidLength`] - Byte count does not match the fixed width of the type
/// - [`Error::EndiannessMismatch`] - Words with different byte orders were combined
///
/// ## Conversion Errors
/// - [`Error::Overflow`] - Checked unsigned to signed cast would change the sign
///
/// ## Buffer Errors
/// - [`Error::OutOfBounds`] - Attempted to read or write beyond the end of a buffer
///
/// # Examples
///
/// ```rust
/// use binvalue::{Error, Word};
///
/// match Word::from_bytes(&[0x01, 0x02, 0x03]) {
///     Err(Error::InvalidLength { expected, actual, .. }) => {
///         assert_eq!(expected, 2);
///         assert_eq!(actual, 3);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The supplied byte sequence does not have the exact width of the requested type.
    ///
    /// # Fields
    ///
    /// * `type_name` - Name of the type that rejected the input
    /// * `expected` - Fixed byte width of that type
    /// * `actual` - Number of bytes that were supplied
    #[error("Invalid byte count of {actual} for value of type {type_name} (expected {expected})")]
    InvalidLength {
        /// The name of the type that was being constructed
        type_name: &'static str,
        /// The fixed width of the type
        expected: usize,
        /// The length of the supplied input
        actual: usize,
    },

    /// The unsigned value is too large for the signed counterpart of the same width.
    ///
    /// Raised by [`crate::SignedCounterpart::to_signed`] when the most significant bit is set.
    /// Use [`crate::SignedCounterpart::as_signed`] to accept the bit reinterpretation instead.
    #[error("Value {value} too big for type {type_name}")]
    Overflow {
        /// The name of the signed target type
        type_name: &'static str,
        /// The unsigned value that could not be represented
        value: i64,
    },

    /// An out of bound access was attempted on a byte buffer.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Two words with different byte orders were combined into a double word.
    #[error("Cannot combine words of different endianness - high: {high}, low: {low}")]
    EndiannessMismatch {
        /// Byte order of the high word
        high: Endianness,
        /// Byte order of the low word
        low: Endianness,
    },
}
