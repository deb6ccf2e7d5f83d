//! Splitting an unsigned double word into its two unsigned words, and back.
//!
//! The stored byte layout decides where each half lives:
//!
//! | Endianness    | High word offsets | Low word offsets |
//! |---------------|-------------------|------------------|
//! | Little-endian | 2..4              | 0..2             |
//! | Big-endian    | 0..2              | 2..4             |
//!
//! Both halves keep the endianness of the double word. Signed double words have no split.

use log::debug;

use super::{UnsignedDword, UnsignedWord};
use crate::{Endianness, Error, Result};

impl UnsignedDword {
    /// Returns the more significant 2 bytes as a new [`UnsignedWord`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binvalue::{Endianness, UnsignedDword};
    ///
    /// let dword = UnsignedDword::new(&[0x11, 0x22, 0x33, 0x44], Endianness::LittleEndian)?;
    /// assert_eq!(dword.high_word().bytes(), &[0x33, 0x44]);
    /// assert_eq!(dword.high_word().to_int(), 0x4433);
    /// # Ok::<(), binvalue::Error>(())
    /// ```
    #[must_use]
    pub fn high_word(&self) -> UnsignedWord {
        match self.endianness() {
            Endianness::LittleEndian => self.word_at(2),
            Endianness::BigEndian => self.word_at(0),
        }
    }

    /// Returns the less significant 2 bytes as a new [`UnsignedWord`].
    #[must_use]
    pub fn low_word(&self) -> UnsignedWord {
        match self.endianness() {
            Endianness::LittleEndian => self.word_at(0),
            Endianness::BigEndian => self.word_at(2),
        }
    }

    /// Builds a double word from its high and low word.
    ///
    /// The result carries the endianness of the words and satisfies
    /// `from_words(d.high_word(), d.low_word()) == d`.
    ///
    /// # Errors
    /// Returns [`Error::EndiannessMismatch`] if the two words use different byte orders.
    pub fn from_words(high: UnsignedWord, low: UnsignedWord) -> Result<Self> {
        let endianness = high.endianness();
        if low.endianness() != endianness {
            debug!(
                "refusing to combine {} high word with {} low word",
                high.endianness(),
                low.endianness()
            );
            return Err(Error::EndiannessMismatch {
                high: high.endianness(),
                low: low.endianness(),
            });
        }

        let (first, second) = match endianness {
            Endianness::LittleEndian => (low, high),
            Endianness::BigEndian => (high, low),
        };

        let [b0, b1] = *first.bytes();
        let [b2, b3] = *second.bytes();

        Ok(Self::from_array([b0, b1, b2, b3], endianness))
    }

    fn word_at(&self, offset: usize) -> UnsignedWord {
        let bytes = self.bytes();
        UnsignedWord::from_array([bytes[offset], bytes[offset + 1]], self.endianness())
    }
}
