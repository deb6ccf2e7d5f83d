//! Byte order tag used to interpret raw bytes as integers.
//!
//! [`Endianness`] only decides how stored bytes are ordered when a value is converted to a
//! number. It never changes the storage order of the bytes themselves.
//!
//! The tag can be parsed from text, which is the only configurable input of this crate:
//!
//! ```rust
//! use binvalue::Endianness;
//!
//! let endianness: Endianness = "big".parse()?;
//! assert_eq!(endianness, Endianness::BigEndian);
//! assert_eq!(Endianness::default(), Endianness::LittleEndian);
//! # Ok::<(), strum::ParseError>(())
//! ```

use strum::{Display, EnumCount, EnumIter, EnumString};

/// Byte ordering convention of a binary value.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum Endianness {
    /// Least significant byte first
    #[default]
    #[strum(serialize = "little", serialize = "le", to_string = "little-endian")]
    LittleEndian,
    /// Most significant byte first
    #[strum(serialize = "big", serialize = "be", to_string = "big-endian")]
    BigEndian,
}

/// Little-endian byte order tag
pub const LITTLE_ENDIAN: Endianness = Endianness::LittleEndian;

/// Big-endian byte order tag
pub const BIG_ENDIAN: Endianness = Endianness::BigEndian;

impl Endianness {
    /// Returns the byte order of the host platform
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::BigEndian
        } else {
            Endianness::LittleEndian
        }
    }

    /// Returns `true` for [`Endianness::LittleEndian`]
    #[must_use]
    pub const fn is_little(self) -> bool {
        matches!(self, Endianness::LittleEndian)
    }

    /// Returns `true` for [`Endianness::BigEndian`]
    #[must_use]
    pub const fn is_big(self) -> bool {
        matches!(self, Endianness::BigEndian)
    }
}
