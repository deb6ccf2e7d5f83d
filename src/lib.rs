// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # binvalue
//!
//! Immutable, fixed-width binary values with an explicit endianness tag.
//!
//! File formats, network headers and hardware registers are full of exact-width integer
//! fields. This crate wraps such fields as raw bytes plus a byte order, and exposes safe
//! numeric interpretation without silently losing precision, misreading endianness or
//! overflowing during signed/unsigned conversion.
//!
//! ## Features
//!
//! - **Six width variants** - [`Byte`], [`UnsignedByte`], [`Word`], [`UnsignedWord`],
//!   [`Dword`] and [`UnsignedDword`], all backed by one generic [`BinaryValue`]
//! - **Exact length validation** - construction from a slice fails with
//!   [`Error::InvalidLength`] on any size mismatch
//! - **Two's-complement interpretation** - [`BinaryValue::to_int`] honors signedness and
//!   endianness
//! - **Checked and unchecked casts** - [`SignedCounterpart::to_signed`] and
//!   [`SignedCounterpart::as_signed`] for every unsigned width
//! - **Word composition** - [`UnsignedDword::high_word`], [`UnsignedDword::low_word`] and
//!   [`UnsignedDword::from_words`]
//! - **Buffer access** - bounds-checked field reads and writes in [`io`]
//!
//! ## Quick Start
//!
//! ```rust
//! use binvalue::prelude::*;
//!
//! let dword = UnsignedDword::new(&[0x11, 0x22, 0x33, 0x44], Endianness::LittleEndian)?;
//! assert_eq!(dword.to_int(), 0x4433_2211);
//! assert_eq!(dword.high_word().to_int(), 0x4433);
//! assert_eq!(dword.low_word().to_int(), 0x2211);
//!
//! let signed = dword.to_signed()?;
//! assert_eq!(signed.to_int(), dword.to_int());
//! # Ok::<(), binvalue::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`]. Errors are raised locally and never
//! swallowed; an operation either succeeds or fails without side effects.
//!
//! ## Logging
//!
//! Rejected constructions, failed checked casts and out-of-bounds buffer access are reported
//! through the [`log`] facade at `debug`/`trace` level. No logger is installed by this crate.

pub(crate) mod error;
pub(crate) mod endianness;
pub(crate) mod value;

/// Bounds-checked reading and writing of binary values in byte buffers.
///
/// See [`io::read_value_at`] and [`io::write_value_at`].
pub mod io;

/// Convenient re-exports of the most commonly used types and traits.
///
/// ```rust
/// use binvalue::prelude::*;
///
/// let byte = UnsignedByte::new(&[0x7F], LITTLE_ENDIAN)?;
/// assert_eq!(byte.to_signed()?.to_int(), 127);
/// # Ok::<(), binvalue::Error>(())
/// ```
pub mod prelude;

/// `binvalue` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `binvalue` Error type
pub use error::Error;

/// Byte order tag and its two constants
pub use endianness::{Endianness, BIG_ENDIAN, LITTLE_ENDIAN};

/// The generic fixed-width container, its width aliases and the unsigned casting trait
pub use value::{
    BinaryValue, Byte, Dword, SignedCounterpart, UnsignedByte, UnsignedDword, UnsignedWord, Word,
};
