//! # binvalue Prelude
//!
//! Import everything needed to construct, interpret and convert binary values:
//!
//! ```rust
//! use binvalue::prelude::*;
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all binvalue operations
pub use crate::Error;

/// The result type used throughout binvalue
pub use crate::Result;

// ================================================================================================
// Byte Order
// ================================================================================================

/// Byte order tag and its constants
pub use crate::{Endianness, BIG_ENDIAN, LITTLE_ENDIAN};

// ================================================================================================
// Values
// ================================================================================================

/// Generic container and width variants
pub use crate::{BinaryValue, Byte, Dword, UnsignedByte, UnsignedDword, UnsignedWord, Word};

/// Unsigned to signed conversions
pub use crate::SignedCounterpart;

// ================================================================================================
// Buffer Access
// ================================================================================================

/// Field reads and writes on byte buffers
pub use crate::io::{read_value, read_value_at, write_value_at};
