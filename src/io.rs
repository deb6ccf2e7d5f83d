//! Bounds-checked reading and writing of binary values in byte buffers.
//!
//! These helpers pull exact-width fields out of a larger buffer, such as a file header or a
//! packet, and put them back. Reads copy the bytes into a new value; writes copy the raw bytes
//! of a value verbatim, in their stored order.
//!
//! # Examples
//!
//! ```rust
//! use binvalue::io::{read_value_at, write_value_at};
//! use binvalue::{Endianness, UnsignedDword, UnsignedWord};
//!
//! let data = [0x01, 0x00, 0x02, 0x00, 0x00, 0x00];
//! let mut offset = 0;
//!
//! let first: UnsignedWord = read_value_at(&data, &mut offset, Endianness::LittleEndian)?;
//! let second: UnsignedDword = read_value_at(&data, &mut offset, Endianness::LittleEndian)?;
//! assert_eq!(first.to_int(), 1);
//! assert_eq!(second.to_int(), 2);
//! assert_eq!(offset, 6);
//!
//! let mut out = [0u8; 6];
//! let mut offset = 0;
//! write_value_at(&mut out, &mut offset, &first)?;
//! write_value_at(&mut out, &mut offset, &second)?;
//! assert_eq!(out, data);
//! # Ok::<(), binvalue::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All functions return [`crate::Error::OutOfBounds`] if the buffer is too short, and leave the
//! offset untouched in that case.

use log::trace;

use crate::{BinaryValue, Endianness, Error::OutOfBounds, Result};

/// Reads a binary value from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `data` holds fewer bytes than the value width.
pub fn read_value<const N: usize, const SIGNED: bool>(
    data: &[u8],
    endianness: Endianness,
) -> Result<BinaryValue<N, SIGNED>> {
    let mut offset = 0_usize;
    read_value_at(data, &mut offset, endianness)
}

/// Reads a binary value at `offset` and advances the offset by its width.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if fewer than the value width bytes remain.
pub fn read_value_at<const N: usize, const SIGNED: bool>(
    data: &[u8],
    offset: &mut usize,
    endianness: Endianness,
) -> Result<BinaryValue<N, SIGNED>> {
    let Some(end) = offset.checked_add(N).filter(|end| *end <= data.len()) else {
        trace!(
            "read of {} bytes at offset {} exceeds buffer of {}",
            N,
            offset,
            data.len()
        );
        return Err(OutOfBounds);
    };

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(BinaryValue::from_array(read, endianness))
}

/// Writes the raw bytes of `value` at `offset` and advances the offset by its width.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if fewer than the value width bytes remain.
pub fn write_value_at<const N: usize, const SIGNED: bool>(
    data: &mut [u8],
    offset: &mut usize,
    value: &BinaryValue<N, SIGNED>,
) -> Result<()> {
    let Some(end) = offset.checked_add(N).filter(|end| *end <= data.len()) else {
        trace!(
            "write of {} bytes at offset {} exceeds buffer of {}",
            N,
            offset,
            data.len()
        );
        return Err(OutOfBounds);
    };

    data[*offset..end].copy_from_slice(value.bytes());
    *offset = end;

    Ok(())
}
