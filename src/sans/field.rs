//! Little-endian field accessors at byte offsets.
//!
//! Every multi-byte quantity on the wire is little-endian. Fields are read
//! through the layout types in [`zerocopy::little_endian`], so a read is a
//! bounds check followed by a reinterpretation of the bytes in place.

use thiserror::Error;
use zerocopy::{
    FromBytes, Immutable, KnownLayout, Unaligned,
    little_endian::{I32, U16},
};

/// An error reading a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The field extends past the end of the buffer.
    #[error("Field of {width} bytes at offset {offset} exceeds buffer of {len} bytes.")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },
}

/// Borrow a layout of type `T` at an offset in a buffer.
pub fn read<T>(r: &[u8], offset: usize) -> Result<&T, Error>
where
    T: FromBytes + KnownLayout + Immutable + Unaligned,
{
    let width = size_of::<T>();
    let out_of_range = || Error::OutOfRange {
        offset,
        width,
        len: r.len(),
    };

    let bytes = r.get(offset..).ok_or_else(out_of_range)?;
    let (value, _) = T::ref_from_prefix(bytes).map_err(|_| out_of_range())?;

    Ok(value)
}

/// Read a `u8` at an offset.
pub fn read_u8(r: &[u8], offset: usize) -> Result<u8, Error> {
    read::<u8>(r, offset).copied()
}

/// Read a little-endian `u16` at an offset.
pub fn read_u16(r: &[u8], offset: usize) -> Result<u16, Error> {
    read::<U16>(r, offset).map(|v| v.get())
}

/// Read a little-endian `i32` at an offset.
pub fn read_i32(r: &[u8], offset: usize) -> Result<i32, Error> {
    read::<I32>(r, offset).map(|v| v.get())
}

/// Read a little-endian IEEE-754 `f32` at an offset.
///
/// The bits of the `i32` at the same offset are reinterpreted, so NaN
/// payloads and signed zeros survive unchanged.
pub fn read_f32(r: &[u8], offset: usize) -> Result<f32, Error> {
    read_i32(r, offset).map(|v| f32::from_bits(v as u32))
}
