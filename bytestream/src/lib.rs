//! Bounded big-endian byte primitives for the slitherwire codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for byte-level encoding and decoding.
//! It is designed for bounded, panic-free operation with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Floats are reinterpreted with `from_bits`/`to_bits`, never by pointer casts.
//! - **Bounded operations** - Every read checks the remaining length first.
//! - **No domain knowledge** - This crate knows nothing about snakes, food, or game state.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{padding_for, ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u8_prefixed(b"id").unwrap();
//! writer.write_padding(padding_for(3, 4));
//! writer.write_f32_be(1.5);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! let len = usize::from(reader.read_u8().unwrap());
//! assert_eq!(reader.read_bytes(len).unwrap(), b"id");
//! reader.skip_padding(1 + len, 4).unwrap();
//! assert_eq!(reader.read_f32_be().unwrap(), 1.5);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;

/// Returns the number of filler bytes needed after a `len`-byte chunk so the
/// next field starts on a multiple of `boundary`.
///
/// Computes `(boundary - len % boundary) % boundary`. A zero boundary needs
/// no padding.
#[must_use]
pub const fn padding_for(len: usize, boundary: usize) -> usize {
    if boundary == 0 {
        return 0;
    }
    (boundary - len % boundary) % boundary
}
