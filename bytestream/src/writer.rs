//! Byte-level writer for encoding packed binary data.

use crate::error::{ByteError, ByteResult};

/// A big-endian byte writer backed by a growable buffer.
///
/// Call [`finish`](Self::finish) to get the final byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16_be(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `u32`.
    pub fn write_u32_be(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes the bit pattern of an `f32` in network order.
    pub fn write_f32_be(&mut self, value: f32) {
        self.write_u32_be(value.to_bits());
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes a length as a `u8` followed by the bytes themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::LengthOverflow`] if `bytes` is longer than 255.
    pub fn write_u8_prefixed(&mut self, bytes: &[u8]) -> ByteResult<()> {
        let len = u8::try_from(bytes.len()).map_err(|_| ByteError::LengthOverflow {
            length: bytes.len(),
            max: usize::from(u8::MAX),
        })?;
        self.write_u8(len);
        self.write_bytes(bytes);
        Ok(())
    }

    /// Writes `len` zero bytes.
    pub fn write_padding(&mut self, len: usize) {
        self.bytes.resize(self.bytes.len() + len, 0);
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
