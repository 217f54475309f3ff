//! Byte-level reader with bounded operations.

use crate::error::{ByteError, ByteResult};
use crate::padding_for;

/// A big-endian byte cursor for decoding packed binary data.
///
/// All read operations check the remaining length before touching the
/// buffer and return [`ByteError::UnexpectedEof`] on failure. A failed read
/// never advances the cursor and the reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a `ByteReader` positioned at `offset`.
    ///
    /// An offset past the end is clamped so that every subsequent read fails
    /// with `UnexpectedEof` rather than panicking.
    #[must_use]
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            pos: offset.min(data.len()),
        }
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails unless at least `bytes` more bytes can be read.
    pub fn ensure(&self, bytes: usize) -> ByteResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(ByteError::UnexpectedEof {
                offset: self.pos,
                requested: bytes,
                available,
            });
        }
        Ok(())
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16_be(&mut self) -> ByteResult<u16> {
        self.read_array::<2>().map(u16::from_be_bytes)
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32_be(&mut self) -> ByteResult<u32> {
        self.read_array::<4>().map(u32::from_be_bytes)
    }

    /// Reads a big-endian IEEE-754 `f32`.
    ///
    /// The four bytes are assembled as a `u32` in network order and the bit
    /// pattern is reinterpreted with [`f32::from_bits`]. NaN and infinities
    /// pass through unchanged.
    pub fn read_f32_be(&mut self) -> ByteResult<f32> {
        self.read_u32_be().map(f32::from_bits)
    }

    /// Reads `len` raw bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure(len)?;
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    /// Skips `len` bytes without inspecting them.
    pub fn skip(&mut self, len: usize) -> ByteResult<()> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    /// Skips padding so that `consumed` bytes round up to `boundary`.
    ///
    /// `consumed` is the size of the variable-length chunk just read; the
    /// number of skipped bytes is `(boundary - consumed % boundary) % boundary`.
    pub fn skip_padding(&mut self, consumed: usize, boundary: usize) -> ByteResult<()> {
        if boundary == 0 {
            return Err(ByteError::InvalidAlignment { boundary });
        }
        self.skip(padding_for(consumed, boundary))
    }

    fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        let result = reader.read_u8();
        assert_eq!(
            result,
            Err(ByteError::UnexpectedEof {
                offset: 0,
                requested: 1,
                available: 0,
            })
        );
    }

    #[test]
    fn read_u16_is_big_endian() {
        let mut reader = ByteReader::new(&[0x12, 0x34]);
        assert_eq!(reader.read_u16_be().unwrap(), 0x1234);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_u32_is_big_endian() {
        let mut reader = ByteReader::new(&[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(reader.read_u32_be().unwrap(), 0x1234_5678);
    }

    #[test]
    fn read_f32_reinterprets_bits() {
        let bytes = 1.5f32.to_be_bytes();
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_f32_be().unwrap().to_bits(), 1.5f32.to_bits());
    }

    #[test]
    fn read_f32_passes_nan_through() {
        let bits = 0x7FC0_0001u32;
        let bytes = bits.to_be_bytes();
        let mut reader = ByteReader::new(&bytes);
        let value = reader.read_f32_be().unwrap();
        assert!(value.is_nan());
        assert_eq!(value.to_bits(), bits);
    }

    #[test]
    fn failed_read_does_not_advance() {
        let mut reader = ByteReader::new(&[0xAA, 0xBB, 0xCC]);
        reader.read_u8().unwrap();
        let err = reader.read_u32_be().unwrap_err();
        assert_eq!(
            err,
            ByteError::UnexpectedEof {
                offset: 1,
                requested: 4,
                available: 2,
            }
        );
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16_be().unwrap(), 0xBBCC);
    }

    #[test]
    fn read_bytes_borrows_slice() {
        let data = [1u8, 2, 3, 4];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_bytes(3).unwrap(), &[1, 2, 3]);
        assert_eq!(reader.remaining(), 1);
        assert!(reader.read_bytes(2).is_err());
    }

    #[test]
    fn at_clamps_offset() {
        let data = [1u8, 2];
        let reader = ByteReader::at(&data, 10);
        assert_eq!(reader.position(), 2);
        assert!(reader.is_empty());
    }

    #[test]
    fn skip_padding_uses_chunk_size() {
        // A 1-byte length prefix plus a 2-byte string needs one pad byte.
        let data = [0u8; 8];
        let mut reader = ByteReader::new(&data);
        reader.skip(3).unwrap();
        reader.skip_padding(3, 4).unwrap();
        assert_eq!(reader.position(), 4);

        reader.skip_padding(4, 4).unwrap();
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn skip_padding_is_relative_to_chunk() {
        // Reader starts mid-buffer; padding follows the chunk, not the position.
        let data = [0u8; 8];
        let mut reader = ByteReader::at(&data, 3);
        reader.read_u8().unwrap();
        reader.skip_padding(1, 4).unwrap();
        assert_eq!(reader.position(), 7);
    }

    #[test]
    fn skip_padding_past_end_fails() {
        let mut reader = ByteReader::new(&[0u8; 2]);
        reader.read_u8().unwrap();
        assert!(matches!(
            reader.skip_padding(1, 4),
            Err(ByteError::UnexpectedEof { requested: 3, .. })
        ));
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn zero_alignment_rejected() {
        let mut reader = ByteReader::new(&[0u8; 2]);
        assert_eq!(
            reader.skip_padding(1, 0),
            Err(ByteError::InvalidAlignment { boundary: 0 })
        );
    }
}
