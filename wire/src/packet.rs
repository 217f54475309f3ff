//! Packet framing.

use crate::error::{DecodeError, LimitKind, WireResult};
use crate::header::{header_bytes, HEADER_SIZE, MAGIC};
use crate::limits::Limits;

/// A framed game-state packet.
///
/// The payload borrows from the receive buffer; decoders copy what they keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WirePacket<'a> {
    /// The whole datagram, header included.
    pub bytes: &'a [u8],
    /// The body after the header.
    pub payload: &'a [u8],
}

impl WirePacket<'_> {
    /// Offset of the payload within [`bytes`](Self::bytes).
    #[must_use]
    pub const fn payload_offset(&self) -> usize {
        HEADER_SIZE
    }
}

/// Validates the header and size of a datagram and splits off the payload.
pub fn decode_packet<'a>(buf: &'a [u8], limits: &Limits) -> WireResult<WirePacket<'a>> {
    if buf.len() < HEADER_SIZE {
        return Err(DecodeError::PacketTooSmall {
            actual: buf.len(),
            required: HEADER_SIZE,
        });
    }
    if buf.len() > limits.max_packet_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::PacketBytes,
            limit: limits.max_packet_bytes,
            actual: buf.len(),
        });
    }
    if buf[..HEADER_SIZE] != MAGIC {
        return Err(DecodeError::HeaderMismatch {
            found: header_bytes(buf),
        });
    }

    Ok(WirePacket {
        bytes: buf,
        payload: &buf[HEADER_SIZE..],
    })
}

/// Appends the packet header to `out`, returning the number of bytes written.
pub fn encode_header(out: &mut Vec<u8>) -> usize {
    out.extend_from_slice(&MAGIC);
    HEADER_SIZE
}
