//! Error types for codec operations.

use std::fmt;

use wire::HEADER_SIZE;

/// Result type for snapshot decoding.
pub type CodecResult<T> = Result<T, DecodeError>;

/// Result type for packet encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that abort a snapshot decode.
///
/// There is no partial-snapshot recovery: once the cursor is misaligned
/// every later field is garbage, so the whole packet is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A field would extend past the end of the buffer.
    TruncatedInput {
        /// Absolute offset at which the read was attempted.
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// A declared count exceeds the configured bound.
    CountOverflow {
        kind: CountKind,
        count: usize,
        limit: usize,
    },

    /// The packet does not start with `GAMEDATA`.
    HeaderMismatch { found: [u8; HEADER_SIZE] },

    /// The packet is larger than the wire limit allows.
    PacketTooLarge { limit: usize, actual: usize },

    /// Bytes remain after the last food record.
    TrailingBytes { offset: usize, remaining: usize },

    /// A snake record carries a zero-length id.
    EmptySnakeId {
        /// Position of the snake in the player list.
        index: usize,
        /// Absolute offset of the id length byte.
        offset: usize,
    },

    /// Byte cursor error other than running out of input.
    Bytes(bytestream::ByteError),

    /// Wire framing error without a more specific mapping.
    Wire(wire::DecodeError),
}

/// The collection whose declared count was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    Players,
    Segments,
    Foods,
}

/// Errors that can occur while building a packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A collection has more entries than its `u16` count can carry, or
    /// more than the codec limits allow.
    CountOverflow {
        kind: CountKind,
        count: usize,
        limit: usize,
    },

    /// A snake id is longer than its `u8` length prefix can carry.
    IdTooLong { index: usize, len: usize },

    /// A snake id is empty; the decoder would reject the packet.
    EmptySnakeId { index: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput {
                offset,
                requested,
                available,
            } => {
                write!(
                    f,
                    "truncated input at offset {offset}: need {requested} bytes, have {available}"
                )
            }
            Self::CountOverflow { kind, count, limit } => {
                write!(f, "{kind} count overflow: {count} > {limit}")
            }
            Self::HeaderMismatch { found } => {
                write!(f, "header mismatch: found \"{}\"", found.escape_ascii())
            }
            Self::PacketTooLarge { limit, actual } => {
                write!(f, "packet too large: {actual} bytes > {limit}")
            }
            Self::TrailingBytes { offset, remaining } => {
                write!(f, "trailing data at offset {offset}: {remaining} bytes")
            }
            Self::EmptySnakeId { index, offset } => {
                write!(f, "snake {index} has an empty id at offset {offset}")
            }
            Self::Bytes(e) => write!(f, "byte cursor error: {e}"),
            Self::Wire(e) => write!(f, "wire error: {e}"),
        }
    }
}

impl fmt::Display for CountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Players => "player",
            Self::Segments => "segment",
            Self::Foods => "food",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOverflow { kind, count, limit } => {
                write!(f, "too many {kind} records to encode: {count} > {limit}")
            }
            Self::IdTooLong { index, len } => {
                write!(f, "snake {index} id is {len} bytes, maximum is 255")
            }
            Self::EmptySnakeId { index } => write!(f, "snake {index} has an empty id"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bytes(e) => Some(e),
            Self::Wire(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<bytestream::ByteError> for DecodeError {
    fn from(err: bytestream::ByteError) -> Self {
        match err {
            bytestream::ByteError::UnexpectedEof {
                offset,
                requested,
                available,
            } => Self::TruncatedInput {
                offset,
                requested,
                available,
            },
            other => Self::Bytes(other),
        }
    }
}

impl From<wire::DecodeError> for DecodeError {
    fn from(err: wire::DecodeError) -> Self {
        match err {
            wire::DecodeError::PacketTooSmall { actual, required } => Self::TruncatedInput {
                offset: 0,
                requested: required,
                available: actual,
            },
            wire::DecodeError::HeaderMismatch { found } => Self::HeaderMismatch { found },
            wire::DecodeError::LimitsExceeded { limit, actual, .. } => {
                Self::PacketTooLarge { limit, actual }
            }
            other => Self::Wire(other),
        }
    }
}
