//! Error types for byte cursor operations.

use std::fmt;

/// Result type for byte cursor operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur while reading or writing packed bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Cursor position at which the read was attempted.
        offset: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available from `offset`.
        available: usize,
    },

    /// Alignment boundary must be non-zero.
    InvalidAlignment {
        /// The boundary that was requested.
        boundary: usize,
    },

    /// A length does not fit in the wire integer that carries it.
    LengthOverflow {
        /// The length that was attempted.
        length: usize,
        /// Maximum length representable on the wire.
        max: usize,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                offset,
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes at offset {offset} but only {available} bytes available"
                )
            }
            Self::InvalidAlignment { boundary } => {
                write!(f, "invalid alignment boundary {boundary}")
            }
            Self::LengthOverflow { length, max } => {
                write!(f, "length {length} exceeds wire maximum {max}")
            }
        }
    }
}

impl std::error::Error for ByteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unexpected_eof() {
        let err = ByteError::UnexpectedEof {
            offset: 12,
            requested: 4,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("4 bytes"), "should mention requested bytes");
        assert!(msg.contains("offset 12"), "should mention offset");
        assert!(msg.contains("1 bytes"), "should mention available bytes");
    }

    #[test]
    fn error_display_invalid_alignment() {
        let err = ByteError::InvalidAlignment { boundary: 0 };
        assert!(err.to_string().contains("alignment"));
    }

    #[test]
    fn error_display_length_overflow() {
        let err = ByteError::LengthOverflow {
            length: 300,
            max: 255,
        };
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("255"));
    }

    #[test]
    fn error_equality() {
        let err1 = ByteError::UnexpectedEof {
            offset: 0,
            requested: 2,
            available: 1,
        };
        let err2 = err1.clone();
        let err3 = ByteError::UnexpectedEof {
            offset: 1,
            requested: 2,
            available: 1,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ByteError>();
    }
}
