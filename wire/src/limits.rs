//! Configurable limits for bounded decoding.

/// Wire-level limits for packet decoding.
///
/// These limits are enforced before any body parsing to bound the work done
/// on a hostile or corrupt datagram. Record count limits belong to the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum packet size in bytes, header included.
    pub max_packet_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // One UDP datagram; there is no fragmentation or reassembly.
            max_packet_bytes: 64 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_packet_bytes: 4096,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_packet_bytes: usize::MAX,
        }
    }
}
