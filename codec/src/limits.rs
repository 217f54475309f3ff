//! Limits for codec-level decoding.

/// Codec-specific limits enforced during snapshot decoding.
///
/// Every declared count is checked against these bounds, and against the
/// bytes actually left in the buffer, before anything is allocated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of snakes in a snapshot.
    pub max_players: usize,
    /// Maximum number of segments on one snake.
    pub max_segments_per_snake: usize,
    /// Maximum number of food records in a snapshot.
    pub max_foods: usize,
    /// Maximum bytes a single counted group may imply (count × record size).
    pub max_record_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            // Counts are u16 on the wire.
            max_players: usize::from(u16::MAX),
            max_segments_per_snake: usize::from(u16::MAX),
            max_foods: usize::from(u16::MAX),
            max_record_bytes: 64 * 1024,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_players: 32,
            max_segments_per_snake: 256,
            max_foods: 128,
            max_record_bytes: 4096,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_players: usize::MAX,
            max_segments_per_snake: usize::MAX,
            max_foods: usize::MAX,
            max_record_bytes: usize::MAX,
        }
    }

    /// Largest count of `record_size`-byte records allowed under `limit`.
    pub(crate) const fn effective_limit(&self, limit: usize, record_size: usize) -> usize {
        if record_size == 0 {
            return limit;
        }
        let by_bytes = self.max_record_bytes / record_size;
        if by_bytes < limit {
            by_bytes
        } else {
            limit
        }
    }
}
