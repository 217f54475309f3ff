//! Record layout and padding rules.
//!
//! Two incompatible layouts exist for the same field sequence. [`WireLayout::Aligned`]
//! is canonical: every variable-length field is followed by computed padding
//! and every fixed-size group carries a constant trailing pad so that each
//! record starts on a 4-byte boundary. [`WireLayout::Packed`] is the legacy
//! variant with every field written back to back. Nothing in the bytes tells
//! the two apart; the layout must be chosen by the caller.

use bytestream::padding_for;

/// Boundary that [`WireLayout::Aligned`] keeps records on.
pub const ALIGNMENT: usize = 4;

/// Size of a `u16` count field without its pad.
const COUNT_BYTES: usize = 2;
/// x, y as `f32`.
const POSITION_BYTES: usize = 8;
/// Normalized `u16` angle.
const ANGLE_BYTES: usize = 2;
/// Boost flag.
const BOOST_BYTES: usize = 1;
/// Length as `f32`.
const LENGTH_BYTES: usize = 4;
/// Food size byte.
const FOOD_SIZE_BYTES: usize = 1;

/// Wire layout of a game-state body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WireLayout {
    /// Canonical 4-byte aligned layout.
    #[default]
    Aligned,
    /// Legacy layout with no padding at all.
    Packed,
}

impl WireLayout {
    /// Returns a short lowercase name for logs and tooling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aligned => "aligned",
            Self::Packed => "packed",
        }
    }

    /// Pad after a `u16` count field (player, segment and food counts).
    #[must_use]
    pub const fn count_pad(self) -> usize {
        match self {
            Self::Aligned => ALIGNMENT - COUNT_BYTES,
            Self::Packed => 0,
        }
    }

    /// Boundary the length-prefixed id chunk is padded to.
    #[must_use]
    pub const fn id_alignment(self) -> usize {
        match self {
            Self::Aligned => ALIGNMENT,
            Self::Packed => 1,
        }
    }

    /// Pad after a snake id, counting its 1-byte length prefix.
    #[must_use]
    pub const fn id_pad(self, id_len: usize) -> usize {
        padding_for(1 + id_len, self.id_alignment())
    }

    /// Pad after the angle and boost fields.
    #[must_use]
    pub const fn boost_pad(self) -> usize {
        match self {
            Self::Aligned => padding_for(ANGLE_BYTES + BOOST_BYTES, ALIGNMENT),
            Self::Packed => 0,
        }
    }

    /// Pad after a food's size byte.
    #[must_use]
    pub const fn food_pad(self) -> usize {
        match self {
            Self::Aligned => padding_for(POSITION_BYTES + FOOD_SIZE_BYTES, ALIGNMENT),
            Self::Packed => 0,
        }
    }

    /// Size of a count field including its pad.
    #[must_use]
    pub const fn count_field(self) -> usize {
        COUNT_BYTES + self.count_pad()
    }

    /// Size of the fixed part of a snake record that follows the id.
    ///
    /// Position, angle, boost, length and the segment count, with pads.
    #[must_use]
    pub const fn snake_fixed(self) -> usize {
        POSITION_BYTES
            + ANGLE_BYTES
            + BOOST_BYTES
            + self.boost_pad()
            + LENGTH_BYTES
            + self.count_field()
    }

    /// Lower bound on a snake record: a bare length byte and no segments.
    #[must_use]
    pub const fn min_snake_record(self) -> usize {
        1 + self.id_pad(0) + self.snake_fixed()
    }

    /// Size of one segment. Segments are never padded.
    #[must_use]
    pub const fn segment_record(self) -> usize {
        POSITION_BYTES
    }

    /// Size of one food record including its pad.
    #[must_use]
    pub const fn food_record(self) -> usize {
        POSITION_BYTES + FOOD_SIZE_BYTES + self.food_pad()
    }
}
