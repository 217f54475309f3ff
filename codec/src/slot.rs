//! Latest-snapshot holder for a receive loop.

use tracing::warn;
use wire::{decode_packet, WireLayout, HEADER_SIZE};

use crate::error::CodecResult;
use crate::limits::CodecLimits;
use crate::snapshot::decode_game_state_with_layout;
use crate::types::GameState;

/// Holds the most recent valid [`GameState`].
///
/// Each successful [`ingest`](Self::ingest) replaces the held snapshot
/// wholesale. A packet that fails to decode is dropped and the previous
/// snapshot stays current.
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    current: Option<GameState>,
    wire_limits: wire::Limits,
    limits: CodecLimits,
    layout: WireLayout,
    accepted: u64,
    dropped: u64,
}

impl SnapshotSlot {
    /// Creates an empty slot that decodes with the given limits.
    #[must_use]
    pub fn new(wire_limits: wire::Limits, limits: CodecLimits) -> Self {
        Self {
            current: None,
            wire_limits,
            limits,
            layout: WireLayout::Aligned,
            accepted: 0,
            dropped: 0,
        }
    }

    /// Sets the record layout used for incoming packets.
    #[must_use]
    pub fn with_layout(mut self, layout: WireLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Decodes a datagram and, on success, makes it the current snapshot.
    ///
    /// On failure the error is returned, the drop counter increments and the
    /// previous snapshot is left untouched.
    pub fn ingest(&mut self, bytes: &[u8]) -> CodecResult<&GameState> {
        match self.decode(bytes) {
            Ok(state) => {
                self.accepted += 1;
                Ok(self.current.insert(state))
            }
            Err(err) => {
                self.dropped += 1;
                warn!(error = %err, bytes = bytes.len(), dropped = self.dropped, "dropping packet");
                Err(err)
            }
        }
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<GameState> {
        decode_packet(bytes, &self.wire_limits)?;
        decode_game_state_with_layout(bytes, HEADER_SIZE, self.layout, &self.limits)
    }

    /// Returns the current snapshot, if any packet has been accepted.
    #[must_use]
    pub fn current(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    /// Removes and returns the current snapshot.
    pub fn take(&mut self) -> Option<GameState> {
        self.current.take()
    }

    /// Number of packets decoded successfully.
    #[must_use]
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Number of packets dropped because they failed to decode.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
