//! Game-state snapshot decoding for the slitherwire client.
//!
//! This is the main codec crate that ties together bytestream and wire to
//! turn one `GAMEDATA` datagram into a typed [`GameState`]: every snake with
//! its id, position, heading, boost flag, length and body segments, and
//! every food pellet.
//!
//! # Features
//!
//! - Bounds-checked decoding of the aligned (canonical) and packed (legacy) layouts
//! - A fixture encoder producing byte-exact packets
//! - Id lookup, debug rendering and wrapped-trail reconstruction
//! - A [`SnapshotSlot`] that keeps the last good snapshot across bad packets
//!
//! # Design Principles
//!
//! - **Correctness first** - Every read is checked; malformed input is an error, never a panic.
//! - **Bounded allocation** - Declared counts are validated before anything is allocated.
//! - **Value semantics** - Each decode returns a fresh snapshot that owns all of its data.
//!
//! # Example
//!
//! ```
//! use codec::{decode_game_state, encode_game_state, CodecLimits, GameState};
//! use wire::WireLayout;
//!
//! let packet = encode_game_state(&GameState::new(), WireLayout::Aligned, &CodecLimits::default())
//!     .unwrap();
//! assert!(wire::assert_game_data(&packet));
//!
//! let state = decode_game_state(&packet, &wire::Limits::default(), &CodecLimits::default())
//!     .unwrap();
//! assert!(state.is_empty());
//! ```

pub mod angle;
mod debug;
mod error;
mod limits;
mod slot;
mod snapshot;
mod types;
pub mod world;

pub use angle::{decode_angle, encode_angle, ANGLE_STEPS};
pub use debug::{format_debug, format_debug_capped};
pub use error::{CodecResult, CountKind, DecodeError, EncodeError, EncodeResult};
pub use limits::CodecLimits;
pub use slot::SnapshotSlot;
pub use snapshot::{
    decode_game_state, decode_game_state_at, decode_game_state_from_packet,
    decode_game_state_with_layout, encode_game_state,
};
pub use types::{lookup_by_id, Food, GameState, Snake, SnakeId, Vector2};
pub use wire::{Limits as WireLimits, WireLayout};
pub use world::{wrap_delta, Trail, WORLD_SIZE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = GameState::new();
        let _ = SnakeId::from("id");
        let _ = Vector2::new(0.0, 0.0);
        let _ = CodecLimits::default();
        let _ = WireLimits::default();
        let _ = WireLayout::Aligned;
        let _ = SnapshotSlot::default();
        let _ = decode_angle(0);
        let _ = WORLD_SIZE;

        // Error types
        let _: CodecResult<()> = Ok(());
        let _: EncodeResult<()> = Ok(());
        let _ = CountKind::Players;
    }

    #[test]
    fn decode_encode_agree_on_limits() {
        let state = GameState {
            players: Vec::new(),
            foods: vec![
                Food {
                    position: Vector2::new(0.0, 0.0),
                    size: 1,
                };
                CodecLimits::for_testing().max_foods
            ],
        };
        let packet =
            encode_game_state(&state, WireLayout::Aligned, &CodecLimits::for_testing()).unwrap();
        let decoded = decode_game_state(
            &packet,
            &wire::Limits::for_testing(),
            &CodecLimits::for_testing(),
        )
        .unwrap();
        assert_eq!(decoded, state);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_roundtrip_keeps_ids_as_strings() {
        let state = GameState {
            players: vec![Snake {
                id: SnakeId::from("abc-123"),
                position: Vector2::new(1.0, 2.0),
                angle: 0.5,
                boosting: false,
                length: 3.0,
                segments: vec![Vector2::new(4.0, 5.0)],
            }],
            foods: Vec::new(),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"abc-123\""));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
