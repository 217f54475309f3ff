//! Introspection and fixture tools for slitherwire packets.
//!
//! This crate provides utilities for inspecting and understanding captured
//! `GAMEDATA` datagrams:
//!
//! - Check the header and summarize what a packet declares
//! - Decode a packet into JSON or the debug text rendering
//! - Build packets from JSON state files for fixtures
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use anyhow::{Context, Result};
use bytestream::ByteReader;
use codec::{CodecLimits, DecodeError, GameState};
use serde::Serialize;
use wire::{assert_game_data, WireLayout, HEADER_SIZE};

/// Summary of one packet.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub byte_len: usize,
    pub layout: WireLayout,
    /// Whether the packet starts with `GAMEDATA`.
    pub header_ok: bool,
    /// Player count read straight from the body, even if decoding fails.
    pub declared_players: Option<u16>,
    pub outcome: Result<PacketSummary, DecodeError>,
}

/// Counts from a successfully decoded packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketSummary {
    pub players: Vec<PlayerSummary>,
    pub segments: usize,
    pub foods: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: String,
    pub segments: usize,
}

/// Decoded packet ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeOutput {
    pub byte_len: usize,
    pub layout: &'static str,
    pub state: GameState,
}

/// Checks the header and decodes the packet, capturing any error in the report.
pub fn inspect_packet(
    bytes: &[u8],
    layout: WireLayout,
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> InspectReport {
    let declared_players = ByteReader::at(bytes, HEADER_SIZE).read_u16_be().ok();
    let outcome = decode_with_layout(bytes, layout, wire_limits, limits).map(|state| {
        PacketSummary {
            players: state
                .players
                .iter()
                .map(|snake| PlayerSummary {
                    id: snake.id.to_string(),
                    segments: snake.segments.len(),
                })
                .collect(),
            segments: state.segment_count(),
            foods: state.foods.len(),
        }
    });
    InspectReport {
        byte_len: bytes.len(),
        layout,
        header_ok: assert_game_data(bytes),
        declared_players,
        outcome,
    }
}

/// Decodes a packet for JSON or pretty output.
pub fn decode_packet_json(
    bytes: &[u8],
    layout: WireLayout,
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> Result<DecodeOutput> {
    let state = decode_with_layout(bytes, layout, wire_limits, limits)
        .with_context(|| format!("decode {} packet", layout.name()))?;
    Ok(DecodeOutput {
        byte_len: bytes.len(),
        layout: layout.name(),
        state,
    })
}

/// Renders decoded output as the debug text, optionally capped in bytes.
#[must_use]
pub fn format_decode_pretty(output: &DecodeOutput, cap: Option<usize>) -> String {
    let mut out = format!("{} bytes ({})\n", output.byte_len, output.layout);
    match cap {
        Some(cap) => out.push_str(&codec::format_debug_capped(&output.state, cap)),
        None => out.push_str(&codec::format_debug(&output.state)),
    }
    out
}

/// Parses a JSON game state and encodes it as a packet.
pub fn encode_state_json(json: &str, layout: WireLayout, limits: &CodecLimits) -> Result<Vec<u8>> {
    let state: GameState = serde_json::from_str(json).context("parse state json")?;
    codec::encode_game_state(&state, layout, limits).context("encode state")
}

fn decode_with_layout(
    bytes: &[u8],
    layout: WireLayout,
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> Result<GameState, DecodeError> {
    let packet = wire::decode_packet(bytes, wire_limits)?;
    codec::decode_game_state_with_layout(packet.bytes, packet.payload_offset(), layout, limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{Food, Snake, SnakeId, Vector2};

    fn sample_state() -> GameState {
        GameState {
            players: vec![Snake {
                id: SnakeId::from("me"),
                position: Vector2::new(10.0, 20.0),
                angle: codec::decode_angle(100),
                boosting: false,
                length: 5.0,
                segments: vec![Vector2::new(9.0, 20.0), Vector2::new(8.0, 20.0)],
            }],
            foods: vec![Food {
                position: Vector2::new(1.0, 2.0),
                size: 4,
            }],
        }
    }

    fn sample_packet(layout: WireLayout) -> Vec<u8> {
        codec::encode_game_state(&sample_state(), layout, &CodecLimits::default()).unwrap()
    }

    #[test]
    fn inspect_reports_counts() {
        let bytes = sample_packet(WireLayout::Aligned);
        let report = inspect_packet(
            &bytes,
            WireLayout::Aligned,
            &wire::Limits::default(),
            &CodecLimits::default(),
        );
        assert!(report.header_ok);
        assert_eq!(report.byte_len, bytes.len());
        assert_eq!(report.declared_players, Some(1));
        let summary = report.outcome.unwrap();
        assert_eq!(summary.segments, 2);
        assert_eq!(summary.foods, 1);
        assert_eq!(
            summary.players,
            vec![PlayerSummary {
                id: "me".to_string(),
                segments: 2,
            }]
        );
    }

    #[test]
    fn inspect_captures_decode_error() {
        let mut bytes = sample_packet(WireLayout::Aligned);
        bytes.truncate(bytes.len() - 3);
        let report = inspect_packet(
            &bytes,
            WireLayout::Aligned,
            &wire::Limits::default(),
            &CodecLimits::default(),
        );
        assert!(report.header_ok);
        assert_eq!(report.declared_players, Some(1));
        assert!(matches!(
            report.outcome,
            Err(DecodeError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn inspect_non_game_packet() {
        let report = inspect_packet(
            b"DISCOVER",
            WireLayout::Aligned,
            &wire::Limits::default(),
            &CodecLimits::default(),
        );
        assert!(!report.header_ok);
        assert_eq!(report.declared_players, None);
        assert!(report.outcome.is_err());
    }

    #[test]
    fn decode_json_contains_ids() {
        let bytes = sample_packet(WireLayout::Packed);
        let output = decode_packet_json(
            &bytes,
            WireLayout::Packed,
            &wire::Limits::default(),
            &CodecLimits::default(),
        )
        .unwrap();
        assert_eq!(output.layout, "packed");
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"id\":\"me\""));
    }

    #[test]
    fn decode_json_error_has_context() {
        let err = decode_packet_json(
            b"GAMEDATA\x00",
            WireLayout::Aligned,
            &wire::Limits::default(),
            &CodecLimits::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("truncated"));
    }

    #[test]
    fn pretty_output_respects_cap() {
        let bytes = sample_packet(WireLayout::Aligned);
        let output = decode_packet_json(
            &bytes,
            WireLayout::Aligned,
            &wire::Limits::default(),
            &CodecLimits::default(),
        )
        .unwrap();
        let full = format_decode_pretty(&output, None);
        assert!(full.contains("UUID: me"));
        let capped = format_decode_pretty(&output, Some(12));
        assert!(capped.ends_with("GameState:\n "));
    }

    #[test]
    fn encode_state_json_matches_codec() {
        let json = serde_json::to_string(&sample_state()).unwrap();
        let bytes =
            encode_state_json(&json, WireLayout::Aligned, &CodecLimits::default()).unwrap();
        assert_eq!(bytes, sample_packet(WireLayout::Aligned));
    }

    #[test]
    fn encode_state_json_rejects_bad_json() {
        assert!(
            encode_state_json("{\"players\": 3}", WireLayout::Aligned, &CodecLimits::default())
                .is_err()
        );
    }
}
