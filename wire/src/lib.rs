//! Packet framing and layout rules for the slitherwire codec.
//!
//! This crate handles the binary wire format around a game-state body: the
//! `GAMEDATA` header, packet size limits, and the padding arithmetic of the
//! two known record layouts. It does not know about snakes or food, only
//! the shape of the bytes.
//!
//! # Design Principles
//!
//! - **Fixed framing** - A packet is one datagram: an 8-byte ASCII header followed by the body.
//! - **Bounded decoding** - Packet size is validated before any body parsing.
//! - **No domain knowledge** - This crate handles framing, not game logic.

mod error;
mod header;
mod layout;
mod limits;
mod packet;

pub use error::{DecodeError, LimitKind, WireResult};
pub use header::{assert_game_data, header_bytes, HEADER_SIZE, MAGIC};
pub use layout::{WireLayout, ALIGNMENT};
pub use limits::Limits;
pub use packet::{decode_packet, encode_header, WirePacket};
