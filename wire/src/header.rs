//! Packet header constants and the caller-side header check.

/// ASCII literal that starts every game-state packet.
///
/// This value is fixed; the header carries no version, length or flags.
pub const MAGIC: [u8; 8] = *b"GAMEDATA";

/// Header size in bytes. The snapshot body starts at this offset.
pub const HEADER_SIZE: usize = MAGIC.len();

/// Returns `true` if `packet` begins with the [`MAGIC`] literal.
///
/// Receive loops call this before handing a datagram to the decoder; other
/// datagrams on the same socket (discovery replies) are plain text.
#[must_use]
pub fn assert_game_data(packet: &[u8]) -> bool {
    packet.starts_with(&MAGIC)
}

/// Returns the first [`HEADER_SIZE`] bytes of `packet`, zero-filled if short.
///
/// Used to report what was found in place of the magic.
#[must_use]
pub fn header_bytes(packet: &[u8]) -> [u8; HEADER_SIZE] {
    let mut found = [0u8; HEADER_SIZE];
    let len = packet.len().min(HEADER_SIZE);
    found[..len].copy_from_slice(&packet[..len]);
    found
}
