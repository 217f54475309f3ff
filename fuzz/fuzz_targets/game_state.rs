#![no_main]

use codec::{decode_game_state, encode_game_state, CodecLimits, SnapshotSlot};
use libfuzzer_sys::fuzz_target;
use wire::{WireLayout, HEADER_SIZE};

fuzz_target!(|data: &[u8]| {
    let wire_limits = wire::Limits::default();
    let limits = CodecLimits::default();

    // Raw bytes as a body and as a full packet, under both layouts.
    for layout in [WireLayout::Aligned, WireLayout::Packed] {
        let _ = codec::decode_game_state_with_layout(data, 0, layout, &limits);
    }
    let mut packet = Vec::with_capacity(HEADER_SIZE + data.len());
    packet.extend_from_slice(&wire::MAGIC);
    packet.extend_from_slice(data);

    // Any finite decoded state must survive an encode and decode unchanged.
    if let Ok(state) = decode_game_state(&packet, &wire_limits, &limits) {
        if state.players.iter().all(|snake| {
            snake.angle.is_finite()
                && snake.position.x.is_finite()
                && snake.position.y.is_finite()
                && snake.length.is_finite()
                && snake.segments.iter().all(|s| s.x.is_finite() && s.y.is_finite())
        }) && state
            .foods
            .iter()
            .all(|f| f.position.x.is_finite() && f.position.y.is_finite())
        {
            let encoded = encode_game_state(&state, WireLayout::Aligned, &limits)
                .expect("decoded state must be encodable");
            let again = decode_game_state(&encoded, &wire_limits, &limits)
                .expect("re-encoded state must decode");
            assert_eq!(again, state);
        }
    }

    let mut slot = SnapshotSlot::default();
    let _ = slot.ingest(&packet);
    assert_eq!(slot.accepted() + slot.dropped(), 1);
});
