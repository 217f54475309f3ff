//! Normalized angle encoding.
//!
//! A heading travels as a `u16` fraction of a full turn. Decoding scales it
//! back to radians; the quantization is one-way and the decoder never tries
//! to recover more precision than the 65536 steps carry.

use std::f32::consts::TAU;

/// Largest raw angle value; maps to a full turn.
pub const ANGLE_STEPS: u16 = u16::MAX;

/// Converts a raw wire angle to radians: `raw / 65535 * 2π`.
#[must_use]
pub fn decode_angle(raw: u16) -> f32 {
    (f32::from(raw) / f32::from(ANGLE_STEPS)) * TAU
}

/// Quantizes a heading in radians to the raw wire value.
///
/// Angles in `[0, 2π]` scale directly; anything else is wrapped into
/// `[0, 2π)` first. Rounds to the nearest step so that an angle produced by
/// [`decode_angle`] quantizes back to the same raw value. Non-finite input
/// encodes as 0.
#[must_use]
pub fn encode_angle(radians: f32) -> u16 {
    if !radians.is_finite() {
        return 0;
    }
    let turns = if (0.0..=TAU).contains(&radians) {
        radians / TAU
    } else {
        radians.rem_euclid(TAU) / TAU
    };
    let raw = (turns * f32::from(ANGLE_STEPS)).round();
    if raw <= 0.0 {
        0
    } else if raw >= f32::from(ANGLE_STEPS) {
        ANGLE_STEPS
    } else {
        // In range by the checks above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let raw = raw as u16;
        raw
    }
}
