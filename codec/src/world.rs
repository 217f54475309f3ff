//! Toroidal world geometry.
//!
//! The arena wraps at [`WORLD_SIZE`] on both axes, so consecutive body
//! segments can sit on opposite edges. A renderer needs the trail unwrapped
//! into continuous coordinates; that only depends on decoded data, so it
//! lives here.

use crate::types::{Snake, Vector2};

/// Side length of the square world.
pub const WORLD_SIZE: f32 = 3000.0;

const HALF_WORLD: f32 = WORLD_SIZE / 2.0;

/// Shortest signed difference `target - current` on one wrapped axis.
///
/// Inputs are expected inside the world; one wrap correction is applied.
#[must_use]
pub fn wrap_delta(target: f32, current: f32) -> f32 {
    let diff = target - current;
    if diff > HALF_WORLD {
        diff - WORLD_SIZE
    } else if diff < -HALF_WORLD {
        diff + WORLD_SIZE
    } else {
        diff
    }
}

/// Shortest offset from `from` to `to` on both axes.
#[must_use]
pub fn wrap_offset(to: Vector2, from: Vector2) -> Vector2 {
    Vector2::new(wrap_delta(to.x, from.x), wrap_delta(to.y, from.y))
}

/// Folds a point back into `[0, WORLD_SIZE)` on both axes.
#[must_use]
pub fn wrap_position(p: Vector2) -> Vector2 {
    Vector2::new(p.x.rem_euclid(WORLD_SIZE), p.y.rem_euclid(WORLD_SIZE))
}

impl Snake {
    /// Head followed by every segment, in continuous coordinates.
    ///
    /// Each step adds the wrapped delta between consecutive raw points, so a
    /// body that crosses an edge stays connected instead of jumping across
    /// the map.
    #[must_use]
    pub fn trail(&self) -> Trail<'_> {
        Trail {
            segments: self.segments.iter(),
            prev_raw: self.position,
            current: self.position,
            head_pending: true,
        }
    }
}

/// Iterator returned by [`Snake::trail`].
#[derive(Debug, Clone)]
pub struct Trail<'a> {
    segments: std::slice::Iter<'a, Vector2>,
    prev_raw: Vector2,
    current: Vector2,
    head_pending: bool,
}

impl Iterator for Trail<'_> {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        if self.head_pending {
            self.head_pending = false;
            return Some(self.current);
        }
        let raw = *self.segments.next()?;
        let step = wrap_offset(raw, self.prev_raw);
        self.current = Vector2::new(self.current.x + step.x, self.current.y + step.y);
        self.prev_raw = raw;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.segments.len() + usize::from(self.head_pending);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trail<'_> {}
