//! Human-readable rendering of a game state.
//!
//! The output is deterministic (collection order, floats to two decimals)
//! so it can back golden-output tests.

use std::fmt::{self, Write};

use crate::types::GameState;

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GameState:")?;
        writeln!(f, "  Players: {}", self.players.len())?;
        for (i, snake) in self.players.iter().enumerate() {
            writeln!(f, "  Player {i}:")?;
            writeln!(f, "    UUID: {}", snake.id)?;
            writeln!(
                f,
                "    Pos: ({:.2}, {:.2})",
                snake.position.x, snake.position.y
            )?;
            writeln!(f, "    Angle: {:.2} rad", snake.angle)?;
            writeln!(f, "    Boost: {}", u8::from(snake.boosting))?;
            writeln!(f, "    Length: {:.2}", snake.length)?;
            writeln!(f, "    Segments: {}", snake.segments.len())?;
            for (j, seg) in snake.segments.iter().enumerate() {
                writeln!(f, "      Segment {j}: ({:.2}, {:.2})", seg.x, seg.y)?;
            }
        }
        writeln!(f, "  Food: {}", self.foods.len())?;
        for (i, food) in self.foods.iter().enumerate() {
            writeln!(
                f,
                "    Food {i}: Pos({:.2}, {:.2}) Size {}",
                food.position.x, food.position.y, food.size
            )?;
        }
        Ok(())
    }
}

/// Renders every field of every player and food item.
#[must_use]
pub fn format_debug(state: &GameState) -> String {
    state.to_string()
}

/// Like [`format_debug`], but stops once `max_bytes` have been produced.
///
/// Output that hits the cap is cut at the last whole character that fits,
/// possibly mid-record. Hitting the cap is not an error.
#[must_use]
pub fn format_debug_capped(state: &GameState, max_bytes: usize) -> String {
    let mut out = CappedWriter {
        buf: String::new(),
        cap: max_bytes,
    };
    // A full buffer surfaces as fmt::Error; the partial text is the result.
    let _ = write!(out, "{state}");
    out.buf
}

struct CappedWriter {
    buf: String,
    cap: usize,
}

impl Write for CappedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.cap.saturating_sub(self.buf.len());
        if s.len() <= room {
            self.buf.push_str(s);
            return Ok(());
        }
        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        Err(fmt::Error)
    }
}
