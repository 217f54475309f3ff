//! Decoded game-state types.

use std::fmt;

/// A 2D point in world coordinates.
///
/// Non-finite components are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An opaque snake identifier.
///
/// Arrives on the wire as a length-prefixed byte string (a UUID-like token).
/// It is the only key that joins a snake across snapshots, and the client
/// finds its own snake by it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SnakeId(Vec<u8>);

impl SnakeId {
    /// Creates an id from raw bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw id bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the id length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the id has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the id and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for SnakeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for SnakeId {
    fn from(id: &str) -> Self {
        Self(id.as_bytes().to_vec())
    }
}

impl From<String> for SnakeId {
    fn from(id: String) -> Self {
        Self(id.into_bytes())
    }
}

impl From<&[u8]> for SnakeId {
    fn from(id: &[u8]) -> Self {
        Self(id.to_vec())
    }
}

impl From<Vec<u8>> for SnakeId {
    fn from(id: Vec<u8>) -> Self {
        Self(id)
    }
}

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SnakeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SnakeId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

/// One player's snake.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snake {
    pub id: SnakeId,
    /// Head position in world coordinates.
    pub position: Vector2,
    /// Heading in radians, quantized to 65536 steps on the wire.
    pub angle: f32,
    pub boosting: bool,
    pub length: f32,
    /// Body trail, head to tail, in the order received.
    pub segments: Vec<Vector2>,
}

/// A food pellet. Pellets are anonymous.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Food {
    pub position: Vector2,
    pub size: u8,
}

/// A complete decoded snapshot.
///
/// Each decode produces a fresh value that owns everything it references;
/// nothing borrows from the receive buffer. A newer snapshot replaces an
/// older one wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub players: Vec<Snake>,
    pub foods: Vec<Food>,
}

impl GameState {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            foods: Vec::new(),
        }
    }

    /// Returns `true` if there are no players and no food.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.foods.is_empty()
    }

    /// Returns the index of the first snake whose id equals `id`.
    ///
    /// Linear scan; player counts are small. With duplicate ids the first
    /// match wins.
    #[must_use]
    pub fn lookup_by_id(&self, id: impl AsRef<[u8]>) -> Option<usize> {
        let id = id.as_ref();
        self.players
            .iter()
            .position(|snake| snake.id.as_bytes() == id)
    }

    /// Returns the first snake whose id equals `id`.
    #[must_use]
    pub fn snake_by_id(&self, id: impl AsRef<[u8]>) -> Option<&Snake> {
        self.lookup_by_id(id).map(|idx| &self.players[idx])
    }

    /// Total segment count across all snakes.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.players.iter().map(|snake| snake.segments.len()).sum()
    }
}

/// Returns the index of the snake with the given id in `state`.
///
/// An absent id is a normal query result, not an error.
#[must_use]
pub fn lookup_by_id(state: &GameState, id: impl AsRef<[u8]>) -> Option<usize> {
    state.lookup_by_id(id)
}
