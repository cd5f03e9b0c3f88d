//! Typed identifiers for forum entities.
//!
//! Ids are assigned by the backend as plain integers. Wrapping them in a marker
//! type keeps a game id from being passed where a post id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

/// A type-safe wrapper around a backend integer id.
pub struct Id<T> {
    value: i64,
    _phantom: PhantomData<T>,
}

// Hand-written so the marker type needs no trait bounds.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Serialize as the bare integer
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::new)
    }
}

impl<T> Id<T> {
    /// Creates an id from its raw value.
    ///
    /// # Example
    /// ```
    /// use respawn::id::GameId;
    ///
    /// let id = GameId::new(7);
    /// assert_eq!(id.value(), 7);
    /// ```
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Parses the id out of a route segment such as the `7` in `/game/7`.
impl<T> FromStr for Id<T> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self::new)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostMarker;

/// Type alias for Game IDs
pub type GameId = Id<GameMarker>;

/// Type alias for Post IDs
pub type PostId = Id<PostMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = GameId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "Id(42)");
    }

    #[test]
    fn test_id_from_route_segment() {
        let id: GameId = "7".parse().unwrap();
        assert_eq!(id, GameId::new(7));

        assert!("seven".parse::<GameId>().is_err());
        assert!("".parse::<GameId>().is_err());
    }

    #[test]
    fn test_type_safety() {
        let game_id = GameId::new(1);
        let post_id = PostId::new(1);

        // Same raw value, different types
        let _same: GameId = game_id;
        // let _wrong: PostId = game_id;

        assert_eq!(game_id.value(), post_id.value());
    }

    #[test]
    fn test_serde() {
        let original = PostId::new(123);

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "123");

        let deserialized: PostId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);

        assert!(serde_json::from_str::<PostId>("\"123\"").is_err());
    }
}
