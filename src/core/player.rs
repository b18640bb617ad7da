//! Player identity and per-side data storage.
//!
//! ## Player
//!
//! The identity record the room platform owns. The engine reads `id` to
//! resolve seats and `username` for messages; it never mutates either.
//!
//! ## BySide
//!
//! Per-side data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by [`Side`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::Side;

/// A player as the room platform presents it.
///
/// `id` is unique and stable for the session lifetime; `username` is the
/// display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub username: String,
}

impl Player {
    /// Create a player record.
    #[must_use]
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use checkers_engine::core::{BySide, Side};
///
/// let mut remaining: BySide<u8> = BySide::with_value(12);
/// remaining[Side::Two] -= 1;
///
/// assert_eq!(remaining[Side::One], 12);
/// assert_eq!(remaining[Side::Two], 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BySide<T> {
    data: [T; 2],
}

impl<T> BySide<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::One), factory(Side::Two)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's entry.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's entry.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over `(Side, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [Side::One, Side::Two].into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for BySide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for BySide<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
