//! Vector2: a 2D integer point with value equality.
//!
//! Equality and hashing are both derived over `(x, y)`, so two points built
//! separately compare equal and land in the same hash bucket.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Point type
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2 {
    x: i32,
    y: i32,
}

impl Vector2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Compares against a possibly absent point. `None` is never equal.
    pub fn eq_opt(&self, other: Option<&Vector2>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Compares against a value of any type. Anything that is not a
    /// `Vector2` is unequal.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        self.eq_opt(other.downcast_ref::<Vector2>())
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Vector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (i32, i32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

// =============================================================================
// Tests
// =============================================================================
