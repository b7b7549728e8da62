//! Deterministic point sequences: `x = i mod M`, `y = (2 * i) mod M`.

use std::fmt;

use tracing::debug;

use crate::point::Vector2;

pub const DEFAULT_COUNT: u32 = 100;
/// Upper bound on points per sequence accepted from configuration.
pub const MAX_COUNT: u32 = 10_000;
pub const MODULUS_A: i32 = 50;
pub const MODULUS_B: i32 = 75;
pub const DEFAULT_QUERY: Vector2 = Vector2::new(1, 2);

// =============================================================================
// Modulus newtype
// =============================================================================

/// A strictly positive divisor for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus(i32);

impl Modulus {
    pub const fn new(value: i32) -> Option<Self> {
        if value > 0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Generators
// =============================================================================

pub fn generate(count: u32, modulus: Modulus) -> Vec<Vector2> {
    // i64 so that 2 * i cannot overflow for any u32 count
    let m = i64::from(modulus.get());
    let points: Vec<Vector2> = (0..i64::from(count))
        .map(|i| Vector2::new((i % m) as i32, ((2 * i) % m) as i32))
        .collect();

    debug!(count, modulus = modulus.get(), "generated point sequence");
    points
}

pub fn set_a() -> Vec<Vector2> {
    generate(DEFAULT_COUNT, Modulus(MODULUS_A))
}

pub fn set_b() -> Vec<Vector2> {
    generate(DEFAULT_COUNT, Modulus(MODULUS_B))
}
