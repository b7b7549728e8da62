//! Value equality for a 2D integer point, and the equality-driven sequence
//! operations built on it: filtering by a query point and set intersection.

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod point;
pub mod scenario;

pub use collection::{filter_equal, intersect, intersection_count};
pub use config::RunConfig;
pub use error::{Error, Result};
pub use point::Vector2;
pub use scenario::{run_step2, run_step3, Outcome, Scenario};
