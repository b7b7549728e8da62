//! The two runnable scenarios.
//!
//! Output goes to any `Write` sink so the binary can use stdout and tests can
//! use a `Vec<u8>`.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::{debug, info};

use crate::collection::{filter_equal, intersection_count};
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::fixtures::generate;
use crate::point::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Filter one sequence by equality with a query point.
    Step2,
    /// Count the set intersection of two sequences.
    Step3,
}

/// What a scenario produced, besides the lines it wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matches(Vec<Vector2>),
    IntersectionSize(usize),
}

impl Scenario {
    pub fn run<W: Write>(self, config: &RunConfig, out: &mut W) -> Result<Outcome> {
        info!(scenario = %self, "running scenario");
        match self {
            Scenario::Step2 => run_step2(config, out).map(Outcome::Matches),
            Scenario::Step3 => run_step3(config, out).map(Outcome::IntersectionSize),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Step2 => write!(f, "step2"),
            Scenario::Step3 => write!(f, "step3"),
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step2" => Ok(Scenario::Step2),
            "step3" => Ok(Scenario::Step3),
            _ => Err(Error::UnknownScenario(s.to_string())),
        }
    }
}

// =============================================================================
// Step2: filter by equality
// =============================================================================

/// Writes one line per point of set A equal to the query.
pub fn run_step2<W: Write>(config: &RunConfig, out: &mut W) -> Result<Vec<Vector2>> {
    config.validate()?;
    let elements = generate(config.count, config.modulus_a()?);
    let matches: Vec<Vector2> = filter_equal(&elements, &config.query).copied().collect();

    for found in &matches {
        writeln!(out, "{found}")?;
    }

    debug!(query = %config.query, matches = matches.len(), "step2 finished");
    Ok(matches)
}

// =============================================================================
// Step3: set intersection
// =============================================================================

/// Writes the number of distinct points shared by sets A and B.
pub fn run_step3<W: Write>(config: &RunConfig, out: &mut W) -> Result<usize> {
    config.validate()?;
    let elements_a = generate(config.count, config.modulus_a()?);
    let elements_b = generate(config.count, config.modulus_b()?);

    let size = intersection_count(&elements_a, &elements_b);
    writeln!(out, "{size}")?;

    debug!(size, "step3 finished");
    Ok(size)
}
