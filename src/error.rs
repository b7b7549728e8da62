use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {value} (modulus must be positive)")]
    InvalidModulus { field: &'static str, value: i32 },

    #[error("Invalid value for field 'count': {value} (at most {max} points per sequence)")]
    InvalidCount { value: u32, max: u32 },

    #[error("Unknown scenario '{0}' (expected 'step2' or 'step3')")]
    UnknownScenario(String),
}

pub type Result<T> = std::result::Result<T, Error>;
