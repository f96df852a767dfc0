//! Error types for loading and statistics
//!
//! Library seams return these typed errors; the report pipeline and the
//! binary wrap them with `anyhow` context.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning result files into measurements
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unknown algorithm token '{token}' in {path}")]
    UnknownAlgorithm { token: String, path: PathBuf },

    #[error("Invalid sample value '{value}' at {path}:{line}")]
    InvalidValue {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Statistical precondition violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot rank an empty sample ({side} has zero length)")]
    EmptySample { side: &'static str },

    #[error("Failed to compute {what}: {reason}")]
    Computation { what: &'static str, reason: String },
}
