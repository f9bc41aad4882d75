use std::path::PathBuf;
use thiserror::Error;

use crate::policy::EventClass;

/// Misconfiguration detected before sampling starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("inverse trigger ratio must be at least 1, got {0}")]
    InvalidTriggerRatio(u32),

    #[error("quark species code must be non-zero")]
    ZeroQuarkSpecies,

    #[error("quark rapidity window ({min}, {max}) is empty, triggered events can never be accepted")]
    EmptyQuarkWindow { min: f64, max: f64 },

    #[error("hadron trigger on {species} enabled but hadron rapidity window ({min}, {max}) is empty")]
    EmptyHadronWindow { species: i32, min: f64, max: f64 },

    #[error("{which} rapidity window has a non-finite bound")]
    NonFiniteWindow { which: &'static str },

    #[error("unknown generator preset '{0}' (known presets: {known})", known = crate::presets::preset_names().join(", "))]
    UnknownPreset(String),

    #[error("failed to read generator config {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse generator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Structural problem in an event record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("particle {particle} lists daughter {daughter} but the record only has {len} entries")]
    DaughterOutOfRange {
        particle: usize,
        daughter: usize,
        len: usize,
    },
}

/// Failure surfaced by the orchestration loop.
///
/// Configuration problems are reported as [`ConfigError`] when the generator
/// is built. Engine failures and predicate rejections are retried internally
/// and never show up here; `AttemptsExhausted` only occurs when an attempt
/// cap is set.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("no accepted {class} event after {attempts} engine invocations")]
    AttemptsExhausted { class: EventClass, attempts: u64 },
}
