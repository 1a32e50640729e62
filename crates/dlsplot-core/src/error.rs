// File: crates/dlsplot-core/src/error.rs
// Summary: Error types for the fallible edges (payload decoding, colours, series registry).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed block payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("block {block}: sample {sample} has {len} components, expected 2")]
    SampleArity { block: usize, sample: usize, len: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("colour `{0}` must start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have 6 or 8 hex digits")]
    Length(String),
    #[error("colour `{0}` contains a non-hex digit")]
    Digit(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("series type `{0}` is already registered")]
    Duplicate(&'static str),
    #[error("unknown series type `{0}`")]
    Unknown(String),
}
