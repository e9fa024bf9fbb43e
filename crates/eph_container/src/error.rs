//! Error types for `.eph` container encoding and decoding.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while encoding or decoding a `.eph` container.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ContainerError {
    /// File is too small to hold a valid header or indicated tables.
    TruncatedFile { expected: usize, actual: usize },
    /// The magic bytes at offset 0 are not `"EPH\0"`.
    InvalidMagic([u8; 4]),
    /// The header's `version` field is not supported by this decoder.
    UnsupportedVersion(u32),
    /// Header, body table, or interval index fields are internally inconsistent.
    InvalidLayout(String),
    /// Two bodies in the input share the same id (encode-time only).
    DuplicateBodyId(i32),
    /// `num_intervals == 0` (encode-time only).
    EmptyIntervals,
    /// No body with the requested id exists in this container.
    UnknownBody(i32),
    /// The requested interval index is out of range.
    OutOfRange { interval_idx: usize, num_intervals: usize },
    /// I/O error message (stored as a string to keep `Clone + PartialEq`).
    IoError(String),
}

impl Display for ContainerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TruncatedFile { expected, actual } => {
                write!(f, "file too small: need {expected} bytes, got {actual}")
            }
            Self::InvalidMagic(bytes) => write!(f, "bad container magic: {bytes:?}"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported container version: {v}"),
            Self::InvalidLayout(msg) => write!(f, "invalid container layout: {msg}"),
            Self::DuplicateBodyId(id) => write!(f, "duplicate body id: {id}"),
            Self::EmptyIntervals => write!(f, "container must have at least one interval"),
            Self::UnknownBody(id) => write!(f, "no body with id {id} in container"),
            Self::OutOfRange {
                interval_idx,
                num_intervals,
            } => write!(
                f,
                "interval index {interval_idx} out of range (container has {num_intervals})"
            ),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for ContainerError {}

impl From<std::io::Error> for ContainerError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}
