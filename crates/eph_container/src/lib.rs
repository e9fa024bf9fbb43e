//! Encoder and decoder for the `.eph` binary ephemeris container format.
//!
//! The format is a 512-byte header, a body table, an interval index, and a
//! packed Chebyshev coefficient matrix (body-major, interval-minor, then
//! X/Y/Z), all little-endian regardless of host byte order. See the
//! authoritative layout table and the module docs in [`header`], [`body`],
//! and [`codec`].
//!
//! This crate never uses `unsafe`: the workspace forbids it, so coefficient
//! blocks are read lazily via `seek + read` rather than memory-mapped.

pub mod body;
pub mod codec;
pub mod error;
pub mod header;

pub use body::BodyRecord;
pub use codec::{BodyInput, CoeffBlock, ContainerReader, encode, encode_to_path};
pub use error::ContainerError;
pub use header::Header;
