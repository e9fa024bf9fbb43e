//! `.eph` container header (§6.1): 512 bytes, little-endian.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

use crate::error::ContainerError;

/// Total on-disk size of the header, including reserved padding.
pub const HEADER_BYTES: usize = 512;

/// Magic bytes identifying an `.eph` container.
pub const MAGIC: [u8; 4] = *b"EPH\0";

/// Current container format version.
pub const CURRENT_VERSION: u32 = 1;

/// Size in bytes of one body table entry.
pub const BODY_RECORD_BYTES: usize = 36;

/// Size in bytes of one interval index entry.
pub const INTERVAL_RECORD_BYTES: usize = 16;

/// Parsed `.eph` header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    pub version: u32,
    pub num_bodies: u32,
    pub num_intervals: u32,
    pub interval_days: f64,
    pub start_jd: f64,
    pub end_jd: f64,
    pub coeff_degree: u32,
}

impl Header {
    /// Number of `f64` terms in one body's coefficient block for one interval.
    pub fn coeffs_per_block(&self) -> usize {
        3 * (self.coeff_degree as usize + 1)
    }

    /// Size in bytes of one body's coefficient block for one interval.
    pub fn block_bytes(&self) -> usize {
        self.coeffs_per_block() * 8
    }

    /// Byte offset where the body table begins.
    pub fn body_table_offset(&self) -> u64 {
        HEADER_BYTES as u64
    }

    /// Byte offset where the interval index begins.
    pub fn interval_index_offset(&self) -> u64 {
        self.body_table_offset() + self.num_bodies as u64 * BODY_RECORD_BYTES as u64
    }

    /// Byte offset where the coefficient matrix begins.
    pub fn coeff_matrix_offset(&self) -> u64 {
        self.interval_index_offset() + self.num_intervals as u64 * INTERVAL_RECORD_BYTES as u64
    }

    /// Total expected file size per INV-4.
    pub fn expected_file_size(&self) -> u64 {
        self.coeff_matrix_offset()
            + self.num_bodies as u64 * self.num_intervals as u64 * self.block_bytes() as u64
    }
}

pub fn write_header<W: Write>(w: &mut W, header: &Header) -> Result<(), ContainerError> {
    w.write_all(&MAGIC)?;
    w.write_u32::<LittleEndian>(header.version)?;
    w.write_u32::<LittleEndian>(header.num_bodies)?;
    w.write_u32::<LittleEndian>(header.num_intervals)?;
    w.write_f64::<LittleEndian>(header.interval_days)?;
    w.write_f64::<LittleEndian>(header.start_jd)?;
    w.write_f64::<LittleEndian>(header.end_jd)?;
    w.write_u32::<LittleEndian>(header.coeff_degree)?;
    let written = 4 + 4 + 4 + 4 + 8 + 8 + 8 + 4;
    w.write_all(&vec![0u8; HEADER_BYTES - written])?;
    Ok(())
}

pub fn read_header<R: Read>(r: &mut R) -> Result<Header, ContainerError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ContainerError::InvalidMagic(magic));
    }

    let version = r.read_u32::<LittleEndian>()?;
    if version != CURRENT_VERSION {
        return Err(ContainerError::UnsupportedVersion(version));
    }

    let num_bodies = r.read_u32::<LittleEndian>()?;
    let num_intervals = r.read_u32::<LittleEndian>()?;
    let interval_days = r.read_f64::<LittleEndian>()?;
    let start_jd = r.read_f64::<LittleEndian>()?;
    let end_jd = r.read_f64::<LittleEndian>()?;
    let coeff_degree = r.read_u32::<LittleEndian>()?;

    // Skip reserved bytes; their content is ignored on read (§4.3).
    let read_so_far = 4 + 4 + 4 + 4 + 8 + 8 + 8 + 4;
    let mut reserved = vec![0u8; HEADER_BYTES - read_so_far];
    r.read_exact(&mut reserved)?;

    if num_intervals == 0 {
        return Err(ContainerError::EmptyIntervals);
    }

    Ok(Header {
        version,
        num_bodies,
        num_intervals,
        interval_days,
        start_jd,
        end_jd,
        coeff_degree,
    })
}
