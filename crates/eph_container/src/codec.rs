//! `.eph` encoder and decoder (§4.3, §6.1).

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use crate::body::{BodyRecord, read_body_record, write_body_record};
use crate::error::ContainerError;
use crate::header::{Header, read_header, write_header};

/// One body's three Chebyshev coefficient vectors (X, Y, Z) for one interval.
#[derive(Debug, Clone, PartialEq)]
pub struct CoeffBlock {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl CoeffBlock {
    pub fn degree(&self) -> usize {
        self.x.len().saturating_sub(1)
    }
}

/// A body's full set of input data for encoding: its id, display name, and
/// one [`CoeffBlock`] per interval (in the same order as the interval list
/// passed to [`encode`]).
#[derive(Debug, Clone)]
pub struct BodyInput {
    pub id: i32,
    pub name: String,
    pub blocks: Vec<CoeffBlock>,
}

/// Encode a container to `writer`. `intervals` is the list of
/// `(jd_start, jd_end)` pairs in ascending order; `bodies` need not be
/// pre-sorted — they are written in body-id-sorted order (§4.3).
pub fn encode<W: Write>(
    writer: &mut W,
    intervals: &[(f64, f64)],
    degree: u32,
    mut bodies: Vec<BodyInput>,
) -> Result<(), ContainerError> {
    if intervals.is_empty() {
        return Err(ContainerError::EmptyIntervals);
    }

    let mut seen_ids = HashSet::new();
    for body in &bodies {
        if !seen_ids.insert(body.id) {
            return Err(ContainerError::DuplicateBodyId(body.id));
        }
        if body.blocks.len() != intervals.len() {
            return Err(ContainerError::InvalidLayout(format!(
                "body {} has {} blocks, expected {}",
                body.id,
                body.blocks.len(),
                intervals.len()
            )));
        }
        for block in &body.blocks {
            let expected = degree as usize + 1;
            if block.x.len() != expected || block.y.len() != expected || block.z.len() != expected
            {
                return Err(ContainerError::InvalidLayout(format!(
                    "body {} has a block with wrong coefficient count", body.id
                )));
            }
        }
    }

    bodies.sort_by_key(|b| b.id);

    let header = Header {
        version: crate::header::CURRENT_VERSION,
        num_bodies: bodies.len() as u32,
        num_intervals: intervals.len() as u32,
        interval_days: if intervals.len() > 1 {
            intervals[1].0 - intervals[0].0
        } else {
            intervals[0].1 - intervals[0].0
        },
        start_jd: intervals[0].0,
        end_jd: intervals[intervals.len() - 1].1,
        coeff_degree: degree,
    };

    write_header(writer, &header)?;

    let block_bytes = header.block_bytes() as u64;
    let stride = intervals.len() as u64 * block_bytes;
    for (k, body) in bodies.iter().enumerate() {
        let data_offset = header.coeff_matrix_offset() + k as u64 * stride;
        write_body_record(
            writer,
            &BodyRecord {
                id: body.id,
                name: body.name.clone(),
                data_offset,
            },
        )?;
    }

    for (start, end) in intervals {
        writer.write_f64::<LittleEndian>(*start)?;
        writer.write_f64::<LittleEndian>(*end)?;
    }

    for body in &bodies {
        for block in &body.blocks {
            for v in &block.x {
                writer.write_f64::<LittleEndian>(*v)?;
            }
            for v in &block.y {
                writer.write_f64::<LittleEndian>(*v)?;
            }
            for v in &block.z {
                writer.write_f64::<LittleEndian>(*v)?;
            }
        }
    }

    Ok(())
}

/// Encode a container directly to a file path, buffering the writes.
pub fn encode_to_path<P: AsRef<Path>>(
    path: P,
    intervals: &[(f64, f64)],
    degree: u32,
    bodies: Vec<BodyInput>,
) -> Result<(), ContainerError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, intervals, degree, bodies)?;
    writer.flush()?;
    Ok(())
}

/// An open `.eph` container: header, body table, and interval index are
/// read eagerly; coefficient blocks are read lazily via `seek + read`
/// (the workspace forbids `unsafe_code`, so memory-mapping is not used).
#[derive(Debug)]
pub struct ContainerReader {
    file: File,
    header: Header,
    bodies: Vec<BodyRecord>,
    intervals: Vec<(f64, f64)>,
}

impl ContainerReader {
    /// Open and validate a container file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ContainerError> {
        let mut file = File::open(path)?;
        let header = read_header(&mut file)?;

        let mut bodies = Vec::with_capacity(header.num_bodies as usize);
        for _ in 0..header.num_bodies {
            bodies.push(read_body_record(&mut file)?);
        }

        let mut intervals = Vec::with_capacity(header.num_intervals as usize);
        for _ in 0..header.num_intervals {
            let start = file.read_f64::<LittleEndian>()?;
            let end = file.read_f64::<LittleEndian>()?;
            intervals.push((start, end));
        }

        for w in intervals.windows(2) {
            if !(w[0].0 < w[0].1 && w[0].1 <= w[1].0) {
                return Err(ContainerError::InvalidLayout(
                    "interval index is not monotonically increasing (INV-3)".into(),
                ));
            }
        }
        if let Some(last) = intervals.last()
            && last.0 >= last.1
        {
            return Err(ContainerError::InvalidLayout(
                "final interval has jd_start >= jd_end".into(),
            ));
        }

        let expected_size = header.expected_file_size();
        let actual_size = file.metadata()?.len();
        if actual_size != expected_size {
            return Err(ContainerError::InvalidLayout(format!(
                "file size {actual_size} does not match expected {expected_size} (INV-4)"
            )));
        }

        Ok(Self {
            file,
            header,
            bodies,
            intervals,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn bodies(&self) -> &[BodyRecord] {
        &self.bodies
    }

    pub fn intervals(&self) -> &[(f64, f64)] {
        &self.intervals
    }

    fn body_record(&self, body_id: i32) -> Result<&BodyRecord, ContainerError> {
        self.bodies
            .iter()
            .find(|b| b.id == body_id)
            .ok_or(ContainerError::UnknownBody(body_id))
    }

    /// Read one body's coefficient block for a given interval index via a
    /// single seek + read.
    pub fn read_block(
        &mut self,
        body_id: i32,
        interval_idx: usize,
    ) -> Result<CoeffBlock, ContainerError> {
        let record = self.body_record(body_id)?.clone();
        if interval_idx >= self.intervals.len() {
            return Err(ContainerError::OutOfRange {
                interval_idx,
                num_intervals: self.intervals.len(),
            });
        }

        let block_bytes = self.header.block_bytes() as u64;
        let offset = record.data_offset + interval_idx as u64 * block_bytes;
        self.file.seek(SeekFrom::Start(offset))?;

        let n = self.header.coeff_degree as usize + 1;
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        let mut z = Vec::with_capacity(n);
        for _ in 0..n {
            x.push(self.file.read_f64::<LittleEndian>()?);
        }
        for _ in 0..n {
            y.push(self.file.read_f64::<LittleEndian>()?);
        }
        for _ in 0..n {
            z.push(self.file.read_f64::<LittleEndian>()?);
        }

        Ok(CoeffBlock { x, y, z })
    }
}
