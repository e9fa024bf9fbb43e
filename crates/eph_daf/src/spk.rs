//! SPK (Spacecraft and Planet Kernel) segment types and evaluation.
//!
//! Reference: NAIF SPK Required Reading (public domain, US Government work product).
//! Implementation is original, written from the public specification.

use eph_chebyshev::{evaluate, evaluate_derivative};

use crate::daf::{DafSummary, Endianness};
use crate::error::KernelError;

/// Metadata for a single SPK segment, extracted from a DAF summary.
#[derive(Debug, Clone)]
pub struct SpkSegment {
    pub start_epoch: f64,
    pub end_epoch: f64,
    pub target: i32,
    pub center: i32,
    pub frame: i32,
    pub data_type: i32,
    /// First word address (1-based, 8 bytes per word).
    pub start_addr: i32,
    /// Last word address (1-based, 8 bytes per word).
    pub end_addr: i32,
}

/// Result of evaluating an SPK segment at a single epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpkEvaluation {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// SPK Type 2 segment descriptor (stored at the end of segment data).
#[derive(Debug, Clone, Copy)]
struct Type2Descriptor {
    init: f64,
    intlen: f64,
    rsize: f64,
    n: f64,
}

/// SPK Type 20 segment descriptor. Unlike Type 2 (whose 4-double descriptor
/// sits at the very end of the segment), Type 20 carries 5 doubles: record
/// size, polynomial degree, interval count, window length in seconds, and a
/// directory size. Records here are uniform width, so `dir_size` is decoded
/// but only used to sanity-check `n_intervals`.
#[derive(Debug, Clone, Copy)]
struct Type20Descriptor {
    rsize: f64,
    poly_deg: f64,
    n_intervals: f64,
    #[allow(dead_code)]
    window_seconds: f64,
    #[allow(dead_code)]
    dir_size: f64,
}

// ---------------------------------------------------------------------------
// Segment extraction from DAF summary
// ---------------------------------------------------------------------------

/// Convert a DAF summary (with ND=2, NI=6) into an SPK segment descriptor.
pub fn segment_from_summary(summary: &DafSummary) -> Result<SpkSegment, KernelError> {
    if summary.doubles.len() < 2 || summary.integers.len() < 6 {
        return Err(KernelError::BadSummaryRecord(
            "SPK summary requires ND>=2, NI>=6".into(),
        ));
    }

    Ok(SpkSegment {
        start_epoch: summary.doubles[0],
        end_epoch: summary.doubles[1],
        target: summary.integers[0],
        center: summary.integers[1],
        frame: summary.integers[2],
        data_type: summary.integers[3],
        start_addr: summary.integers[4],
        end_addr: summary.integers[5],
    })
}

// ---------------------------------------------------------------------------
// Byte helpers
// ---------------------------------------------------------------------------

fn read_f64(data: &[u8], offset: usize, endian: Endianness) -> f64 {
    let bytes: [u8; 8] = data[offset..offset + 8].try_into().unwrap();
    match endian {
        Endianness::Little => f64::from_le_bytes(bytes),
        Endianness::Big => f64::from_be_bytes(bytes),
    }
}

// ---------------------------------------------------------------------------
// Type 2 evaluation
// ---------------------------------------------------------------------------

/// Read the Type 2 descriptor from the last 4 doubles of the segment data.
fn read_type2_descriptor(
    data: &[u8],
    segment: &SpkSegment,
    endian: Endianness,
) -> Result<Type2Descriptor, KernelError> {
    // The descriptor occupies the last 4 doubles (32 bytes) of the segment.
    let end_byte = segment.end_addr as usize * 8;
    if end_byte > data.len() || end_byte < 32 {
        return Err(KernelError::BadSegmentData(
            "segment end_addr extends past file".into(),
        ));
    }
    let desc_offset = end_byte - 32; // 4 doubles * 8 bytes

    Ok(Type2Descriptor {
        init: read_f64(data, desc_offset, endian),
        intlen: read_f64(data, desc_offset + 8, endian),
        rsize: read_f64(data, desc_offset + 16, endian),
        n: read_f64(data, desc_offset + 24, endian),
    })
}

/// Evaluate an SPK Type 2 (Chebyshev position-only) segment.
///
/// Returns position (km) and velocity (km/s) in the segment's reference frame.
pub fn evaluate_type2(
    data: &[u8],
    segment: &SpkSegment,
    epoch_tdb_s: f64,
    endian: Endianness,
) -> Result<SpkEvaluation, KernelError> {
    let desc = read_type2_descriptor(data, segment, endian)?;

    let n = desc.n as usize;
    let rsize = desc.rsize as usize;
    let intlen = desc.intlen;

    if rsize < 3 || (rsize - 2) % 3 != 0 {
        return Err(KernelError::BadSegmentData(format!(
            "invalid RSIZE {rsize}: must satisfy (RSIZE-2) mod 3 == 0"
        )));
    }
    let n_coeffs = (rsize - 2) / 3;

    // Find the record index.
    let record_index = ((epoch_tdb_s - desc.init) / intlen).floor() as usize;
    let record_index = record_index.min(n.saturating_sub(1));

    // Byte offset of this record within the file.
    let seg_start_byte = (segment.start_addr as usize - 1) * 8;
    let record_byte = seg_start_byte + record_index * rsize * 8;

    if record_byte + rsize * 8 > data.len() {
        return Err(KernelError::BadSegmentData(
            "record extends past end of file".into(),
        ));
    }

    // Read MID and RADIUS.
    let mid = read_f64(data, record_byte, endian);
    let radius = read_f64(data, record_byte + 8, endian);

    if radius == 0.0 {
        return Err(KernelError::BadSegmentData("RADIUS is zero".into()));
    }

    // Normalised time in [-1, 1].
    let s = (epoch_tdb_s - mid) / radius;

    // Read coefficients for X, Y, Z and evaluate.
    let coeff_base = record_byte + 16; // skip MID + RADIUS

    let mut position_km = [0.0f64; 3];
    let mut velocity_km_s = [0.0f64; 3];

    for axis in 0..3 {
        let axis_offset = coeff_base + axis * n_coeffs * 8;
        let mut coeffs = Vec::with_capacity(n_coeffs);
        for c in 0..n_coeffs {
            coeffs.push(read_f64(data, axis_offset + c * 8, endian));
        }

        position_km[axis] = evaluate(&coeffs, s);
        velocity_km_s[axis] = evaluate_derivative(&coeffs, s) / radius;
    }

    Ok(SpkEvaluation {
        position_km,
        velocity_km_s,
    })
}

// ---------------------------------------------------------------------------
// Type 20 evaluation
// ---------------------------------------------------------------------------

/// Read the Type 20 tail descriptor from the last 5 doubles of the segment.
fn read_type20_descriptor(
    data: &[u8],
    segment: &SpkSegment,
    endian: Endianness,
) -> Result<Type20Descriptor, KernelError> {
    let end_byte = segment.end_addr as usize * 8;
    if end_byte > data.len() || end_byte < 40 {
        return Err(KernelError::BadSegmentData(
            "segment end_addr extends past file".into(),
        ));
    }
    let desc_offset = end_byte - 40; // 5 doubles * 8 bytes

    Ok(Type20Descriptor {
        rsize: read_f64(data, desc_offset, endian),
        poly_deg: read_f64(data, desc_offset + 8, endian),
        n_intervals: read_f64(data, desc_offset + 16, endian),
        window_seconds: read_f64(data, desc_offset + 24, endian),
        dir_size: read_f64(data, desc_offset + 32, endian),
    })
}

/// Evaluate an SPK Type 20 (Chebyshev position/velocity) segment.
///
/// Each record is `[MID, RADIUS, x_coeffs, y_coeffs, z_coeffs]`, the same
/// shape as a Type 2 record, but the record width and count live in the
/// 5-double tail rather than a 4-double descriptor, and the window length
/// is given explicitly in seconds rather than derived from `INTLEN`.
pub fn evaluate_type20(
    data: &[u8],
    segment: &SpkSegment,
    epoch_tdb_s: f64,
    endian: Endianness,
) -> Result<SpkEvaluation, KernelError> {
    let desc = read_type20_descriptor(data, segment, endian)?;

    let n_intervals = desc.n_intervals as usize;
    let poly_deg = desc.poly_deg as usize;
    let rsize = desc.rsize as usize;
    let n_coeffs = poly_deg + 1;

    let expected_rsize = 2 + 3 * n_coeffs;
    if rsize != expected_rsize {
        return Err(KernelError::BadSegmentData(format!(
            "Type 20 RSIZE {rsize} inconsistent with POLY_DEG {poly_deg} (expected {expected_rsize})"
        )));
    }

    let seg_start_byte = (segment.start_addr as usize - 1) * 8;

    // Locate the record whose window covers the epoch. Records are uniform
    // width and cover contiguous, non-overlapping windows in practice, so a
    // linear scan is sufficient (n_intervals is small — tens to low
    // hundreds per segment).
    let mut record_index = 0usize;
    let mut best_dist = f64::INFINITY;
    for i in 0..n_intervals {
        let record_byte = seg_start_byte + i * rsize * 8;
        if record_byte + 16 > data.len() {
            return Err(KernelError::BadSegmentData(
                "Type 20 record extends past end of file".into(),
            ));
        }
        let mid = read_f64(data, record_byte, endian);
        let radius = read_f64(data, record_byte + 8, endian);
        let dist = (epoch_tdb_s - mid).abs();
        if dist <= radius {
            record_index = i;
            break;
        }
        if dist < best_dist {
            best_dist = dist;
            record_index = i;
        }
    }

    let record_byte = seg_start_byte + record_index * rsize * 8;
    let mid = read_f64(data, record_byte, endian);
    let radius = read_f64(data, record_byte + 8, endian);
    if radius == 0.0 {
        return Err(KernelError::BadSegmentData("RADIUS is zero".into()));
    }

    let s = (epoch_tdb_s - mid) / radius;
    let coeff_base = record_byte + 16;

    let mut position_km = [0.0f64; 3];
    let mut velocity_km_s = [0.0f64; 3];
    for axis in 0..3 {
        let axis_offset = coeff_base + axis * n_coeffs * 8;
        let mut coeffs = Vec::with_capacity(n_coeffs);
        for c in 0..n_coeffs {
            coeffs.push(read_f64(data, axis_offset + c * 8, endian));
        }
        position_km[axis] = evaluate(&coeffs, s);
        velocity_km_s[axis] = evaluate_derivative(&coeffs, s) / radius;
    }

    Ok(SpkEvaluation {
        position_km,
        velocity_km_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_from_summary_rejects_short() {
        let summary = DafSummary {
            doubles: vec![0.0],
            integers: vec![1, 2, 3],
        };
        assert!(segment_from_summary(&summary).is_err());
    }

    #[test]
    fn segment_from_summary_roundtrip() {
        let summary = DafSummary {
            doubles: vec![-1e9, 1e9],
            integers: vec![499, 4, 1, 2, 100, 200],
        };
        let seg = segment_from_summary(&summary).unwrap();
        assert_eq!(seg.target, 499);
        assert_eq!(seg.center, 4);
        assert_eq!(seg.data_type, 2);
        assert_eq!(seg.start_addr, 100);
        assert_eq!(seg.end_addr, 200);
    }

    fn write_type2_segment(
        init: f64,
        intlen: f64,
        mid: f64,
        radius: f64,
        coeffs_xyz: &[Vec<f64>; 3],
    ) -> Vec<u8> {
        let n_coeffs = coeffs_xyz[0].len();
        let rsize = 2 + 3 * n_coeffs;
        let mut body = Vec::new();
        body.extend_from_slice(&mid.to_le_bytes());
        body.extend_from_slice(&radius.to_le_bytes());
        for axis in coeffs_xyz {
            for c in axis {
                body.extend_from_slice(&c.to_le_bytes());
            }
        }
        body.extend_from_slice(&init.to_le_bytes());
        body.extend_from_slice(&intlen.to_le_bytes());
        body.extend_from_slice(&(rsize as f64).to_le_bytes());
        body.extend_from_slice(&1.0f64.to_le_bytes());
        body
    }

    #[test]
    fn evaluate_type2_constant_position() {
        let coeffs = [vec![1.5, 0.0], vec![2.5, 0.0], vec![-3.0, 0.0]];
        let data = write_type2_segment(0.0, 86400.0, 43200.0, 43200.0, &coeffs);
        let segment = SpkSegment {
            start_epoch: 0.0,
            end_epoch: 86400.0,
            target: 499,
            center: 0,
            frame: 1,
            data_type: 2,
            start_addr: 1,
            end_addr: (data.len() / 8) as i32,
        };
        let eval = evaluate_type2(&data, &segment, 43200.0, Endianness::Little).unwrap();
        assert!((eval.position_km[0] - 1.5).abs() < 1e-9);
        assert!((eval.position_km[1] - 2.5).abs() < 1e-9);
        assert!((eval.position_km[2] + 3.0).abs() < 1e-9);
    }

    fn write_type20_segment(
        windows: &[(f64, f64)],
        poly_deg: usize,
        coeffs_per_window: &[[Vec<f64>; 3]],
    ) -> Vec<u8> {
        let n_coeffs = poly_deg + 1;
        let rsize = 2 + 3 * n_coeffs;
        let mut body = Vec::new();
        for (i, (mid, radius)) in windows.iter().enumerate() {
            body.extend_from_slice(&mid.to_le_bytes());
            body.extend_from_slice(&radius.to_le_bytes());
            for axis in &coeffs_per_window[i] {
                for c in axis {
                    body.extend_from_slice(&c.to_le_bytes());
                }
            }
        }
        body.extend_from_slice(&(rsize as f64).to_le_bytes());
        body.extend_from_slice(&(poly_deg as f64).to_le_bytes());
        body.extend_from_slice(&(windows.len() as f64).to_le_bytes());
        body.extend_from_slice(&(windows[0].1 * 2.0).to_le_bytes());
        body.extend_from_slice(&0.0f64.to_le_bytes());
        body
    }

    #[test]
    fn evaluate_type20_selects_matching_window() {
        let windows = [(43200.0, 43200.0), (129600.0, 43200.0)];
        let coeffs = [
            [vec![1.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]],
            [vec![9.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]],
        ];
        let data = write_type20_segment(&windows, 1, &coeffs);
        let segment = SpkSegment {
            start_epoch: 0.0,
            end_epoch: 172800.0,
            target: 399,
            center: 0,
            frame: 1,
            data_type: 20,
            start_addr: 1,
            end_addr: (data.len() / 8) as i32,
        };
        let eval = evaluate_type20(&data, &segment, 43200.0, Endianness::Little).unwrap();
        assert!((eval.position_km[0] - 1.0).abs() < 1e-9);

        let eval2 = evaluate_type20(&data, &segment, 129600.0, Endianness::Little).unwrap();
        assert!((eval2.position_km[0] - 9.0).abs() < 1e-9);
    }
}
