//! Partition the dense sample stream into fixed-width intervals, fit each
//! with C1, and retry at a halved interval width when the residual exceeds
//! threshold (§4.8, up to two halvings).

use eph_chebyshev::{evaluate, fit_least_squares};
use eph_container::CoeffBlock;

use crate::error::BridgeError;
use crate::sample::DenseSample;

/// Bridge configuration for one body.
#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    pub start_jd: f64,
    pub end_jd: f64,
    pub interval_days: f64,
    pub degree: usize,
    /// Max acceptable fit residual, AU (e.g. 1e-11 for planets, 1e-6 for
    /// Chiron-class bodies, per §4.8).
    pub residual_threshold_au: f64,
    /// Maximum number of interval-halving retries (§4.8 specifies two).
    pub max_halvings: u32,
}

/// Outcome of one bridging run.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeReport {
    pub halvings_performed: u32,
    pub final_interval_days: f64,
    pub max_residual_au: f64,
    pub residual_threshold_exceeded: bool,
}

fn partition(start_jd: f64, end_jd: f64, interval_days: f64) -> Vec<(f64, f64)> {
    let mut intervals = Vec::new();
    let mut cursor = start_jd;
    while cursor < end_jd {
        let next = (cursor + interval_days).min(end_jd);
        intervals.push((cursor, next));
        cursor = next;
    }
    intervals
}

fn fit_one_interval(
    samples: &[DenseSample],
    start: f64,
    end: f64,
    degree: usize,
) -> Result<(CoeffBlock, f64), BridgeError> {
    let in_span: Vec<&DenseSample> = samples
        .iter()
        .filter(|s| s.jd >= start && s.jd <= end)
        .collect();
    if in_span.len() < degree + 1 {
        return Err(BridgeError::EmptySpan {
            start_jd: start,
            end_jd: end,
        });
    }

    let xs: Vec<f64> = in_span
        .iter()
        .map(|s| 2.0 * (s.jd - start) / (end - start) - 1.0)
        .collect();

    let mut max_residual = 0.0_f64;
    let mut block = CoeffBlock {
        x: Vec::new(),
        y: Vec::new(),
        z: Vec::new(),
    };

    for axis in 0..3 {
        let ys: Vec<f64> = in_span.iter().map(|s| s.position_au[axis]).collect();
        let coeffs = fit_least_squares(&xs, &ys, degree);
        let residual = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| (evaluate(&coeffs, x) - y).abs())
            .fold(0.0_f64, f64::max);
        max_residual = max_residual.max(residual);
        match axis {
            0 => block.x = coeffs,
            1 => block.y = coeffs,
            _ => block.z = coeffs,
        }
    }

    Ok((block, max_residual))
}

fn fit_all_intervals(
    samples: &[DenseSample],
    intervals: &[(f64, f64)],
    degree: usize,
) -> Result<(Vec<CoeffBlock>, f64), BridgeError> {
    let mut blocks = Vec::with_capacity(intervals.len());
    let mut max_residual = 0.0_f64;
    for &(start, end) in intervals {
        let (block, residual) = fit_one_interval(samples, start, end, degree)?;
        max_residual = max_residual.max(residual);
        blocks.push(block);
    }
    Ok((blocks, max_residual))
}

/// Refit `samples` into fixed-width intervals, halving `interval_days` up
/// to `max_halvings` times if the max fit residual exceeds
/// `residual_threshold_au`.
pub fn bridge_body(
    samples: &[DenseSample],
    config: &BridgeConfig,
) -> Result<(Vec<(f64, f64)>, Vec<CoeffBlock>, BridgeReport), BridgeError> {
    let mut interval_days = config.interval_days;
    let mut halvings = 0;

    loop {
        let intervals = partition(config.start_jd, config.end_jd, interval_days);
        let (blocks, max_residual) = fit_all_intervals(samples, &intervals, config.degree)?;

        let within_threshold = max_residual <= config.residual_threshold_au;
        if within_threshold || halvings >= config.max_halvings {
            let report = BridgeReport {
                halvings_performed: halvings,
                final_interval_days: interval_days,
                max_residual_au: max_residual,
                residual_threshold_exceeded: !within_threshold,
            };
            return Ok((intervals, blocks, report));
        }

        interval_days /= 2.0;
        halvings += 1;
    }
}
