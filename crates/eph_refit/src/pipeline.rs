//! Refit pipeline (§4.4, C4): resample a source at Chebyshev nodes per
//! interval, fit coefficients, and hand the result to the container codec.

use eph_chebyshev::{fit_at_nodes, nodes_mapped};
use eph_container::codec::{BodyInput, CoeffBlock};

use crate::error::RefitError;
use crate::intervals::build_intervals;

/// Kilometers per astronomical unit (§ GLOSSARY).
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Parameters driving one refit run (§4.4).
#[derive(Debug, Clone, Copy)]
pub struct RefitConfig {
    pub start_jd: f64,
    pub end_jd: f64,
    pub interval_days: f64,
    pub degree: u32,
    /// A body whose fraction of failed `(body, interval)` samples exceeds
    /// this threshold is omitted from the output entirely.
    pub max_failure_fraction: f64,
}

/// One body to refit: its NAIF id, display name, and a source callback.
pub struct RefitBody<'a> {
    pub id: i32,
    pub name: String,
    pub sample_km: &'a (dyn Fn(i32, f64) -> Result<[f64; 3], String> + Sync),
}

/// Post-run summary of partial failures (§3, §4.4).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefitReport {
    pub bodies_written: Vec<i32>,
    pub bodies_omitted: Vec<i32>,
    pub failed_samples: u64,
}

/// Refit a single body across all intervals, returning its coefficient
/// blocks and the count of node samples that failed and fell back to a
/// zero vector (§4.4 failure policy).
fn refit_body(
    body: &RefitBody<'_>,
    intervals: &[(f64, f64)],
    degree: u32,
) -> (Vec<CoeffBlock>, u64) {
    let n = degree as usize + 1;
    let mut blocks = Vec::with_capacity(intervals.len());
    let mut failed = 0u64;

    for &(jd_start, jd_end) in intervals {
        let node_xs = nodes_mapped(n, jd_start, jd_end);
        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        let mut zs = Vec::with_capacity(n);

        for &jd in &node_xs {
            match (body.sample_km)(body.id, jd) {
                Ok(pos_km) => {
                    xs.push(pos_km[0] / KM_PER_AU);
                    ys.push(pos_km[1] / KM_PER_AU);
                    zs.push(pos_km[2] / KM_PER_AU);
                }
                Err(_) => {
                    failed += 1;
                    xs.push(0.0);
                    ys.push(0.0);
                    zs.push(0.0);
                }
            }
        }

        blocks.push(CoeffBlock {
            x: fit_at_nodes(&xs, degree as usize),
            y: fit_at_nodes(&ys, degree as usize),
            z: fit_at_nodes(&zs, degree as usize),
        });
    }

    (blocks, failed)
}

/// Run the refit pipeline over all `bodies`, fanning the independent
/// per-body fits out across a worker pool sized to the host (§4.4, §5, §9).
/// The caller hands the result to [`eph_container::encode`] /
/// [`eph_container::encode_to_path`].
pub fn run_refit(
    bodies: &[RefitBody<'_>],
    config: &RefitConfig,
) -> Result<(Vec<(f64, f64)>, Vec<BodyInput>, RefitReport), RefitError> {
    let intervals = build_intervals(config.start_jd, config.end_jd, config.interval_days)?;

    let worker_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(bodies.len().max(1));

    let mut per_body: Vec<Option<(Vec<CoeffBlock>, u64)>> = (0..bodies.len()).map(|_| None).collect();

    std::thread::scope(|scope| {
        let chunk_size = bodies.len().div_ceil(worker_count).max(1);
        let mut handles = Vec::new();
        for (chunk_idx, chunk) in bodies.chunks(chunk_size).enumerate() {
            let base = chunk_idx * chunk_size;
            let intervals_ref = &intervals;
            handles.push((
                base,
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|body| refit_body(body, intervals_ref, config.degree))
                        .collect::<Vec<_>>()
                }),
            ));
        }
        for (base, handle) in handles {
            let results = handle.join().expect("refit worker thread panicked");
            for (offset, result) in results.into_iter().enumerate() {
                per_body[base + offset] = Some(result);
            }
        }
    });

    let mut report = RefitReport::default();
    let mut body_inputs = Vec::new();

    for (body, result) in bodies.iter().zip(per_body.into_iter()) {
        let (blocks, failed) = result.expect("every body index is populated by the scope above");
        report.failed_samples += failed;

        let total_samples = (intervals.len() * (config.degree as usize + 1)) as f64;
        let failure_fraction = if total_samples > 0.0 {
            failed as f64 / total_samples
        } else {
            0.0
        };

        if failure_fraction > config.max_failure_fraction {
            report.bodies_omitted.push(body.id);
            continue;
        }

        report.bodies_written.push(body.id);
        body_inputs.push(BodyInput {
            id: body.id,
            name: body.name.clone(),
            blocks,
        });
    }

    Ok((intervals, body_inputs, report))
}
