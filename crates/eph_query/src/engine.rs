//! Query engine (§4.5, C5): interval lookup by binary search, time
//! normalization, and Chebyshev evaluation.

use std::path::Path;

use eph_chebyshev::{evaluate, evaluate_derivative};
use eph_container::ContainerReader;

use crate::cache::BlockCache;
use crate::error::QueryError;

/// A position (and, if requested, velocity) in AU / AU-per-day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position_au: [f64; 3],
    pub velocity_au_per_day: Option<[f64; 3]>,
}

/// Binary-search `intervals` for the index whose window brackets `jd`.
///
/// Every interval is treated as closed on both ends for boundary purposes;
/// ties at a shared boundary resolve to the earlier interval (§8.3). This
/// is equivalent to finding the first interval whose `jd_end >= jd`.
pub fn find_interval(intervals: &[(f64, f64)], jd: f64) -> Option<usize> {
    if intervals.is_empty() {
        return None;
    }
    if jd < intervals[0].0 || jd > intervals[intervals.len() - 1].1 {
        return None;
    }
    let idx = intervals.partition_point(|&(_, end)| end < jd);
    Some(idx.min(intervals.len() - 1))
}

/// Normalize `jd` into `[-1, 1]` within `[jd_start, jd_end]` (§4.5 step 3).
pub fn normalize_time(jd: f64, jd_start: f64, jd_end: f64) -> f64 {
    2.0 * (jd - jd_start) / (jd_end - jd_start) - 1.0
}

/// An open `.eph` container plus an optional bounded coefficient cache.
pub struct QueryEngine {
    reader: ContainerReader,
    cache: BlockCache,
}

impl QueryEngine {
    /// Open a container with no coefficient cache.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, QueryError> {
        Self::open_with_cache(path, 0)
    }

    /// Open a container with an LRU cache bounded to `cache_capacity` blocks.
    pub fn open_with_cache<P: AsRef<Path>>(
        path: P,
        cache_capacity: usize,
    ) -> Result<Self, QueryError> {
        let reader = ContainerReader::open(path)?;
        Ok(Self {
            reader,
            cache: BlockCache::new(cache_capacity),
        })
    }

    /// The container's body table, for callers that need to resolve a name
    /// to a body id before calling [`Self::compute`].
    pub fn bodies(&self) -> &[eph_container::BodyRecord] {
        self.reader.bodies()
    }

    fn interval_for(&self, jd: f64, body_id: i32) -> Result<(usize, f64, f64), QueryError> {
        let intervals = self.reader.intervals();
        let idx = find_interval(intervals, jd).ok_or(QueryError::OutOfRange { body_id, jd })?;
        let (start, end) = intervals[idx];
        Ok((idx, start, end))
    }

    /// Locate and evaluate position only (§4.5 `compute`).
    pub fn compute(&mut self, body_id: i32, jd: f64) -> Result<[f64; 3], QueryError> {
        if !self.reader.bodies().iter().any(|b| b.id == body_id) {
            return Err(QueryError::UnknownBody(body_id));
        }
        let (idx, start, end) = self.interval_for(jd, body_id)?;
        let x = normalize_time(jd, start, end);

        let block = match self.cache.get((body_id, idx)) {
            Some(block) => block,
            None => {
                let block = self.reader.read_block(body_id, idx)?;
                self.cache.put((body_id, idx), block.clone());
                block
            }
        };

        Ok([
            evaluate(&block.x, x),
            evaluate(&block.y, x),
            evaluate(&block.z, x),
        ])
    }

    /// Locate and evaluate both position and velocity (§4.5 "Velocity").
    pub fn compute_state(&mut self, body_id: i32, jd: f64) -> Result<StateVector, QueryError> {
        if !self.reader.bodies().iter().any(|b| b.id == body_id) {
            return Err(QueryError::UnknownBody(body_id));
        }
        let (idx, start, end) = self.interval_for(jd, body_id)?;
        let x = normalize_time(jd, start, end);
        let scale = 2.0 / (end - start);

        let block = match self.cache.get((body_id, idx)) {
            Some(block) => block,
            None => {
                let block = self.reader.read_block(body_id, idx)?;
                self.cache.put((body_id, idx), block.clone());
                block
            }
        };

        let position_au = [
            evaluate(&block.x, x),
            evaluate(&block.y, x),
            evaluate(&block.z, x),
        ];
        let velocity_au_per_day = Some([
            evaluate_derivative(&block.x, x) * scale,
            evaluate_derivative(&block.y, x) * scale,
            evaluate_derivative(&block.z, x) * scale,
        ]);

        Ok(StateVector {
            position_au,
            velocity_au_per_day,
        })
    }
}
