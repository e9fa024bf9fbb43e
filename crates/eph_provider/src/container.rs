//! Container-backed provider: wraps a C5 [`eph_query::QueryEngine`] and
//! scales its AU output to meters (§4.6).

use std::path::Path;

use eph_query::QueryEngine;

use crate::error::ProviderError;
use crate::provider::PositionProvider;

/// Meters per astronomical unit (IAU 2012 exact definition).
pub const METERS_PER_AU: f64 = 149_597_870_700.0;

/// A [`PositionProvider`] backed by an open `.eph` container.
pub struct ContainerProvider {
    engine: QueryEngine,
}

impl ContainerProvider {
    /// Open the container at `path` with no coefficient cache.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        Ok(Self {
            engine: QueryEngine::open(path)?,
        })
    }

    /// Open the container with a bounded LRU coefficient cache.
    pub fn open_with_cache<P: AsRef<Path>>(
        path: P,
        cache_capacity: usize,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            engine: QueryEngine::open_with_cache(path, cache_capacity)?,
        })
    }

    fn resolve(&self, body_name: &str) -> Result<i32, ProviderError> {
        self.engine
            .bodies()
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(body_name))
            .map(|b| b.id)
            .ok_or_else(|| ProviderError::UnknownBody(body_name.to_string()))
    }
}

impl PositionProvider for ContainerProvider {
    fn position(&mut self, body_name: &str, jd: f64) -> Result<[f64; 3], ProviderError> {
        let body_id = self.resolve(body_name)?;
        let au = self.engine.compute(body_id, jd).map_err(|e| match e {
            eph_query::QueryError::OutOfRange { jd, .. } => ProviderError::OutOfRange {
                body: body_name.to_string(),
                jd,
            },
            other => ProviderError::from(other),
        })?;
        Ok([
            au[0] * METERS_PER_AU,
            au[1] * METERS_PER_AU,
            au[2] * METERS_PER_AU,
        ])
    }
}
