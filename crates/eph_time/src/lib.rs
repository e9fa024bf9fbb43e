//! Julian Date and ephemeris-time conversions.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - JD (TDB) ↔ ET (TDB seconds past J2000.0) conversion
//! - An `Epoch` type for type-safe TDB epoch handling
//!
//! Time-scale conversion (UTC/TAI/leap seconds) is out of scope: every JD
//! handled by this crate and its downstream callers is assumed to already be
//! in the TDB time scale, per the ephemeris container's invariants.

pub mod julian;

pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_tdb_seconds,
    tdb_seconds_to_jd,
};

/// Convert a Julian Date (TDB) to ET (TDB seconds past J2000.0).
///
/// Alias of [`jd_to_tdb_seconds`] using the naming SPK readers expect.
#[inline]
pub fn jd_to_et(jd: f64) -> f64 {
    jd_to_tdb_seconds(jd)
}

/// Convert ET (TDB seconds past J2000.0) to a Julian Date (TDB).
#[inline]
pub fn et_to_jd(et: f64) -> f64 {
    tdb_seconds_to_jd(et)
}

/// A TDB epoch represented as seconds past J2000.0.
///
/// This is the primary time type used throughout the engine: it wraps an
/// `f64` providing type safety and convenient conversions to/from Julian
/// Date without callers juggling raw seconds-vs-days units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    tdb_seconds: f64,
}

impl Epoch {
    /// Create an epoch from TDB seconds past J2000.0.
    pub fn from_tdb_seconds(s: f64) -> Self {
        Self { tdb_seconds: s }
    }

    /// Create an epoch from a Julian Date in TDB.
    pub fn from_jd_tdb(jd: f64) -> Self {
        Self {
            tdb_seconds: jd_to_tdb_seconds(jd),
        }
    }

    /// TDB seconds past J2000.0.
    pub fn as_tdb_seconds(self) -> f64 {
        self.tdb_seconds
    }

    /// Julian Date in TDB.
    pub fn as_jd_tdb(self) -> f64 {
        tdb_seconds_to_jd(self.tdb_seconds)
    }

    /// Add a number of days, returning a new epoch.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            tdb_seconds: self.tdb_seconds + days * SECONDS_PER_DAY,
        }
    }
}
