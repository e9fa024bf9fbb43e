//! Physical constants for orbit integration.
//!
//! GM values are standard gravitational parameters (m³/s²). The Sun's value
//! is the Pitjeva/DE-series heliocentric constant; planetary values are
//! representative IAU/JPL figures, adequate for a perturbation source whose
//! own position is already only accurate to ≈ 10³–10⁴ km.

/// Astronomical Unit, meters (IAU 2012 Resolution B2).
pub const AU_M: f64 = 149_597_870_700.0;

/// Speed of light, m/s.
pub const C_LIGHT: f64 = 299_792_458.0;

/// Seconds per Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sun's standard gravitational parameter, m³/s².
pub const GM_SUN: f64 = 1.327_124_400_18e20;

/// The eight planets' names, in the order §4.7 enumerates them, paired with
/// their standard gravitational parameters (m³/s²).
pub const PLANET_GM: [(&str, f64); 8] = [
    ("Mercury", 2.2032e13),
    ("Venus", 3.2486e14),
    ("Earth", 3.9860e14),
    ("Mars", 4.2828e13),
    ("Jupiter", 1.2669e17),
    ("Saturn", 3.7931e16),
    ("Uranus", 5.7940e15),
    ("Neptune", 6.8351e15),
];
