//! Conversion from dense integrator output to AU-valued samples.

use eph_integrator::OutputSample;

/// Meters per astronomical unit (IAU 2012 exact definition).
pub const AU_M: f64 = 149_597_870_700.0;

/// One dense sample in AU, ready for Chebyshev fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenseSample {
    pub jd: f64,
    pub position_au: [f64; 3],
}

/// Convert the integrator's meter-valued output stream to AU.
pub fn from_output_samples(samples: &[OutputSample]) -> Vec<DenseSample> {
    samples
        .iter()
        .map(|s| DenseSample {
            jd: s.jd,
            position_au: [
                s.position_m[0] / AU_M,
                s.position_m[1] / AU_M,
                s.position_m[2] / AU_M,
            ],
        })
        .collect()
}
