//! Error of an approximation against the reference value of π

use serde::Serialize;

/// Reference value, correct to double precision
pub const REFERENCE_PI: f64 = std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorMetrics {
    pub approximation: f64,
    #[serde(rename = "actual_pi")]
    pub reference: f64,
    #[serde(rename = "absolute_error")]
    pub absolute: f64,
    #[serde(rename = "relative_error")]
    pub relative: f64,
}

impl ErrorMetrics {
    /// Compare `approximation` with [`REFERENCE_PI`]
    pub fn against_pi(approximation: f64) -> Self {
        Self::against(approximation, REFERENCE_PI)
    }

    pub fn against(approximation: f64, reference: f64) -> Self {
        let absolute = (reference - approximation).abs();
        ErrorMetrics {
            approximation,
            reference,
            absolute,
            relative: absolute / reference,
        }
    }
}
