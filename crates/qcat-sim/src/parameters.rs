//! Rotation parameters for the qubit program.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;

use crate::error::{SimError, SimResult};

/// The two angles (radians) driving the program: `RY(theta)` then `P(phi)`.
///
/// Angles are taken as-is; values outside `[0, 2π)` are valid and are not
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationParameters {
    /// Rotation-about-Y angle.
    pub theta: f64,
    /// Phase-shift angle applied to the |1⟩ amplitude.
    pub phi: f64,
}

impl RotationParameters {
    /// Create a new parameter pair.
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Reject NaN and infinite angles.
    pub fn validate(&self) -> SimResult<()> {
        for (name, value) in [("theta", self.theta), ("phi", self.phi)] {
            if !value.is_finite() {
                return Err(SimError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for RotationParameters {
    /// θ = π/2, φ = π/4: an equal superposition with a quarter-turn phase.
    fn default() -> Self {
        Self::new(FRAC_PI_2, FRAC_PI_4)
    }
}

impl fmt::Display for RotationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "θ={:.4}, φ={:.4}", self.theta, self.phi)
    }
}
