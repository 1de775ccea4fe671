//! Single-qubit state vector.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::Gate;

/// The amplitudes (amplitude₀, amplitude₁) of the basis states |0⟩ and |1⟩.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    amplitudes: [Complex64; 2],
}

impl QubitState {
    /// The |0⟩ basis state.
    pub fn zero() -> Self {
        Self {
            amplitudes: [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        }
    }

    /// Build a state from raw amplitudes. No normalization is applied.
    pub fn from_amplitudes(amplitude0: Complex64, amplitude1: Complex64) -> Self {
        Self {
            amplitudes: [amplitude0, amplitude1],
        }
    }

    /// Amplitude of |0⟩.
    pub fn amplitude0(&self) -> Complex64 {
        self.amplitudes[0]
    }

    /// Amplitude of |1⟩.
    pub fn amplitude1(&self) -> Complex64 {
        self.amplitudes[1]
    }

    /// Both amplitudes.
    pub fn amplitudes(&self) -> &[Complex64; 2] {
        &self.amplitudes
    }

    /// |amplitude₀|² + |amplitude₁|².
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Measurement probabilities for |0⟩ and |1⟩.
    pub fn probabilities(&self) -> [f64; 2] {
        [self.amplitudes[0].norm_sqr(), self.amplitudes[1].norm_sqr()]
    }

    /// True if every amplitude component is finite.
    pub fn is_finite(&self) -> bool {
        self.amplitudes.iter().all(|a| a.re.is_finite() && a.im.is_finite())
    }

    /// Apply a gate in place.
    pub fn apply(&mut self, gate: &Gate) {
        self.amplitudes = gate.matrix().apply(self.amplitudes);
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_amp = |c: Complex64| {
            let sign = if c.im.is_sign_negative() { '-' } else { '+' };
            format!("{:.8}{}{:.8}j", c.re, sign, c.im.abs())
        };
        write!(
            f,
            "[{}, {}]",
            fmt_amp(self.amplitudes[0]),
            fmt_amp(self.amplitudes[1])
        )
    }
}
