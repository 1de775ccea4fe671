//! The gates the qubit program is built from.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::unitary::Unitary2x2;

/// A single-qubit gate with a concrete angle.
///
/// Only the two gates used by the program exist; this is not a general gate
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Rotation about the Y axis.
    Ry(f64),
    /// Phase shift on the |1⟩ amplitude.
    PhaseShift(f64),
}

impl Gate {
    /// Gate name as used in circuit listings.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Ry(_) => "ry",
            Gate::PhaseShift(_) => "p",
        }
    }

    /// The gate's angle in radians.
    pub fn angle(&self) -> f64 {
        match self {
            Gate::Ry(a) | Gate::PhaseShift(a) => *a,
        }
    }

    /// The unitary this gate applies.
    pub fn matrix(&self) -> Unitary2x2 {
        match self {
            Gate::Ry(theta) => Unitary2x2::ry(*theta),
            Gate::PhaseShift(phi) => Unitary2x2::phase(*phi),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.4})", self.name(), self.angle())
    }
}
