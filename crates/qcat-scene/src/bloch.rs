//! Bloch-sphere mapping for single-qubit states.
//!
//! A state (amplitude₀, amplitude₁) is placed on the unit sphere with
//!
//! ```text
//!   θ = arccos(Re amplitude₀)      polar angle
//!   φ = arg(amplitude₁)            azimuthal angle
//!   (x, y, z) = (sin θ cos φ, sin θ sin φ, cos θ)
//! ```
//!
//! The polar angle is taken from the *real part* of amplitude₀, not its
//! magnitude. For states produced by `RY` followed by a phase shift the two
//! agree because amplitude₀ stays real. For arbitrary states they differ;
//! [`PolarSource`] selects which one is used and [`PolarSource::RealPart`]
//! remains the default.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use qcat_sim::QubitState;

use crate::error::{SceneError, SceneResult};

/// Imaginary parts of amplitude₀ above this are reported when the polar
/// angle ignores them.
const IMAG_TOLERANCE: f64 = 1e-12;

/// Which quantity of amplitude₀ feeds the inverse cosine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolarSource {
    /// `Re(amplitude₀)`.
    #[default]
    RealPart,
    /// `|amplitude₀|`.
    Magnitude,
}

/// What to do when the inverse-cosine argument leaves [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainPolicy {
    /// Clamp into [-1, 1].
    #[default]
    Clamp,
    /// Fail with [`SceneError::NumericDomain`].
    Reject,
}

impl FromStr for PolarSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "real-part" | "real" | "re" => Ok(PolarSource::RealPart),
            "magnitude" | "abs" | "norm" => Ok(PolarSource::Magnitude),
            other => Err(format!(
                "unknown polar source '{other}' (expected real-part or magnitude)"
            )),
        }
    }
}

impl FromStr for DomainPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(DomainPolicy::Clamp),
            "reject" => Ok(DomainPolicy::Reject),
            other => Err(format!(
                "unknown domain policy '{other}' (expected clamp or reject)"
            )),
        }
    }
}

/// Mapper settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Quantity of amplitude₀ used for the polar angle.
    #[serde(default)]
    pub polar_source: PolarSource,
    /// Out-of-domain handling for the inverse cosine.
    #[serde(default)]
    pub domain_policy: DomainPolicy,
}

/// Spherical angles of a Bloch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalAngles {
    /// Polar angle θ ∈ [0, π].
    pub theta: f64,
    /// Azimuthal angle φ ∈ (-π, π].
    pub phi: f64,
}

impl SphericalAngles {
    /// Cartesian point on the unit sphere.
    pub fn to_point(&self) -> SpherePoint {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        SpherePoint::new(sin_t * cos_p, sin_t * sin_p, cos_t)
    }
}

/// A point on (or, for unnormalized input, inside) the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpherePoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate; +Z is |0⟩.
    pub z: f64,
}

impl SpherePoint {
    /// Create a point from Cartesian coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Coordinates as an array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for SpherePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Compute the spherical angles of a state.
pub fn spherical_angles(state: &QubitState, config: &MapperConfig) -> SceneResult<SphericalAngles> {
    if !state.is_finite() {
        return Err(SceneError::NonFiniteAmplitude);
    }

    let a0 = state.amplitude0();
    let raw = match config.polar_source {
        PolarSource::RealPart => {
            if a0.im.abs() > IMAG_TOLERANCE {
                warn!(
                    imag = a0.im,
                    "amplitude₀ is complex; polar angle uses its real part only"
                );
            }
            a0.re
        }
        PolarSource::Magnitude => a0.norm(),
    };

    let cos_theta = if (-1.0..=1.0).contains(&raw) {
        raw
    } else {
        match config.domain_policy {
            DomainPolicy::Clamp => {
                debug!(value = raw, "clamping polar-angle argument");
                raw.clamp(-1.0, 1.0)
            }
            DomainPolicy::Reject => return Err(SceneError::NumericDomain { value: raw }),
        }
    };

    let a1 = state.amplitude1();
    let phi = if a1 == Complex64::new(0.0, 0.0) {
        0.0
    } else {
        a1.arg()
    };

    Ok(SphericalAngles {
        theta: cos_theta.acos(),
        phi,
    })
}

/// Map a state to its point on the unit sphere.
pub fn map_to_sphere(state: &QubitState, config: &MapperConfig) -> SceneResult<SpherePoint> {
    spherical_angles(state, config).map(|angles| angles.to_point())
}
