//! `qcat-sim`: single-qubit state simulation.
//!
//! Runs the fixed two-gate program
//!
//! ```text
//!   |0⟩ ── RY(θ) ── P(φ) ──  →  QubitState
//! ```
//!
//! and returns the resulting pair of complex amplitudes. Both gates are
//! unitary, so the output is normalized to within floating-point precision.
//!
//! # Quick start
//!
//! ```rust
//! use std::f64::consts::FRAC_PI_2;
//! use qcat_sim::{RotationParameters, simulate};
//!
//! let params = RotationParameters::new(FRAC_PI_2, 0.0);
//! let state = simulate(&params).unwrap();
//! assert!((state.norm_sqr() - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod gate;
pub mod parameters;
pub mod simulator;
pub mod state;
pub mod unitary;

pub use error::{SimError, SimResult};
pub use gate::Gate;
pub use parameters::RotationParameters;
pub use simulator::{GateSequence, simulate};
pub use state::QubitState;
pub use unitary::Unitary2x2;
