//! The RY + phase-shift program and its simulation.

use tracing::{debug, instrument};

use crate::error::SimResult;
use crate::gate::Gate;
use crate::parameters::RotationParameters;
use crate::state::QubitState;

/// An ordered list of gates applied to |0⟩.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSequence {
    gates: Vec<Gate>,
}

impl GateSequence {
    /// Build the program `RY(θ) · P(φ)` from validated parameters.
    pub fn from_parameters(params: &RotationParameters) -> SimResult<Self> {
        params.validate()?;
        Ok(Self {
            gates: vec![Gate::Ry(params.theta), Gate::PhaseShift(params.phi)],
        })
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Run the sequence starting from |0⟩.
    pub fn run(&self) -> QubitState {
        let mut state = QubitState::zero();
        for (step, gate) in self.gates.iter().enumerate() {
            state.apply(gate);
            debug!(step, %gate, state = %state, "applied gate");
        }
        state
    }
}

/// Simulate the program for the given parameters.
///
/// Returns [`SimError::NonFiniteParameter`](crate::SimError::NonFiniteParameter)
/// if either angle is NaN or infinite.
#[instrument(level = "debug", skip_all, fields(theta = params.theta, phi = params.phi))]
pub fn simulate(params: &RotationParameters) -> SimResult<QubitState> {
    let program = GateSequence::from_parameters(params)?;
    Ok(program.run())
}
