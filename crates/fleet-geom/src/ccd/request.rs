// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Which continuous-collision algorithm to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CcdSolverType {
    /// Step forward by separation over the relative motion bound until
    /// contact or window end.
    /// Cannot tunnel through thin gaps.
    #[default]
    ConservativeAdvancement,
    /// Check overlap at evenly spaced samples. Cheap, but can miss contacts
    /// shorter than one sample interval.
    Naive,
}

/// Configuration for [`crate::ccd::CcdSolver`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ContinuousCollisionRequest {
    /// Algorithm selection.
    pub solver: CcdSolverType,
    /// Separation (metres) at or below which shapes count as touching.
    pub tolerance: f64,
    /// Step cap for conservative advancement. Exhausting it is an error.
    pub max_iterations: usize,
    /// Number of intervals sampled by the naive solver.
    pub naive_steps: usize,
}

impl ContinuousCollisionRequest {
    /// Default contact tolerance in metres.
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;
    /// Default conservative-advancement step cap.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;
    /// Default naive sample count.
    pub const DEFAULT_NAIVE_STEPS: usize = 100;

    /// Request for the given solver with default tolerances.
    pub fn with_solver(solver: CcdSolverType) -> Self {
        Self {
            solver,
            ..Self::default()
        }
    }

    /// Checks that every knob is usable.
    pub fn validate(&self) -> Result<(), CcdRequestError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CcdRequestError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(CcdRequestError::ZeroIterations);
        }
        if self.naive_steps == 0 {
            return Err(CcdRequestError::ZeroSteps);
        }
        Ok(())
    }
}

impl Default for ContinuousCollisionRequest {
    fn default() -> Self {
        Self {
            solver: CcdSolverType::default(),
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            naive_steps: Self::DEFAULT_NAIVE_STEPS,
        }
    }
}

/// Rejected collision request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CcdRequestError {
    /// Tolerance was zero, negative or not finite.
    #[error("contact tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
    /// `max_iterations` was zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,
    /// `naive_steps` was zero.
    #[error("naive_steps must be at least 1")]
    ZeroSteps,
}
