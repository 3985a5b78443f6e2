//! Physical constants and run parameters
//!
//! `Parameters` holds runtime settings for a scenario run:
//! - integration step size and end time,
//! - progress reporting cadence,
//! - what to do when two bodies share a position

use serde::Deserialize;

/// Newtonian gravitational constant, N·m²/kg²
pub const G: f64 = 6.67430e-11;

/// Behaviour when two bodies are found at exactly the same position while
/// accumulating forces.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeparationPolicy {
    /// Abort the step with `SimError::DegenerateSeparation`, leaving state untouched
    #[default]
    Error,
    /// Drop the pair's contribution for this step and log a warning
    Skip,
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size, s
    pub t_end: f64, // total simulated time, s
    pub report_every: u64, // steps between reports, 0 = final only
    pub on_degenerate: SeparationPolicy,
}

impl Parameters {
    /// Number of steps needed to cover `t_end` with steps of `dt`.
    pub fn step_count(&self) -> u64 {
        (self.t_end / self.dt).ceil() as u64
    }
}
