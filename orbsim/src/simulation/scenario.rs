//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - the system (`Universe` with validated bodies at t = 0)
//!
//! and drives the system for the configured duration.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;
use crate::simulation::universe::Universe;

/// A ready-to-run simulation: parameters plus the system they drive.
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub universe: Universe,
}

impl Scenario {
    /// Fails on the first body that does not satisfy the body invariants.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            t_end: p_cfg.t_end,
            report_every: p_cfg.report_every,
            on_degenerate: p_cfg.on_degenerate,
        };

        let mut universe = Universe::with_policy(parameters.on_degenerate);
        for bc in cfg.bodies {
            let BodyConfig { name, position, velocity, mass, radius } = bc;
            universe.add_body(Body::new(name, position.into(), velocity.into(), mass, radius))?;
        }

        Ok(Self { parameters, universe })
    }

    /// Step the universe until `t_end` is covered.
    ///
    /// `on_report` is called with the completed step count every
    /// `report_every` steps and always once after the final step.
    pub fn run<F>(&mut self, mut on_report: F) -> Result<(), SimError>
    where
        F: FnMut(u64, &Universe),
    {
        let total = self.parameters.step_count();
        let every = self.parameters.report_every;
        log::info!(
            "running {} bodies for {} steps of {} s",
            self.universe.len(),
            total,
            self.parameters.dt
        );

        for k in 1..=total {
            self.universe.step(self.parameters.dt)?;
            if every != 0 && k % every == 0 && k != total {
                on_report(k, &self.universe);
            }
        }
        on_report(total, &self.universe);
        Ok(())
    }
}
