//! Direct-summation gravitational N-body integrator.
//!
//! Bodies are added to a [`Universe`], which is advanced with
//! [`Universe::step`]: one all-pairs Newtonian force evaluation followed by a
//! semi-implicit Euler update of every body.

pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::error::SimError;
pub use simulation::vector::Vector3;
pub use simulation::states::Body;
pub use simulation::params::{Parameters, SeparationPolicy, G};
pub use simulation::forces::{pair_force, ForceLaw, ForceSet, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::universe::Universe;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ConfigError, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, make_universe};
