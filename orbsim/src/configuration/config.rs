//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, duration, reporting and degenerate-pair policy
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 60.0                # step size, seconds
//!   t_end: 86400.0          # total simulated time, seconds
//!   report_every: 60        # steps between progress reports (0 = final only)
//!   on_degenerate: error    # or "skip"
//!
//! bodies:
//!   - name: Earth
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!     mass: 5.972e24
//!     radius: 6.371e6
//!   - name: Moon
//!     position: [3.844e8, 0.0, 0.0]
//!     velocity: [0.0, 1022.0, 0.0]
//!     mass: 7.342e22
//!     radius: 1.7374e6
//! ```
//!
//! Only the shape and run parameters are checked here; body invariants
//! (positive mass etc.) are enforced when the bodies enter a `Universe`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::simulation::params::SeparationPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // time step size
    pub t_end: f64, // time end
    #[serde(default)]
    pub report_every: u64, // 0 = report only the final state
    #[serde(default)]
    pub on_degenerate: SeparationPolicy, // coincident bodies: error or skip
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub position: [f64; 3], // m
    #[serde(default)]
    pub velocity: [f64; 3], // m/s, at rest if omitted
    pub mass: f64,          // kg
    #[serde(default)]
    pub radius: f64,        // m
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        if !(p.dt > 0.0 && p.dt.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "dt",
                reason: format!("must be positive and finite, got {}", p.dt),
            });
        }
        if !(p.t_end >= 0.0 && p.t_end.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "t_end",
                reason: format!("must be non-negative and finite, got {}", p.t_end),
            });
        }
        Ok(())
    }
}
