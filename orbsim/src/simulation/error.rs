//! Errors raised by the physics core.

/// Failures surfaced synchronously by [`crate::Universe`] and [`crate::Vector3`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("cannot normalize a zero-length vector")]
    ZeroMagnitude,

    #[error("bodies {first} and {second} occupy the same position")]
    DegenerateSeparation { first: usize, second: usize },

    #[error("body `{name}` has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body `{name}` has invalid radius {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("body `{name}` has a non-finite position or velocity")]
    NonFiniteState { name: String },

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimestep(f64),
}
