//! Core state type for the N-body simulation.
//!
//! A `Body` is a named point mass. Bodies are owned by a
//! [`Universe`](crate::Universe) once added and are only mutated through
//! [`Body::advance`] during a step.

use std::fmt;

use crate::simulation::error::SimError;
use crate::simulation::vector::Vector3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub position: Vector3, // m
    pub velocity: Vector3, // m/s
    pub mass: f64,         // kg
    pub radius: f64,       // m, informational only
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        position: Vector3,
        velocity: Vector3,
        mass: f64,
        radius: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
            mass,
            radius,
        }
    }

    /// Check the invariants a body must hold before it can be simulated:
    /// finite positive mass, finite non-negative radius, finite kinematics.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(SimError::NonPositiveMass {
                name: self.name.clone(),
                mass: self.mass,
            });
        }
        if !(self.radius >= 0.0 && self.radius.is_finite()) {
            return Err(SimError::InvalidRadius {
                name: self.name.clone(),
                radius: self.radius,
            });
        }
        if !self.position.is_finite() || !self.velocity.is_finite() {
            return Err(SimError::NonFiniteState {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Semi-implicit Euler update from the net `force` acting on this body:
    /// velocity first, then position with the updated velocity.
    pub fn advance(&mut self, force: Vector3, dt: f64) {
        let acceleration = force / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Mass: {} kg", self.mass)?;
        writeln!(f, "Radius: {} meters", self.radius)?;
        writeln!(f, "Position: {}", self.position)?;
        write!(f, "Velocity: {}", self.velocity)
    }
}
