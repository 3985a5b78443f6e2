//! The simulated system: an ordered set of bodies, the forces acting on them,
//! and the elapsed simulation time.

use std::fmt;

use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::{SeparationPolicy, G};
use crate::simulation::states::Body;
use crate::simulation::vector::Vector3;

pub struct Universe {
    bodies: Vec<Body>,
    forces: ForceSet,
    t: f64, // elapsed time, s
    steps: u64,
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("bodies", &self.bodies)
            .field("forces", &self.forces.len())
            .field("t", &self.t)
            .field("steps", &self.steps)
            .finish()
    }
}

impl Universe {
    /// Empty universe with Newtonian gravity that rejects coincident bodies.
    pub fn new() -> Self {
        Self::with_policy(SeparationPolicy::default())
    }

    pub fn with_policy(on_degenerate: SeparationPolicy) -> Self {
        Self::with_forces(ForceSet::new().with(NewtonianGravity::new(on_degenerate)))
    }

    /// Empty universe driven by an arbitrary force set.
    pub fn with_forces(forces: ForceSet) -> Self {
        Self {
            bodies: Vec::new(),
            forces,
            t: 0.0,
            steps: 0,
        }
    }

    /// Append a body after validating it. Names and positions are not
    /// checked for uniqueness.
    pub fn add_body(&mut self, body: Body) -> Result<(), SimError> {
        body.validate()?;
        log::debug!("adding body `{}` (m = {} kg)", body.name, body.mass);
        self.bodies.push(body);
        Ok(())
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        position: Vector3,
        velocity: Vector3,
        mass: f64,
        radius: f64,
    ) -> Result<(), SimError> {
        self.add_body(Body::new(name, position, velocity, mass, radius))
    }

    /// Advance the whole system by `dt` seconds.
    ///
    /// All pairwise forces are accumulated before any body moves. If force
    /// accumulation fails (e.g. coincident bodies under
    /// [`SeparationPolicy::Error`]) no body is modified and time does not
    /// advance. `dt` must be positive and finite.
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(SimError::InvalidTimestep(dt));
        }

        let mut forces = vec![Vector3::zeros(); self.bodies.len()];
        self.forces.accumulate_forces(&self.bodies, &mut forces)?;

        semi_implicit_euler(&mut self.bodies, &forces, dt);

        self.t += dt;
        self.steps += 1;
        log::trace!("step {} done, t = {} s", self.steps, self.t);
        Ok(())
    }

    /// Read-only view of the current body states, in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Elapsed simulated time in seconds.
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Σ m·v over all bodies.
    pub fn total_momentum(&self) -> Vector3 {
        self.bodies
            .iter()
            .fold(Vector3::zeros(), |acc, b| acc + b.momentum())
    }

    /// Mass-weighted mean position; the origin for an empty universe.
    pub fn center_of_mass(&self) -> Vector3 {
        let m = self.total_mass();
        if m == 0.0 {
            return Vector3::zeros();
        }
        let weighted = self
            .bodies
            .iter()
            .fold(Vector3::zeros(), |acc, b| acc + b.position * b.mass);
        weighted / m
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Gravitational potential energy, `-Σ G·mi·mj / rij` over unordered pairs.
    pub fn potential_energy(&self) -> Result<f64, SimError> {
        let n = self.bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let (bi, bj) = (&self.bodies[i], &self.bodies[j]);
                let r = (bj.position - bi.position).magnitude();
                if r == 0.0 {
                    return Err(SimError::DegenerateSeparation { first: i, second: j });
                }
                u -= G * bi.mass * bj.mass / r;
            }
        }
        Ok(u)
    }

    pub fn total_energy(&self) -> Result<f64, SimError> {
        Ok(self.kinetic_energy() + self.potential_energy()?)
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for body in &self.bodies {
            writeln!(f, "{body}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
