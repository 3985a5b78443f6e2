//! Force contributors for the n-body engine
//!
//! Forces are accumulated into a buffer that is index-aligned with the body
//! slice: `out[i]` is the net force on `bodies[i]`. The buffer is never the
//! body collection itself.

use crate::simulation::error::SimError;
use crate::simulation::params::{SeparationPolicy, G};
use crate::simulation::states::Body;
use crate::simulation::vector::Vector3;

/// Collection of force terms (gravity, and anything else registered)
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute net forces for all `bodies`
    /// - `out` must have one slot per body
    /// - `out[i]` is reset, then set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [Vector3]) -> Result<(), SimError> {
        debug_assert_eq!(bodies.len(), out.len(), "force buffer not aligned with bodies");

        for f in out.iter_mut() {
            *f = Vector3::zeros();
        }
        for term in &self.terms {
            term.accumulate(bodies, out)?;
        }
        Ok(())
    }
}

/// A source of force acting on the bodies of a system.
/// Implementations add their contribution into `out[i]` for each body.
pub trait ForceLaw {
    fn accumulate(&self, bodies: &[Body], out: &mut [Vector3]) -> Result<(), SimError>;
}

/// Gravitational pull exerted on `a` by `b`: `G·ma·mb / r²` along `b - a`.
///
/// Fails with [`SimError::ZeroMagnitude`] when the bodies coincide. The force
/// on `b` from `a` is exactly the negation of the result.
pub fn pair_force(a: &Body, b: &Body) -> Result<Vector3, SimError> {
    let direction = b.position - a.position;
    let unit = direction.normalize()?;
    let distance2 = direction.magnitude_squared();
    let magnitude = G * a.mass * b.mass / distance2;
    Ok(unit * magnitude)
}

/// Direct O(n²) Newtonian gravity, no softening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonianGravity {
    pub on_degenerate: SeparationPolicy,
}

impl NewtonianGravity {
    pub fn new(on_degenerate: SeparationPolicy) -> Self {
        Self { on_degenerate }
    }
}

impl ForceLaw for NewtonianGravity {
    fn accumulate(&self, bodies: &[Body], out: &mut [Vector3]) -> Result<(), SimError> {
        let n = bodies.len();

        // Each unordered pair (i, j) with i < j, once
        for i in 0..n {
            for j in (i + 1)..n {
                let force = match pair_force(&bodies[i], &bodies[j]) {
                    Ok(force) => force,
                    Err(SimError::ZeroMagnitude) => match self.on_degenerate {
                        SeparationPolicy::Error => {
                            return Err(SimError::DegenerateSeparation { first: i, second: j });
                        }
                        SeparationPolicy::Skip => {
                            log::warn!(
                                "skipping coincident bodies {} ({}) and {} ({})",
                                i,
                                bodies[i].name,
                                j,
                                bodies[j].name
                            );
                            continue;
                        }
                    },
                    Err(e) => return Err(e),
                };

                // i is pulled toward j, j toward i
                out[i] += force;
                out[j] -= force;
            }
        }
        Ok(())
    }
}
