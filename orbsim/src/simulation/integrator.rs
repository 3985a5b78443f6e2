//! Fixed-step time integration for the N-body system
//!
//! Semi-implicit (symplectic) Euler: every body's velocity is kicked by the
//! force of the current step, then its position drifts with the new velocity.

use super::states::Body;
use super::vector::Vector3;

/// Advance every body by `dt` using already-accumulated `forces`.
/// `forces[i]` must be the complete net force on `bodies[i]` for this step.
pub fn semi_implicit_euler(bodies: &mut [Body], forces: &[Vector3], dt: f64) {
    debug_assert_eq!(bodies.len(), forces.len());

    for (b, f) in bodies.iter_mut().zip(forces.iter()) {
        b.advance(*f, dt);
    }
}
