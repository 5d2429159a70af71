//! Structural distance constraints and their single-pair relaxation.

use crate::float::Float;
use crate::particle::Particle;

/// Fixed-rest-length link between two grid-adjacent particles.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_distance: F,
}

impl<F: Float> DistanceConstraint<F> {
    /// Only the topology builds links, always between distinct neighbours.
    pub(crate) fn new(a: usize, b: usize, rest_distance: F) -> Self {
        debug_assert_ne!(a, b, "constraint endpoints must differ");
        DistanceConstraint { a, b, rest_distance }
    }

    /// Relax this constraint once against `particles`.
    ///
    /// A self-link is zero length and is left alone, like coincident
    /// particles in [`satisfy`].
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        if let Some((p1, p2)) = pair_mut(particles, self.a, self.b) {
            satisfy(p1, p2, self.rest_distance);
        }
    }
}

/// Move both particles halfway toward `rest_distance`, ignoring mass.
///
/// Coincident particles are left untouched.
pub fn satisfy<F: Float>(p1: &mut Particle<F>, p2: &mut Particle<F>, rest_distance: F) {
    let delta = p2.position - p1.position;
    let current = delta.length();
    if current == F::zero() {
        return;
    }
    let correction = delta.scale(F::one() - rest_distance / current);
    let half = correction.scale(F::half());
    p1.position += half;
    p2.position -= half;
}

fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b {
        return None;
    }
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        Some((&mut lo[a], &mut hi[0]))
    } else {
        let (lo, hi) = items.split_at_mut(a);
        Some((&mut hi[0], &mut lo[b]))
    }
}
