//! Sequential relaxation over a constraint list.

use crate::constraint::DistanceConstraint;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;

/// Gauss-Seidel style relaxation: constraints are visited in insertion
/// order and each one sees the corrections made by those before it.
///
/// Stiffness comes from the sweep order and the sweep count; a single
/// sweep per tick lets convergence accrue across ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstraintSolver {
    sweeps: usize,
}

impl ConstraintSolver {
    pub fn new(sweeps: usize) -> Self {
        ConstraintSolver { sweeps: sweeps.max(1) }
    }

    pub fn sweeps(&self) -> usize { self.sweeps }

    pub fn relax<F: Float, O: StepObserver>(
        &self,
        constraints: &[DistanceConstraint<F>],
        particles: &mut [Particle<F>],
        observer: &mut O,
    ) {
        for i in 0..self.sweeps {
            for c in constraints {
                c.solve(particles);
            }
            observer.on_constraint_sweep(i);
        }
    }
}

impl Default for ConstraintSolver {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;
    use crate::vec::Vec3;
    use alloc::vec;
    use alloc::vec::Vec;

    fn chain() -> (Vec<Particle<f64>>, Vec<DistanceConstraint<f64>>) {
        let particles = vec![
            Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0).unwrap(),
            Particle::new(Vec3::new(3.0, 0.0, 0.0), 1.0).unwrap(),
            Particle::new(Vec3::new(6.0, 0.0, 0.0), 1.0).unwrap(),
        ];
        let constraints = vec![
            DistanceConstraint::new(0, 1, 1.0),
            DistanceConstraint::new(1, 2, 1.0),
        ];
        (particles, constraints)
    }

    fn total_error(p: &[Particle<f64>], c: &[DistanceConstraint<f64>]) -> f64 {
        c.iter()
            .map(|c| (p[c.a].position.distance(p[c.b].position) - c.rest_distance).abs())
            .sum()
    }

    #[test]
    fn single_sweep_is_order_dependent() {
        let (mut p, c) = chain();
        ConstraintSolver::default().relax(&c, &mut p, &mut NoOpStepObserver);
        // First link is exact, the second then disturbs it.
        assert!((p[0].position.x - 1.0).abs() < 1e-12);
        assert!((p[1].position.x - 3.5).abs() < 1e-12);
        assert!((p[2].position.x - 4.5).abs() < 1e-12);
    }

    #[test]
    fn more_sweeps_reduce_error() {
        let (mut one, c) = chain();
        let (mut many, _) = chain();
        ConstraintSolver::new(1).relax(&c, &mut one, &mut NoOpStepObserver);
        ConstraintSolver::new(20).relax(&c, &mut many, &mut NoOpStepObserver);
        assert!(total_error(&many, &c) < total_error(&one, &c));
        assert!(total_error(&many, &c) < 1e-3);
    }

    #[test]
    fn zero_sweeps_clamps_to_one() {
        assert_eq!(ConstraintSolver::new(0).sweeps(), 1);
    }
}
