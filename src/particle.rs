//! Verlet point masses.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// A Verlet particle: position-based dynamics with implicit velocity.
///
/// `original` is the anchor recorded at construction; pinning snaps the
/// particle back to it every tick.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub position: Vec3<F>,
    pub previous: Vec3<F>,
    pub original: Vec3<F>,
    pub acceleration: Vec3<F>,
    mass: F,
    inv_mass: F,
}

impl<F: Float> Particle<F> {
    /// Create a resting particle at `position`.
    ///
    /// Fails with [`PhysicsError::InvalidMass`] unless `mass` is positive and finite.
    pub fn new(position: Vec3<F>, mass: F) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        Ok(Particle {
            position,
            previous: position,
            original: position,
            acceleration: Vec3::zero(),
            mass,
            inv_mass: F::one() / mass,
        })
    }

    pub fn mass(&self) -> F { self.mass }
    pub fn inv_mass(&self) -> F { self.inv_mass }

    /// Accumulate a force for this tick.
    pub fn add_force(&mut self, force: Vec3<F>) {
        self.acceleration += force.scale(self.inv_mass);
    }

    /// Verlet step. `drag` is `1 - damping`; the accumulator is cleared.
    pub fn integrate(&mut self, dt_squared: F, drag: F) {
        let velocity = (self.position - self.previous).scale(drag);
        let new_position = self.position + velocity + self.acceleration.scale(dt_squared);
        self.previous = self.position;
        self.position = new_position;
        self.acceleration = Vec3::zero();
    }

    /// Snap back to the anchor with zero implicit velocity.
    pub fn reset_to_original(&mut self) {
        self.position = self.original;
        self.previous = self.original;
    }

    /// Displacement over the last tick.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.position - self.previous
    }
}
