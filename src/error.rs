//! Error types for cloth construction.

use core::fmt;

/// Errors raised while building a cloth or its simulator.
///
/// Every variant is a construction-time contract violation. A tick over
/// valid state never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Grid must have at least one segment in each direction.
    InvalidGridDimensions,
    /// Rest distance must be positive and finite.
    InvalidRestDistance,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// At least one relaxation sweep per tick is required.
    InvalidSweeps,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Surface normals do not line up one-to-one with the particles.
    SurfaceMismatch { normals: usize, particles: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidGridDimensions => {
                write!(f, "grid needs at least one segment per axis")
            }
            PhysicsError::InvalidRestDistance => {
                write!(f, "rest distance must be positive and finite")
            }
            PhysicsError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            PhysicsError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            PhysicsError::InvalidSweeps => write!(f, "at least one relaxation sweep is required"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SurfaceMismatch { normals, particles } => {
                write!(f, "surface has {} normals for {} particles", normals, particles)
            }
        }
    }
}
