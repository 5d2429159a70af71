//! Configuration types for the cloth simulator.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::WindConfig;
use alloc::vec::Vec as AllocVec;

/// Which particles are held at their anchors.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PinSelection {
    /// Nothing pinned; the cloth falls to the floor.
    None,
    /// Every particle of the last row (v = rows), like a flag on a pole.
    #[default]
    TopEdge,
    /// The two ends of the last row.
    Corners,
    /// Explicit particle indices.
    Indices(AllocVec<usize>),
}

impl PinSelection {
    /// Resolve to particle indices for a `cols` x `rows` segment grid.
    pub fn resolve(&self, cols: usize, rows: usize) -> Result<AllocVec<usize>, PhysicsError> {
        let count = (cols + 1) * (rows + 1);
        let top = rows * (cols + 1);
        let indices: AllocVec<usize> = match self {
            PinSelection::None => AllocVec::new(),
            PinSelection::TopEdge => (top..count).collect(),
            PinSelection::Corners => [top, count - 1].into_iter().collect(),
            PinSelection::Indices(list) => list.clone(),
        };
        if let Some(&index) = indices.iter().find(|&&i| i >= count) {
            return Err(PhysicsError::ParticleOutOfBounds { index, count });
        }
        Ok(indices)
    }
}

/// Smallest `dt / dt_prev` factor applied to the carried velocity.
pub const ELAPSED_RATIO_MIN: f32 = 0.5;
/// Largest `dt / dt_prev` factor applied to the carried velocity.
pub const ELAPSED_RATIO_MAX: f32 = 2.0;

/// How far each tick advances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeStep<F: Float> {
    /// Always `SolverConfig::timestep`, regardless of the wall clock.
    Fixed,
    /// Wall-clock delta between ticks, capped at `max_dt` seconds.
    /// Uses time-corrected Verlet so uneven frames stay consistent.
    ///
    /// A tick less than `min_dt` seconds after the last one that advanced
    /// (including a repeated or earlier timestamp) does nothing; its gap
    /// carries over into the next tick. The `dt / dt_prev` factor is kept
    /// within `ELAPSED_RATIO_MIN..=ELAPSED_RATIO_MAX`.
    Elapsed { min_dt: F, max_dt: F },
}

/// Configuration for the cloth simulator.
///
/// # Builder Pattern
/// ```
/// use drape::config::{SolverConfig, PinSelection};
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_damping(0.05)
///     .with_gravity(9.81)
///     .with_floor_height(-2.0)
///     .with_pins(PinSelection::Corners);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Fraction of implicit velocity lost per tick, in [0, 1]. Default: 0.03.
    pub damping: F,
    /// Gravitational acceleration magnitude along -y. Default: 981 * 1.4.
    pub gravity: F,
    /// Integration timestep in seconds. Default: 0.018.
    pub timestep: F,
    /// Particles never end a tick below this y. Default: -250.
    pub floor_height: F,
    /// Relaxation sweeps per tick. Default: 1.
    pub sweeps: usize,
    /// Default: top edge.
    pub pins: PinSelection,
    pub wind: WindConfig<F>,
    /// Default: fixed.
    pub time_step: TimeStep<F>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            damping: F::from_f32(0.03),
            gravity: F::from_f32(981.0 * 1.4),
            timestep: F::from_f32(0.018),
            floor_height: F::from_f32(-250.0),
            sweeps: 1,
            pins: PinSelection::TopEdge,
            wind: WindConfig::default(),
            time_step: TimeStep::Fixed,
        }
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_floor_height(mut self, floor_height: F) -> Self {
        self.floor_height = floor_height;
        self
    }

    /// Set the number of relaxation sweeps per tick.
    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    pub fn with_pins(mut self, pins: PinSelection) -> Self {
        self.pins = pins;
        self
    }

    pub fn with_wind(mut self, wind: WindConfig<F>) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_time_step(mut self, time_step: TimeStep<F>) -> Self {
        self.time_step = time_step;
        self
    }

    /// `1 - damping`, the factor applied to implicit velocity.
    pub fn drag(&self) -> F {
        F::one() - self.damping
    }

    /// Check every scalar parameter; pins are checked against a topology later.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.damping.is_finite() || self.damping < F::zero() || self.damping > F::one() {
            return Err(PhysicsError::InvalidDamping);
        }
        if !self.timestep.is_finite() || self.timestep <= F::zero() {
            return Err(PhysicsError::InvalidTimestep);
        }
        if let TimeStep::Elapsed { min_dt, max_dt } = self.time_step {
            if !max_dt.is_finite() || max_dt <= F::zero() {
                return Err(PhysicsError::InvalidTimestep);
            }
            if !min_dt.is_finite() || min_dt <= F::zero() || min_dt > max_dt {
                return Err(PhysicsError::InvalidTimestep);
            }
        }
        if self.sweeps == 0 {
            return Err(PhysicsError::InvalidSweeps);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
