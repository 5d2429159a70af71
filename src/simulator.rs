//! One cloth instance advanced tick by tick.

use crate::config::{SolverConfig, TimeStep, ELAPSED_RATIO_MAX, ELAPSED_RATIO_MIN};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::{apply_aerodynamics, gravity_force};
use crate::grid::ClothTopology;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::solver::ConstraintSolver;
use crate::surface::{validate_surface, GridSurface, Surface};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Owns a cloth topology, its configuration and its surface.
///
/// A tick runs, in this order: wind, aerodynamic pass, gravity and Verlet
/// integration, relaxation, floor clamp, pin reset, surface refresh. The
/// refresh at the end is what keeps the next tick's wind pass reading
/// normals of the current shape.
#[derive(Clone, Debug)]
pub struct Simulator<F: Float, S: Surface<F> = GridSurface<F>> {
    config: SolverConfig<F>,
    topology: ClothTopology<F>,
    surface: S,
    solver: ConstraintSolver,
    pinned: AllocVec<usize>,
    phase_offset: F,
    last_now: Option<F>,
    last_dt: F,
}

impl<F: Float> Simulator<F, GridSurface<F>> {
    /// Validate `config`, resolve its pins against `topology` and build the
    /// default grid surface.
    pub fn new(config: SolverConfig<F>, topology: ClothTopology<F>) -> Result<Self, PhysicsError> {
        let surface = GridSurface::new(topology.cols(), topology.rows());
        Self::with_surface(config, topology, surface)
    }
}

impl<F: Float, S: Surface<F>> Simulator<F, S> {
    /// Like [`Simulator::new`] with a caller-supplied face/normal provider.
    ///
    /// The surface must index only this topology's particles and, once
    /// refreshed, carry one normal per particle. Otherwise construction
    /// fails with `ParticleOutOfBounds` or `SurfaceMismatch`.
    pub fn with_surface(
        config: SolverConfig<F>,
        topology: ClothTopology<F>,
        mut surface: S,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let pinned = config.pins.resolve(topology.cols(), topology.rows())?;
        let count = topology.particle_count();
        validate_surface::<F, S>(&surface, count, false)?;
        surface.refresh(&topology.positions());
        validate_surface::<F, S>(&surface, count, true)?;

        tracing::debug!(
            particles = topology.particle_count(),
            constraints = topology.constraint_count(),
            pinned = pinned.len(),
            sweeps = config.sweeps,
            "simulator ready"
        );

        Ok(Simulator {
            solver: ConstraintSolver::new(config.sweeps),
            last_dt: config.timestep,
            config,
            topology,
            surface,
            pinned,
            phase_offset: F::zero(),
            last_now: None,
        })
    }

    /// Shift this instance's wind clock by `offset_ms`.
    pub fn with_phase_offset(mut self, offset_ms: F) -> Self {
        self.phase_offset = offset_ms;
        self
    }

    /// Advance one tick. `now_millis` should increase monotonically.
    ///
    /// In elapsed mode a tick that comes less than `min_dt` after the last
    /// advancing one is skipped entirely, observer included.
    pub fn tick(&mut self, now_millis: F) {
        self.tick_observed(now_millis, &mut NoOpStepObserver);
    }

    pub fn tick_observed<O: StepObserver>(&mut self, now_millis: F, observer: &mut O) {
        let Some((dt, drag)) = self.step_size(now_millis) else {
            tracing::trace!(now = ?now_millis, "tick skipped, gap below min_dt");
            return;
        };
        let dt_squared = dt * dt;

        let wind = self.config.wind.wind_at(now_millis + self.phase_offset);
        tracing::trace!(now = ?now_millis, wind = ?wind, "tick");

        let (particles, constraints) = self.topology.parts_mut();

        if !self.config.wind.is_calm() {
            apply_aerodynamics(particles, &self.surface, wind);
        }
        for p in particles.iter_mut() {
            p.add_force(gravity_force(self.config.gravity, p.mass()));
        }
        observer.on_forces();

        for p in particles.iter_mut() {
            p.integrate(dt_squared, drag);
        }
        observer.on_integrate();

        self.solver.relax(constraints, particles, observer);

        let floor = self.config.floor_height;
        let mut contacts = 0;
        for p in particles.iter_mut() {
            if p.position.y < floor {
                p.position.y = floor;
                contacts += 1;
            }
        }
        observer.on_floor_contacts(contacts);

        for &i in &self.pinned {
            particles[i].reset_to_original();
        }

        self.surface.refresh(&self.topology.positions());
        observer.on_step_complete();
    }

    /// Timestep and drag for this tick, or `None` if an elapsed-mode tick
    /// comes too soon to advance. Fixed mode ignores the clock.
    fn step_size(&mut self, now_millis: F) -> Option<(F, F)> {
        let drag = self.config.drag();
        let (min_dt, max_dt) = match self.config.time_step {
            TimeStep::Fixed => return Some((self.config.timestep, drag)),
            TimeStep::Elapsed { min_dt, max_dt } => (min_dt, max_dt),
        };

        let dt = match self.last_now {
            None => self.config.timestep,
            Some(last) => {
                let elapsed = (now_millis - last) / F::from_f32(1000.0);
                // Keep `last_now` so the short gap adds to the next one.
                if !elapsed.is_finite() || elapsed < min_dt {
                    return None;
                }
                if elapsed > max_dt {
                    tracing::warn!(elapsed = ?elapsed, max = ?max_dt, "frame gap clamped");
                    max_dt
                } else {
                    elapsed
                }
            }
        };
        self.last_now = Some(now_millis);

        let mut ratio = dt / self.last_dt;
        let (lo, hi) = (F::from_f32(ELAPSED_RATIO_MIN), F::from_f32(ELAPSED_RATIO_MAX));
        if ratio < lo {
            ratio = lo;
        } else if ratio > hi {
            ratio = hi;
        }
        self.last_dt = dt;
        Some((dt, drag * ratio))
    }

    pub fn config(&self) -> &SolverConfig<F> { &self.config }
    pub fn topology(&self) -> &ClothTopology<F> { &self.topology }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn pinned(&self) -> &[usize] { &self.pinned }
    pub fn phase_offset(&self) -> F { self.phase_offset }

    /// Positions in grid order, for the render sink.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.topology.positions()
    }
}
