//! Step observer trait for monitoring cloth ticks.

/// Trait for observing simulation ticks.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after wind and gravity have been accumulated.
    fn on_forces(&mut self) {}

    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation sweep over the constraint list.
    fn on_constraint_sweep(&mut self, _sweep: usize) {}

    /// Called after the floor clamp with the number of clamped particles.
    fn on_floor_contacts(&mut self, _count: usize) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards every hook to `tracing` at trace level.
#[derive(Debug, Default)]
pub struct TracingStepObserver {
    ticks: u64,
}

impl TracingStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed ticks seen so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl StepObserver for TracingStepObserver {
    fn on_constraint_sweep(&mut self, sweep: usize) {
        tracing::trace!(tick = self.ticks, sweep, "relaxation sweep done");
    }

    fn on_floor_contacts(&mut self, count: usize) {
        if count > 0 {
            tracing::trace!(tick = self.ticks, count, "particles clamped to floor");
        }
    }

    fn on_step_complete(&mut self) {
        self.ticks += 1;
    }
}
