//! Several independent cloths sharing one clock.
//!
//! Each instance keeps its own particles, constraints, configuration and
//! wind phase. Nothing is shared, so instances can be stepped in any order
//! or, with the `parallel` feature, on a rayon thread pool.

use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::grid::ClothTopology;
use crate::simulator::Simulator;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Container of independent cloth simulators.
#[derive(Clone, Debug, Default)]
pub struct MultiClothStage<F: Float> {
    cloths: AllocVec<Simulator<F>>,
}

impl<F: Float> MultiClothStage<F> {
    pub fn new() -> Self {
        MultiClothStage { cloths: AllocVec::new() }
    }

    /// Build and add a cloth whose wind clock runs `phase_offset` ms ahead.
    ///
    /// Returns the index of the new cloth.
    pub fn add_cloth(
        &mut self,
        config: SolverConfig<F>,
        topology: ClothTopology<F>,
        phase_offset: F,
    ) -> Result<usize, PhysicsError> {
        let sim = Simulator::new(config, topology)?.with_phase_offset(phase_offset);
        Ok(self.push(sim))
    }

    /// Add an already built simulator. Returns its index.
    pub fn push(&mut self, simulator: Simulator<F>) -> usize {
        let idx = self.cloths.len();
        tracing::debug!(index = idx, phase_offset = ?simulator.phase_offset(), "cloth added to stage");
        self.cloths.push(simulator);
        idx
    }

    /// Tick every cloth sequentially.
    pub fn tick(&mut self, now_millis: F) {
        for cloth in &mut self.cloths {
            cloth.tick(now_millis);
        }
    }

    /// Tick every cloth on the rayon pool. Results match [`Self::tick`].
    #[cfg(feature = "parallel")]
    pub fn tick_parallel(&mut self, now_millis: F) {
        self.cloths.par_iter_mut().for_each(|cloth| {
            cloth.tick(now_millis);
        });
    }

    pub fn len(&self) -> usize { self.cloths.len() }
    pub fn is_empty(&self) -> bool { self.cloths.is_empty() }
    pub fn cloth(&self, index: usize) -> Option<&Simulator<F>> { self.cloths.get(index) }
    pub fn cloths(&self) -> &[Simulator<F>] { &self.cloths }
}
