//! Mass-spring cloth for real-time animation.
//!
//! `drape` advances a grid of Verlet point masses joined by structural
//! distance constraints. Every tick accumulates gravity and a gusting
//! aerodynamic force, integrates, runs a relaxation sweep, clamps to a floor
//! and snaps pinned particles back to their anchors.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Structural-only topology**: No shear or bend links, so the sheet sags and folds
//! - **Wind**: Per-face pressure along the surface normals
//! - **Boundary conditions**: Pinned anchors and a one-sided floor
//! - **Multi-cloth stages**: Independent instances with desynchronized wind
//! - **Observable**: Monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use drape::{ClothTopology, GridConfig, Simulator, SolverConfig};
//!
//! let topology = ClothTopology::<f32>::flat(&GridConfig::default()).unwrap();
//! let mut sim = Simulator::new(SolverConfig::new(), topology).unwrap();
//! for frame in 0..60 {
//!     sim.tick(frame as f32 * 16.0);
//! }
//! assert_eq!(sim.positions().len(), 17 * 6);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod grid;
pub mod surface;
pub mod force;
pub mod simulator;
pub mod stage;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use constraint::{satisfy, DistanceConstraint};
pub use solver::ConstraintSolver;
pub use grid::{plane, ClothTopology, GridConfig};
pub use surface::{GridSurface, Surface};
pub use force::{apply_aerodynamics, gravity_force, WindConfig};
pub use simulator::Simulator;
pub use stage::MultiClothStage;
pub use config::{PinSelection, SolverConfig, TimeStep};
pub use observer::{StepObserver, NoOpStepObserver, TracingStepObserver};
pub use error::PhysicsError;
