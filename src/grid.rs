//! Cloth topology: a particle grid and its structural constraints.

use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Configuration for a cloth grid.
///
/// `cols` and `rows` count segments, so the grid holds
/// `(cols + 1) * (rows + 1)` particles.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub rest_distance: F,
    pub particle_mass: F,
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        GridConfig {
            cols: 16,
            rows: 5,
            rest_distance: F::from_f32(25.0),
            particle_mass: F::from_f32(0.1),
        }
    }
}

/// Flat rectangle in the XY plane, centered on x and lifted half a height.
pub fn plane<F: Float>(width: F, height: F) -> impl Fn(F, F) -> Vec3<F> {
    move |u, v| Vec3::new((u - F::half()) * width, (v + F::half()) * height, F::zero())
}

/// A grid of Verlet particles joined by structural constraints only.
///
/// Particle at (u, v) has index `u + v * (cols + 1)`. There are no shear or
/// bend links, so the sheet folds and sags instead of behaving rigidly.
#[derive(Clone, Debug)]
pub struct ClothTopology<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> ClothTopology<F> {
    /// Build a grid whose particle (u, v) sits at `shape(u / cols, v / rows)`.
    ///
    /// Constraints are emitted in a fixed order, which is also the order the
    /// solver visits them:
    /// - per cell, row-major: (u,v)-(u,v+1) then (u,v)-(u+1,v)
    /// - last column verticals
    /// - last row horizontals
    pub fn new<S>(config: &GridConfig<F>, shape: S) -> Result<Self, PhysicsError>
    where
        S: Fn(F, F) -> Vec3<F>,
    {
        let (w, h) = (config.cols, config.rows);
        if w == 0 || h == 0 {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        let rest = config.rest_distance;
        if !rest.is_finite() || rest <= F::zero() {
            return Err(PhysicsError::InvalidRestDistance);
        }

        let mut particles = AllocVec::with_capacity((w + 1) * (h + 1));
        let fw = F::from_usize(w);
        let fh = F::from_usize(h);
        for v in 0..=h {
            for u in 0..=w {
                let pos = shape(F::from_usize(u) / fw, F::from_usize(v) / fh);
                particles.push(Particle::new(pos, config.particle_mass)?);
            }
        }

        let index = |u: usize, v: usize| u + v * (w + 1);
        let mut constraints = AllocVec::with_capacity(2 * w * h + w + h);

        for v in 0..h {
            for u in 0..w {
                constraints.push(DistanceConstraint::new(index(u, v), index(u, v + 1), rest));
                constraints.push(DistanceConstraint::new(index(u, v), index(u + 1, v), rest));
            }
        }

        for v in 0..h {
            constraints.push(DistanceConstraint::new(index(w, v), index(w, v + 1), rest));
        }

        for u in 0..w {
            constraints.push(DistanceConstraint::new(index(u, h), index(u + 1, h), rest));
        }

        tracing::debug!(
            cols = w,
            rows = h,
            particles = particles.len(),
            constraints = constraints.len(),
            "cloth topology built"
        );

        Ok(ClothTopology { particles, constraints, cols: w, rows: h })
    }

    /// Rectangle sized so that unstretched links match `rest_distance`.
    pub fn flat(config: &GridConfig<F>) -> Result<Self, PhysicsError> {
        let width = config.rest_distance * F::from_usize(config.cols);
        let height = config.rest_distance * F::from_usize(config.rows);
        Self::new(config, plane(width, height))
    }

    pub fn index(&self, u: usize, v: usize) -> usize {
        u + v * (self.cols + 1)
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }

    /// Split borrow used by the solver: constraints read, particles written.
    pub fn parts_mut(&mut self) -> (&mut [Particle<F>], &[DistanceConstraint<F>]) {
        (&mut self.particles[..], &self.constraints[..])
    }

    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }

    /// Current positions in grid order, for the render sink.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn position_at(&self, u: usize, v: usize) -> Vec3<F> {
        self.particles[self.index(u, v)].position
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GridConfig<f32> {
        GridConfig { cols: 4, rows: 3, rest_distance: 1.0, particle_mass: 1.0 }
    }

    #[test]
    fn correct_particle_count() {
        let grid = ClothTopology::flat(&test_config()).unwrap();
        assert_eq!(grid.particle_count(), 20); // 5 * 4
    }

    #[test]
    fn structural_constraint_count() {
        let grid = ClothTopology::flat(&test_config()).unwrap();
        // Interior: 4 * 3 * 2 = 24
        // Last column: 3
        // Last row: 4
        assert_eq!(grid.constraint_count(), 31);
    }

    #[test]
    fn first_constraints_follow_cell_order() {
        let grid = ClothTopology::flat(&test_config()).unwrap();
        let c = grid.constraints();
        assert_eq!((c[0].a, c[0].b), (0, 5));
        assert_eq!((c[1].a, c[1].b), (0, 1));
        assert_eq!((c[2].a, c[2].b), (1, 6));
        let last = &c[c.len() - 1];
        assert_eq!((last.a, last.b), (grid.index(3, 3), grid.index(4, 3)));
    }

    #[test]
    fn flat_plane_spacing_matches_rest_distance() {
        let grid = ClothTopology::flat(&test_config()).unwrap();
        for c in grid.constraints() {
            let d = grid.particle(c.a).position.distance(grid.particle(c.b).position);
            assert!((d - c.rest_distance).abs() < 1e-5);
        }
    }

    #[test]
    fn shape_receives_normalized_coordinates() {
        let config = GridConfig { cols: 2, rows: 4, rest_distance: 1.0, particle_mass: 1.0 };
        let grid = ClothTopology::new(&config, |u: f64, v: f64| Vec3::new(u, v, 0.0)).unwrap();
        assert_eq!(grid.position_at(2, 4), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(grid.position_at(1, 1), Vec3::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn rejects_degenerate_configs() {
        let mut config = test_config();
        config.cols = 0;
        assert_eq!(ClothTopology::flat(&config).unwrap_err(), PhysicsError::InvalidGridDimensions);

        let mut config = test_config();
        config.particle_mass = 0.0;
        assert_eq!(ClothTopology::flat(&config).unwrap_err(), PhysicsError::InvalidMass);

        let mut config = test_config();
        config.rest_distance = -1.0;
        assert_eq!(ClothTopology::flat(&config).unwrap_err(), PhysicsError::InvalidRestDistance);
    }
}
