//! Face and normal providers consumed by the aerodynamic pass.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Triangles over the particle grid plus one normal per particle.
///
/// The simulator calls [`Surface::refresh`] at the end of every tick, so
/// the normals read by the next tick's wind pass always match the latest
/// positions.
///
/// Every face index must be a valid particle index and `normals()` must
/// hold exactly one entry per particle. [`Simulator::with_surface`]
/// rejects providers that break this.
///
/// [`Simulator::with_surface`]: crate::Simulator::with_surface
pub trait Surface<F: Float> {
    /// Index triples into the particle list.
    fn faces(&self) -> &[[usize; 3]];

    /// Per-particle normals, indexed like the particle list.
    fn normals(&self) -> &[Vec3<F>];

    /// Recompute normals (and faces, if they depend on shape) from positions.
    fn refresh(&mut self, positions: &[Vec3<F>]);
}

/// Check `surface` against a cloth of `particle_count` particles.
///
/// With `check_normals` unset only the face indices are checked, which is
/// what must hold before the first refresh.
pub(crate) fn validate_surface<F, S>(
    surface: &S,
    particle_count: usize,
    check_normals: bool,
) -> Result<(), PhysicsError>
where
    F: Float,
    S: Surface<F> + ?Sized,
{
    if let Some(&index) = surface.faces().iter().flatten().find(|&&i| i >= particle_count) {
        return Err(PhysicsError::ParticleOutOfBounds { index, count: particle_count });
    }
    let normals = surface.normals().len();
    if check_normals && normals != particle_count {
        return Err(PhysicsError::SurfaceMismatch { normals, particles: particle_count });
    }
    Ok(())
}

/// Two triangles per grid cell with area-weighted vertex normals.
#[derive(Clone, Debug)]
pub struct GridSurface<F: Float> {
    faces: AllocVec<[usize; 3]>,
    normals: AllocVec<Vec3<F>>,
}

impl<F: Float> GridSurface<F> {
    /// Triangulate a `cols` x `rows` segment grid.
    ///
    /// For a cell with corners a=(u,v), b=(u+1,v), c=(u+1,v+1), d=(u,v+1)
    /// the faces are (a, b, d) and (b, c, d).
    pub fn new(cols: usize, rows: usize) -> Self {
        let stride = cols + 1;
        let mut faces = AllocVec::with_capacity(2 * cols * rows);
        for v in 0..rows {
            for u in 0..cols {
                let a = v * stride + u;
                let b = v * stride + u + 1;
                let c = (v + 1) * stride + u + 1;
                let d = (v + 1) * stride + u;
                faces.push([a, b, d]);
                faces.push([b, c, d]);
            }
        }
        GridSurface {
            faces,
            normals: vec![Vec3::zero(); stride * (rows + 1)],
        }
    }
}

impl<F: Float> Surface<F> for GridSurface<F> {
    fn faces(&self) -> &[[usize; 3]] { &self.faces }

    fn normals(&self) -> &[Vec3<F>] { &self.normals }

    fn refresh(&mut self, positions: &[Vec3<F>]) {
        for n in self.normals.iter_mut() {
            *n = Vec3::zero();
        }
        for &[a, b, c] in &self.faces {
            let (Some(&pa), Some(&pb), Some(&pc)) =
                (positions.get(a), positions.get(b), positions.get(c))
            else {
                continue;
            };
            // Unnormalized, so larger faces weigh more.
            let face_normal = (pc - pb).cross(pa - pb);
            for i in [a, b, c] {
                if let Some(n) = self.normals.get_mut(i) {
                    *n += face_normal;
                }
            }
        }
        for n in self.normals.iter_mut() {
            *n = n.normalize();
        }
    }
}
