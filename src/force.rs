//! Gravity and aerodynamic forces.

use crate::float::Float;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::vec::Vec3;

/// Gusting wind: each direction component is its own sinusoid of time,
/// and the strength is a slower sinusoid on top.
///
/// Periods are in milliseconds, matching the tick clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindConfig<F: Float> {
    pub strength_amplitude: F,
    pub strength_bias: F,
    pub strength_period: F,
    pub period_x: F,
    pub period_y: F,
    pub period_z: F,
}

impl<F: Float> WindConfig<F> {
    /// Zero wind at every instant.
    pub fn calm() -> Self {
        WindConfig {
            strength_amplitude: F::zero(),
            strength_bias: F::zero(),
            ..Self::default()
        }
    }

    /// Wind vector at `time_ms`.
    pub fn wind_at(&self, time_ms: F) -> Vec3<F> {
        let strength = (time_ms / self.strength_period).cos() * self.strength_amplitude
            + self.strength_bias;
        let direction = Vec3::new(
            (time_ms / self.period_x).sin(),
            (time_ms / self.period_y).cos(),
            (time_ms / self.period_z).sin(),
        );
        direction.normalize().scale(strength)
    }

    pub fn is_calm(&self) -> bool {
        self.strength_amplitude == F::zero() && self.strength_bias == F::zero()
    }
}

impl<F: Float> Default for WindConfig<F> {
    fn default() -> Self {
        WindConfig {
            strength_amplitude: F::from_f32(10.0),
            strength_bias: F::one(),
            strength_period: F::from_f32(7000.0),
            period_x: F::from_f32(2000.0),
            period_y: F::from_f32(3000.0),
            period_z: F::from_f32(1000.0),
        }
    }
}

/// Weight of a particle under gravitational acceleration `g` (pointing -y).
pub fn gravity_force<F: Float>(g: F, mass: F) -> Vec3<F> {
    Vec3::new(F::zero(), -g * mass, F::zero())
}

/// Push every face vertex along its normal by the wind's normal component.
///
/// Contributions are not averaged: a particle shared by k faces receives k
/// pushes.
pub fn apply_aerodynamics<F, S>(particles: &mut [Particle<F>], surface: &S, wind: Vec3<F>)
where
    F: Float,
    S: Surface<F> + ?Sized,
{
    let normals = surface.normals();
    for face in surface.faces() {
        for &i in face {
            let normal = normals[i];
            let pressure = normal.normalize().scale(normal.dot(wind));
            particles[i].add_force(pressure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{ClothTopology, GridConfig};
    use crate::surface::GridSurface;

    #[test]
    fn calm_wind_is_zero() {
        let calm = WindConfig::<f64>::calm();
        assert!(calm.is_calm());
        for t in [0.0, 1234.5, 99_999.0] {
            assert_eq!(calm.wind_at(t), Vec3::zero());
        }
    }

    #[test]
    fn default_wind_at_origin() {
        // t = 0: direction (0, 1, 0), strength cos(0) * 10 + 1.
        let wind = WindConfig::<f64>::default().wind_at(0.0);
        assert!(wind.x.abs() < 1e-12);
        assert!((wind.y - 11.0).abs() < 1e-12);
        assert!(wind.z.abs() < 1e-12);
    }

    #[test]
    fn wind_magnitude_tracks_strength() {
        let config = WindConfig::<f64>::default();
        let t = 5000.0;
        let expected = (t / 7000.0f64).cos() * 10.0 + 1.0;
        assert!((config.wind_at(t).length() - expected.abs()).abs() < 1e-9);
    }

    #[test]
    fn gravity_scales_with_mass() {
        assert_eq!(gravity_force(10.0f32, 0.5), Vec3::new(0.0, -5.0, 0.0));
    }

    #[test]
    fn shared_vertices_accumulate_per_face() {
        let config = GridConfig { cols: 1, rows: 1, rest_distance: 1.0, particle_mass: 1.0 };
        let mut topology = ClothTopology::<f64>::flat(&config).unwrap();
        let mut surface = GridSurface::new(1, 1);
        surface.refresh(&topology.positions());

        let (particles, _) = topology.parts_mut();
        apply_aerodynamics(particles, &surface, Vec3::new(0.0, 0.0, 2.0));

        // Faces (0,1,2) and (1,3,2): corners 1 and 2 are shared.
        assert!((topology.particle(0).acceleration.z - 2.0).abs() < 1e-12);
        assert!((topology.particle(1).acceleration.z - 4.0).abs() < 1e-12);
        assert!((topology.particle(2).acceleration.z - 4.0).abs() < 1e-12);
        assert!((topology.particle(3).acceleration.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn wind_parallel_to_sheet_exerts_nothing() {
        let config = GridConfig { cols: 2, rows: 2, rest_distance: 1.0, particle_mass: 1.0 };
        let mut topology = ClothTopology::<f64>::flat(&config).unwrap();
        let mut surface = GridSurface::new(2, 2);
        surface.refresh(&topology.positions());
        let (particles, _) = topology.parts_mut();
        apply_aerodynamics(particles, &surface, Vec3::new(5.0, -3.0, 0.0));
        assert!(topology.particles().iter().all(|p| p.acceleration == Vec3::zero()));
    }
}
