use drape::{satisfy, DistanceConstraint, Particle, Vec3};

#[test]
fn free_fall_gravity() {
    let mut p: Particle<f64> = Particle::new(Vec3::new(0.0, 100.0, 0.0), 2.0).unwrap();
    let g = 9.81;
    let dt = 1.0 / 60.0;

    for _ in 0..60 {
        p.add_force(Vec3::new(0.0, -g * p.mass(), 0.0));
        p.integrate(dt * dt, 1.0);
    }

    let expected_y = 100.0 - 0.5 * 9.81 * 1.0;
    assert!((p.position.y - expected_y).abs() < 1.0, "y = {}, expected ~ {}", p.position.y, expected_y);
}

#[test]
fn damping_bleeds_velocity() {
    let mut damped: Particle<f64> = Particle::new(Vec3::zero(), 1.0).unwrap();
    let mut free: Particle<f64> = Particle::new(Vec3::zero(), 1.0).unwrap();
    damped.previous = Vec3::new(-1.0, 0.0, 0.0);
    free.previous = Vec3::new(-1.0, 0.0, 0.0);

    for _ in 0..20 {
        damped.integrate(0.0, 0.97);
        free.integrate(0.0, 1.0);
    }

    assert!((free.position.x - 20.0).abs() < 1e-9);
    assert!(damped.position.x < free.position.x);
    assert!(damped.velocity_raw().x < 1.0);
}

#[test]
fn relaxation_is_mass_agnostic() {
    let mut heavy = Particle::new(Vec3::new(0.0f64, 0.0, 0.0), 100.0).unwrap();
    let mut light = Particle::new(Vec3::new(10.0f64, 0.0, 0.0), 0.01).unwrap();

    satisfy(&mut heavy, &mut light, 5.0);

    let heavy_moved = heavy.position.x;
    let light_moved = 10.0 - light.position.x;
    assert!((heavy_moved - light_moved).abs() < 1e-12);
    assert!((heavy.position.distance(light.position) - 5.0).abs() < 1e-12);
}

#[test]
fn degenerate_constraint_produces_no_nan() {
    let spot = Vec3::new(-3.5f32, 12.25, 0.125);
    let mut a = Particle::new(spot, 0.1).unwrap();
    let mut b = Particle::new(spot, 0.1).unwrap();

    satisfy(&mut a, &mut b, 25.0);

    for p in [&a, &b] {
        assert_eq!(p.position.x.to_bits(), spot.x.to_bits());
        assert_eq!(p.position.y.to_bits(), spot.y.to_bits());
        assert_eq!(p.position.z.to_bits(), spot.z.to_bits());
    }
}

#[test]
fn hand_built_self_link_leaves_particles_alone() {
    let spot = Vec3::new(2.0f64, 5.0, -1.0);
    let mut particles = vec![Particle::new(spot, 0.1).unwrap(); 3];
    let link = DistanceConstraint { a: 2, b: 2, rest_distance: 25.0 };

    link.solve(&mut particles);

    assert!(particles.iter().all(|p| p.position == spot));
}
