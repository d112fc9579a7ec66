//! End-to-end behavior of the simulation loop.

use flock2d::{Boid, DVec2, Flock, FlockConfig};

const EPS: f64 = 1e-9;

#[test]
fn long_run_preserves_invariants() {
    let config = FlockConfig::default().with_initial_count(60);
    let mut flock = Flock::new_seeded(config, 320.0, 240.0, 42);

    for frame in 0..500 {
        flock.step();

        // Grow the population mid-run, like a pointer drag would.
        if frame % 50 == 0 {
            flock.spawn(160.0, 120.0);
        }

        for boid in flock.boids() {
            let speed = boid.velocity.length();
            assert!(
                speed <= config.max_speed + EPS,
                "speed {speed} above ceiling at frame {frame}"
            );
            assert!(
                speed == 0.0 || speed >= config.min_speed - EPS,
                "nonzero speed {speed} below floor at frame {frame}"
            );
            assert!(boid.position.x >= 0.0 && boid.position.x <= 320.0);
            assert!(boid.position.y >= 0.0 && boid.position.y <= 240.0);
            assert!(boid.velocity.x.is_finite() && boid.velocity.y.is_finite());
        }
    }

    assert_eq!(flock.len(), 70);
}

#[test]
fn isolated_boid_keeps_its_velocity() {
    // No other boid within 50 units means zero steering from all three
    // rules; a velocity already inside the speed band survives untouched.
    let config = FlockConfig::default();
    let mut flock = Flock::empty(config, 1000.0, 1000.0);
    flock.push(Boid::new(
        DVec2::new(500.0, 500.0),
        DVec2::new(0.2, -0.1),
        &config,
    ));
    flock.push(Boid::new(
        DVec2::new(100.0, 100.0),
        DVec2::new(-0.1, 0.2),
        &config,
    ));

    flock.step();

    assert_eq!(flock.boids()[0].velocity, DVec2::new(0.2, -0.1));
    assert_eq!(flock.boids()[1].velocity, DVec2::new(-0.1, 0.2));
}

#[test]
fn close_pair_separates_before_it_coheres() {
    let config = FlockConfig::default();
    let mut flock = Flock::empty(config, 200.0, 200.0);
    flock.push(Boid::new(DVec2::new(95.0, 100.0), DVec2::ZERO, &config));
    flock.push(Boid::new(DVec2::new(105.0, 100.0), DVec2::ZERO, &config));

    let initial_gap = 10.0;
    for _ in 0..10 {
        flock.step();
    }

    let gap = flock.boids()[0].position.distance(flock.boids()[1].position);
    assert!(
        gap > initial_gap,
        "pair inside desired separation must move apart, gap {gap}"
    );
}

#[test]
fn flock_coheres_from_mid_range() {
    // A pair outside separation range but inside neighbor range drifts
    // together: cohesion and alignment are the only active rules.
    let config = FlockConfig::default();
    let mut flock = Flock::empty(config, 200.0, 200.0);
    flock.push(Boid::new(DVec2::new(80.0, 100.0), DVec2::ZERO, &config));
    flock.push(Boid::new(DVec2::new(120.0, 100.0), DVec2::ZERO, &config));

    let initial_gap = 40.0;
    for _ in 0..20 {
        flock.step();
    }

    let gap = flock.boids()[0].position.distance(flock.boids()[1].position);
    assert!(
        gap < initial_gap,
        "mid-range pair should drift together, gap {gap}"
    );
}

#[test]
fn spawned_boid_moves_the_same_frame() {
    let config = FlockConfig::default();
    let mut flock = Flock::empty(config, 200.0, 200.0);
    flock.push(Boid::new(
        DVec2::new(50.0, 50.0),
        DVec2::new(0.1, 0.0),
        &config,
    ));

    // Appended before step() starts, so the live walk reaches it.
    flock.push(Boid::new(
        DVec2::new(150.0, 150.0),
        DVec2::new(0.1, 0.0),
        &config,
    ));
    flock.step();

    let spawned = flock.boids()[1];
    assert_ne!(spawned.position, DVec2::new(150.0, 150.0));
}

#[test]
fn resize_changes_wrap_bounds_only() {
    let config = FlockConfig::default().with_max_speed(10.0);
    let mut flock = Flock::empty(config, 400.0, 400.0);
    flock.push(Boid::new(
        DVec2::new(395.0, 200.0),
        DVec2::new(6.0, 0.0),
        &config,
    ));

    flock.resize(300.0, 300.0);
    // The now out-of-bounds boid is not repositioned by the resize itself.
    assert_eq!(flock.boids()[0].position, DVec2::new(395.0, 200.0));

    // The next frame wraps against the new width: 395 + 6 = 401 > 300.
    flock.step();
    assert_eq!(flock.boids()[0].position.x, 0.0);
    assert_eq!(flock.boids()[0].position.y, 200.0);
}
