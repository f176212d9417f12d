use std::time::Instant;

use crate::simulation::forces::simulate_gravity;
use crate::simulation::input::KeyEdges;
use crate::simulation::integrator::euler_frame;
use crate::simulation::params::Parameters;
use crate::simulation::player::PlayerController;
use crate::simulation::states::{Body, NVec2, Palette, System};

/// Helper to build a manual System of size `n`, last body is the player
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions spread over a few screens, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 2000.0, (i_f * 0.13).cos() * 2000.0);
        bodies.push(Body::new(format!("b{i}"), x, 1.0 + (i % 7) as f64, Palette::Gray));
    }

    System::new(bodies)
}

/// Time one gravity pass for growing body counts
pub fn bench_gravity() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let params = Parameters::default();

    for n in ns {
        let mut sys = make_system(n);

        // Warm up
        simulate_gravity(&mut sys, &params, &mut ());

        let t0 = Instant::now();
        let pairs = simulate_gravity(&mut sys, &params, &mut ());
        let dt = t0.elapsed().as_secs_f64();

        log::info!("N = {n:5}, pairs = {pairs:8}, gravity = {dt:8.6} s");
    }
}

/// Time full frames (gravity, drift, gated player move) and log CSV rows
pub fn bench_frame_curve() {
    log::info!("N,frame_ms");

    let params = Parameters::default();

    for n in (100..=3200).step_by(100) {
        // small n: average over several frames to smooth noise
        let frames = if n <= 800 { 20 } else { 3 };

        let mut sys = make_system(n);
        let mut player = PlayerController::new(n - 1, NVec2::new(32.0, 32.0));

        let t0 = Instant::now();
        for _ in 0..frames {
            euler_frame(&mut sys, &mut player, &params, KeyEdges::default(), &mut ());
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        log::info!("{n},{ms:.6}");
    }
}
