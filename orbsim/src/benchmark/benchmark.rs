use std::time::Instant;

use crate::simulation::error::SimError;
use crate::simulation::states::Body;
use crate::simulation::universe::Universe;
use crate::simulation::vector::Vector3;

/// Spread of the benchmark cluster, m
const CLUSTER_SCALE: f64 = 1.0e9;

/// Helper to build a deterministic universe of size `n`, no rand needed
pub fn make_universe(n: usize) -> Result<Universe, SimError> {
    let mut universe = Universe::new();

    for i in 0..n {
        let i_f = i as f64;
        let x = Vector3::new(
            (i_f * 0.37).sin() * CLUSTER_SCALE,
            (i_f * 0.13).cos() * CLUSTER_SCALE,
            (i_f * 0.07).sin() * CLUSTER_SCALE,
        );
        universe.add_body(Body::new(format!("b{i}"), x, Vector3::zeros(), 1.0e24, 1.0e6))?;
    }

    Ok(universe)
}

/// Time `Universe::step` for a range of system sizes and print one line per size.
/// With `csv` set, output is `N,step_ms` for pasting into a spreadsheet.
pub fn bench_step(ns: &[usize], steps: usize, csv: bool) -> Result<(), SimError> {
    let dt = 60.0;

    if csv {
        println!("N,step_ms");
    }

    for &n in ns {
        let mut universe = make_universe(n)?;

        // Warm up
        universe.step(dt)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            universe.step(dt)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps.max(1) as f64;

        if csv {
            println!("{},{:.6}", n, ms);
        } else {
            println!("N = {n:5}, direct step = {ms:10.4} ms");
        }
    }

    Ok(())
}
