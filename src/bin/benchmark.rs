//! Performance benchmark comparing serial and parallel evolution

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{Algorithm, GridSimulation};

fn benchmark(size: usize, algorithm: Algorithm, iterations: u32) -> Result<f64, toroidal_life::LifeError> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut simulation = GridSimulation::with_rng(size, size, true, &mut rng)?;
    simulation.set_algorithm(algorithm);

    let start = Instant::now();
    for _ in 0..iterations {
        simulation.advance();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), toroidal_life::LifeError> {
    env_logger::init();

    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, Algorithm::Serial, iterations)?;
        let parallel_ms = benchmark(size, Algorithm::Parallel, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000 * 2000;
    let parallel_ms = benchmark(2000, Algorithm::Parallel, iterations)?;
    println!("\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms, (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0);

    Ok(())
}
