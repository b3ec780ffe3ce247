//! Performance benchmark comparing serial and parallel ticks

use std::time::Instant;

use anyhow::{Context, Result};
use life_world::{Strategy, World};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_strategy(size: usize, iterations: u32, strategy: Strategy) -> Result<f64> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut world = World::random(size, size, &mut rng)
        .with_context(|| format!("building a {size}x{size} world"))?
        .with_strategy(strategy);

    let start = Instant::now();
    for _ in 0..iterations {
        world.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<()> {
    life_world::init_tracing();

    println!("=== Game of Life Tick Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_strategy(size, iterations, Strategy::Serial)?;
        let parallel_ms = benchmark_strategy(size, iterations, Strategy::Parallel)?;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark_strategy(size, iterations, Strategy::Parallel)?;
    println!("\n=== Throughput at {}x{} ===\n", size, size);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
