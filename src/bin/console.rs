//! Text driver: prints successive generations to stdout

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use life_world::{SimulationConfig, Strategy};

#[derive(Parser, Debug)]
#[command(name = "life-console", about = "Run Conway's Game of Life on a finite grid and print each generation")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 16)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 12)]
    height: usize,

    /// Number of generations to run after the initial one
    #[arg(short, long, default_value_t = 10)]
    generations: u64,

    /// Seed for reproducible random worlds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability of a cell starting alive
    #[arg(short, long, default_value_t = 0.5)]
    density: f64,

    /// Place a preset (block, blinker, glider, ...) instead of random seeding
    #[arg(short, long)]
    pattern: Option<String>,

    /// serial or parallel
    #[arg(long, default_value = "parallel")]
    strategy: String,

    /// Milliseconds to sleep between generations
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

impl Args {
    fn into_config(self) -> Result<SimulationConfig> {
        let Some(strategy) = Strategy::from_name(&self.strategy) else {
            bail!("unknown strategy {:?}, expected serial or parallel", self.strategy);
        };
        Ok(SimulationConfig {
            width: self.width,
            height: self.height,
            density: self.density,
            seed: self.seed,
            pattern: self.pattern,
            strategy,
            ..Default::default()
        })
    }
}

fn main() -> Result<()> {
    life_world::init_tracing();

    let args = Args::parse();
    let generations = args.generations;
    let delay = Duration::from_millis(args.delay_ms);
    let config = args.into_config()?;
    let mut world = config.build_world().context("building the initial world")?;

    tracing::info!(
        width = config.width,
        height = config.height,
        generations,
        strategy = world.strategy().name(),
        "starting simulation"
    );

    println!("Generation {} (population {})", world.generation(), world.population());
    print!("{world}");
    for _ in 0..generations {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        world.tick();
        println!();
        println!("Generation {} (population {})", world.generation(), world.population());
        print!("{world}");
    }

    Ok(())
}
