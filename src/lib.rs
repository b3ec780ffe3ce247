// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Configuration and driving the simulation
pub mod application;

// Infrastructure layer - Window rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coordinate, LifeState, Pattern, Strategy, World, WorldError, presets};
pub use application::{GameState, SimulationConfig};

/// Install the `tracing` subscriber used by the binaries.
/// Verbosity comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
