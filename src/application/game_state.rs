use super::{MAX_SPEED, MIN_SPEED, SimulationConfig};
use crate::domain::{Strategy, World, WorldError};
use tracing::{info, warn};

/// GameState drives a world over time.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub world: World,
    pub config: SimulationConfig,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32, // Evolution performance metric
    pub last_render_time_ms: f32,    // Render performance metric
}

impl GameState {
    /// Create a paused game state from a config
    pub fn new(config: SimulationConfig) -> Result<Self, WorldError> {
        let world = config.build_world()?;
        Ok(Self {
            world,
            updates_per_second: config.updates_per_second,
            config,
            is_running: false,
            update_timer: 0.0,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    pub fn generation(&self) -> u64 {
        self.world.generation()
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Kill every cell and pause
    pub fn clear(mut self) -> Self {
        self.world.clear();
        self.is_running = false;
        self
    }

    /// Reseed with fresh randomness, keeping dimensions, density and strategy
    pub fn randomize(mut self) -> Self {
        let config = SimulationConfig { seed: None, pattern: None, ..self.config.clone() };
        match config.build_world() {
            Ok(world) => {
                info!(population = world.population(), "world reseeded");
                self.world = world.with_strategy(self.world.strategy());
            }
            Err(err) => warn!(%err, "could not reseed world"),
        }
        self.is_running = false;
        self
    }

    /// Switch between serial and parallel ticks
    pub fn toggle_strategy(mut self) -> Self {
        let next = match self.world.strategy() {
            Strategy::Serial => Strategy::Parallel,
            Strategy::Parallel => Strategy::Serial,
        };
        self.world.set_strategy(next);
        self.config.strategy = next;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Advance exactly one generation, regardless of the running flag
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.world.tick();
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }

    /// Update simulation by one frame.
    /// A generation is computed once enough time has accumulated.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.step();
            self.update_timer = 0.0;
        }

        self
    }
}
