mod config;
mod game_state;

pub use config::{MAX_SPEED, MIN_SPEED, SimulationConfig};
pub use game_state::GameState;
