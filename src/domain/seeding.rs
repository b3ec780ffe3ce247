//! Initial-state suppliers for `World::new`.

use super::{LifeState, WorldError};
use rand::Rng;

/// Probability of a live cell when seeding with `World::random`
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Pick Alive with probability `density`, Dead otherwise.
/// `density` is expected to be checked with `check_density` first.
pub fn random_state<R: Rng>(rng: &mut R, density: f64) -> LifeState {
    if rng.random_bool(density) {
        LifeState::Alive
    } else {
        LifeState::Dead
    }
}

/// Reject densities that are not probabilities
pub fn check_density(density: f64) -> Result<f64, WorldError> {
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(WorldError::InvalidDensity(density))
    }
}

/// Supplier that always yields the same state
pub fn uniform(state: LifeState) -> impl FnMut() -> LifeState {
    move || state
}
