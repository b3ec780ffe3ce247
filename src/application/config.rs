use crate::domain::{Strategy, World, WorldError, presets, seeding};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

/// Slowest and fastest simulation speed, in generations per second
pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;

/// Tunables shared by every driver of the simulation
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Probability of a live cell when seeding randomly
    pub density: f64,
    /// Fixed seed for reproducible runs; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Preset to place in the middle of an otherwise dead world,
    /// instead of random seeding
    pub pattern: Option<String>,
    pub strategy: Strategy,
    pub updates_per_second: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            density: seeding::DEFAULT_DENSITY,
            seed: None,
            pattern: None,
            strategy: Strategy::default(),
            updates_per_second: 10.0,
        }
    }
}

impl SimulationConfig {
    /// Check every field before anything is built
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.width == 0 || self.height == 0 {
            return Err(WorldError::EmptyDimension { width: self.width, height: self.height });
        }
        seeding::check_density(self.density)?;
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.updates_per_second) {
            return Err(WorldError::InvalidSpeed(self.updates_per_second));
        }
        if let Some(name) = &self.pattern {
            presets::by_name(name).ok_or_else(|| WorldError::UnknownPattern(name.clone()))?;
        }
        Ok(())
    }

    /// Build the initial world described by this config
    pub fn build_world(&self) -> Result<World, WorldError> {
        self.validate()?;

        let world = match &self.pattern {
            Some(name) => {
                let pattern = presets::by_name(name).ok_or_else(|| WorldError::UnknownPattern(name.clone()))?;
                let mut world = World::dead(self.width, self.height)?;
                pattern.place_centered(&mut world)?;
                info!(pattern = pattern.name, "seeded world from pattern");
                world
            }
            None => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_rng(&mut rand::rng()),
                };
                World::random_with_density(self.width, self.height, self.density, &mut rng)?
            }
        };

        Ok(world.with_strategy(self.strategy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_invalid_fields() {
        let zero_width = SimulationConfig { width: 0, ..Default::default() };
        assert!(matches!(zero_width.validate(), Err(WorldError::EmptyDimension { .. })));

        let stopped = SimulationConfig { updates_per_second: 0.0, ..Default::default() };
        assert_eq!(stopped.validate(), Err(WorldError::InvalidSpeed(0.0)));

        let too_fast = SimulationConfig { updates_per_second: 100.0, ..Default::default() };
        assert_eq!(too_fast.validate(), Err(WorldError::InvalidSpeed(100.0)));

        let unknown = SimulationConfig { pattern: Some("spaceship".into()), ..Default::default() };
        assert_eq!(unknown.validate(), Err(WorldError::UnknownPattern("spaceship".into())));
    }

    #[test]
    fn test_seeded_worlds_are_reproducible() {
        let config = SimulationConfig { width: 20, height: 10, seed: Some(4), ..Default::default() };
        let a = config.build_world().unwrap();
        let b = config.build_world().unwrap();
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_pattern_world() {
        let config = SimulationConfig {
            width: 8,
            height: 8,
            pattern: Some("block".into()),
            strategy: Strategy::Serial,
            ..Default::default()
        };
        let world = config.build_world().unwrap();
        assert_eq!(world.population(), 4);
        assert_eq!(world.strategy(), Strategy::Serial);
    }
}
