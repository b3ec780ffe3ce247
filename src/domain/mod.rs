mod cell;
mod coordinate;
mod error;
mod patterns;
mod rules;
mod strategy;
mod world;
pub mod seeding;

pub use cell::{Cell, LifeState};
pub use coordinate::Coordinate;
pub use error::WorldError;
pub use patterns::{Pattern, presets};
pub use rules::{Transition, next_life_state};
pub use strategy::Strategy;
pub use world::World;
