//! How a world runs the two phases of a tick.
//!
//! Both strategies compute exactly the same generations; they only differ in
//! whether the per-cell work is spread over the rayon thread pool.

/// Execution strategy for `World::advance` and `World::commit_generation`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Plain loop over the cells
    Serial,
    /// Fork-join over the cells with rayon, one barrier per phase
    #[default]
    Parallel,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::Parallel]
    }

    /// Display name for UI and CLI
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "serial",
            Strategy::Parallel => "parallel",
        }
    }

    /// Short description for help text
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Serial => "one thread, cell by cell",
            Strategy::Parallel => "rayon thread pool, barrier between phases",
        }
    }

    /// Look a strategy up by its name
    pub fn from_name(name: &str) -> Option<Strategy> {
        Strategy::all().into_iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }
}
