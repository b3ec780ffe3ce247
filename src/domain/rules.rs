use super::LifeState;

/// Named outcome of applying Conway's rules (B3/S23) to a single cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    /// Live cell with fewer than 2 living neighbours dies
    Underpopulation,
    /// Live cell with 2 or 3 living neighbours lives on
    Survival,
    /// Live cell with more than 3 living neighbours dies
    Overpopulation,
    /// Dead cell with exactly 3 living neighbours comes alive
    Reproduction,
    /// Dead cell without exactly 3 living neighbours stays dead
    Stasis,
    /// Unknown never changes
    Absorption,
}

impl Transition {
    /// Classify the rule that fires for a given state and neighbour count
    pub const fn classify(current: LifeState, living_neighbors: u8) -> Self {
        match (current, living_neighbors) {
            (LifeState::Alive, 0 | 1) => Transition::Underpopulation,
            (LifeState::Alive, 2 | 3) => Transition::Survival,
            (LifeState::Alive, _) => Transition::Overpopulation,
            (LifeState::Dead, 3) => Transition::Reproduction,
            (LifeState::Dead, _) => Transition::Stasis,
            (LifeState::Unknown, _) => Transition::Absorption,
        }
    }

    /// State a cell ends up in after this transition
    pub const fn outcome(self) -> LifeState {
        match self {
            Transition::Survival | Transition::Reproduction => LifeState::Alive,
            Transition::Underpopulation | Transition::Overpopulation | Transition::Stasis => {
                LifeState::Dead
            }
            Transition::Absorption => LifeState::Unknown,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Transition::Underpopulation => "underpopulation",
            Transition::Survival => "survival",
            Transition::Overpopulation => "overpopulation",
            Transition::Reproduction => "reproduction",
            Transition::Stasis => "stasis",
            Transition::Absorption => "absorption",
        }
    }
}

/// Pure function computing the next state of a cell:
/// 1. Live cell with 2-3 neighbours survives
/// 2. Dead cell with exactly 3 neighbours becomes alive
/// 3. All other known cells are dead next generation
/// 4. Unknown stays unknown
///
/// Counts above 8 cannot come out of a wired cell; they are treated like any
/// other overcrowded count.
pub const fn next_life_state(current: LifeState, living_neighbors: u8) -> LifeState {
    Transition::classify(current, living_neighbors).outcome()
}
