use super::{Coordinate, rules::next_life_state};

/// Life state of a single cell.
/// `Unknown` marks a cell that has never been seeded; it is never produced by
/// the rules from a known state and never changes once reached.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum LifeState {
    Alive,
    Dead,
    #[default]
    Unknown,
}

impl LifeState {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, LifeState::Alive)
    }

    /// Single-character display glyph
    pub const fn glyph(self) -> char {
        match self {
            LifeState::Alive => 'X',
            LifeState::Dead => '#',
            LifeState::Unknown => '?',
        }
    }
}

impl std::fmt::Display for LifeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Cell is the unit of simulation state: where it sits, what it is now,
/// what it will be after the pending commit, and who its neighbours are.
///
/// Neighbours are indices into the owning world's cell storage. The cell
/// never owns them and is only meaningful together with that storage.
#[derive(Clone, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    current: LifeState,
    next: LifeState,
    /// `None` until wired
    neighbors: Option<Vec<usize>>,
}

impl Cell {
    /// Create an unwired cell with the given initial state
    pub fn new(coordinate: Coordinate, state: LifeState) -> Self {
        Self {
            coordinate,
            current: state,
            next: LifeState::Unknown,
            neighbors: None,
        }
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn current_state(&self) -> LifeState {
        self.current
    }

    pub const fn next_state(&self) -> LifeState {
        self.next
    }

    pub const fn is_wired(&self) -> bool {
        self.neighbors.is_some()
    }

    /// Wired neighbour indices, if any
    pub fn neighbors(&self) -> Option<&[usize]> {
        self.neighbors.as_deref()
    }

    /// Resolve the Moore neighbourhood against a grid.
    /// `index_of` maps a coordinate to its storage index, or `None` when the
    /// grid has no cell there. Replaces any previously wired set.
    pub fn wire_neighbors(&mut self, index_of: impl Fn(Coordinate) -> Option<usize>) {
        let neighbors = self
            .coordinate
            .neighbor_coordinates()
            .filter_map(&index_of)
            .collect();
        self.neighbors = Some(neighbors);
    }

    /// Count neighbours alive in `generation`, a snapshot of every cell's
    /// current state indexed like the world's storage.
    ///
    /// # Panics
    /// If the neighbours were never wired, or if `generation` is shorter
    /// than the storage the neighbours were wired against.
    pub fn living_neighbor_count(&self, generation: &[LifeState]) -> u8 {
        let Some(neighbors) = &self.neighbors else {
            panic!("cell at {} queried before its neighbours were wired", self.coordinate);
        };
        neighbors
            .iter()
            .filter(|&&idx| match generation.get(idx) {
                Some(state) => state.is_alive(),
                None => panic!(
                    "generation snapshot of {} cells has no neighbour index {} for cell at {}",
                    generation.len(),
                    idx,
                    self.coordinate
                ),
            })
            .count() as u8
    }

    /// Buffer the next state. `current` is left untouched.
    pub fn compute_next_state(&mut self, generation: &[LifeState]) {
        let living = self.living_neighbor_count(generation);
        self.next = next_life_state(self.current, living);
    }

    /// Swap the buffered state in and reset the buffer
    pub fn commit(&mut self) {
        self.current = self.next;
        self.next = LifeState::Unknown;
    }

    pub const fn render(&self) -> char {
        self.current.glyph()
    }

    pub(crate) fn set_current_state(&mut self, state: LifeState) {
        self.current = state;
    }

    pub(crate) fn discard_next_state(&mut self) {
        self.next = LifeState::Unknown;
    }
}
