use super::{
    Cell, Coordinate, LifeState, Strategy, WorldError,
    seeding::{DEFAULT_DENSITY, check_density, random_state, uniform},
};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

/// World owns every cell of a finite, non-wrapping grid and drives the
/// synchronous two-phase tick.
///
/// Cells are stored row-major; a cell's storage index is its coordinate key.
/// Edge cells simply have fewer neighbours.
#[derive(Clone, Debug)]
pub struct World {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    strategy: Strategy,
    generation: u64,
    /// Set by `advance`, cleared by `commit_generation`
    advanced: bool,
}

/// Storage index of `c` in a `width` x `height` grid, if it is inside
fn index_in(width: usize, height: usize, c: Coordinate) -> Option<usize> {
    let x = usize::try_from(c.x).ok()?;
    let y = usize::try_from(c.y).ok()?;
    (x < width && y < height).then(|| y * width + x)
}

impl World {
    /// Build a world, drawing every cell's initial state from `state_supplier`
    /// in row-major order. Neighbours are wired only after all cells exist.
    pub fn new(
        width: usize,
        height: usize,
        mut state_supplier: impl FnMut() -> LifeState,
    ) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::EmptyDimension { width, height });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| Cell::new(Coordinate::new(x as i64, y as i64), state_supplier()))
            .collect();

        let mut world = Self {
            width,
            height,
            cells,
            strategy: Strategy::default(),
            generation: 0,
            advanced: false,
        };
        world.wire_neighbors();

        debug!(width, height, population = world.population(), "world initialized");
        Ok(world)
    }

    /// Build a world where every cell is alive or dead with equal odds
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Self, WorldError> {
        Self::random_with_density(width, height, DEFAULT_DENSITY, rng)
    }

    /// Build a world where each cell is alive with probability `density`
    pub fn random_with_density<R: Rng>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, WorldError> {
        let density = check_density(density)?;
        Self::new(width, height, || random_state(rng, density))
    }

    /// Build an all-dead world
    pub fn dead(width: usize, height: usize) -> Result<Self, WorldError> {
        Self::new(width, height, uniform(LifeState::Dead))
    }

    /// Builder-style strategy selection
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Resolve every cell's neighbourhood against the complete grid
    fn wire_neighbors(&mut self) {
        let (width, height) = (self.width, self.height);
        self.cells
            .iter_mut()
            .for_each(|cell| cell.wire_neighbors(|c| index_in(width, height, c)));
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of committed generations since construction or the last clear
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.current_state().is_alive()).count()
    }

    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        index_in(self.width, self.height, coordinate).map(|idx| &self.cells[idx])
    }

    pub fn state(&self, coordinate: Coordinate) -> Option<LifeState> {
        self.cell(coordinate).map(Cell::current_state)
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Overwrite the current state of one cell.
    /// Any computed but uncommitted generation is discarded.
    pub fn set_state(&mut self, coordinate: Coordinate, state: LifeState) -> Result<(), WorldError> {
        let idx = index_in(self.width, self.height, coordinate).ok_or(WorldError::OutOfBounds(coordinate))?;
        self.discard_pending();
        self.cells[idx].set_current_state(state);
        Ok(())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.discard_pending();
        self.cells.iter_mut().for_each(|c| c.set_current_state(LifeState::Dead));
        self.generation = 0;
    }

    fn discard_pending(&mut self) {
        if self.advanced {
            self.cells.iter_mut().for_each(|c| c.discard_next_state());
            self.advanced = false;
        }
    }

    /// Current state of every cell, indexed like the storage
    fn snapshot(&self) -> Vec<LifeState> {
        self.cells.iter().map(Cell::current_state).collect()
    }

    /// Phase 1: every cell buffers its next state. All cells read the same
    /// snapshot of the current generation, so evaluation order is irrelevant.
    pub fn advance(&mut self) {
        let generation = self.snapshot();
        match self.strategy {
            Strategy::Serial => self
                .cells
                .iter_mut()
                .for_each(|cell| cell.compute_next_state(&generation)),
            Strategy::Parallel => self
                .cells
                .par_iter_mut()
                .for_each(|cell| cell.compute_next_state(&generation)),
        }
        self.advanced = true;
    }

    /// Phase 2: every cell swaps its buffered state in.
    ///
    /// # Panics
    /// If `advance` has not run since the last commit; committing then would
    /// turn every cell `Unknown`.
    pub fn commit_generation(&mut self) {
        assert!(
            self.advanced,
            "commit_generation called without a preceding advance"
        );
        match self.strategy {
            Strategy::Serial => self.cells.iter_mut().for_each(Cell::commit),
            Strategy::Parallel => self.cells.par_iter_mut().for_each(Cell::commit),
        }
        self.advanced = false;
        self.generation += 1;

        trace!(generation = self.generation, population = self.population(), "generation committed");
    }

    /// One full generation: `advance` then `commit_generation`
    pub fn tick(&mut self) {
        self.advance();
        self.commit_generation();
    }

    /// Text snapshot: one line per row (increasing y), one glyph plus a
    /// space per column (increasing x), every line newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width * 2 + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            for cell in row {
                out.push(cell.render());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn world_with(width: usize, height: usize, alive: &[(i64, i64)]) -> World {
        let mut world = World::dead(width, height).unwrap();
        for &(x, y) in alive {
            world.set_state(Coordinate::new(x, y), LifeState::Alive).unwrap();
        }
        world
    }

    fn alive_cells(world: &World) -> Vec<(i64, i64)> {
        world
            .cells()
            .filter(|c| c.current_state().is_alive())
            .map(|c| (c.coordinate().x, c.coordinate().y))
            .collect()
    }

    /// Single pass that commits each cell right after computing it
    fn naive_in_place_tick(world: &mut World) {
        for idx in 0..world.cells.len() {
            let generation = world.snapshot();
            world.cells[idx].compute_next_state(&generation);
            world.cells[idx].commit();
        }
    }

    #[test]
    fn test_dimensions_and_cell_count() {
        let world = World::dead(7, 4).unwrap();
        assert_eq!(world.dimensions(), (7, 4));
        assert_eq!(world.cells().count(), 28);
        assert!(world.cells().all(Cell::is_wired));
    }

    #[test]
    fn test_empty_dimensions_rejected() {
        assert_eq!(
            World::dead(0, 5).unwrap_err(),
            WorldError::EmptyDimension { width: 0, height: 5 }
        );
        assert!(World::dead(5, 0).is_err());
    }

    #[test]
    fn test_neighbor_counts_by_position() {
        let world = World::dead(5, 4).unwrap();
        let count = |x, y| world.cell(Coordinate::new(x, y)).unwrap().neighbors().unwrap().len();

        for corner in [(0, 0), (4, 0), (0, 3), (4, 3)] {
            assert_eq!(count(corner.0, corner.1), 3);
        }
        for edge in [(2, 0), (0, 2), (4, 1), (3, 3)] {
            assert_eq!(count(edge.0, edge.1), 5);
        }
        for interior in [(1, 1), (3, 2), (2, 2)] {
            assert_eq!(count(interior.0, interior.1), 8);
        }
    }

    #[test]
    fn test_lookup_outside_grid() {
        let mut world = World::dead(3, 3).unwrap();
        assert!(world.cell(Coordinate::new(-1, 0)).is_none());
        assert!(world.state(Coordinate::new(3, 0)).is_none());
        assert_eq!(
            world.set_state(Coordinate::new(0, 3), LifeState::Alive),
            Err(WorldError::OutOfBounds(Coordinate::new(0, 3)))
        );
    }

    #[test]
    fn test_three_by_three_example() {
        let mut world = world_with(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0)]);
        assert_eq!(world.render(), "X X X \nX X # \nX # # \n");

        world.advance();
        world.commit_generation();

        let expected_alive = [(0, 0), (2, 0), (2, 1), (0, 2), (1, 2)];
        for cell in world.cells() {
            let c = cell.coordinate();
            let alive = expected_alive.contains(&(c.x, c.y));
            assert_eq!(cell.current_state().is_alive(), alive, "cell {}", c);
            assert_eq!(cell.next_state(), LifeState::Unknown);
        }
        assert_eq!(world.render(), "X # X \n# # X \nX X # \n");
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut world = world_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let before = world.render();

        world.tick();
        assert_eq!(world.render(), before);
        world.tick();
        assert_eq!(world.render(), before);
        assert_eq!(world.population(), 4);
    }

    #[test]
    fn test_two_phase_differs_from_single_pass() {
        let horizontal = [(0, 1), (1, 1), (2, 1)];
        let mut two_phase = world_with(3, 3, &horizontal);
        let mut naive = world_with(3, 3, &horizontal);

        two_phase.tick();
        naive_in_place_tick(&mut naive);

        assert_eq!(alive_cells(&two_phase), vec![(1, 0), (1, 1), (1, 2)]);
        assert_ne!(alive_cells(&naive), alive_cells(&two_phase));
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let mut serial = World::random(32, 24, &mut StdRng::seed_from_u64(4))
            .unwrap()
            .with_strategy(Strategy::Serial);
        let mut parallel = World::random(32, 24, &mut StdRng::seed_from_u64(4))
            .unwrap()
            .with_strategy(Strategy::Parallel);
        assert_eq!(serial.render(), parallel.render());

        for _ in 0..20 {
            serial.tick();
            parallel.tick();
            assert_eq!(serial.render(), parallel.render());
        }
    }

    #[test]
    fn test_render_shape() {
        let world = World::random(6, 4, &mut StdRng::seed_from_u64(1)).unwrap();
        let rendered = world.render();
        let lines: Vec<_> = rendered.lines().collect();

        assert!(rendered.ends_with('\n'));
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.len(), 12);
            assert!(line.chars().step_by(2).all(|c| c == 'X' || c == '#'));
            assert!(line.chars().skip(1).step_by(2).all(|c| c == ' '));
        }
    }

    #[test]
    fn test_unknown_cells_stay_unknown() {
        let mut world = World::new(3, 3, uniform(LifeState::Unknown)).unwrap();
        world.tick();
        world.tick();
        assert_eq!(world.render(), "? ? ? \n? ? ? \n? ? ? \n");
    }

    #[test]
    fn test_invalid_density_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            World::random_with_density(3, 3, -0.1, &mut rng).unwrap_err(),
            WorldError::InvalidDensity(-0.1)
        );
    }

    #[test]
    #[should_panic(expected = "without a preceding advance")]
    fn test_commit_without_advance_fails_fast() {
        let mut world = World::dead(2, 2).unwrap();
        world.commit_generation();
    }

    #[test]
    fn test_edit_discards_pending_generation() {
        let mut world = world_with(3, 3, &[(0, 1), (1, 1), (2, 1)]);
        world.advance();
        world.set_state(Coordinate::new(0, 0), LifeState::Alive).unwrap();

        assert!(world.cells().all(|c| c.next_state() == LifeState::Unknown));
        world.tick();
        assert!(world.cells().all(|c| c.current_state() != LifeState::Unknown));
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut world = World::random(5, 5, &mut StdRng::seed_from_u64(9)).unwrap();
        world.tick();
        world.clear();
        assert_eq!(world.generation(), 0);
        assert_eq!(world.population(), 0);
    }
}
