use super::{Coordinate, LifeState, World, WorldError};

/// A named set of live cells that can be stamped onto a world
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    /// Offsets of the alive cells, relative to the top-left corner
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Create a pattern from alive cell offsets.
    /// Offsets are shifted so the bounding box starts at `(0, 0)`; negative
    /// offsets are therefore allowed.
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let cells: Vec<_> = cells.into_iter().map(|(x, y)| (x - min_x, y - min_y)).collect();

        let width = cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x as usize + 1);
        let height = cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y as usize + 1);
        Self { name, description, width, height, cells }
    }

    /// Coordinates the pattern covers when its top-left corner sits at `origin`
    pub fn coordinates_at(&self, origin: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| Coordinate::new(origin.x.saturating_add(dx), origin.y.saturating_add(dy)))
    }

    /// Set the pattern's cells alive with the top-left corner at `origin`.
    /// Nothing is written unless every cell fits inside the world.
    pub fn place_on(&self, world: &mut World, origin: Coordinate) -> Result<(), WorldError> {
        if let Some(outside) = self.coordinates_at(origin).find(|&c| world.cell(c).is_none()) {
            return Err(WorldError::OutOfBounds(outside));
        }
        self.coordinates_at(origin)
            .try_for_each(|c| world.set_state(c, LifeState::Alive))
    }

    /// Place the pattern in the middle of the world
    pub fn place_centered(&self, world: &mut World) -> Result<(), WorldError> {
        let (width, height) = world.dimensions();
        let origin = Coordinate::new(
            (width as i64 - self.width as i64) / 2,
            (height as i64 - self.height as i64) / 2,
        );
        self.place_on(world, origin)
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Beehive - six-cell still life
    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            vec![
                (1, 0), (2, 0),
                (0, 1), (3, 1),
                (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator, starts horizontal
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - two blocks blinking at their shared corner
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - travels one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Lightweight spaceship, travels left
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            beehive(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            r_pentomino(),
        ]
    }

    /// Find a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }

    #[test]
    fn test_negative_offsets_are_normalized() {
        let pattern = Pattern::new("Diagonal", "", vec![(-2, -1), (0, 1)]);
        assert_eq!((pattern.width, pattern.height), (3, 3));
        assert_eq!(pattern.cells, vec![(0, 0), (2, 2)]);

        let empty = Pattern::new("Empty", "", vec![]);
        assert_eq!((empty.width, empty.height), (0, 0));
    }

    #[test]
    fn test_place_on() {
        let mut world = World::dead(6, 6).unwrap();
        presets::block().place_on(&mut world, Coordinate::new(2, 3)).unwrap();

        assert_eq!(world.population(), 4);
        assert_eq!(world.state(Coordinate::new(3, 4)), Some(LifeState::Alive));
    }

    #[test]
    fn test_place_outside_writes_nothing() {
        let mut world = World::dead(4, 4).unwrap();
        let result = presets::glider().place_on(&mut world, Coordinate::new(2, 2));

        assert_eq!(result, Err(WorldError::OutOfBounds(Coordinate::new(4, 3))));
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn test_place_centered() {
        let mut world = World::dead(5, 5).unwrap();
        presets::blinker().place_centered(&mut world).unwrap();
        assert_eq!(world.render(), "# # # # # \n# # # # # \n# X X X # \n# # # # # \n# # # # # \n");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("lwss").map(|p| p.name), Some("LWSS"));
        assert!(presets::by_name("gun").is_none());
    }
}
