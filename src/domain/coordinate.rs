/// A position on the (unbounded) plane.
/// Coordinates carry no knowledge of the grid they are used with,
/// so they may be negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

/// Offsets of the Moore neighbourhood, row by row, centre excluded
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The surrounding coordinates, diagonals included.
    /// No grid bounds filtering happens here; that is the world's job.
    /// Always 8 of them, except at the edges of the `i64` range where the
    /// neighbours that cannot be represented are left out.
    pub fn neighbor_coordinates(self) -> impl Iterator<Item = Coordinate> {
        MOORE_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            Some(Coordinate::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
        })
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
