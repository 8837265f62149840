use crate::error::MazeError;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use std::str::FromStr;

/// Marker for a walkable cell in an occupancy array.
pub const OPEN: u8 = 0;
/// Marker for a wall in an occupancy array.
pub const WALL: u8 = 1;

/// A validated rectangular occupancy grid. Cells are addressed as [Point]s where `x` is the
/// row and `y` the column, so the backing [BoolGrid] runs its first axis over rows. A [true]
/// value marks a wall.
///
/// The layout is the single source of wall information: a separate obstacle set is folded
/// in with [with_obstacles](Self::with_obstacles) before a graph is built.
#[derive(Clone, Debug)]
pub struct Layout {
    walls: BoolGrid,
}

impl Layout {
    /// Validates an occupancy array of [OPEN]/[WALL] markers, one inner slice per row.
    pub fn new<R: AsRef<[u8]>>(rows: &[R]) -> Result<Layout, MazeError> {
        let cols = match rows.first() {
            Some(first) => first.as_ref().len(),
            None => return Err(MazeError::InvalidLayout("layout has no rows".to_owned())),
        };
        if cols == 0 {
            return Err(MazeError::InvalidLayout("layout has no columns".to_owned()));
        }
        let mut walls = BoolGrid::new(rows.len(), cols, false);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MazeError::InvalidLayout(format!(
                    "row {r} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                let blocked = match value {
                    OPEN => false,
                    WALL => true,
                    other => {
                        return Err(MazeError::InvalidLayout(format!(
                            "unknown marker {other} at ({r}, {c})"
                        )))
                    }
                };
                walls.set(r as i32, c as i32, blocked);
            }
        }
        info!("Validated {}x{} maze layout", rows.len(), cols);
        Ok(Layout { walls })
    }

    /// Returns a copy of this layout in which every obstacle is a wall.
    pub fn with_obstacles<I>(&self, obstacles: I) -> Result<Layout, MazeError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut layout = self.clone();
        for p in obstacles {
            if !layout.in_bounds(p) {
                return Err(MazeError::OutOfBounds(p));
            }
            layout.walls.set(p.x, p.y, true);
        }
        Ok(layout)
    }

    pub fn rows(&self) -> usize {
        self.walls.width()
    }

    pub fn cols(&self) -> usize {
        self.walls.height()
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.rows() && (p.y as usize) < self.cols()
    }

    /// Cells outside the grid count as walls.
    pub fn is_wall(&self, p: Point) -> bool {
        !self.in_bounds(p) || self.walls.get(p.x, p.y)
    }

    /// All wall coordinates in row-major order.
    pub fn obstacles(&self) -> Vec<Point> {
        (0..self.rows() as i32)
            .flat_map(|r| (0..self.cols() as i32).map(move |c| Point::new(r, c)))
            .filter(|p| self.walls.get(p.x, p.y))
            .collect()
    }
}

/// Parses one row per line where `.` or `0` is open and `#` or `1` is a wall.
impl FromStr for Layout {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (r, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| match ch {
                    '.' | '0' => Ok(OPEN),
                    '#' | '1' => Ok(WALL),
                    other => Err(MazeError::InvalidLayout(format!(
                        "unknown character '{other}' at ({r}, {c})"
                    ))),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        Layout::new(&rows)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|c| if self.walls.get(r, c) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
