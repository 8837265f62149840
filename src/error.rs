use core::fmt;
use grid_util::point::Point;

/// Errors raised while building a maze or searching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The occupancy layout is empty, ragged or holds an unknown marker.
    InvalidLayout(String),
    /// A start, goal or obstacle lies outside the grid or on a wall.
    OutOfBounds(Point),
    /// The frontier was exhausted without reaching the goal.
    NoPathFound { start: Point, goal: Point },
    /// The search expanded more cells than its configured cap allows.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLayout(reason) => write!(f, "invalid maze layout: {reason}"),
            Self::OutOfBounds(p) => {
                write!(f, "cell ({}, {}) is outside the maze or a wall", p.x, p.y)
            }
            Self::NoPathFound { start, goal } => write!(
                f,
                "failed to reach the end node: no path from ({}, {}) to ({}, {})",
                start.x, start.y, goal.x, goal.y
            ),
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after expanding {limit} cells")
            }
        }
    }
}

impl std::error::Error for MazeError {}
