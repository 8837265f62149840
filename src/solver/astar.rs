use core::fmt;
use grid_util::point::Point;

use crate::error::MazeError;
use crate::maze_graph::MazeGraph;
use crate::search::{astar_search, SearchFailure};
use crate::solver::{GridSolver, SearchObserver};

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry). Admissible and
/// consistent on a four-connected grid with unit move costs.
pub fn manhattan(p1: &Point, p2: &Point) -> i32 {
    p1.manhattan_distance(p2)
}

/// [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance), the admissible choice
/// once diagonal moves are allowed.
pub fn chebyshev(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs().max((p1.y - p2.y).abs())
}

/// A* over unit-cost moves. Search state is kept per solve, so the graph can be shared freely.
#[derive(Clone)]
pub struct AstarSolver {
    pub heuristic: fn(&Point, &Point) -> i32,
    /// Gives up with [MazeError::ExpansionLimit] after expanding this many cells.
    pub max_expansions: Option<usize>,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver {
            heuristic: manhattan,
            max_expansions: None,
        }
    }
}

impl fmt::Debug for AstarSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstarSolver")
            .field("max_expansions", &self.max_expansions)
            .finish_non_exhaustive()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_heuristic(heuristic: fn(&Point, &Point) -> i32) -> AstarSolver {
        AstarSolver {
            heuristic,
            ..AstarSolver::default()
        }
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(
        &self,
        graph: &MazeGraph,
        start: Point,
        goal: Point,
        observer: &mut dyn SearchObserver,
    ) -> Result<Vec<Point>, MazeError> {
        let active = observer.is_active();
        let mut report = |path: &[Point]| observer.on_step(path);
        let on_expand: Option<&mut dyn FnMut(&[Point])> = if active {
            Some(&mut report)
        } else {
            None
        };
        astar_search(
            &start,
            |node| graph.neighbours(node).iter().map(|n| (*n, 1)),
            |node| (self.heuristic)(node, &goal),
            |node| *node == goal,
            self.max_expansions,
            on_expand,
        )
        .map(|(path, _cost)| path)
        .map_err(|failure| match failure {
            SearchFailure::Exhausted => MazeError::NoPathFound { start, goal },
            SearchFailure::LimitReached(limit) => MazeError::ExpansionLimit { limit },
        })
    }
}
