//! # maze_pathfinding
//!
//! Shortest paths through small occupancy-grid mazes. A [Layout] of open (`0`) and wall (`1`)
//! cells becomes a [MazeGraph] linking each open cell to its open neighbours, which is then
//! searched either with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) or with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) guided by the Manhattan distance.
//! Every move costs 1, so both return paths with the fewest moves. Searches can be watched
//! through a [SearchObserver](solver::SearchObserver), which is how the text renderer in
//! [render] animates them.
mod search;

pub mod error;
pub mod layout;
pub mod maze_graph;
pub mod render;
pub mod solver;

pub use error::MazeError;
pub use grid_util::point::Point;
pub use layout::Layout;
pub use maze_graph::{Connectivity, MazeGraph};
pub use solver::{astar::AstarSolver, bfs::BfsSolver, GridSolver};

use log::info;
use render::{RenderObserver, Renderer};

/// Inline capacity of neighbour lists; a cell has at most eight neighbours.
pub const N_SMALLVEC_SIZE: usize = 8;

/// A maze with fixed endpoints: the layout with its obstacles folded in, the four-connected
/// graph both solvers run on, and the start and goal cells.
#[derive(Clone, Debug)]
pub struct Maze {
    pub layout: Layout,
    pub graph: MazeGraph,
    pub start: Point,
    pub goal: Point,
}

impl Maze {
    /// Marks every obstacle as a wall and checks that start and goal are open cells.
    pub fn new<I>(layout: &Layout, start: Point, goal: Point, obstacles: I) -> Result<Maze, MazeError>
    where
        I: IntoIterator<Item = Point>,
    {
        let layout = layout.with_obstacles(obstacles)?;
        for p in [start, goal] {
            if layout.is_wall(p) {
                return Err(MazeError::OutOfBounds(p));
            }
        }
        let graph = MazeGraph::new(&layout, Connectivity::Four);
        info!("Maze ready: {} to {}", start, goal);
        Ok(Maze {
            layout,
            graph,
            start,
            goal,
        })
    }

    /// The same maze with diagonal moves, for drawing only.
    pub fn diagonal_graph(&self) -> MazeGraph {
        MazeGraph::new(&self.layout, Connectivity::Eight)
    }

    pub fn solve<S: GridSolver>(&self, solver: &S) -> Result<Vec<Point>, MazeError> {
        solver.solve(&self.graph, self.start, self.goal)
    }

    /// Solves while drawing one frame per search step and a final frame with the result.
    pub fn solve_rendered<S, R>(&self, solver: &S, renderer: &mut R) -> Result<Vec<Point>, MazeError>
    where
        S: GridSolver,
        R: Renderer,
    {
        let mut observer = RenderObserver::new(renderer, &self.layout, self.start, self.goal);
        solver.solve_observed(&self.graph, self.start, self.goal, &mut observer)
    }
}
