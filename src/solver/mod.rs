use crate::error::MazeError;
use crate::maze_graph::MazeGraph;
use grid_util::point::Point;
use log::{info, warn};

pub mod astar;
pub mod bfs;

/// Number of moves along a path, which is also its cost since every move costs 1.
pub fn path_cost(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that `path` runs from `start` to `goal` over open cells, each one move from the
/// previous under the graph's connectivity.
pub fn is_valid_path(graph: &MazeGraph, path: &[Point], start: Point, goal: Point) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&goal)
        && path.iter().all(|p| graph.can_move_to(p))
        && path
            .windows(2)
            .all(|w| graph.connectivity.adjacent(&w[0], &w[1]))
}

/// Receives the progress of a search. Renderers hook in here.
pub trait SearchObserver {
    /// Whether the observer wants per-step paths. Solvers skip building them when it does not.
    fn is_active(&self) -> bool {
        true
    }
    /// Called once per frontier extraction with the path to the cell being explored.
    fn on_step(&mut self, path: &[Point]);
    /// Called once when a solve ends, with the found path if there is one.
    fn on_finish(&mut self, _result: Option<&[Point]>) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn is_active(&self) -> bool {
        false
    }
    fn on_step(&mut self, _: &[Point]) {}
}

pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Runs the search proper. Callers go through [solve](Self::solve), which has already
    /// checked that both endpoints are open cells and that they differ.
    fn search(
        &self,
        graph: &MazeGraph,
        start: Point,
        goal: Point,
        observer: &mut dyn SearchObserver,
    ) -> Result<Vec<Point>, MazeError>;

    /// Computes a path from start to goal, both included.
    fn solve(&self, graph: &MazeGraph, start: Point, goal: Point) -> Result<Vec<Point>, MazeError> {
        self.solve_observed(graph, start, goal, &mut NoopObserver)
    }

    /// Like [solve](Self::solve), reporting every step and the final result to `observer`.
    fn solve_observed(
        &self,
        graph: &MazeGraph,
        start: Point,
        goal: Point,
        observer: &mut dyn SearchObserver,
    ) -> Result<Vec<Point>, MazeError> {
        for p in [start, goal] {
            if !graph.can_move_to(&p) {
                return Err(MazeError::OutOfBounds(p));
            }
        }
        let result = if start == goal {
            Ok(vec![start])
        } else if graph.unreachable(&start, &goal) {
            // Different components: no search can succeed.
            Err(MazeError::NoPathFound { start, goal })
        } else {
            self.search(graph, start, goal, observer)
        };
        match &result {
            Ok(path) => {
                info!(
                    "{}: shortest path from {} to {} takes {} steps",
                    self.name(),
                    start,
                    goal,
                    path_cost(path)
                );
                observer.on_finish(Some(path));
            }
            Err(e) => {
                warn!("{}: {}", self.name(), e);
                observer.on_finish(None);
            }
        }
        result
    }
}
