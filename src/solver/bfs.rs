use std::collections::VecDeque;

use fxhash::FxHashSet;
use grid_util::point::Point;
use log::debug;

use crate::error::MazeError;
use crate::maze_graph::MazeGraph;
use crate::solver::{GridSolver, SearchObserver};

/// Breadth-first search that carries the path to each frontier cell along with it in the queue
/// instead of keeping parent pointers. The first time the goal leaves the queue its path is a
/// shortest one; among equally short paths the graph's neighbour order (right, left, down, up)
/// decides.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver {
    /// Gives up with [MazeError::ExpansionLimit] after expanding this many cells.
    pub max_expansions: Option<usize>,
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver::default()
    }
}

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(
        &self,
        graph: &MazeGraph,
        start: Point,
        goal: Point,
        observer: &mut dyn SearchObserver,
    ) -> Result<Vec<Point>, MazeError> {
        let mut visited: FxHashSet<Point> = FxHashSet::default();
        let mut queue: VecDeque<(Point, Vec<Point>)> = VecDeque::new();
        queue.push_back((start, Vec::new()));
        let mut current_path: Vec<Point> = Vec::new();
        while let Some((cell, mut path)) = queue.pop_front() {
            if cell == goal {
                path.push(cell);
                debug!("BFS reached the goal after {} expansions", visited.len());
                return Ok(path);
            }
            if visited.insert(cell) {
                if let Some(limit) = self.max_expansions {
                    if visited.len() > limit {
                        return Err(MazeError::ExpansionLimit { limit });
                    }
                }
                path.push(cell);
                current_path = path;
                for n in graph.neighbours(&cell) {
                    if !visited.contains(n) {
                        queue.push_back((*n, current_path.clone()));
                    }
                }
            }
            if observer.is_active() {
                observer.on_step(&current_path);
            }
        }
        debug!("BFS frontier exhausted after {} expansions", visited.len());
        Err(MazeError::NoPathFound { start, goal })
    }
}

/// Number of moves from `start` to every cell, indexed like [MazeGraph::get_ix]. [None] marks
/// walls and cells that cannot be reached.
pub fn distance_map(graph: &MazeGraph, start: Point) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.rows() * graph.cols()];
    if !graph.can_move_to(&start) {
        return distances;
    }
    let mut queue = VecDeque::new();
    distances[graph.get_ix(&start)] = Some(0);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        let Some(d) = distances[graph.get_ix(&cell)] else {
            continue;
        };
        for n in graph.neighbours(&cell) {
            let ix = graph.get_ix(n);
            if distances[ix].is_none() {
                distances[ix] = Some(d + 1);
                queue.push_back(*n);
            }
        }
    }
    distances
}
