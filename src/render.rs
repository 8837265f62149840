//! Drawing of maze states. Rendering is not part of the search: a [Renderer] only ever sees the
//! grid size, the obstacles, the endpoints and a path.
use std::thread;
use std::time::Duration;

use fxhash::FxHashSet;
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;

use crate::layout::Layout;
use crate::solver::SearchObserver;

/// Pause between frames in [AnimationMode::Animated] when nothing else is asked for.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// What a cell is drawn as. Earlier variants win when a cell falls in several categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Obstacle,
    Endpoint,
    Path,
    Open,
}

impl CellKind {
    pub fn colour(&self) -> &'static str {
        match self {
            CellKind::Obstacle => "red",
            CellKind::Endpoint => "blue",
            CellKind::Path => "green",
            CellKind::Open => "skyblue",
        }
    }
}

/// Everything needed to draw one state of a search.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    pub rows: usize,
    pub cols: usize,
    pub obstacles: &'a FxHashSet<Point>,
    pub start: Point,
    pub goal: Point,
    pub path: &'a [Point],
}

impl Frame<'_> {
    pub fn cell_kind(&self, p: &Point) -> CellKind {
        if self.obstacles.contains(p) {
            CellKind::Obstacle
        } else if *p == self.start || *p == self.goal {
            CellKind::Endpoint
        } else if self.path.contains(p) {
            CellKind::Path
        } else {
            CellKind::Open
        }
    }
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationMode {
    /// Every frame is drawn straight away.
    Static,
    /// Waits `interval` after each frame so the search can be followed.
    Animated { interval: Duration },
}

/// Draws frames as text: `#` obstacle, `S` start, `G` goal, `*` path and `.` open. With labels
/// on, every cell also shows its coordinates. Frames accumulate in [output](Self::output),
/// separated by blank lines.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    pub labels: bool,
    pub mode: AnimationMode,
    output: String,
    frames: usize,
}

impl TextRenderer {
    pub fn new(labels: bool, mode: AnimationMode) -> TextRenderer {
        TextRenderer {
            labels,
            mode,
            output: String::new(),
            frames: 0,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// The text of a single frame.
    pub fn draw(&self, frame: &Frame) -> String {
        let mut text = String::new();
        for r in 0..frame.rows as i32 {
            let line = (0..frame.cols as i32)
                .map(|c| {
                    let p = Point::new(r, c);
                    let symbol = match frame.cell_kind(&p) {
                        CellKind::Obstacle => '#',
                        CellKind::Endpoint if p == frame.start => 'S',
                        CellKind::Endpoint => 'G',
                        CellKind::Path => '*',
                        CellKind::Open => '.',
                    };
                    if self.labels {
                        format!("{symbol}{r},{c}")
                    } else {
                        symbol.to_string()
                    }
                })
                .join(if self.labels { " " } else { "" });
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Frame) {
        if self.frames > 0 {
            self.output.push('\n');
        }
        let text = self.draw(frame);
        self.output.push_str(&text);
        self.frames += 1;
        if let AnimationMode::Animated { interval } = self.mode {
            thread::sleep(interval);
        }
    }
}

/// Forwards search progress to a [Renderer], one frame per step plus a final frame.
pub struct RenderObserver<'r, R: Renderer> {
    renderer: &'r mut R,
    obstacles: FxHashSet<Point>,
    rows: usize,
    cols: usize,
    start: Point,
    goal: Point,
}

impl<'r, R: Renderer> RenderObserver<'r, R> {
    pub fn new(renderer: &'r mut R, layout: &Layout, start: Point, goal: Point) -> Self {
        RenderObserver {
            renderer,
            obstacles: layout.obstacles().into_iter().collect(),
            rows: layout.rows(),
            cols: layout.cols(),
            start,
            goal,
        }
    }

    fn draw(&mut self, path: &[Point]) {
        let frame = Frame {
            rows: self.rows,
            cols: self.cols,
            obstacles: &self.obstacles,
            start: self.start,
            goal: self.goal,
            path,
        };
        self.renderer.render(&frame);
    }
}

impl<R: Renderer> SearchObserver for RenderObserver<'_, R> {
    fn on_step(&mut self, path: &[Point]) {
        self.draw(path);
    }

    fn on_finish(&mut self, result: Option<&[Point]>) {
        debug!("Drawing final frame");
        self.draw(result.unwrap_or(&[]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_graph::{Connectivity, MazeGraph};
    use crate::solver::{bfs::BfsSolver, GridSolver};

    fn frame_parts() -> (FxHashSet<Point>, Vec<Point>) {
        let obstacles = [Point::new(0, 1)].into_iter().collect();
        let path = vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        (obstacles, path)
    }

    #[test]
    fn categories_take_precedence_in_order() {
        let (obstacles, path) = frame_parts();
        let frame = Frame {
            rows: 2,
            cols: 2,
            obstacles: &obstacles,
            start: Point::new(0, 0),
            goal: Point::new(1, 1),
            path: &path,
        };
        assert_eq!(frame.cell_kind(&Point::new(0, 1)), CellKind::Obstacle);
        assert_eq!(frame.cell_kind(&Point::new(0, 0)), CellKind::Endpoint);
        assert_eq!(frame.cell_kind(&Point::new(1, 0)), CellKind::Path);
        assert_eq!(frame.cell_kind(&Point::new(1, 0)).colour(), "green");
        let empty = Frame { path: &[], ..frame };
        assert_eq!(empty.cell_kind(&Point::new(1, 0)), CellKind::Open);
    }

    #[test]
    fn draws_symbols_and_labels() {
        let (obstacles, path) = frame_parts();
        let frame = Frame {
            rows: 2,
            cols: 2,
            obstacles: &obstacles,
            start: Point::new(0, 0),
            goal: Point::new(1, 1),
            path: &path,
        };
        let plain = TextRenderer::new(false, AnimationMode::Static);
        assert_eq!(plain.draw(&frame), "S#\n*G\n");
        let labelled = TextRenderer::new(true, AnimationMode::Static);
        assert_eq!(labelled.draw(&frame), "S0,0 #0,1\n*1,0 G1,1\n");
    }

    #[test]
    fn observer_draws_each_step_and_the_result() {
        let layout = Layout::new(&[[0u8, 1, 0], [0, 0, 0], [0, 1, 0]]).unwrap();
        let graph = MazeGraph::new(&layout, Connectivity::Four);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let mut renderer = TextRenderer::new(false, AnimationMode::Static);
        let mut observer = RenderObserver::new(&mut renderer, &layout, start, goal);
        BfsSolver::new()
            .solve_observed(&graph, start, goal, &mut observer)
            .unwrap();
        // Five dequeues before the goal comes off the queue, then the final frame.
        assert_eq!(renderer.frame_count(), 6);
        assert!(renderer.output().ends_with("S#.\n***\n.#G\n"));
    }
}
