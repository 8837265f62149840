use maze_pathfinding::render::{AnimationMode, Frame, Renderer, DEFAULT_FRAME_INTERVAL};
use maze_pathfinding::{BfsSolver, Layout, Maze, MazeError, Point};

// Animates a breadth-first search in the terminal, redrawing the maze after every step.

struct TerminalRenderer {
    mode: AnimationMode,
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, frame: &Frame) {
        let text = maze_pathfinding::render::TextRenderer::new(false, self.mode).draw(frame);
        // Clear the screen and home the cursor before each frame.
        print!("\x1B[2J\x1B[H{text}");
        if let AnimationMode::Animated { interval } = self.mode {
            std::thread::sleep(interval);
        }
    }
}

fn main() -> Result<(), MazeError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let layout: Layout = "
        .#....
        ......
        .#.#..
        .#..#.
        ....#.
    "
    .parse()?;
    let maze = Maze::new(&layout, Point::new(0, 0), Point::new(4, 5), Vec::<Point>::new())?;
    let mut renderer = TerminalRenderer {
        mode: AnimationMode::Animated {
            interval: DEFAULT_FRAME_INTERVAL,
        },
    };
    match maze.solve_rendered(&BfsSolver::new(), &mut renderer) {
        Ok(path) => println!("Success! Shortest path:\n{:?}", path),
        Err(e) => println!("Failed to reach the end node: {e}"),
    }
    Ok(())
}
