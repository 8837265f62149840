use maze_pathfinding::render::{AnimationMode, Frame, Renderer, TextRenderer};
use maze_pathfinding::solver::astar::chebyshev;
use maze_pathfinding::{AstarSolver, GridSolver, Layout, Maze, MazeError, Point};

// Draws the shortest path through a maze once diagonal moves are allowed, next to the
// four-connected answer. Only the drawing uses diagonals.

fn main() -> Result<(), MazeError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let layout = Layout::new(&[
        [0u8, 1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
        [0, 1, 0, 1, 0, 0],
        [0, 1, 0, 0, 1, 0],
        [0, 0, 0, 0, 1, 0],
    ])?;
    let maze = Maze::new(&layout, Point::new(0, 0), Point::new(4, 5), Vec::<Point>::new())?;
    let obstacles = layout.obstacles().into_iter().collect();
    let mut renderer = TextRenderer::new(true, AnimationMode::Static);

    let straight = maze.solve(&AstarSolver::new())?;
    let diagonal = AstarSolver::with_heuristic(chebyshev).solve(
        &maze.diagonal_graph(),
        maze.start,
        maze.goal,
    )?;
    for path in [&straight, &diagonal] {
        renderer.render(&Frame {
            rows: layout.rows(),
            cols: layout.cols(),
            obstacles: &obstacles,
            start: maze.start,
            goal: maze.goal,
            path,
        });
    }
    println!("{}", renderer.output());
    println!(
        "{} steps without diagonals, {} with",
        straight.len() - 1,
        diagonal.len() - 1
    );
    Ok(())
}
