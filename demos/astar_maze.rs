use maze_pathfinding::{AstarSolver, Layout, Maze, MazeError, Point};

// A* on a maze given as text, where
// - # marks a wall
// - . marks an open cell
//
// The path runs from the top left to the bottom right corner.

const MAZE: &str = "
    ..#.......
    ..#.####..
    ....#.....
    ###.#.###.
    ....#...#.
    .####.#.#.
    ......#...
";

fn main() -> Result<(), MazeError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let layout: Layout = MAZE.parse()?;
    let goal = Point::new(layout.rows() as i32 - 1, layout.cols() as i32 - 1);
    let maze = Maze::new(&layout, Point::new(0, 0), goal, Vec::<Point>::new())?;
    match maze.solve(&AstarSolver::new()) {
        Ok(path) => {
            println!("Success! Shortest path ({} steps):", path.len() - 1);
            println!("{:?}", path);
        }
        Err(e) => println!("Failed to reach the end node: {e}"),
    }
    Ok(())
}
