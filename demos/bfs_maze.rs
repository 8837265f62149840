use maze_pathfinding::{BfsSolver, Layout, Maze, MazeError, Point};

// In this example a path is found on the 5x6 maze
// S#....
// ......
// .#.#..
// .#..#.
// ....#G
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Cells have a 4-neighborhood

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
    let obstacles = [(0, 1), (2, 1), (3, 1), (2, 3), (3, 4), (4, 4)]
        .into_iter()
        .map(|(r, c)| Point::new(r, c));
    let maze = Maze::new(&layout, Point::new(0, 0), Point::new(4, 5), obstacles)?;
    println!("{}", maze.graph);
    match maze.solve(&BfsSolver::new()) {
        Ok(path) => {
            println!("Success! Shortest path:");
            for p in path {
                println!("{:?}", p);
            }
        }
        Err(e) => println!("Failed to reach the end node: {e}"),
    }
    Ok(())
}
