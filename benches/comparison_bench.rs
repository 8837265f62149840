use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{AstarSolver, BfsSolver, Connectivity, GridSolver, Layout, MazeGraph, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 32, 64];

fn random_graph(n: usize, rng: &mut StdRng) -> MazeGraph {
    let mut cells = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(0.25) as u8).collect::<Vec<u8>>())
        .collect::<Vec<_>>();
    cells[0][0] = 0;
    cells[n - 1][n - 1] = 0;
    let layout = Layout::new(&cells).expect("generated layouts are rectangular");
    MazeGraph::new(&layout, Connectivity::Four)
}

fn bench_solver<S, FS>(c: &mut Criterion, solver_name: &str, create_solver: FS)
where
    S: GridSolver,
    FS: Fn() -> S,
{
    let mut rng = StdRng::seed_from_u64(0);
    for n in SIZES {
        let graphs = (0..16)
            .map(|_| random_graph(n, &mut rng))
            .collect::<Vec<_>>();
        let solver = create_solver();
        let start = Point::new(0, 0);
        let end = Point::new(n as i32 - 1, n as i32 - 1);
        c.bench_function(format!("{solver_name}, {n}x{n}").as_str(), |b| {
            b.iter(|| {
                for graph in &graphs {
                    let _ = black_box(solver.solve(graph, start, end));
                }
            })
        });
    }
}

fn maze_bench_bfs(c: &mut Criterion) {
    bench_solver(c, "BFS", BfsSolver::new);
}

fn maze_bench_astar(c: &mut Criterion) {
    bench_solver(c, "Astar", AstarSolver::new);
}

criterion_group!(benches, maze_bench_bfs, maze_bench_astar);
criterion_main!(benches);
