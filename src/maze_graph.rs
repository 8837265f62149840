use crate::layout::Layout;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets as (row, column) deltas in the order right, left, down, up. Breadth-first search
/// visits neighbours in this order, which decides among equally short paths.
static ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
static DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Which surrounding cells count as adjacent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    /// Orthogonal moves only. Used by both solvers.
    Four,
    /// Orthogonal and diagonal moves, used to draw the diagonal maze.
    Eight,
}

impl Connectivity {
    pub fn offsets(&self) -> impl Iterator<Item = &'static (i32, i32)> {
        let diagonal: &'static [(i32, i32)] = match self {
            Connectivity::Four => &[],
            Connectivity::Eight => &DIAGONAL,
        };
        ORTHOGONAL.iter().chain(diagonal.iter())
    }

    /// Whether `a` and `b` are one move apart.
    pub fn adjacent(&self, a: &Point, b: &Point) -> bool {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        match self {
            Connectivity::Four => dx + dy == 1,
            Connectivity::Eight => dx.max(dy) == 1,
        }
    }
}

/// [MazeGraph] links every open cell of a [Layout] to its open neighbours. Neighbour lists are
/// computed once and never change, so one graph can back any number of searches; all search
/// state lives with the solver. A [UnionFind] over the same links records which cells are
/// connected at all.
#[derive(Clone, Debug)]
pub struct MazeGraph {
    pub layout: Layout,
    pub connectivity: Connectivity,
    pub components: UnionFind<usize>,
    neighbours: Vec<SmallVec<[Point; N_SMALLVEC_SIZE]>>,
}

impl MazeGraph {
    pub fn new(layout: &Layout, connectivity: Connectivity) -> MazeGraph {
        let n = layout.rows() * layout.cols();
        let mut graph = MazeGraph {
            layout: layout.clone(),
            connectivity,
            components: UnionFind::new(n),
            neighbours: vec![SmallVec::new(); n],
        };
        for p in graph.cells().collect::<Vec<_>>() {
            if graph.layout.is_wall(p) {
                continue;
            }
            let linked = connectivity
                .offsets()
                .map(|(dx, dy)| Point::new(p.x + dx, p.y + dy))
                .filter(|n| !graph.layout.is_wall(*n))
                .collect::<SmallVec<[Point; N_SMALLVEC_SIZE]>>();
            let ix = graph.get_ix(&p);
            graph.neighbours[ix] = linked;
        }
        graph.generate_components();
        info!(
            "Built {:?}-connected graph over {}x{} maze",
            connectivity,
            graph.rows(),
            graph.cols()
        );
        graph
    }

    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// Row-major index of an in-bounds cell.
    pub fn get_ix(&self, p: &Point) -> usize {
        p.x as usize * self.cols() + p.y as usize
    }

    pub fn in_bounds(&self, p: &Point) -> bool {
        self.layout.in_bounds(*p)
    }

    pub fn is_wall(&self, p: &Point) -> bool {
        self.layout.is_wall(*p)
    }

    /// Whether `p` is inside the grid and open.
    pub fn can_move_to(&self, p: &Point) -> bool {
        !self.layout.is_wall(*p)
    }

    /// The open cells adjacent to `p`, in probe order. Walls and out-of-bounds points have none.
    pub fn neighbours(&self, p: &Point) -> &[Point] {
        if self.in_bounds(p) {
            &self.neighbours[self.get_ix(p)]
        } else {
            &[]
        }
    }

    /// Every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols() as i32;
        (0..self.rows() as i32).flat_map(move |r| (0..cols).map(move |c| Point::new(r, c)))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells().filter(move |p| self.can_move_to(p))
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, p: &Point) -> usize {
        self.components.find(self.get_ix(p))
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(start) && self.can_move_to(goal) {
            !self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// Links up graph neighbours in a fresh [UnionFind] structure.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.rows() * self.cols());
        for p in self.open_cells() {
            let ix = self.get_ix(&p);
            for n in self.neighbours(&p) {
                components.union(ix, self.get_ix(n));
            }
        }
        self.components = components;
    }
}

impl fmt::Display for MazeGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for r in 0..self.rows() as i32 {
            let values = (0..self.cols() as i32)
                .map(|c| self.is_wall(&Point::new(r, c)) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_layout() -> Layout {
        Layout::new(&[[0u8, 1, 0], [0, 0, 0], [0, 1, 0]]).unwrap()
    }

    #[test]
    fn probes_right_left_down_up() {
        let layout = Layout::new(&[[0u8; 3]; 3]).unwrap();
        let graph = MazeGraph::new(&layout, Connectivity::Four);
        assert_eq!(
            graph.neighbours(&Point::new(1, 1)),
            &[
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(0, 1)
            ]
        );
        assert_eq!(
            graph.neighbours(&Point::new(0, 0)),
            &[Point::new(0, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn walls_have_no_links() {
        let graph = MazeGraph::new(&example_layout(), Connectivity::Four);
        assert!(graph.neighbours(&Point::new(0, 1)).is_empty());
        assert!(graph.neighbours(&Point::new(-1, 0)).is_empty());
        assert_eq!(graph.neighbours(&Point::new(0, 0)), &[Point::new(1, 0)]);
        for p in graph.open_cells() {
            assert!(graph
                .neighbours(&p)
                .iter()
                .all(|n| graph.can_move_to(n) && !graph.is_wall(n)));
        }
    }

    #[test]
    fn diagonal_links() {
        let graph = MazeGraph::new(&example_layout(), Connectivity::Eight);
        assert_eq!(
            graph.neighbours(&Point::new(0, 0)),
            &[Point::new(1, 0), Point::new(1, 1)]
        );
        assert_eq!(graph.neighbours(&Point::new(1, 1)).len(), 6);
    }

    #[test]
    fn adjacency_is_symmetric() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let graph = MazeGraph::new(&example_layout(), connectivity);
            for p in graph.open_cells() {
                for n in graph.neighbours(&p) {
                    assert!(graph.neighbours(n).contains(&p));
                    assert!(connectivity.adjacent(&p, n));
                }
            }
        }
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |. # .|
        // |. # .|
        let layout = Layout::new(&[[0u8, 1, 0], [0, 1, 0]]).unwrap();
        let graph = MazeGraph::new(&layout, Connectivity::Four);
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 1);
        let p3 = Point::new(1, 0);
        let p4 = Point::new(0, 2);
        assert!(graph.unreachable(&p1, &p2));
        assert!(graph.reachable(&p1, &p3));
        assert!(graph.unreachable(&p1, &p4));
        assert_eq!(graph.get_component(&p1), graph.get_component(&p3));
    }

    // Tests whether allowing diagonals has the expected effect on reachability in a minimal setting.
    #[test]
    fn test_diagonal_switch_reachable() {
        // |.#|
        // |#.|
        let layout = Layout::new(&[[0u8, 1], [1, 0]]).unwrap();
        let start = Point::new(0, 0);
        let end = Point::new(1, 1);
        assert!(MazeGraph::new(&layout, Connectivity::Four).unreachable(&start, &end));
        assert!(MazeGraph::new(&layout, Connectivity::Eight).reachable(&start, &end));
    }

    #[test]
    fn display_prints_occupancy() {
        let graph = MazeGraph::new(&example_layout(), Connectivity::Four);
        assert_eq!(
            graph.to_string(),
            "Grid:\n[0, 1, 0]\n[0, 0, 0]\n[0, 1, 0]\n"
        );
    }
}
