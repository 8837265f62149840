//! Best-first search core behind [AstarSolver](crate::solver::astar::AstarSolver). Per-node
//! search state (cost so far, heuristic, parent) lives in an index map owned by one call,
//! so the graph being searched is never mutated.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Why [astar_search] stopped without a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Every reachable node was closed without satisfying the goal test.
    Exhausted,
    /// The expansion cap was hit first.
    LimitReached(usize),
}

/// Search state for one node during one search.
#[derive(Clone, Copy, Debug)]
struct SearchRecord<C> {
    parent: usize,
    g: C,
    h: C,
    closed: bool,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    // Reversed so the max-heap pops the smallest f first. Ties are left to the heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other.estimated_cost.cmp(&self.estimated_cost)
    }
}

fn reverse_path<N, C>(records: &FxIndexMap<N, SearchRecord<C>>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        records.get_index(i).map(|(node, record)| {
            i = record.parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// A* from `start` until `success` holds for an extracted node. Returns the path (start first)
/// and its cost. `on_expand`, when given, receives the best known path to every node as it is
/// expanded.
pub fn astar_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
    mut on_expand: Option<&mut dyn FnMut(&[N])>,
) -> Result<(Vec<N>, C), SearchFailure>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut records: FxIndexMap<N, SearchRecord<C>> = FxIndexMap::default();
    let h = heuristic(start);
    records.insert(
        start.clone(),
        SearchRecord {
            parent: usize::MAX,
            g: Zero::zero(),
            h,
            closed: false,
        },
    );
    to_see.push(SmallestCostHolder {
        estimated_cost: h,
        cost: Zero::zero(),
        index: 0,
    });
    let mut expansions = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let node = {
            let Some((node, record)) = records.get_index_mut(index) else {
                continue;
            };
            // A node is pushed again every time a cheaper way to it is found. Only the entry
            // carrying its current best cost is live.
            if record.closed || cost > record.g {
                continue;
            }
            if success(node) {
                debug!("Goal extracted after {} expansions", expansions);
                return Ok((reverse_path(&records, index), cost));
            }
            if let Some(limit) = max_expansions {
                if expansions >= limit {
                    return Err(SearchFailure::LimitReached(limit));
                }
            }
            record.closed = true;
            node.clone()
        };
        expansions += 1;
        if let Some(callback) = on_expand.as_mut() {
            callback(&reverse_path(&records, index));
        }
        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match records.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchRecord {
                        parent: index,
                        g: new_cost,
                        h,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    if e.get().closed || e.get().g <= new_cost {
                        continue;
                    }
                    h = e.get().h;
                    n = e.index();
                    e.insert(SearchRecord {
                        parent: index,
                        g: new_cost,
                        h,
                        closed: false,
                    });
                }
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!("Frontier exhausted after {} expansions", expansions);
    Err(SearchFailure::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A line 0 - 1 - 2 - 3 with a costly shortcut 0 - 3.
    fn line_successors(n: &u32) -> Vec<(u32, u32)> {
        let mut succ = Vec::new();
        if *n > 0 {
            succ.push((n - 1, 1));
        }
        if *n < 3 {
            succ.push((n + 1, 1));
        }
        if *n == 0 {
            succ.push((3, 5));
        }
        succ
    }

    #[test]
    fn prefers_cheaper_route_over_fewer_hops() {
        let (path, cost) =
            astar_search(&0u32, line_successors, |n| 3 - n, |n| *n == 3, None, None).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn start_satisfying_goal_is_returned_alone() {
        let (path, cost) =
            astar_search(&2u32, line_successors, |_| 0, |n| *n == 2, None, None).unwrap();
        assert_eq!(path, vec![2]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhaustion_and_limits() {
        assert_eq!(
            astar_search(&0u32, line_successors, |_| 0, |n| *n == 9, None, None),
            Err(SearchFailure::Exhausted)
        );
        assert_eq!(
            astar_search(&0u32, line_successors, |_| 0, |n| *n == 3, Some(1), None),
            Err(SearchFailure::LimitReached(1))
        );
    }

    #[test]
    fn expansion_callback_sees_best_paths() {
        let mut seen: Vec<Vec<u32>> = Vec::new();
        let mut record = |p: &[u32]| seen.push(p.to_vec());
        astar_search(
            &0u32,
            line_successors,
            |n| 3 - n,
            |n| *n == 3,
            None,
            Some(&mut record),
        )
        .unwrap();
        assert_eq!(seen, vec![vec![0], vec![0, 1], vec![0, 1, 2]]);
    }
}
