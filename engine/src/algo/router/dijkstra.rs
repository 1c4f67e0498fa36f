//! Dijkstra's algorithm with lazy-deletion revalidation on pop, the
//! simplification §4.6 explicitly permits in place of a decrease-key heap.

use super::AdjacencyList;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    dist: f64,
    node: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap`, a max-heap, pops the smallest distance.
        other.dist.total_cmp(&self.dist).then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct DijkstraResult {
    pub min_distance: Vec<f64>,
    pub previous: Vec<Option<usize>>,
}

pub fn dijkstra(adj: &AdjacencyList, source: usize) -> DijkstraResult {
    let n = adj.num_vertices();
    let mut min_distance = vec![f64::INFINITY; n];
    let mut previous = vec![None; n];
    min_distance[source] = 0.0;

    let mut queue = BinaryHeap::new();
    queue.push(HeapEntry { dist: 0.0, node: source });

    while let Some(HeapEntry { dist, node }) = queue.pop() {
        // Stale entry: a shorter path to `node` was already settled.
        if dist > min_distance[node] {
            continue;
        }

        for link in adj.neighbors(node) {
            let candidate = dist + link.weight;
            if candidate < min_distance[link.to] {
                min_distance[link.to] = candidate;
                previous[link.to] = Some(node);
                queue.push(HeapEntry { dist: candidate, node: link.to });
            }
        }
    }

    DijkstraResult { min_distance, previous }
}

/// Walks `previous` back from `target` to the source and reverses it.
/// Returns `[target]` alone if `target` is unreachable (or is the source).
pub fn reconstruct_path(previous: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = previous[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    path
}
