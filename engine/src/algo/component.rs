//! Component Analyzer (§4.2): labels every vertex with its weakly-connected
//! component id and identifies the largest component.
//!
//! Union-find over the undirected projection of the edge set replaces the
//! source's order-sensitive neighbour-merge pass (resolved open question 4).

use crate::datastr::graph::union_find::UnionFind;
use crate::datastr::graph::{Graph, VertexId};
use std::collections::HashMap;

pub struct ComponentLabels {
    pub label: HashMap<VertexId, usize>,
    /// `None` only when the graph has no vertices.
    pub largest: Option<usize>,
}

pub fn analyze(graph: &Graph) -> ComponentLabels {
    // `Graph::vertices()` is a `BTreeMap`, so this order is lexicographic by
    // vertex id; that's what makes "smallest id wins" tie-breaking below
    // fall out of first-seen order rather than needing a second pass.
    let ids: Vec<VertexId> = graph.vertices().keys().cloned().collect();
    let index_of: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (id.as_str(), i)).collect();

    let mut uf = UnionFind::new(ids.len());
    for edge in graph.edges() {
        uf.union(index_of[edge.from_id.as_str()], index_of[edge.to_id.as_str()]);
    }
    let roots = uf.into_labeling();

    let mut dense_label_of_root: HashMap<usize, usize> = HashMap::new();
    let mut label = HashMap::with_capacity(ids.len());
    let mut sizes: Vec<usize> = Vec::new();

    for (i, id) in ids.iter().enumerate() {
        let root = roots[i];
        let dense = *dense_label_of_root.entry(root).or_insert_with(|| {
            sizes.push(0);
            sizes.len() - 1
        });
        sizes[dense] += 1;
        label.insert(id.clone(), dense);
    }

    let largest = sizes
        .iter()
        .enumerate()
        .max_by_key(|&(idx, &size)| (size, std::cmp::Reverse(idx)))
        .map(|(idx, _)| idx);

    ComponentLabels { label, largest }
}
