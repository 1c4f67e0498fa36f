//! Router (§4.6): builds an adjacency list indexed by contiguous integer
//! vertex ids, runs Dijkstra, and assembles the cost matrix used by
//! downstream absorbing-Markov-chain routing.

pub mod cost_matrix;
pub mod dijkstra;

use crate::datastr::graph::{Graph, VertexId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub to: usize,
    pub weight: f64,
}

/// Adjacency list over `0..num_vertices`.
///
/// Construction indexes directly by `from` rather than scanning for
/// `from`-runs, so there is no dependency on sorted input (resolved open
/// question 3 — the source's `fillGraph` silently drops edges on unsorted
/// input because it scans for contiguous `from` runs).
pub struct AdjacencyList {
    adj: Vec<Vec<Link>>,
}

impl AdjacencyList {
    pub fn build(num_vertices: usize, idfrom: &[usize], idto: &[usize], d: &[f64]) -> Self {
        let mut adj = vec![Vec::new(); num_vertices];
        for i in 0..idfrom.len() {
            adj[idfrom[i]].push(Link { to: idto[i], weight: d[i] });
        }
        AdjacencyList { adj }
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn neighbors(&self, node: usize) -> &[Link] {
        &self.adj[node]
    }
}

/// Re-keys the live edges of a compact (string-id) graph to contiguous
/// integer ids `0..N-1`, in lexicographic order of the original vertex id —
/// the same deterministic order the rest of the pipeline uses.
pub struct RekeyedGraph {
    pub idfrom: Vec<usize>,
    pub idto: Vec<usize>,
    pub d: Vec<f64>,
    pub id_of: HashMap<VertexId, usize>,
    pub vertex_of: Vec<VertexId>,
}

/// Only vertices still `in_compact` are numbered — vertices the Contractor
/// folded away keep their record (for coordinate lookups) but have no live
/// edges, and must not inflate `N` with phantom rows in the cost matrix.
pub fn rekey(graph: &Graph) -> RekeyedGraph {
    let vertex_of: Vec<VertexId> = graph.vertices().iter().filter(|(_, v)| v.in_compact).map(|(id, _)| id.clone()).collect();
    let id_of: HashMap<VertexId, usize> = vertex_of.iter().enumerate().map(|(i, id)| (id.clone(), i)).collect();

    let mut idfrom = Vec::new();
    let mut idto = Vec::new();
    let mut d = Vec::new();
    for edge in graph.edges().iter().filter(|e| e.in_compact) {
        idfrom.push(id_of[&edge.from_id]);
        idto.push(id_of[&edge.to_id]);
        d.push(edge.weight);
    }

    RekeyedGraph { idfrom, idto, d, id_of, vertex_of }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rekey_assigns_contiguous_ids_in_lexicographic_order() {
        use crate::algo::{builder, contract};
        use crate::io::table::InputRow;

        let rows = vec![InputRow {
            from_id: "A".into(),
            to_id: "B".into(),
            from_lon: 0.0,
            from_lat: 0.0,
            to_lon: 1.0,
            to_lat: 1.0,
            d: 1.0,
            d_weighted: 1.0,
            highway: "primary".into(),
        }];
        let mut graph = builder::build(&rows);
        contract::contract(&mut graph);
        let rekeyed = rekey(&graph);

        assert_eq!(rekeyed.vertex_of, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(rekeyed.idfrom, vec![0]);
        assert_eq!(rekeyed.idto, vec![1]);
    }

    #[test]
    fn contracted_away_vertices_are_excluded_from_numbering() {
        use crate::algo::{builder, contract};
        use crate::io::table::InputRow;

        // A -> B -> C: B is a through-vertex and collapses away, leaving
        // only A and C live in the compact graph.
        let row = |from_id: &str, to_id: &str| InputRow {
            from_id: from_id.into(),
            to_id: to_id.into(),
            from_lon: 0.0,
            from_lat: 0.0,
            to_lon: 0.0,
            to_lat: 0.0,
            d: 1.0,
            d_weighted: 1.0,
            highway: "primary".into(),
        };
        let mut graph = builder::build(&[row("A", "B"), row("B", "C")]);
        contract::contract(&mut graph);
        assert_eq!(graph.num_vertices(), 3, "B's record is retained, just disconnected");

        let rekeyed = rekey(&graph);
        assert_eq!(rekeyed.vertex_of, vec!["A".to_string(), "C".to_string()]);
        assert_eq!(rekeyed.idfrom, vec![0]);
        assert_eq!(rekeyed.idto, vec![1]);
        assert!(!rekeyed.id_of.contains_key(&"B".to_string()));
    }

    #[test]
    fn groups_edges_by_from_regardless_of_input_order() {
        // idfrom deliberately unsorted: 1, 0, 1
        let adj = AdjacencyList::build(2, &[1, 0, 1], &[0, 1, 0], &[1.0, 2.0, 3.0]);
        assert_eq!(adj.neighbors(0).len(), 1);
        assert_eq!(adj.neighbors(1).len(), 2);
    }
}
