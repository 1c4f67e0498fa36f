//! Exporter (§4.5): serializes the compact graph, the original graph, and
//! the compact → original edge-id replacement map.

use crate::datastr::graph::{EdgeId, Graph};
use crate::io::table::{GraphRow, MapRow};
use std::collections::{HashMap, HashSet};

fn project_row(graph: &Graph, edge: &crate::datastr::graph::Edge) -> GraphRow {
    let from = graph.vertex(&edge.from_id).expect("edge endpoint must exist");
    let to = graph.vertex(&edge.to_id).expect("edge endpoint must exist");
    GraphRow {
        from_id: edge.from_id.clone(),
        to_id: edge.to_id.clone(),
        edge_id: edge.id,
        d: edge.distance,
        d_weighted: edge.weight,
        from_lat: from.lat(),
        from_lon: from.lon(),
        to_lat: to.lat(),
        to_lon: to.lon(),
        highway: edge.highway.clone(),
    }
}

pub fn compact_rows(graph: &Graph) -> Vec<GraphRow> {
    graph.edges().iter().filter(|e| e.in_compact).map(|e| project_row(graph, e)).collect()
}

pub fn original_rows(graph: &Graph) -> Vec<GraphRow> {
    graph.edges().iter().filter(|e| e.in_original).map(|e| project_row(graph, e)).collect()
}

/// Recursively expands `replacing_edges` down to original edge ids. An edge
/// that was never contracted (`replacing_edges` empty) resolves to itself —
/// the "singleton self-mapping" rule for never-contracted edges.
fn resolve_original_ids(by_id: &HashMap<EdgeId, &crate::datastr::graph::Edge>, edge: &crate::datastr::graph::Edge, out: &mut HashSet<EdgeId>) {
    if edge.in_original {
        out.insert(edge.id);
        return;
    }
    if edge.replacing_edges.is_empty() {
        out.insert(edge.id);
        return;
    }
    for predecessor_id in &edge.replacing_edges {
        if let Some(predecessor) = by_id.get(predecessor_id) {
            resolve_original_ids(by_id, predecessor, out);
        } else {
            out.insert(*predecessor_id);
        }
    }
}

/// For every live compact edge, the set of original edge ids it represents.
pub fn replacement_map(graph: &Graph) -> Vec<MapRow> {
    let by_id: HashMap<EdgeId, &crate::datastr::graph::Edge> = graph.edges().iter().map(|e| (e.id, e)).collect();

    let mut rows = Vec::new();
    for edge in graph.edges().iter().filter(|e| e.in_compact) {
        let mut originals = HashSet::new();
        resolve_original_ids(&by_id, edge, &mut originals);
        let mut originals: Vec<EdgeId> = originals.into_iter().collect();
        originals.sort_unstable();
        for id_original in originals {
            rows.push(MapRow {
                id_compact: edge.id,
                id_original,
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_graph() -> Graph {
        let mut g = Graph::new();
        g.add_edge("A", "B", 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, "primary");
        g.add_edge("B", "C", 0.0, 1.0, 0.0, 2.0, 2.0, 2.0, "primary");
        g
    }

    #[test]
    fn never_contracted_edge_maps_to_itself() {
        let g = triangle_graph();
        let rows = replacement_map(&g);
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.id_compact, row.id_original);
        }
    }

    #[test]
    fn synthesized_edge_resolves_to_original_endpoints() {
        let mut g = triangle_graph();
        let mut replacing = HashSet::new();
        replacing.insert(1u32);
        replacing.insert(2u32);
        let synth_id = g.add_synthetic_edge("A".into(), "C".into(), 3.0, 3.0, "primary".into(), replacing);
        for e in g.edges_mut() {
            if e.id == 1 || e.id == 2 {
                e.in_compact = false;
            }
        }
        let rows = replacement_map(&g);
        let mapped: Vec<u32> = rows.iter().filter(|r| r.id_compact == synth_id).map(|r| r.id_original).collect();
        assert_eq!(mapped, vec![1, 2]);
    }
}
