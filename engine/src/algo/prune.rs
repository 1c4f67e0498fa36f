//! Component Pruner (§4.3): drops every vertex outside the largest
//! component, and every edge with either endpoint pruned.
//!
//! The source only checks `from_id` when dropping edges; this checks both
//! endpoints (resolved open question 1).

use crate::algo::component::ComponentLabels;
use crate::datastr::graph::Graph;

pub fn prune(graph: &mut Graph, labels: &ComponentLabels, largest: usize) {
    graph.retain_vertices(|id| labels.label.get(id) == Some(&largest));

    let label = &labels.label;
    graph.retain_edges(|edge| label.get(edge.from_id.as_str()) == Some(&largest) && label.get(edge.to_id.as_str()) == Some(&largest));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{builder, component};
    use crate::io::table::InputRow;

    fn row(from: &str, to: &str) -> InputRow {
        InputRow {
            from_id: from.to_string(),
            to_id: to.to_string(),
            from_lon: 0.0,
            from_lat: 0.0,
            to_lon: 1.0,
            to_lat: 1.0,
            d: 1.0,
            d_weighted: 1.0,
            highway: "primary".to_string(),
        }
    }

    #[test]
    fn prunes_the_smaller_fragment() {
        let mut graph = builder::build(&[row("A", "B"), row("B", "C"), row("X", "Y")]);
        let labels = component::analyze(&graph);
        let largest = labels.largest.unwrap();
        prune(&mut graph, &labels, largest);

        assert_eq!(graph.num_vertices(), 3);
        assert!(graph.vertex("A").is_some());
        assert!(graph.vertex("X").is_none());
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn edge_with_either_endpoint_pruned_is_dropped() {
        // Simulates a mislabeled graph where an edge straddles the prune
        // boundary: only the `to_id` endpoint is pruned.
        let mut graph = builder::build(&[row("A", "B")]);
        let mut labels = component::analyze(&graph);
        labels.label.insert("B".to_string(), 999);
        prune(&mut graph, &labels, labels.label["A"]);

        assert!(graph.vertex("A").is_some());
        assert!(graph.vertex("B").is_none());
        assert_eq!(graph.num_edges(), 0);
    }
}
