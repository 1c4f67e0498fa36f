//! Graph Builder (§4.1): materializes the in-memory vertex/edge model from
//! an input edge list.

use crate::datastr::graph::Graph;
use crate::io::table::InputRow;

/// Builds a `Graph` from the rows of the input table. Duplicate `(from_id,
/// to_id)` rows are permitted and retained as separate edge records; the
/// vertex neighbour sets, being sets, coalesce duplicates on their own.
pub fn build(rows: &[InputRow]) -> Graph {
    let mut graph = Graph::new();
    for row in rows {
        graph.add_edge(
            &row.from_id,
            &row.to_id,
            row.from_lat,
            row.from_lon,
            row.to_lat,
            row.to_lon,
            row.d,
            row.d_weighted,
            &row.highway,
        );
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn empty_input_yields_empty_graph() {
        let graph = build(&[]);
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn builder_wires_up_neighbour_sets() {
        let graph = build(&[row("A", "B")]);
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 1);
        assert!(graph.vertex("A").unwrap().get_neighbours_out().contains("B"));
        assert!(graph.vertex("B").unwrap().get_neighbours_in().contains("A"));
    }

    #[test]
    fn duplicate_edges_are_retained_as_separate_records() {
        let graph = build(&[row("A", "B"), row("A", "B")]);
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 2);
        // vertex neighbour sets coalesce duplicates even though edges don't
        assert_eq!(graph.vertex("A").unwrap().get_degree_out(), 1);
    }

    #[test]
    fn edge_ids_are_assigned_starting_at_one_and_are_unique() {
        let graph = build(&[row("A", "B"), row("B", "C")]);
        let ids: Vec<u32> = graph.edges().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
