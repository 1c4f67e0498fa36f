//! Core library for turning a directed, weighted OSM-style road-network
//! edge list into a routing-ready compact graph.
//!
//! The pipeline runs Builder → Analyzer → Pruner → Contractor → Exporter to
//! produce the compact graph, and a separate Router stage consumes a
//! (possibly re-keyed) compact edge list to run Dijkstra and assemble a
//! cost matrix for downstream absorbing-Markov-chain analysis.

pub mod algo;
pub mod datastr;
pub mod error;
pub mod io;
pub mod report;

use crate::algo::{builder, component, contract, prune};
use crate::datastr::graph::Graph;
use crate::error::{GraphError, Result};
use crate::io::table::InputRow;
use crate::io::{export, table};

/// The fully contracted, pruned graph plus the exported tables, ready to be
/// written out or re-keyed for the Router.
pub struct CompactionResult {
    pub graph: Graph,
    pub compact_rows: Vec<table::GraphRow>,
    pub original_rows: Vec<table::GraphRow>,
    pub map_rows: Vec<table::MapRow>,
}

/// Runs the full Builder → Analyzer → Pruner → Contractor → Exporter
/// pipeline over an already-parsed input table.
pub fn compact_graph(rows: &[InputRow]) -> Result<CompactionResult> {
    if rows.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let (mut graph, build_time) = report::measure(|| builder::build(rows));
    crate::report!("builder", "built {} vertices, {} edges in {:?}", graph.num_vertices(), graph.num_edges(), build_time);

    let (labels, analyze_time) = report::measure(|| component::analyze(&graph));
    crate::report!("component", "analyzed components in {:?}", analyze_time);
    let largest = labels.largest.ok_or(GraphError::NoLargestComponent)?;

    let (_, prune_time) = report::measure(|| prune::prune(&mut graph, &labels, largest));
    crate::report!("prune", "pruned to largest component in {:?}", prune_time);

    let (_, contract_time) = report::measure(|| contract::contract(&mut graph));
    crate::report!(
        "contract",
        "contracted to {} live edges in {:?}",
        graph.edges().iter().filter(|e| e.in_compact).count(),
        contract_time
    );

    let compact_rows = export::compact_rows(&graph);
    let original_rows = export::original_rows(&graph);
    let map_rows = export::replacement_map(&graph);

    Ok(CompactionResult {
        graph,
        compact_rows,
        original_rows,
        map_rows,
    })
}
