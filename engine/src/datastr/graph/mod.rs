//! The in-memory vertex/edge model for an OSM-style road network.
//!
//! A `Graph` owns every `Vertex` and `Edge` created during a single
//! transformation session. Vertices reference each other by id rather than
//! by direct reference, so the `Graph` is the sole owner and no reference
//! cycles are possible.

use std::collections::{BTreeMap, HashSet};

pub mod union_find;

/// Vertex ids are opaque OSM node identifiers.
pub type VertexId = String;
/// Edge ids are assigned per-session, starting at 1.
pub type EdgeId = u32;

/// A single intersection or node in the road network.
#[derive(Debug, Clone)]
pub struct Vertex {
    lat: f64,
    lon: f64,
    incoming: HashSet<VertexId>,
    outgoing: HashSet<VertexId>,
    /// Whether this vertex still has a live edge through it in the compact
    /// graph. Cleared once the Contractor folds its last incident edges away.
    pub in_compact: bool,
}

impl Vertex {
    fn new(lat: f64, lon: f64) -> Self {
        Vertex {
            lat,
            lon,
            incoming: HashSet::new(),
            outgoing: HashSet::new(),
            in_compact: true,
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn add_neighbour_in(&mut self, id: VertexId) {
        self.incoming.insert(id);
    }

    pub fn add_neighbour_out(&mut self, id: VertexId) {
        self.outgoing.insert(id);
    }

    pub fn get_degree_in(&self) -> usize {
        self.incoming.len()
    }

    pub fn get_degree_out(&self) -> usize {
        self.outgoing.len()
    }

    pub fn get_neighbours_in(&self) -> &HashSet<VertexId> {
        &self.incoming
    }

    pub fn get_neighbours_out(&self) -> &HashSet<VertexId> {
        &self.outgoing
    }

    /// Union of `incoming` and `outgoing`.
    pub fn get_all_neighbours(&self) -> HashSet<VertexId> {
        self.incoming.union(&self.outgoing).cloned().collect()
    }

    /// Rewrites every occurrence of `old` in the neighbour sets to `new`.
    pub fn replace_neighbour(&mut self, old: &str, new: VertexId) {
        if self.incoming.remove(old) {
            self.incoming.insert(new.clone());
        }
        if self.outgoing.remove(old) {
            self.outgoing.insert(new);
        }
    }

    /// `|in|=1 ∧ |out|=1 ∧ |in∪out|=2`: a single through-road with no choice.
    pub fn is_intermediate_single(&self) -> bool {
        self.incoming.len() == 1 && self.outgoing.len() == 1 && self.get_all_neighbours().len() == 2
    }

    /// `|in|=2 ∧ |out|=2 ∧ |in∪out|=2`: a bidirectional through-road.
    pub fn is_intermediate_double(&self) -> bool {
        self.incoming.len() == 2 && self.outgoing.len() == 2 && self.get_all_neighbours().len() == 2
    }

    /// Severs this vertex from the live topology after its incident edges
    /// have been folded into a replacement edge. The vertex record itself
    /// is kept around for coordinate lookups during export.
    pub fn disconnect(&mut self) {
        self.incoming.clear();
        self.outgoing.clear();
        self.in_compact = false;
    }
}

/// A directed edge between two vertices.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from_id: VertexId,
    pub to_id: VertexId,
    pub id: EdgeId,
    pub distance: f64,
    pub weight: f64,
    pub highway: String,
    /// Ids of the edge(s) this edge was synthesized from during contraction.
    /// Empty for edges with `in_original = true`.
    pub replacing_edges: HashSet<EdgeId>,
    pub in_original: bool,
    pub in_compact: bool,
}

/// Owns the vertex map and edge vector of a single transformation session.
///
/// Vertices are kept in a `BTreeMap` so iteration order is the lexicographic
/// order the contractor's tie-breaking rules depend on (§5 of the design
/// notes: vertex-iteration order decides which parallel edge records
/// provenance).
pub struct Graph {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: Vec<Edge>,
    next_edge_id: EdgeId,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: BTreeMap::new(),
            edges: Vec::new(),
            next_edge_id: 1,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &BTreeMap<VertexId, Vertex> {
        &self.vertices
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertex_mut(&mut self, id: &str) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    /// Drops every vertex for which `keep` returns `false`.
    pub fn retain_vertices<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.vertices.retain(|id, _| keep(id));
    }

    /// Drops every edge for which `keep` returns `false`.
    pub fn retain_edges<F: FnMut(&Edge) -> bool>(&mut self, mut keep: F) {
        self.edges.retain(|e| keep(e));
    }

    fn ensure_vertex(&mut self, id: &str, lat: f64, lon: f64) {
        self.vertices.entry(id.to_string()).or_insert_with(|| Vertex::new(lat, lon));
    }

    /// Materializes one input row: creates vertices on first sight, wires up
    /// neighbour sets, and appends a fresh `in_original` edge.
    #[allow(clippy::too_many_arguments)]
    pub fn add_edge(
        &mut self,
        from_id: &str,
        to_id: &str,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
        d: f64,
        d_weighted: f64,
        highway: &str,
    ) -> EdgeId {
        self.ensure_vertex(from_id, from_lat, from_lon);
        self.ensure_vertex(to_id, to_lat, to_lon);

        self.vertices.get_mut(from_id).unwrap().add_neighbour_out(to_id.to_string());
        self.vertices.get_mut(to_id).unwrap().add_neighbour_in(from_id.to_string());

        let id = self.next_edge_id;
        self.next_edge_id += 1;

        self.edges.push(Edge {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            id,
            distance: d,
            weight: d_weighted,
            highway: highway.to_string(),
            replacing_edges: HashSet::new(),
            in_original: true,
            in_compact: true,
        });

        id
    }

    /// Appends a synthesized (non-original) edge and returns its id.
    #[allow(clippy::too_many_arguments)]
    pub fn add_synthetic_edge(
        &mut self,
        from_id: VertexId,
        to_id: VertexId,
        distance: f64,
        weight: f64,
        highway: String,
        replacing_edges: HashSet<EdgeId>,
    ) -> EdgeId {
        let id = self.next_edge_id;
        self.next_edge_id += 1;

        self.edges.push(Edge {
            from_id,
            to_id,
            id,
            distance,
            weight,
            highway,
            replacing_edges,
            in_original: false,
            in_compact: true,
        });

        id
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
