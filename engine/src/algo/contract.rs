//! Contractor (§4.4): removes degree-2 vertices that add no routing choice,
//! folding their incident edges into through-edges.

use crate::datastr::graph::{EdgeId, Graph, VertexId};
use std::collections::HashSet;

/// Repeatedly sweeps the vertex map in lexicographic order, collapsing every
/// qualifying intermediate vertex, until no vertex qualifies any more.
/// Chains longer than one intermediate vertex collapse across several
/// passes.
pub fn contract(graph: &mut Graph) {
    loop {
        let ids: Vec<VertexId> = graph.vertices().keys().cloned().collect();
        let mut changed = false;

        for v_id in ids {
            let shape = {
                let v = match graph.vertex(&v_id) {
                    Some(v) => v,
                    None => continue,
                };
                if v.is_intermediate_single() {
                    let a = v.get_neighbours_in().iter().next().unwrap().clone();
                    let b = v.get_neighbours_out().iter().next().unwrap().clone();
                    Some((a, b, false))
                } else if v.is_intermediate_double() {
                    let mut both = v.get_all_neighbours().into_iter();
                    let a = both.next().unwrap();
                    let b = both.next().unwrap();
                    Some((a, b, true))
                } else {
                    None
                }
            };

            if let Some((a, b, is_double)) = shape {
                if is_double {
                    contract_double(graph, &v_id, &a, &b);
                } else {
                    contract_single(graph, &v_id, &a, &b);
                }
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }
}

struct Incident {
    id: EdgeId,
    distance: f64,
    weight: f64,
    highway: String,
}

fn take_incident<F: Fn(&crate::datastr::graph::Edge) -> bool>(graph: &mut Graph, matches: F) -> Vec<Incident> {
    let mut found = Vec::new();
    for edge in graph.edges_mut() {
        if edge.in_compact && matches(edge) {
            found.push(Incident {
                id: edge.id,
                distance: edge.distance,
                weight: edge.weight,
                highway: edge.highway.clone(),
            });
            edge.in_compact = false;
        }
    }
    found
}

/// Longest-segment-wins, ties broken by lowest edge id (resolved open
/// question 5 — the source just kept whichever edge it processed last).
fn dominant_highway(incident: &[Incident]) -> String {
    incident
        .iter()
        .max_by(|a, b| a.distance.total_cmp(&b.distance).then(b.id.cmp(&a.id)))
        .map(|i| i.highway.clone())
        .unwrap_or_default()
}

fn contract_single(graph: &mut Graph, v_id: &str, a_id: &str, b_id: &str) {
    let incident = take_incident(graph, |e| {
        (e.from_id == a_id && e.to_id == v_id) || (e.from_id == v_id && e.to_id == b_id)
    });
    if incident.is_empty() {
        return;
    }

    let distance: f64 = incident.iter().map(|i| i.distance).sum();
    let weight: f64 = incident.iter().map(|i| i.weight).sum();
    let highway = dominant_highway(&incident);
    let replacing: HashSet<EdgeId> = incident.iter().map(|i| i.id).collect();

    graph.add_synthetic_edge(a_id.to_string(), b_id.to_string(), distance, weight, highway, replacing);

    repair_neighbours(graph, v_id, a_id, b_id);
}

fn contract_double(graph: &mut Graph, v_id: &str, a_id: &str, b_id: &str) {
    let incident = take_incident(graph, |e| {
        (e.from_id == a_id && e.to_id == v_id)
            || (e.from_id == v_id && e.to_id == a_id)
            || (e.from_id == b_id && e.to_id == v_id)
            || (e.from_id == v_id && e.to_id == b_id)
    });
    if incident.is_empty() {
        return;
    }

    let total_distance: f64 = incident.iter().map(|i| i.distance).sum();
    let total_weight: f64 = incident.iter().map(|i| i.weight).sum();
    let distance = total_distance / 4.0;
    let weight = total_weight / 4.0;
    let highway = dominant_highway(&incident);
    let replacing: HashSet<EdgeId> = incident.iter().map(|i| i.id).collect();

    graph.add_synthetic_edge(a_id.to_string(), b_id.to_string(), distance, weight, highway.clone(), replacing.clone());
    graph.add_synthetic_edge(b_id.to_string(), a_id.to_string(), distance, weight, highway, replacing);

    repair_neighbours(graph, v_id, a_id, b_id);
}

fn repair_neighbours(graph: &mut Graph, v_id: &str, a_id: &str, b_id: &str) {
    if let Some(a) = graph.vertex_mut(a_id) {
        a.replace_neighbour(v_id, b_id.to_string());
    }
    if let Some(b) = graph.vertex_mut(b_id) {
        b.replace_neighbour(v_id, a_id.to_string());
    }
    if let Some(v) = graph.vertex_mut(v_id) {
        v.disconnect();
    }
}
