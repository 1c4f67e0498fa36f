mod cli_args;

use cli_args::{parse_arg_optional, parse_arg_required};
use osm_graph_core::algo::router::{cost_matrix, dijkstra, rekey};
use osm_graph_core::io::table::{read_input_rows, write_graph_rows, write_map_rows};
use osm_graph_core::report::measure;
use osm_graph_core::{compact_graph, report};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args();
    args.next(); // skip binary name

    let input_path: String = parse_arg_required(&mut args, "input_csv")?;
    let output_dir: String = parse_arg_required(&mut args, "output_dir")?;
    let start_node: usize = parse_arg_optional(&mut args, 0);
    let end_node: usize = parse_arg_optional(&mut args, 0);

    let rows = read_input_rows(&input_path)?;

    let (result, pipeline_time) = measure(|| compact_graph(&rows));
    let result = result?;
    report!("pipeline", "full compaction pipeline finished in {:?}", pipeline_time);

    std::fs::create_dir_all(&output_dir)?;
    write_graph_rows(format!("{output_dir}/compact.csv"), &result.compact_rows)?;
    write_graph_rows(format!("{output_dir}/original.csv"), &result.original_rows)?;
    write_map_rows(format!("{output_dir}/map.csv"), &result.map_rows)?;

    let rekeyed = rekey(&result.graph);
    let n = rekeyed.vertex_of.len();
    if n == 0 {
        println!("compact graph is empty; nothing to route");
        return Ok(());
    }

    let adj = osm_graph_core::algo::router::AdjacencyList::build(n, &rekeyed.idfrom, &rekeyed.idto, &rekeyed.d);
    let (routed, routing_time) = measure(|| dijkstra::dijkstra(&adj, start_node));
    report!("router", "dijkstra from node {} finished in {:?}", start_node, routing_time);

    let matrix = cost_matrix::build(&adj, start_node, end_node);

    println!("vertices: {n}");
    println!("distance to end_node {}: {}", end_node, routed.min_distance[end_node]);
    println!("cost matrix dimensions: {}x{}", matrix.len(), matrix.first().map(|r| r.len()).unwrap_or(0));

    Ok(())
}
