//! CLI command implementations.

use crate::engine::MinCutParams;
use crate::graph::{GraphBuilder, MultiGraph, TraversalDirection, TraversalOrder};
use crate::types::{Distance, Edge, GraphError, GraphResult, DEFAULT_EDGE_COST};

/// Graph with the label type used on the command line.
pub type CliGraph = MultiGraph<String>;

/// Result type of every command.
pub type CliResult = GraphResult<(), String>;

/// Parse `FROM,TO[,COST]` into an edge.
pub fn parse_edge(value: &str) -> Result<Edge<String>, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let (from, to, cost) = match parts.as_slice() {
        [from, to] => (*from, *to, DEFAULT_EDGE_COST),
        [from, to, cost] => {
            let cost = cost
                .parse::<i64>()
                .map_err(|_| format!("invalid edge cost {:?} in {:?}", cost, value))?;
            (*from, *to, cost)
        }
        _ => return Err(format!("expected FROM,TO[,COST], got {:?}", value)),
    };
    if from.is_empty() || to.is_empty() {
        return Err(format!("empty vertex label in {:?}", value));
    }
    Ok(Edge::new(from.to_string(), to.to_string(), cost))
}

/// Assemble the graph described by the global flags.
pub fn build_graph(
    directed: bool,
    vertices: Vec<String>,
    edges: Vec<Edge<String>>,
) -> GraphResult<CliGraph, String> {
    let mut builder = GraphBuilder::new(directed);
    builder.vertices(vertices);
    for edge in edges {
        builder.link_weighted(edge.source, edge.target, edge.cost);
    }
    builder.build()
}

/// Display the graph and its properties.
pub fn cmd_info(graph: &CliGraph, json: bool) -> CliResult {
    if json {
        let edges: Vec<serde_json::Value> = graph
            .edges()
            .iter()
            .map(|edge| {
                serde_json::json!({
                    "source": edge.source,
                    "target": edge.target,
                    "cost": edge.cost,
                })
            })
            .collect();
        let info = serde_json::json!({
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "weighted": graph.is_weighted(),
            "acyclic": graph.is_acyclic(),
            "connected": graph.is_connected(),
            "simple": graph.is_simple(),
            "vertex_labels": graph.vertices().collect::<Vec<_>>(),
            "edge_list": edges,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", graph);
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the visit order of a traversal.
pub fn cmd_traverse(
    graph: &CliGraph,
    start: &str,
    order: TraversalOrder,
    direction: TraversalDirection,
    json: bool,
) -> CliResult {
    let visited = graph.traverse(&start.to_string(), order, direction)?;
    if json {
        println!("{}", serde_json::json!({ "start": start, "visited": visited }));
    } else {
        println!("{}", visited.join(" "));
    }
    Ok(())
}

/// Print the hop count to every vertex reachable from `from`.
pub fn cmd_hops(graph: &CliGraph, from: &str, json: bool) -> CliResult {
    let from = from.to_string();
    if !graph.contains_vertex(&from) {
        return Err(GraphError::VertexNotFound(from));
    }
    let hops = graph.hop_distance(&from);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&hops).unwrap_or_default()
        );
    } else {
        for (label, count) in &hops {
            println!("{}: {}", label, count);
        }
    }
    Ok(())
}

/// Print single-source shortest paths from `from`.
pub fn cmd_path(graph: &CliGraph, from: &str, json: bool) -> CliResult {
    let paths = graph.shortest_path(&from.to_string())?;

    if json {
        let entries: Vec<serde_json::Value> = paths
            .iter()
            .map(|(label, entry)| {
                serde_json::json!({
                    "vertex": label,
                    "distance": distance_json(entry.distance),
                    "predecessor": entry.predecessor,
                    "path": paths.path_to(label),
                })
            })
            .collect();
        let info = serde_json::json!({
            "source": paths.source(),
            "algorithm": paths.algorithm().name(),
            "paths": entries,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Algorithm: {}", paths.algorithm());
        for (label, entry) in paths.iter() {
            match paths.path_to(label) {
                Some(path) => println!("{}: {} via {}", label, entry.distance, path.join(" -> ")),
                None => println!("{}: {}", label, entry.distance),
            }
        }
    }
    Ok(())
}

/// Print the all-pairs distance matrix.
pub fn cmd_all_pairs(graph: &CliGraph, json: bool) -> CliResult {
    let matrix = graph.all_pairs_shortest_paths()?.distance_matrix();

    if json {
        let rows: Vec<Vec<serde_json::Value>> = matrix
            .cells
            .iter()
            .map(|row| row.iter().map(|&d| distance_json(d)).collect())
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "labels": matrix.labels,
                "distances": rows,
            }))
            .unwrap_or_default()
        );
    } else {
        println!("\t{}", matrix.labels.join("\t"));
        for (label, row) in matrix.labels.iter().zip(&matrix.cells) {
            let cells: Vec<String> = row.iter().map(Distance::to_string).collect();
            println!("{}\t{}", label, cells.join("\t"));
        }
    }
    Ok(())
}

/// Print a topological order.
pub fn cmd_topo(graph: &CliGraph, json: bool) -> CliResult {
    let order = graph.topological_sort()?;
    if json {
        println!("{}", serde_json::json!({ "order": order }));
    } else {
        println!("{}", order.join(" "));
    }
    Ok(())
}

/// Print connected components, or strongly connected ones for directed graphs.
pub fn cmd_components(graph: &CliGraph, json: bool) -> CliResult {
    let components = graph.vertices_componentwise();
    if json {
        println!(
            "{}",
            serde_json::json!({
                "strong": graph.is_directed(),
                "components": components,
            })
        );
    } else {
        for (i, component) in components.iter().enumerate() {
            println!("Component {}: {}", i + 1, component.join(" "));
        }
    }
    Ok(())
}

/// Print a minimum spanning tree (or forest).
pub fn cmd_mst(graph: &CliGraph, json: bool) -> CliResult {
    let tree = graph.minimum_spanning_tree()?;
    let edges = tree.edges();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "edges": edges,
                "total_cost": tree.total_cost(),
                "trees": tree.vertices_componentwise().len(),
            }))
            .unwrap_or_default()
        );
    } else {
        for edge in &edges {
            println!("{}", edge);
        }
        println!("Total cost: {}", tree.total_cost());
    }
    Ok(())
}

/// Print the smallest cut found by randomized contraction.
pub fn cmd_mincut(graph: &CliGraph, params: &MinCutParams, json: bool) -> CliResult {
    let cut = graph.min_cut_with(params)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "size": cut.size,
                "trials": params.trials,
                "seed": params.seed,
                "partition": [cut.partition.0, cut.partition.1],
            }))
            .unwrap_or_default()
        );
    } else {
        println!("Min cut: {}", cut.size);
        println!("Side A: {}", cut.partition.0.join(" "));
        println!("Side B: {}", cut.partition.1.join(" "));
    }
    Ok(())
}

fn distance_json(distance: Distance) -> serde_json::Value {
    match distance.value() {
        Some(d) => serde_json::Value::from(d),
        None => serde_json::Value::Null,
    }
}
