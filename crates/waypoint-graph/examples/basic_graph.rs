//! Basic graph construction and queries example.
//!
//! This example demonstrates:
//! - Building a graph from labels
//! - Adding weighted edges
//! - Computing all-pairs shortest paths
//! - Querying routes, and recomputing after a mutation

use waypoint_graph::{Graph, Route, VertexId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = Graph::from_labels(["Depot", "Harbor", "Mill", "Quarry"], 10)?;
    let (depot, harbor, mill, quarry) = (
        VertexId::new(1),
        VertexId::new(2),
        VertexId::new(3),
        VertexId::new(4),
    );

    graph.insert_edge(depot, harbor, 12)?;
    graph.insert_edge(harbor, mill, 4)?;
    graph.insert_edge(depot, mill, 20)?;
    graph.insert_edge(mill, quarry, 7)?;

    graph.compute_shortest_paths();
    print_routes(&graph, depot)?;

    // Any mutation drops the table until it is recomputed
    graph.remove_edge(harbor, mill)?;
    assert!(!graph.is_computed());

    graph.compute_shortest_paths();
    println!("\nAfter closing Harbor -> Mill:");
    print_routes(&graph, depot)?;

    let stats = graph.statistics();
    println!(
        "\n{} vertices, {} edges, {:?} reachable pairs",
        stats.vertex_count, stats.edge_count, stats.reachable_pair_count
    );
    Ok(())
}

fn print_routes(graph: &Graph, source: VertexId) -> Result<(), Box<dyn std::error::Error>> {
    println!("Routes from {}:", graph.label(source)?);
    for dest in graph.vertex_ids().filter(|&dest| dest != source) {
        match graph.shortest_path(source, dest)? {
            Route::Reachable(path) => println!(
                "  {:<8} {:>3}  via {}",
                graph.label(dest)?.as_str(),
                path.distance,
                path.format_ids()
            ),
            Route::Unreachable => println!("  {:<8} unreachable", graph.label(dest)?.as_str()),
            Route::Trivial => {}
        }
    }
    Ok(())
}
