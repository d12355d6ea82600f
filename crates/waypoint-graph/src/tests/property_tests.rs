//! Property-based tests comparing the engine against a brute-force oracle.

use proptest::prelude::*;

use crate::{Distance, Graph, Route, VertexId};

/// Vertex count plus `(source, dest, weight)` triples with one-based ids.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..=8).prop_flat_map(|count| {
        let edge = (1..=count, 1..=count, 0u32..50);
        (Just(count), prop::collection::vec(edge, 0..=24))
    })
}

fn build(count: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let mut graph = Graph::from_labels((1..=count).map(|n| format!("v{n}")), count).unwrap();
    for &(source, dest, weight) in edges {
        graph
            .insert_edge(VertexId::new(source), VertexId::new(dest), i64::from(weight))
            .unwrap();
    }
    graph
}

/// Floyd-Warshall over the final edge set, with the same convention for
/// sources that have no outgoing edges (their whole row is unreachable).
fn oracle(graph: &Graph) -> Vec<Vec<Option<u64>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];
    for source in graph.vertex_ids() {
        let s = source.get() - 1;
        dist[s][s] = Some(0);
        for edge in graph.edges(source).unwrap() {
            let d = edge.dest.get() - 1;
            if s != d {
                let weight = u64::from(edge.weight);
                dist[s][d] = Some(dist[s][d].map_or(weight, |old: u64| old.min(weight)));
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    let through = a + b;
                    if dist[i][j].is_none_or(|current| through < current) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }
    for source in graph.vertex_ids() {
        if !graph.has_edges(source).unwrap() {
            dist[source.get() - 1] = vec![None; n];
        }
    }
    dist
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every table distance equals the brute-force shortest distance.
    #[test]
    fn prop_distances_match_oracle((count, edges) in graph_strategy()) {
        let mut graph = build(count, &edges);
        graph.compute_shortest_paths();
        let expected = oracle(&graph);

        for source in graph.vertex_ids() {
            for dest in graph.vertex_ids() {
                let actual = graph.distance(source, dest).unwrap().finite();
                prop_assert_eq!(
                    actual,
                    expected[source.get() - 1][dest.get() - 1],
                    "{} -> {}", source, dest
                );
            }
        }
    }

    /// Reconstructed paths follow real edges and sum to the table distance.
    #[test]
    fn prop_paths_are_consistent((count, edges) in graph_strategy()) {
        let mut graph = build(count, &edges);
        graph.compute_shortest_paths();

        for source in graph.vertex_ids() {
            for dest in graph.vertex_ids() {
                match graph.shortest_path(source, dest).unwrap() {
                    Route::Trivial => prop_assert_eq!(source, dest),
                    Route::Unreachable => {
                        prop_assert_eq!(graph.distance(source, dest).unwrap(), Distance::Infinite);
                        prop_assert_eq!(graph.reconstruct_path(source, dest).unwrap(), None);
                    }
                    Route::Reachable(path) => {
                        prop_assert!(path.edge_count() >= 1);
                        prop_assert!(path.edge_count() < count);
                        prop_assert_eq!(path.hops.last().copied(), Some(dest));

                        let sequence: Vec<_> = path.vertices().collect();
                        let mut total = 0u64;
                        for pair in sequence.windows(2) {
                            let edge = graph.find_edge(pair[0], pair[1]).unwrap();
                            prop_assert!(edge.is_some(), "missing edge {} -> {}", pair[0], pair[1]);
                            total += u64::from(edge.map_or(0, |e| e.weight));
                        }
                        prop_assert_eq!(total, path.distance);
                        prop_assert_eq!(graph.distance(source, dest).unwrap(), Distance::Finite(total));
                    }
                }
            }
        }
    }

    /// `dist[s][d] == dist[s][pred] + w(pred, d)` for every reachable pair.
    #[test]
    fn prop_predecessors_are_tight((count, edges) in graph_strategy()) {
        let mut graph = build(count, &edges);
        graph.compute_shortest_paths();

        for source in graph.vertex_ids() {
            for dest in graph.vertex_ids() {
                let entry = graph.entry(source, dest).unwrap();
                let Some(pred) = entry.predecessor else {
                    continue;
                };
                prop_assert_ne!(source, dest);
                let weight = graph.find_edge(pred, dest).unwrap().map(|e| e.weight);
                prop_assert!(weight.is_some());
                let via = graph.distance(source, pred).unwrap().extend(weight.unwrap_or(0));
                prop_assert_eq!(via, entry.distance);
            }
        }
    }

    /// Recomputing after any mutation agrees with building the graph fresh.
    #[test]
    fn prop_recompute_matches_fresh_build(
        (count, edges) in graph_strategy(),
        removals in prop::collection::vec((1usize..=8, 1usize..=8), 0..6),
    ) {
        let mut graph = build(count, &edges);
        graph.compute_shortest_paths();

        let mut remaining = edges.clone();
        for (source, dest) in removals {
            if source > count || dest > count {
                continue;
            }
            if graph.remove_edge(VertexId::new(source), VertexId::new(dest)).unwrap() {
                remaining.retain(|&(s, d, _)| (s, d) != (source, dest));
            }
        }
        graph.compute_shortest_paths();

        let mut fresh = build(count, &remaining);
        fresh.compute_shortest_paths();

        for source in graph.vertex_ids() {
            for dest in graph.vertex_ids() {
                prop_assert_eq!(
                    graph.distance(source, dest).unwrap(),
                    fresh.distance(source, dest).unwrap()
                );
            }
        }
    }
}
