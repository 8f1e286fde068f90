//! Phase 3 tests: single-source and all-pairs shortest paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use multigraph::engine::PathAlgorithm;
use multigraph::graph::{GraphBuilder, MultiGraph};
use multigraph::types::{Distance, GraphError};

// ==================== Helpers ====================

fn graph_from(directed: bool, edges: &[(&str, &str, i64)]) -> MultiGraph<String> {
    let mut builder = GraphBuilder::new(directed);
    for &(from, to, cost) in edges {
        builder.link_weighted(from.to_string(), to.to_string(), cost);
    }
    builder.build().unwrap()
}

fn s(label: &str) -> String {
    label.to_string()
}

/// a -> b (4), a -> c (1), c -> b (2), b -> d (1): the cheap route to d goes through c.
fn detour_graph(directed: bool) -> MultiGraph<String> {
    graph_from(
        directed,
        &[("a", "b", 4), ("a", "c", 1), ("c", "b", 2), ("b", "d", 1)],
    )
}

/// Random directed graph with non-negative costs and some cycles.
fn random_graph(seed: u64, vertices: usize, edges: usize) -> MultiGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::directed();
    builder.vertices(0..vertices);
    for _ in 0..edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        builder.link_weighted(from, to, rng.gen_range(0..20));
    }
    builder.build().unwrap()
}

// ==================== Dispatcher Tests ====================

#[test]
fn test_dispatch_undirected_unweighted_uses_bfs() {
    let graph = graph_from(false, &[("a", "b", 1), ("b", "c", 1), ("a", "c", 1)]);
    let paths = graph.shortest_path(&s("a")).unwrap();
    assert_eq!(paths.algorithm(), PathAlgorithm::Bfs);
    assert_eq!(paths.distance(&s("c")), Some(Distance::Finite(1)));
    assert_eq!(paths.distance(&s("b")), Some(Distance::Finite(1)));
}

#[test]
fn test_dispatch_dag_uses_relaxation() {
    let graph = detour_graph(true);
    let paths = graph.shortest_path(&s("a")).unwrap();
    assert_eq!(paths.algorithm(), PathAlgorithm::DagRelaxation);
    assert_eq!(paths.distance(&s("d")), Some(Distance::Finite(4)));
    assert_eq!(
        paths.path_to(&s("d")),
        Some(vec![s("a"), s("c"), s("b"), s("d")])
    );
}

#[test]
fn test_dispatch_cyclic_nonnegative_uses_dijkstra() {
    let graph = graph_from(true, &[("a", "b", 2), ("b", "a", 2), ("b", "c", 3)]);
    let paths = graph.shortest_path(&s("a")).unwrap();
    assert_eq!(paths.algorithm(), PathAlgorithm::Dijkstra);
    assert_eq!(paths.distance(&s("c")), Some(Distance::Finite(5)));

    let weighted_undirected = detour_graph(false);
    let paths = weighted_undirected.shortest_path(&s("d")).unwrap();
    assert_eq!(paths.algorithm(), PathAlgorithm::Dijkstra);
    assert_eq!(paths.distance(&s("a")), Some(Distance::Finite(4)));
}

#[test]
fn test_dispatch_negative_cyclic_uses_bellman_ford() {
    let graph = graph_from(true, &[("a", "b", 4), ("b", "a", 1), ("a", "c", 5), ("c", "b", -3)]);
    let paths = graph.shortest_path(&s("a")).unwrap();
    assert_eq!(paths.algorithm(), PathAlgorithm::BellmanFord);
    assert_eq!(paths.distance(&s("b")), Some(Distance::Finite(2)));
    assert_eq!(paths.path_to(&s("b")), Some(vec![s("a"), s("c"), s("b")]));
}

#[test]
fn test_dispatch_missing_source() {
    let graph = detour_graph(true);
    match graph.shortest_path(&s("zz")) {
        Err(GraphError::VertexNotFound(label)) => assert_eq!(label, "zz"),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_unreachable_vertices_are_infinite() {
    let mut graph = detour_graph(true);
    graph.add_vertex(s("island")).unwrap();
    let paths = graph.shortest_path(&s("c")).unwrap();

    assert_eq!(paths.len(), graph.vertex_count());
    let entry = paths.get(&s("island")).unwrap();
    assert_eq!(entry.distance, Distance::Infinite);
    assert_eq!(entry.predecessor, "island");
    assert_eq!(paths.distance(&s("a")), Some(Distance::Infinite));
    assert_eq!(paths.predecessor(&s("a")), Some(&s("a")));
    assert_eq!(paths.path_to(&s("island")), None);

    let source = paths.get(&s("c")).unwrap();
    assert_eq!(source.distance, Distance::ZERO);
    assert_eq!(source.predecessor, "c");
    assert_eq!(paths.path_to(&s("c")), Some(vec![s("c")]));
}

// ==================== Individual Algorithm Tests ====================

#[test]
fn test_bfs_paths_reject_weighted_graph() {
    let graph = detour_graph(false);
    match graph.bfs_shortest_path(&s("a")) {
        Err(GraphError::InvalidOperation(_)) => {}
        other => panic!("Expected InvalidOperation, got {:?}", other),
    }
}

#[test]
fn test_bfs_paths_on_directed_graph() {
    let graph = graph_from(true, &[("a", "b", 1), ("b", "c", 1), ("c", "d", 1), ("a", "d", 1)]);
    let paths = graph.bfs_shortest_path(&s("a")).unwrap();
    assert_eq!(paths.distance(&s("d")), Some(Distance::Finite(1)));
    assert_eq!(paths.distance(&s("c")), Some(Distance::Finite(2)));
    assert_eq!(paths.path_to(&s("c")), Some(vec![s("a"), s("b"), s("c")]));
}

#[test]
fn test_dag_paths_allow_negative_edges() {
    let graph = graph_from(true, &[("a", "b", 2), ("a", "c", 5), ("b", "c", -4)]);
    let paths = graph.dag_shortest_path(&s("a")).unwrap();
    assert_eq!(paths.distance(&s("c")), Some(Distance::Finite(-2)));
    assert_eq!(paths.predecessor(&s("c")), Some(&s("b")));
}

#[test]
fn test_dag_paths_preconditions() {
    match detour_graph(false).dag_shortest_path(&s("a")) {
        Err(GraphError::NotDirected) => {}
        other => panic!("Expected NotDirected, got {:?}", other),
    }
    let cyclic = graph_from(true, &[("a", "b", 1), ("b", "a", 1)]);
    match cyclic.dag_shortest_path(&s("a")) {
        Err(GraphError::NotAcyclic) => {}
        other => panic!("Expected NotAcyclic, got {:?}", other),
    }
}

#[test]
fn test_dijkstra_rejects_negative_edges() {
    let graph = graph_from(true, &[("a", "b", -1)]);
    match graph.dijkstra_shortest_path(&s("a")) {
        Err(GraphError::InvalidOperation(_)) => {}
        other => panic!("Expected InvalidOperation, got {:?}", other),
    }
}

#[test]
fn test_dijkstra_uses_cheapest_parallel_edge() {
    let graph = graph_from(true, &[("a", "b", 9), ("a", "b", 2), ("b", "c", 0)]);
    let paths = graph.dijkstra_shortest_path(&s("a")).unwrap();
    assert_eq!(paths.distance(&s("b")), Some(Distance::Finite(2)));
    assert_eq!(paths.distance(&s("c")), Some(Distance::Finite(2)));
}

#[test]
fn test_dijkstra_and_bellman_ford_agree() {
    for seed in 0..10 {
        let graph = random_graph(seed, 25, 80);
        for source in [0, 7, 24] {
            let dijkstra = graph.dijkstra_shortest_path(&source).unwrap();
            let bellman = graph.bellman_ford_shortest_path(&source).unwrap();
            for vertex in graph.vertices() {
                assert_eq!(
                    dijkstra.distance(vertex),
                    bellman.distance(vertex),
                    "seed {} source {} vertex {}",
                    seed,
                    source,
                    vertex
                );
            }
        }
    }
}

#[test]
fn test_dispatcher_agrees_with_bellman_ford() {
    let graph = detour_graph(true);
    let fast = graph.shortest_path(&s("a")).unwrap();
    let slow = graph.bellman_ford_shortest_path(&s("a")).unwrap();
    for (vertex, entry) in fast.iter() {
        assert_eq!(Some(entry.distance), slow.distance(vertex));
    }
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    let graph = graph_from(
        true,
        &[("s", "a", 3), ("a", "b", 1), ("b", "c", -1), ("c", "a", -1)],
    );
    match graph.bellman_ford_shortest_path(&s("s")) {
        Err(GraphError::NegativeCycle) => {}
        other => panic!("Expected NegativeCycle, got {:?}", other),
    }
    match graph.shortest_path(&s("s")) {
        Err(GraphError::NegativeCycle) => {}
        other => panic!("Expected NegativeCycle, got {:?}", other),
    }
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let graph = graph_from(
        true,
        &[("s", "t", 2), ("a", "b", 1), ("b", "c", -1), ("c", "a", -1)],
    );
    let paths = graph.bellman_ford_shortest_path(&s("s")).unwrap();
    assert_eq!(paths.distance(&s("t")), Some(Distance::Finite(2)));
    assert_eq!(paths.distance(&s("a")), Some(Distance::Infinite));
}

#[test]
fn test_negative_undirected_edge_is_a_negative_cycle() {
    let graph = graph_from(false, &[("a", "b", -1)]);
    match graph.shortest_path(&s("a")) {
        Err(GraphError::NegativeCycle) => {}
        other => panic!("Expected NegativeCycle, got {:?}", other),
    }
}

// ==================== All Pairs Tests ====================

#[test]
fn test_all_pairs_distances_and_paths() {
    let graph = detour_graph(true);
    let all = graph.all_pairs_shortest_paths().unwrap();

    assert_eq!(all.labels(), &[s("a"), s("b"), s("c"), s("d")]);
    assert_eq!(all.distance(&s("a"), &s("d")), Some(Distance::Finite(4)));
    assert_eq!(all.distance(&s("c"), &s("d")), Some(Distance::Finite(3)));
    assert_eq!(all.distance(&s("d"), &s("a")), Some(Distance::Infinite));
    assert_eq!(all.distance(&s("b"), &s("b")), Some(Distance::ZERO));
    assert_eq!(
        all.path(&s("a"), &s("d")),
        Some(vec![s("a"), s("c"), s("b"), s("d")])
    );
    assert_eq!(all.path(&s("a"), &s("c")), Some(vec![s("a"), s("c")]));
    assert_eq!(all.path(&s("d"), &s("a")), None);
    assert_eq!(all.path(&s("d"), &s("d")), Some(vec![s("d")]));
    assert_eq!(all.intermediate(&s("a"), &s("d")), Some(&s("c")));
    assert_eq!(all.intermediate(&s("a"), &s("c")), None);
}

#[test]
fn test_all_pairs_matches_single_source() {
    let mut builder = GraphBuilder::directed();
    let graph = {
        let mut rng = StdRng::seed_from_u64(7);
        builder.vertices(0..12usize);
        for from in 0..12usize {
            for to in 0..12usize {
                if from != to && rng.gen_bool(0.3) {
                    builder.link_weighted(from, to, rng.gen_range(1..15));
                }
            }
        }
        builder.build().unwrap()
    };

    let all = graph.all_pairs_shortest_paths().unwrap();
    for source in graph.vertices() {
        let single = graph.dijkstra_shortest_path(source).unwrap();
        for target in graph.vertices() {
            assert_eq!(all.distance(source, target), single.distance(target));
        }
    }
    assert_eq!(all.distance_matrix().size(), 12);
}

#[test]
fn test_all_pairs_requires_simple_graph() {
    let graph = graph_from(true, &[("a", "b", 1), ("a", "b", 2)]);
    match graph.all_pairs_shortest_paths() {
        Err(GraphError::InvalidOperation(_)) => {}
        other => panic!("Expected InvalidOperation, got {:?}", other),
    }
}

#[test]
fn test_all_pairs_detects_negative_cycle() {
    let graph = graph_from(true, &[("a", "b", 1), ("b", "a", -2)]);
    match graph.all_pairs_shortest_paths() {
        Err(GraphError::NegativeCycle) => {}
        other => panic!("Expected NegativeCycle, got {:?}", other),
    }
}
