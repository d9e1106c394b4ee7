use rand::prelude::*;
use word_paths::algorithm::dijkstra::Dijkstra;
use word_paths::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use word_paths::graph::{generators, loader, DirectedGraph, Graph};
use word_paths::Error;

fn run(graph: &DirectedGraph<u64>, source: usize) -> ShortestPathResult<u64> {
    Dijkstra::new().compute_shortest_paths(graph, source).unwrap()
}

// Bellman-Ford oracle: None for unreachable
fn bellman_ford(graph: &DirectedGraph<u64>, source: usize) -> Vec<Option<u64>> {
    let n = graph.vertex_count();
    let mut dist = vec![None; n];
    dist[source] = Some(0u64);
    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            let Some(du) = dist[u] else { continue };
            for (v, w) in graph.outgoing_edges(u) {
                if dist[v].map_or(true, |dv| du + w < dv) {
                    dist[v] = Some(du + w);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

// Every reachable vertex's path must be a real walk whose cost is its distance
fn assert_paths_consistent(graph: &DirectedGraph<u64>, result: &ShortestPathResult<u64>) {
    for v in 0..graph.vertex_count() {
        let path = result.extract_path(v);
        match result.distance(v) {
            Some(distance) => {
                assert_eq!(path.first(), Some(&result.source), "path to {} should start at source", v);
                assert_eq!(path.last(), Some(&v), "path to {} should end at {}", v, v);
                for hop in path.windows(2) {
                    assert!(graph.has_edge(hop[0], hop[1]), "path to {} uses missing edge {} -> {}", v, hop[0], hop[1]);
                }
                assert_eq!(graph.path_weight(&path), Some(distance), "path cost to {} should equal its distance", v);
            }
            None => {
                assert!(path.is_empty(), "unreachable vertex {} should have an empty path", v);
                assert_eq!(result.predecessors[v], None);
            }
        }
    }
}

#[test]
fn test_small_graph_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/small.txt");
    let graph: DirectedGraph<u64> = loader::load_graph(path).unwrap();
    let result = run(&graph, 0);

    assert_eq!(result.distances, vec![0, 3, 6, 7]);
    assert_eq!(result.extract_path(3), vec![0, 2, 3]);
    assert_eq!(result.extract_path(1), vec![0, 1]);
    assert_eq!(result.predecessors[0], None, "source has no predecessor");
    assert_paths_consistent(&graph, &result);
}

#[test]
fn test_single_vertex_graph() {
    let graph = DirectedGraph::<u64>::with_vertices(1);
    let result = run(&graph, 0);

    assert_eq!(result.distances, vec![0]);
    assert_eq!(result.extract_path(0), vec![0]);
}

#[test]
fn test_zero_edge_graph() {
    let graph = DirectedGraph::<u64>::with_vertices(5);
    let result = run(&graph, 0);

    assert_eq!(result.distances[0], 0);
    for v in 1..5 {
        assert_eq!(result.distances[v], u64::MAX, "vertex {} should be at infinite distance", v);
        assert!(result.extract_path(v).is_empty());
    }
}

#[test]
fn test_invalid_source_is_reported() {
    let graph = DirectedGraph::<u64>::with_vertices(3);
    let err = Dijkstra::new().compute_shortest_paths(&graph, 3).unwrap_err();
    assert!(matches!(err, Error::InvalidSource(3)), "got {:?}", err);
}

#[test]
fn test_stale_entries_do_not_override_better_paths() {
    // 0->2 is first pushed at 10, then improved to 2 via 1
    let graph = DirectedGraph::from_edges(4, vec![(0, 2, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
    let result = run(&graph, 0);

    assert_eq!(result.distances, vec![0, 1, 2, 3]);
    assert_eq!(result.extract_path(3), vec![0, 1, 2, 3]);
}

#[test]
fn test_zero_weight_edges_and_cycles() {
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, 0), (1, 0, 0), (1, 2, 0), (2, 2, 5)]).unwrap();
    let result = run(&graph, 1);

    assert_eq!(result.distances, vec![0, 0, 0]);
    assert_paths_consistent(&graph, &result);
}

#[test]
fn test_other_weight_types() {
    let graph = DirectedGraph::<u8>::from_edges(3, vec![(0, 1, 200), (1, 2, 100)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    // 300 does not fit in u8; the sum saturates at the sentinel and stays unreachable
    assert_eq!(result.distance(1), Some(200));
    assert_eq!(result.distance(2), None);

    let graph = DirectedGraph::<i32>::from_edges(2, vec![(0, 1, 7)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(1), Some(7));
}

#[test]
fn test_grid_distances_are_manhattan() {
    let (width, height) = (8, 6);
    let graph = generators::generate_grid(width, height);
    let result = run(&graph, 0);

    for y in 0..height {
        for x in 0..width {
            assert_eq!(result.distance(y * width + x), Some((x + y) as u64));
        }
    }
    assert_paths_consistent(&graph, &result);
}

#[test]
fn test_random_graphs_match_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(2024);

    for round in 0..40 {
        let n = rng.gen_range(1..60);
        let edge_factor = rng.gen_range(0.0..4.0);
        let graph = generators::generate_random(n, edge_factor, 25, &mut rng);
        let source = rng.gen_range(0..n);

        let result = run(&graph, source);
        let expected = bellman_ford(&graph, source);

        for v in 0..n {
            assert_eq!(result.distance(v), expected[v], "round {}: distance to {} differs", round, v);
        }
        assert_paths_consistent(&graph, &result);
    }
}

#[test]
fn test_graph_is_shareable_across_threads() {
    let grid = generators::generate_grid(5, 5);
    let graph = &grid;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|source| scope.spawn(move || run(graph, source)))
            .collect();
        for (source, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.source, source);
            assert_eq!(result.distance(source), Some(0));
        }
    });
}
