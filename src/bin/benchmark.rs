use std::time::{Duration, Instant};

use rand::prelude::*;
use word_paths::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use word_paths::graph::{generators, DirectedGraph, Graph};
use word_paths::ladder::dictionary;
use word_paths::{Dictionary, NeighborStrategy, WordLadder};

// Function to benchmark Dijkstra on a graph
fn benchmark_dijkstra(graph: &DirectedGraph<u64>, source: usize) -> Duration {
    let start = Instant::now();
    let result = match Dijkstra::new().compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - Dijkstra failed: {}", err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);
    duration
}

// Function to benchmark one ladder strategy over a batch of word pairs
fn benchmark_ladder(
    strategy: NeighborStrategy,
    dictionary: &Dictionary,
    pairs: &[(String, String)],
) -> (Duration, usize) {
    let ladder = WordLadder::new().with_strategy(strategy);
    let start = Instant::now();
    let found = pairs
        .iter()
        .filter(|(from, to)| ladder.generate_ladder(from, to, dictionary).is_ok())
        .count();
    (start.elapsed(), found)
}

fn main() {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let graph_sizes = [1_000, 10_000, 100_000, 500_000];

    println!("=====================================================");
    println!("Benchmark: Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generators::generate_random(size, edge_factor, 100, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
        results.push((size, benchmark_dijkstra(&graph, 0)));
    }

    println!("\n{:<10} | {:<15}", "Vertices", "Dijkstra (ms)");
    println!("----------------------------");
    for (size, duration) in &results {
        println!("{:<10} | {:<15}", size, duration.as_millis());
    }

    println!("\n=====================================================");
    println!("Benchmark: word ladder neighbor strategies");
    println!("=====================================================");

    let alphabet: Vec<char> = "abcdefgh".chars().collect();
    for &count in &[1_000, 5_000, 20_000] {
        let dictionary = dictionary::generate_random(count, 3, 5, &alphabet, &mut rng);
        let words: Vec<&str> = dictionary.iter().collect();
        let pairs: Vec<(String, String)> = (0..20)
            .map(|_| {
                let from = words[rng.gen_range(0..words.len())];
                let to = words[rng.gen_range(0..words.len())];
                (from.to_string(), to.to_string())
            })
            .collect();

        println!("\nDictionary with {} words:", dictionary.len());
        for strategy in [NeighborStrategy::DictionaryScan, NeighborStrategy::AlphabetMutation] {
            let (duration, found) = benchmark_ladder(strategy, &dictionary, &pairs);
            println!("  - {:?}: {} of {} ladders in {:?}", strategy, found, pairs.len(), duration);
        }
    }
}
