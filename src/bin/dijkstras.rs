use std::env;
use std::process::ExitCode;

use word_paths::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use word_paths::graph::{loader, DirectedGraph, Graph};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: <graph-file> [source] [--json]
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let Some(path) = positional.first() else {
        eprintln!("Usage: dijkstras <graph-file> [source] [--json]");
        return ExitCode::FAILURE;
    };
    let source = match positional.get(1).map(|s| s.parse::<usize>()) {
        None => 0,
        Some(Ok(source)) => source,
        Some(Err(_)) => {
            eprintln!("Error: source must be a vertex index");
            return ExitCode::FAILURE;
        }
    };

    let graph: DirectedGraph<u64> = match loader::load_graph(path.as_str()) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = match Dijkstra::new().compute_shortest_paths(&graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Shortest paths from vertex {}:", source);
    for destination in 0..graph.vertex_count() {
        if destination == source {
            continue;
        }

        let path = result.extract_path(destination);
        match result.distance(destination) {
            Some(total) if !path.is_empty() => {
                let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                println!("\nPath to vertex {}:", destination);
                println!("Path: {}", hops.join(" -> "));
                println!("Total cost: {}", total);
            }
            _ => println!("No path to vertex {}", destination),
        }
    }

    ExitCode::SUCCESS
}
