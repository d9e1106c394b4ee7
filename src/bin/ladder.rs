use std::env;
use std::process::ExitCode;

use word_paths::{Dictionary, WordLadder};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: <dictionary-file> <start> <goal> [--json]
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let [path, start, goal] = positional.as_slice() else {
        eprintln!("Usage: ladder <dictionary-file> <start> <goal> [--json]");
        return ExitCode::FAILURE;
    };

    let dictionary = match Dictionary::load(path) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match WordLadder::new().generate_ladder(start, goal, &dictionary) {
        Ok(ladder) if json => match serde_json::to_string_pretty(&ladder) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        },
        Ok(ladder) => {
            let length = ladder.len();
            println!("Word Ladder:");
            println!("{}", ladder.into_words().join(" "));
            println!("Ladder length: {}", length);
        }
        Err(err) => {
            eprintln!("No word ladder found between {} and {}: {}", start, goal, err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
