//! Generate a maze and run every search on it.
//!
//! Run: cargo run --bin walkthrough -- [seed] [prim] [braid]

use gridwalk_maze::{MazeAlgorithm, MazeConfig};
use gridwalk_paths::{Algorithm, Searcher};
use gridwalk_demo::{COLS, ROWS, board, render, run};

fn main() {
    let mut config = MazeConfig {
        seed: Some(2024),
        ..MazeConfig::default()
    };
    for arg in std::env::args().skip(1) {
        if arg == "prim" {
            config.algorithm = MazeAlgorithm::Prim;
        } else if let Ok(seed) = arg.parse::<u64>() {
            config.seed = Some(seed);
        } else if let Ok(braid) = arg.parse::<f64>() {
            config.braid = braid;
        } else {
            eprintln!("Error: unrecognised argument {arg:?}");
            std::process::exit(2);
        }
    }

    let grid = match board(ROWS, COLS, &config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut searcher = Searcher::default();
    for algorithm in Algorithm::ALL {
        let (summary, result) = match run(&mut searcher, &grid, algorithm) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        println!("== {algorithm} ==");
        print!("{}", render(&grid, &result));
        match (summary.path_len, summary.cost) {
            (Some(len), Some(cost)) => println!(
                "visited {} cells, path of {len} cells, cost {cost}\n",
                summary.visited
            ),
            _ => println!("visited {} cells, no path\n", summary.visited),
        }
    }
}
