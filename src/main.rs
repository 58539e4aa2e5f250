//! Tight-Fit Solver
//!
//! Searches for ways to pack the seven tetromino pieces into a 4x7 board
//! and prints every complete packing the exhaustive search reaches.

use std::process;

use clap::{Parser, Subcommand};

use tightfit::board::format_orientation;
use tightfit::pieces::{BOARD_WIDTH, TIGHT_FIT};

/// Enumerates every packing of the seven tetromino pieces on a 4x7 board.
#[derive(Parser)]
#[command(name = "tightfit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the search and print every solution.
    Solve,
    /// Run the search and print only the number of solutions.
    Count,
    /// Print the distinct orientations of each piece.
    Pieces,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve) | None => run_solve(),
        Some(Command::Count) => run_count(),
        Some(Command::Pieces) => run_pieces(),
    }
}

/// Runs the exhaustive search and prints every solution as a symbol grid.
fn run_solve() {
    let solutions = TIGHT_FIT.solve();

    for (index, solution) in solutions.iter().enumerate() {
        println!("Solution {}:", index + 1);
        match TIGHT_FIT.format_solution(solution) {
            Ok(grid) => {
                print!("{grid}");
                println!();
            }
            Err(error) => {
                eprintln!("{error}");
                process::exit(1);
            }
        }
    }

    println!("Found {} solutions", solutions.len());
}

/// Prints only the solution count.
fn run_count() {
    println!("{} solutions", TIGHT_FIT.solve().len());
}

/// Prints every piece's distinct orientations.
fn run_pieces() {
    for (index, piece_orientations) in TIGHT_FIT.orientation_table().iter().enumerate() {
        println!(
            "Piece {}: {} orientations",
            index + 1,
            piece_orientations.len()
        );
        for orientation in piece_orientations {
            print!("{}", format_orientation::<BOARD_WIDTH>(orientation));
            println!("--------");
        }
    }
}
