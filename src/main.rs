//! Polycube Dissection Solver
//!
//! Reads a problem file describing a box and a multiset of pieces, then
//! enumerates every exact tiling and prints each one as a stack of z-slices.

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use env_logger::{Builder, Env};
use log::info;
use thousands::Separable;

use cubepack::{grid, problem, solver};

/// Solves polycube box dissection puzzles.
#[derive(Parser)]
#[command(name = "cubepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Problem data file.
    problem: Option<PathBuf>,
    /// Print only the number of solutions.
    #[arg(long)]
    count: bool,
    /// Stop after this many solutions.
    #[arg(long)]
    limit: Option<usize>,
}

fn main() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Stdout);
    builder.format_timestamp_millis();
    builder.init();

    let cli = Cli::parse();
    let Some(path) = cli.problem else {
        eprintln!("usage: cubepack <problem-file>");
        process::exit(1);
    };

    let problem = match problem::load(&path) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("{}: {err}", path.display());
            process::exit(1);
        }
    };

    let stopwatch = Instant::now();
    let puzzle = problem.build();
    info!(
        "matrix: {} rows x {} columns for {} pieces in a {}x{}x{} box",
        puzzle.cells.rows().separate_with_commas(),
        puzzle.cells.cols(),
        problem.pieces.len(),
        problem.width,
        problem.height,
        problem.depth
    );

    let mut found: usize = 0;
    solver::solve(&puzzle, &mut |solution| {
        found += 1;
        if !cli.count {
            println!("Solution {found}:");
            print!(
                "{}",
                grid::format_solution(solution, problem.width, problem.height, problem.depth)
            );
            println!();
        }
        if cli.limit.is_some_and(|limit| found >= limit) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    info!(
        "{} solutions in {:.2} seconds",
        found.separate_with_commas(),
        stopwatch.elapsed().as_secs_f64()
    );
    if cli.count {
        println!("{found}");
    }
}
