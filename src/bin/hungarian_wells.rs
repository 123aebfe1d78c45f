//! Command-line front end dispatching the `hungarian-wells` library's
//! three modes: `generate`, `solve`, and `benchmark`.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use hungarian_wells::io::{format_input, generate_input, parse_input, write_output};
use hungarian_wells::{cost_model, result, solver, Point};

/// Assign houses to wells by Euclidean distance, K houses per well.
#[derive(Parser, Debug)]
#[command(name = "hungarian-wells", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a random instance, write it, solve it, and write the result.
    Generate {
        /// Number of wells.
        #[arg(long)]
        n: usize,
        /// Houses per well.
        #[arg(long)]
        k: usize,
        /// Path to write the sampled instance to.
        #[arg(long)]
        input: PathBuf,
        /// Path to write the solved assignment to.
        #[arg(long)]
        output: PathBuf,
        /// Seed for reproducible generation; omitted falls back to an
        /// OS-provided seed.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve an existing instance file.
    Solve {
        /// Path to an instance file in the `N K` / coordinate-lines format.
        #[arg(long)]
        input: PathBuf,
        /// Path to write the solved assignment to.
        #[arg(long)]
        output: PathBuf,
    },
    /// Time the solver across a sweep of instance sizes and print a table.
    Benchmark {
        /// Largest N to include in the sweep (1..=max_n).
        #[arg(long)]
        max_n: usize,
        /// Largest K to include in the sweep (1..=max_k).
        #[arg(long)]
        max_k: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            n,
            k,
            input,
            output,
            seed,
        } => run_generate(n, k, &input, &output, seed),
        Command::Solve { input, output } => run_solve(&input, &output),
        Command::Benchmark { max_n, max_k } => run_benchmark(max_n, max_k),
    }
}

fn run_generate(
    n: usize,
    k: usize,
    input_path: &PathBuf,
    output_path: &PathBuf,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let (wells, houses) = generate_input(n, k, &mut rng);
    fs::write(input_path, format_input(n, k, &wells, &houses))
        .with_context(|| format!("writing generated instance to {}", input_path.display()))?;
    info!(n, k, input = %input_path.display(), "generated instance");
    solve_and_write(k, &wells, &houses, output_path)
}

fn run_solve(input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let text = fs::read_to_string(input_path)
        .with_context(|| format!("reading instance from {}", input_path.display()))?;
    let (_n, k, wells, houses) = parse_input(&text)
        .with_context(|| format!("parsing instance from {}", input_path.display()))?;
    solve_and_write(k, &wells, &houses, output_path)
}

fn solve_and_write(
    k: usize,
    wells: &[Point],
    houses: &[Point],
    output_path: &PathBuf,
) -> Result<()> {
    let model = cost_model::build(wells.len(), k, wells, houses).context("building cost matrix")?;
    let solution = solver::solve(&model.matrix).context("solving assignment")?;
    let assignment = result::assemble(k, wells, houses, &solution.matching);
    fs::write(output_path, write_output(wells, houses, &assignment))
        .with_context(|| format!("writing solution to {}", output_path.display()))?;
    info!(
        output = %output_path.display(),
        total_distance = assignment.total_distance,
        "wrote solution"
    );
    Ok(())
}

fn run_benchmark(max_n: usize, max_k: usize) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0);
    println!("{:>6} {:>6} {:>8} {:>12}", "N", "K", "n", "elapsed_ms");
    for n in 1..=max_n {
        for k in 1..=max_k {
            let (wells, houses) = generate_input(n, k, &mut rng);
            let model =
                cost_model::build(n, k, &wells, &houses).context("building cost matrix")?;
            let start = Instant::now();
            solver::solve(&model.matrix).context("solving assignment")?;
            let elapsed = start.elapsed();
            println!(
                "{:>6} {:>6} {:>8} {:>12.3}",
                n,
                k,
                n * k,
                elapsed.as_secs_f64() * 1000.0
            );
        }
    }
    Ok(())
}
