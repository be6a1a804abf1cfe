//! The hexmul CLI tool

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hexmul::{fixtures, multiply, verify, write_hex, Matrix};

#[derive(Parser)]
#[command(name = "hexmul", author, version, about, long_about = None)]
struct Cli {
    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiplies the built-in 5x5 example matrices.
    Example,
    /// Multiplies two matrices given as literals, e.g. "1,2;3,4" or "0x1,0x2;0x3,0x4".
    Multiply {
        /// First operand
        a: Matrix,
        /// Second operand
        b: Matrix,
    },
    /// Multiplies two random square matrices and prints all three.
    Random {
        /// Matrix dimension
        #[arg(long)]
        #[arg(default_value_t = 4)]
        dim: usize,

        /// Element width in bits
        #[arg(long)]
        #[arg(default_value_t = 8)]
        width: u32,

        /// Seed for reproducible operands
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Checks a candidate product against the computed one.
    Verify {
        /// First operand
        a: Matrix,
        /// Second operand
        b: Matrix,
        /// Candidate product
        candidate: Matrix,
    },
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Done,
    Mismatch,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let stdout = io::stdout();
    match run(args.command, &mut stdout.lock()) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Mismatch) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(command: Commands, out: &mut W) -> Result<Outcome, Box<dyn std::error::Error>> {
    match command {
        Commands::Example => {
            log::info!("Multiplying built-in example matrices");
            let (a, b) = fixtures::example_pair();
            write_hex(out, &multiply(&a, &b)?)?;
        }
        Commands::Multiply { a, b } => {
            log::info!("Multiplying {}x{} by {}x{}", a.rows(), a.cols(), b.rows(), b.cols());
            write_hex(out, &multiply(&a, &b)?)?;
        }
        Commands::Random { dim, width, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            log::info!("Generating {dim}x{dim} operands of {width} bits, seed {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            let a = Matrix::random(&mut rng, dim, width)?;
            let b = Matrix::random(&mut rng, dim, width)?;
            let c = multiply(&a, &b)?;
            for (title, m) in [("Matrix A", &a), ("Matrix B", &b), ("Result: Matrix C", &c)] {
                writeln!(out, "{title}")?;
                write_hex(out, m)?;
                writeln!(out)?;
            }
        }
        Commands::Verify { a, b, candidate } => {
            log::info!("Verifying candidate product");
            let mismatches = verify(&a, &b, &candidate)?;
            if !mismatches.is_empty() {
                writeln!(out, "ERROR: result matrix is incorrect.")?;
                for m in &mismatches {
                    writeln!(
                        out,
                        "({}, {}): expected {:#x}, got {:#x}",
                        m.row, m.col, m.computed, m.candidate
                    )?;
                }
                return Ok(Outcome::Mismatch);
            }
            writeln!(out, "OK")?;
        }
    }
    Ok(Outcome::Done)
}
