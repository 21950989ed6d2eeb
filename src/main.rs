//! Numble - CLI
//!
//! Wordle-style arithmetic puzzle with TUI and CLI modes: guess the hidden
//! equation, get per-character feedback, six tries.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use numble::{
    commands::{run_check, run_generate, run_score, run_simple},
    core::Equation,
    eval::is_valid_equation,
    game::DEFAULT_ATTEMPTS,
    output::{print_check_report, print_generate_stats, print_score_report},
    puzzles::{
        TARGETS,
        loader::{equations_from_slice, load_from_file},
    },
};
use rand::prelude::IndexedRandom;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "numble",
    about = "Wordle-style arithmetic puzzle: guess the hidden equation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target pool: 'builtin' (default) or path to a file of equations
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    pool: String,

    /// Attempt rows per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple {
        /// Play against a specific secret equation instead of a random one
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Check whether a string is a well-formed, true equation
    Check {
        /// The equation to check, e.g. "2*3+4=10"
        equation: String,
    },

    /// Score a guess against a target equation
    Score {
        /// The secret equation
        target: String,

        /// The guessed equation (same width)
        guess: String,
    },

    /// Enumerate every valid equation of a width
    Generate {
        /// Equation width in characters, including '='
        #[arg(short = 'n', long, default_value = "8")]
        width: usize,

        /// Write the pool to a file, one equation per line
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load the target pool based on the -w flag
///
/// "builtin" uses the embedded curated list; anything else is a file path.
fn load_pool(pool_mode: &str) -> Result<Vec<Equation>> {
    let targets = match pool_mode {
        "builtin" => equations_from_slice(TARGETS),
        path => load_from_file(path)?,
    };

    if targets.is_empty() {
        bail!("target pool '{pool_mode}' contains no valid equations");
    }

    Ok(targets)
}

/// Choose the secret: an explicit override or a random pool entry
fn pick_secret(targets: &[Equation], secret: Option<&str>) -> Result<Equation> {
    match secret {
        Some(text) => {
            if !is_valid_equation(text) {
                bail!("'{text}' is not a true equation");
            }
            Ok(Equation::new(text)?)
        }
        None => targets
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("target pool is empty")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.pool, cli.attempts),
        Commands::Simple { secret } => {
            run_simple_command(&cli.pool, secret.as_deref(), cli.attempts)
        }
        Commands::Check { equation } => {
            print_check_report(&run_check(&equation));
            Ok(())
        }
        Commands::Score { target, guess } => {
            let report = run_score(&target, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Generate { width, output } => run_generate_command(width, output.as_deref()),
    }
}

fn run_play_command(pool_mode: &str, attempts: usize) -> Result<()> {
    use numble::interactive::{App, run_tui};

    let targets = load_pool(pool_mode)?;
    let first = pick_secret(&targets, None)?;

    let app = App::new(first, targets, attempts);
    run_tui(app)
}

fn run_simple_command(pool_mode: &str, secret: Option<&str>, attempts: usize) -> Result<()> {
    let targets = load_pool(pool_mode)?;
    let target = pick_secret(&targets, secret)?;

    run_simple(target, attempts).map_err(|e| anyhow::anyhow!(e))
}

fn run_generate_command(width: usize, output: Option<&std::path::Path>) -> Result<()> {
    if width < 3 {
        bail!("width must be at least 3 (one character each side of '=')");
    }

    let (stats, pool) = run_generate(width);
    print_generate_stats(&stats, &pool);

    if let Some(path) = output {
        let mut contents = pool
            .iter()
            .map(numble::core::Equation::text)
            .collect::<Vec<_>>()
            .join("\n");
        contents.push('\n');
        std::fs::write(path, contents)?;
        println!("\n💾 Wrote {} equations to {}", pool.len(), path.display());
    }

    Ok(())
}
