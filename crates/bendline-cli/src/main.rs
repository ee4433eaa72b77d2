//! bendline CLI - compute tube centerlines from YBCR programs.
//!
//! Reads a JSON program (`{"Diameter": ..., "YBC": [{"Y":..,"B":..,"C":..,"Radius":..}, ...]}`)
//! from a file or stdin and writes the centerline result JSON to a file
//! or stdout. Diagnostics go to stderr so stdout stays machine-readable.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bendline_engine::compute_output;
use bendline_ir::{BendProgram, CenterlineOutput, DEFAULT_DIAMETER};

#[derive(Parser)]
#[command(name = "bendline")]
#[command(about = "Compute 3D tube centerlines from YBCR bend programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the centerline for a program
    Compute {
        /// Input program JSON (reads stdin if omitted)
        input: Option<PathBuf>,
        /// Output file (writes stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the result JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Display a summary of a program without computing geometry
    Info {
        /// Path to the program JSON
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compute {
            input,
            output,
            pretty,
        }) => compute(input, output, pretty),
        Some(Commands::Info { file }) => show_info(&file),
        // Default: filter stdin to stdout
        None => compute(None, None, false),
    }
}

fn compute(input: Option<PathBuf>, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let json = read_input(input)?;

    // A malformed program is reported through the same wire shape as an
    // engine failure, so callers always get the contract back.
    let result = match BendProgram::from_json(&json) {
        Ok(program) => compute_output(&program),
        Err(err) => CenterlineOutput::failure(format!("Invalid program: {err}"), DEFAULT_DIAMETER),
    };

    let text = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        result.to_json()?
    };

    match output {
        Some(path) => fs::write(&path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read program from stdin")?;
            Ok(buf)
        }
    }
}

fn show_info(file: &PathBuf) -> Result<()> {
    let json =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let program = BendProgram::from_json(&json)
        .with_context(|| format!("invalid program in {}", file.display()))?;

    let total_feed: f64 = program.ybc.iter().map(|r| r.y.abs()).sum();
    let bends = program
        .ybc
        .iter()
        .filter(|r| r.b.abs() > 1e-6 && r.radius > 0.0)
        .count();

    println!("Program: {}", file.display());
    println!("  Records:       {}", program.ybc.len());
    println!("  Bends:         {bends}");
    println!("  Total feed:    {total_feed}");
    match program.diameter {
        Some(d) => println!("  Diameter:      {d}"),
        None => println!("  Diameter:      {DEFAULT_DIAMETER} (default)"),
    }
    Ok(())
}
