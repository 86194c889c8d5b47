//! Marquee CLI — the command-line interface for the marquee controller model.
//!
//! Provides `marquee check` for validating a project configuration and
//! `marquee run` for executing the tick-level simulation harness.

#![warn(missing_docs)]

mod check;
mod pipeline;
mod run;

use std::process;

use clap::{Parser, Subcommand};

/// Marquee — a cycle-accurate LED marquee controller model.
#[derive(Parser, Debug)]
#[command(name = "marquee", version, about = "Marquee controller model")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a custom `marquee.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the project configuration and report derived timing.
    Check,
    /// Run the tick-level simulation.
    Run(RunArgs),
}

/// Arguments for the `marquee run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Wall-clock time to simulate (e.g., "2s", "500ms").
    #[arg(long, conflicts_with = "ticks")]
    pub time: Option<String>,

    /// Number of clock edges to simulate.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Output path for a VCD trace of the run.
    #[arg(long)]
    pub vcd: Option<String>,

    /// Suppress per-transition frame output.
    #[arg(long)]
    pub no_frames: bool,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Check => check::run(&global),
        Command::Run(ref args) => run::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
