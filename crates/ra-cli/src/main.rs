//! CLI frontend for Reimagined Adventure.

mod commands;
mod config;
mod editor;
mod render;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::PlayConfig;

#[derive(Parser)]
#[command(
    name = "ra",
    about = "Reimagined Adventure \u{2014} a tiny, procedurally assembled text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// RNG seed for a repeatable world (random when omitted)
    #[arg(short, long, global = true, env = "RA_SEED")]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session (the default)
    Play {
        /// Wrap narration at this many columns
        #[arg(short, long, default_value = "80")]
        width: usize,
    },

    /// Print the generated world for a seed (spoils the puzzle)
    Map {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        None => commands::play::run(&PlayConfig::default().with_seed(cli.seed)),
        Some(Commands::Play { width }) => commands::play::run(
            &PlayConfig::default()
                .with_seed(cli.seed)
                .with_width(width),
        ),
        Some(Commands::Map { json }) => commands::map::run(cli.seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
