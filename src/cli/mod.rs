//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod render;
mod show;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::catalogue::load_catalogue;
use crate::models::{Catalogue, Creature};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Patterndex - Render creature sprites and stat radar charts from a catalogue
#[derive(Parser)]
#[command(name = "pdx")]
#[command(about = "Patterndex - Render pixel-art creature sprites and radar charts as SVG and PNG")]
#[command(version)]
pub struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every creature of a catalogue to files
    Render {
        /// Catalogue file or directory (.json, .json5).
        /// Defaults to project.catalogue from patterndex.toml
        catalogue: Option<PathBuf>,

        /// Output directory (defaults to project.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write {slug}.png
        #[arg(long)]
        png: bool,

        /// Skip {slug}.svg
        #[arg(long)]
        no_svg: bool,

        /// PNG scale factor (1-64)
        #[arg(long)]
        scale: Option<u32>,

        /// Only render the creature with this id
        #[arg(long)]
        id: Option<String>,

        /// Path to patterndex.toml (discovered by default)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print one creature's sprite SVG to stdout
    Sprite {
        /// Catalogue file or directory
        catalogue: PathBuf,
        /// Creature id
        id: String,
    },

    /// Print one creature's radar chart SVG to stdout
    Radar {
        /// Catalogue file or directory
        catalogue: PathBuf,
        /// Creature id
        id: String,

        /// Path to patterndex.toml for the [radar] style (discovered by default)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the damage multiplier of one type attacking another
    Matchup {
        /// Catalogue file or directory
        catalogue: PathBuf,
        /// Attacking type key
        attacker: String,
        /// Defending type key
        defender: String,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { catalogue, output, png, no_svg, scale, id, config } => {
            render::run_render(render::RenderArgs {
                catalogue,
                output,
                png,
                no_svg,
                scale,
                id,
                config,
            })
        }
        Commands::Sprite { catalogue, id } => show::run_sprite(&catalogue, &id),
        Commands::Radar { catalogue, id, config } => show::run_radar(&catalogue, &id, config.as_deref()),
        Commands::Matchup { catalogue, attacker, defender } => {
            show::run_matchup(&catalogue, &attacker, &defender)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    // A second init (tests driving run() twice) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

/// Load a catalogue, reporting failures the CLI way.
pub(crate) fn open_catalogue(path: &Path) -> Result<Catalogue, ExitCode> {
    load_catalogue(path).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Look up a creature, reporting an unknown id as invalid arguments.
pub(crate) fn find_creature<'a>(catalogue: &'a Catalogue, id: &str) -> Result<&'a Creature, ExitCode> {
    catalogue.creature(id).ok_or_else(|| {
        eprintln!("Error: no creature with id '{}'", id);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}
