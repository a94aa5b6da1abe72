//! Single-creature commands that print to stdout

use std::path::Path;
use std::process::ExitCode;

use crate::config::load_config;
use crate::radar;
use crate::sprite::generate_sprite;
use crate::svg;

use super::{find_creature, open_catalogue, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the sprite command
pub fn run_sprite(catalogue_path: &Path, id: &str) -> ExitCode {
    let catalogue = match open_catalogue(catalogue_path) {
        Ok(catalogue) => catalogue,
        Err(code) => return code,
    };
    let creature = match find_creature(&catalogue, id) {
        Ok(creature) => creature,
        Err(code) => return code,
    };

    println!("{}", generate_sprite(creature, &catalogue.types));
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the radar command. The chart takes the primary type's color and
/// the `[radar]` style of the project config, as `pdx render` does.
pub fn run_radar(catalogue_path: &Path, id: &str, config_path: Option<&Path>) -> ExitCode {
    let style = match load_config(config_path) {
        Ok(config) => config.radar.style(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let catalogue = match open_catalogue(catalogue_path) {
        Ok(catalogue) => catalogue,
        Err(code) => return code,
    };
    let creature = match find_creature(&catalogue, id) {
        Ok(creature) => creature,
        Err(code) => return code,
    };

    let accent = catalogue.types.resolve(&creature.types).primary;
    let doc = radar::generate(&creature.stats, accent, &style);
    println!("{}", svg::render(&doc));
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the matchup command
pub fn run_matchup(catalogue_path: &Path, attacker: &str, defender: &str) -> ExitCode {
    let catalogue = match open_catalogue(catalogue_path) {
        Ok(catalogue) => catalogue,
        Err(code) => return code,
    };

    for key in [attacker, defender] {
        if catalogue.types.get(key).is_none() {
            log::warn!("type '{}' is not in the catalogue", key);
        }
    }

    let multiplier = catalogue.type_chart.effectiveness(attacker, defender);
    println!(
        "{} -> {}: {}x",
        catalogue.types.name_of(attacker),
        catalogue.types.name_of(defender),
        multiplier
    );
    ExitCode::from(EXIT_SUCCESS)
}
