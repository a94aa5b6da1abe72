//! Render command implementation

use std::path::PathBuf;
use std::process::ExitCode;

use rayon::prelude::*;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, ConfigError, PatterndexConfig};
use crate::memo::SpriteCache;
use crate::models::{Catalogue, Creature};
use crate::output::{save_png, save_svg, OutputError, OutputPaths};
use crate::radar::{self, RadarStyle};
use crate::{raster, svg};

use super::{find_creature, open_catalogue, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Arguments of `pdx render`
#[derive(Debug, Default)]
pub struct RenderArgs {
    pub catalogue: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub png: bool,
    pub no_svg: bool,
    pub scale: Option<u32>,
    pub id: Option<String>,
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            catalogue: self.catalogue.clone(),
            out: self.output.clone(),
            png: self.png.then_some(true),
            svg: self.no_svg.then_some(false),
            scale: self.scale,
        }
    }
}

/// Shared inputs of one render run
struct Job<'a> {
    config: &'a PatterndexConfig,
    catalogue: &'a Catalogue,
    cache: &'a SpriteCache,
    style: RadarStyle,
}

/// Execute the render command
pub fn run_render(args: RenderArgs) -> ExitCode {
    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = merge_cli_overrides(&mut config, &args.overrides()) {
        eprintln!("Error: {}", e);
        let code = if matches!(e, ConfigError::Validation(_)) { EXIT_INVALID_ARGS } else { EXIT_ERROR };
        return ExitCode::from(code);
    }

    let catalogue = match open_catalogue(&config.project.catalogue) {
        Ok(catalogue) => catalogue,
        Err(code) => return code,
    };

    let creatures: Vec<&Creature> = match args.id.as_deref() {
        Some(id) => match find_creature(&catalogue, id) {
            Ok(creature) => vec![creature],
            Err(code) => return code,
        },
        None => catalogue.creatures.iter().collect(),
    };

    if creatures.is_empty() {
        log::warn!("catalogue {} has no creatures", config.project.catalogue.display());
        return ExitCode::from(EXIT_SUCCESS);
    }

    let cache = SpriteCache::new();
    let job = Job { config: &config, catalogue: &catalogue, cache: &cache, style: config.radar.style() };

    let failures: Vec<(String, OutputError)> = creatures
        .par_iter()
        .filter_map(|creature| render_creature(&job, creature).err().map(|e| (creature.id.clone(), e)))
        .collect();

    log::debug!("sprite cache: {} hits, {} misses", cache.hits(), cache.misses());

    for (id, e) in &failures {
        eprintln!("Error: creature {}: {}", id, e);
    }
    if !failures.is_empty() {
        return ExitCode::from(EXIT_ERROR);
    }

    println!(
        "Rendered {} creature{} to {}",
        creatures.len(),
        if creatures.len() == 1 { "" } else { "s" },
        config.project.out.display()
    );
    ExitCode::from(EXIT_SUCCESS)
}

fn render_creature(job: &Job<'_>, creature: &Creature) -> Result<(), OutputError> {
    let render = &job.config.render;
    let paths = OutputPaths::new(&job.config.project.out, &creature.slug());

    if render.svg || render.png {
        let doc = job.cache.document_for(creature, &job.catalogue.types);

        if render.svg {
            save_svg(&svg::render(&doc), &paths.sprite_svg)?;
            log::info!("wrote {}", paths.sprite_svg.display());
        }

        if render.png {
            let (image, warnings) = raster::render(&doc, render.scale);
            for warning in warnings {
                log::debug!("{}: {}", creature.id, warning.message);
            }
            save_png(&image, &paths.sprite_png)?;
            log::info!("wrote {}", paths.sprite_png.display());
        }
    }

    if render.radar {
        let accent = job.catalogue.types.resolve(&creature.types).primary;
        let chart = radar::generate(&creature.stats, accent, &job.style);
        save_svg(&svg::render(&chart), &paths.radar_svg)?;
        log::info!("wrote {}", paths.radar_svg.display());
    }

    Ok(())
}
