//! Patterndex - procedural pixel-art creature sprites and stat radar charts
//!
//! This library provides functionality to:
//! - Load creature catalogues (types, matchup chart, creatures) from JSON/JSON5
//! - Synthesize 32×32 pixel-art sprites from a visual descriptor and type colors
//! - Synthesize six-axis radar charts from stat records
//! - Emit both as SVG markup or rasterize sprites to PNG

pub mod bodies;
pub mod catalogue;
pub mod cli;
pub mod color;
pub mod config;
pub mod document;
pub mod face;
pub mod features;
pub mod grid;
pub mod memo;
pub mod models;
pub mod output;
pub mod radar;
pub mod raster;
pub mod sprite;
pub mod svg;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bodies::Body;
pub use color::Color;
pub use document::Document;
pub use features::Feature;
pub use radar::generate_radar_chart;
pub use sprite::{generate_sprite, CreatureColors};
