//! WASM API module for browser/JS interop
//!
//! Exposes sprite and radar chart generation to JavaScript. Inputs arrive as
//! JSON strings; malformed input degrades to a fallback sprite or an empty
//! chart instead of throwing.

use wasm_bindgen::prelude::*;

use crate::color::Color;
use crate::config::MAX_SCALE;
use crate::document::Document;
use crate::models::{Creature, Stats, TypeTable};
use crate::{radar, raster, sprite, svg};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Result of rasterizing a sprite to RGBA pixels.
#[wasm_bindgen]
pub struct RenderResult {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    warnings: Vec<String>,
}

#[wasm_bindgen]
impl RenderResult {
    /// Width of the rendered image in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rendered image in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel data (4 bytes per pixel)
    #[wasm_bindgen(getter)]
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Any warnings generated during parsing or rendering
    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }
}

/// Parse inputs and build the sprite document, collecting parse warnings.
fn prepare_sprite(creature_json: &str, types_json: &str) -> (Document, Vec<String>) {
    let mut warnings = Vec::new();

    let types: TypeTable = serde_json::from_str(types_json).unwrap_or_else(|e| {
        warnings.push(format!("types: {}", e));
        TypeTable::default()
    });

    let doc = match serde_json::from_str::<Creature>(creature_json) {
        Ok(creature) => sprite::sprite_document(&creature, &types),
        Err(e) => {
            warnings.push(format!("creature: {}", e));
            sprite::generate_fallback(Color::GRAY, None)
        }
    };

    (doc, warnings)
}

/// Sprite SVG markup for a creature record and a type table.
#[wasm_bindgen(js_name = generateSprite)]
pub fn generate_sprite(creature_json: &str, types_json: &str) -> String {
    svg::render(&prepare_sprite(creature_json, types_json).0)
}

/// Radar chart SVG markup for a stat record and an accent hex color.
#[wasm_bindgen(js_name = generateRadarChart)]
pub fn generate_radar_chart(stats_json: &str, color: &str) -> String {
    let stats: Stats = serde_json::from_str(stats_json).unwrap_or_default();
    let accent = Color::from_hex(color).unwrap_or(Color::GRAY);
    radar::generate_radar_chart(&stats, accent)
}

/// Clamp a caller-supplied scale into `1..=MAX_SCALE`, noting any change.
fn clamp_scale(scale: u32, warnings: &mut Vec<String>) -> u32 {
    let clamped = scale.clamp(1, MAX_SCALE);
    if clamped != scale {
        warnings.push(format!("scale {} out of range, using {}", scale, clamped));
    }
    clamped
}

/// Rasterize a creature's sprite to RGBA pixels at `scale` pixels per unit.
///
/// Scale is clamped to `1..=64`.
#[wasm_bindgen(js_name = renderSpriteRgba)]
pub fn render_sprite_rgba(creature_json: &str, types_json: &str, scale: u32) -> RenderResult {
    let (doc, mut warnings) = prepare_sprite(creature_json, types_json);
    let scale = clamp_scale(scale, &mut warnings);
    let (image, render_warnings) = raster::render(&doc, scale);
    warnings.extend(render_warnings.into_iter().map(|w| w.message));

    RenderResult { width: image.width(), height: image.height(), pixels: image.into_raw(), warnings }
}

/// Rasterize a creature's sprite to PNG bytes.
///
/// Returns an empty array if encoding fails.
#[wasm_bindgen(js_name = renderSpritePng)]
pub fn render_sprite_png(creature_json: &str, types_json: &str, scale: u32) -> Vec<u8> {
    let (doc, mut warnings) = prepare_sprite(creature_json, types_json);
    let scale = clamp_scale(scale, &mut warnings);
    let (image, _render_warnings) = raster::render(&doc, scale);

    let mut png_data = Vec::new();
    {
        use image::ImageEncoder;
        let encoder = image::codecs::png::PngEncoder::new(&mut png_data);
        if encoder
            .write_image(image.as_raw(), image.width(), image.height(), image::ColorType::Rgba8)
            .is_err()
        {
            return Vec::new();
        }
    }

    png_data
}
