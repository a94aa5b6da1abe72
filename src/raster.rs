//! Bitmap output
//!
//! Rasterizes a [`Document`] into an RGBA image. Each primitive is first
//! turned into a set of integer pixel coordinates and then composited
//! source-over, so overlapping coverage inside one translucent primitive is
//! only blended once.
//!
//! This is a preview path, not a full vector renderer: rounded corners are
//! drawn square and text is skipped with a warning.

use std::collections::HashSet;

use image::{Rgba, RgbaImage};

use crate::color::Paint;
use crate::document::{Document, Primitive, Stroke};

/// A warning generated during rasterization
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Rasterize a document at `scale` pixels per canvas unit.
///
/// A 64-unit sprite at scale 4 becomes a 256×256 image. Scale 0 is treated
/// as 1.
///
/// # Examples
///
/// ```
/// use patterndex::color::Color;
/// use patterndex::document::{Document, LayerKind, Primitive};
/// use patterndex::raster::render;
///
/// let mut doc = Document::new(4.0, 4.0);
/// doc.push(LayerKind::Body, vec![Primitive::rect(1.0, 1.0, 2.0, 2.0, Color::WHITE)]);
///
/// let (image, warnings) = render(&doc, 2);
/// assert_eq!(image.dimensions(), (8, 8));
/// assert_eq!(image.get_pixel(3, 3).0, [255, 255, 255, 255]);
/// assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
/// assert!(warnings.is_empty());
/// ```
pub fn render(doc: &Document, scale: u32) -> (RgbaImage, Vec<Warning>) {
    let scale = f64::from(scale.max(1));
    let width = (doc.width * scale).round().max(1.0) as u32;
    let height = (doc.height * scale).round().max(1.0) as u32;

    let mut image = RgbaImage::new(width, height);
    let mut warnings = Vec::new();

    for primitive in doc.primitives() {
        draw_primitive(&mut image, primitive, scale, &mut warnings);
    }

    (image, warnings)
}

fn draw_primitive(image: &mut RgbaImage, primitive: &Primitive, scale: f64, warnings: &mut Vec<Warning>) {
    match primitive {
        Primitive::Rect { x, y, width, height, fill, stroke, rx: _, opacity } => {
            let opacity = opacity.unwrap_or(1.0);
            let (x0, y0) = (px(*x, scale), px(*y, scale));
            let (x1, y1) = (px(x + width, scale), px(y + height, scale));

            if !fill.is_none() {
                composite(image, &rasterize_rect(x0, y0, x1 - x0, y1 - y0), fill, opacity);
            }
            if let Some(Stroke { paint, width: sw }) = stroke {
                let t = thickness(*sw, scale);
                let half = t / 2;
                let pixels = rasterize_stroke(x0 - half, y0 - half, x1 - x0 + t, y1 - y0 + t, t);
                composite(image, &pixels, paint, opacity);
            }
        }
        Primitive::Polygon { points, fill, stroke } => {
            let scaled: Vec<(f64, f64)> = points.iter().map(|(x, y)| (x * scale, y * scale)).collect();
            if !fill.is_none() {
                composite(image, &rasterize_polygon(&scaled), fill, 1.0);
            }
            if let Some(stroke) = stroke {
                let mut pixels = HashSet::new();
                for i in 0..scaled.len() {
                    let a = scaled[i];
                    let b = scaled[(i + 1) % scaled.len()];
                    pixels.extend(rasterize_thick_line(a, b, thickness(stroke.width, scale)));
                }
                composite(image, &pixels, &stroke.paint, 1.0);
            }
        }
        Primitive::Line { from, to, stroke } => {
            let a = (from.0 * scale, from.1 * scale);
            let b = (to.0 * scale, to.1 * scale);
            let pixels = rasterize_thick_line(a, b, thickness(stroke.width, scale));
            composite(image, &pixels, &stroke.paint, 1.0);
        }
        Primitive::Text { content, .. } => {
            warnings.push(Warning::new(format!("Text '{}' skipped: glyphs are not rasterized", content)));
        }
    }
}

/// Canvas units to the nearest pixel edge.
fn px(v: f64, scale: f64) -> i32 {
    (v * scale).round() as i32
}

fn thickness(width: f64, scale: f64) -> i32 {
    ((width * scale).round() as i32).max(1)
}

/// Blend a pixel set onto the image with source-over compositing.
fn composite(image: &mut RgbaImage, pixels: &HashSet<(i32, i32)>, paint: &Paint, opacity: f64) {
    let Some(color) = paint.color() else {
        return;
    };
    let alpha = (f64::from(paint.alpha()) * opacity.clamp(0.0, 1.0)).round() as u8;
    if alpha == 0 {
        return;
    }
    let src = color.to_rgba(alpha);
    let (w, h) = image.dimensions();

    for &(x, y) in pixels {
        if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
            continue;
        }
        let dst = image.get_pixel_mut(x as u32, y as u32);
        *dst = blend(*dst, src);
    }
}

/// Source-over blend of `src` onto `dst`.
pub fn blend(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0;
    if sa >= 1.0 {
        return src;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| {
        let s = f32::from(src[i]) * sa;
        let d = f32::from(dst[i]) * da * (1.0 - sa);
        ((s + d) / out_a).round().clamp(0.0, 255.0) as u8
    };
    Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}

/// Rasterize a filled rectangle.
///
/// Returns all pixels within a rectangle defined by top-left corner (x, y)
/// and dimensions (w, h).
pub fn rasterize_rect(x: i32, y: i32, w: i32, h: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if w <= 0 || h <= 0 {
        return pixels;
    }

    for dy in 0..h {
        for dx in 0..w {
            pixels.insert((x + dx, y + dy));
        }
    }

    pixels
}

/// Rasterize a stroked rectangle (outline only), `thickness` pixels deep
/// measured inward from the outer edge.
pub fn rasterize_stroke(x: i32, y: i32, w: i32, h: i32, thickness: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if w <= 0 || h <= 0 || thickness <= 0 {
        return pixels;
    }

    for dx in 0..w {
        for t in 0..thickness.min(h) {
            pixels.insert((x + dx, y + t));
            pixels.insert((x + dx, y + h - 1 - t));
        }
    }

    for dy in 0..h {
        for t in 0..thickness.min(w) {
            pixels.insert((x + t, y + dy));
            pixels.insert((x + w - 1 - t, y + dy));
        }
    }

    pixels
}

/// Rasterize a line using Bresenham's line algorithm.
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pixels.insert((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// A Bresenham line stamped with a square brush of side `thickness`.
fn rasterize_thick_line(a: (f64, f64), b: (f64, f64), thickness: i32) -> HashSet<(i32, i32)> {
    let p0 = (a.0.floor() as i32, a.1.floor() as i32);
    let p1 = (b.0.floor() as i32, b.1.floor() as i32);
    let core = rasterize_line(p0, p1);
    if thickness <= 1 {
        return core;
    }

    let lo = -(thickness - 1) / 2;
    let hi = lo + thickness;
    let mut pixels = HashSet::with_capacity(core.len() * (thickness * thickness) as usize);
    for (x, y) in core {
        for dy in lo..hi {
            for dx in lo..hi {
                pixels.insert((x + dx, y + dy));
            }
        }
    }
    pixels
}

/// Rasterize a filled polygon using an even-odd scanline fill.
///
/// A pixel is covered when its centre lies inside the polygon.
pub fn rasterize_polygon(vertices: &[(f64, f64)]) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if vertices.len() < 3 {
        return pixels;
    }

    let min_y = vertices.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min).floor() as i32;
    let max_y = vertices.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max).ceil() as i32;

    for y in min_y..=max_y {
        let scan = f64::from(y) + 0.5;
        let mut intersections = Vec::new();

        for i in 0..vertices.len() {
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[(i + 1) % vertices.len()];

            // half-open so shared vertices are counted once
            if (y1 <= scan && scan < y2) || (y2 <= scan && scan < y1) {
                intersections.push(x1 + (scan - y1) * (x2 - x1) / (y2 - y1));
            }
        }

        intersections.sort_by(|a, b| a.total_cmp(b));

        for pair in intersections.chunks(2) {
            if let [start, end] = pair {
                let first = (start - 0.5).ceil() as i32;
                let last = (end - 0.5).floor() as i32;
                for x in first..=last {
                    pixels.insert((x, y));
                }
            }
        }
    }

    pixels
}
