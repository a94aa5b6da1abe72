//! Feature and accent overlays
//!
//! Overlays are placed on absolute grid coordinates and know nothing about
//! the body beneath them. Each takes a single color and derives its own
//! highlights and shadows from it.

use crate::color::{Color, Paint};
use crate::document::{Primitive, Stroke};
use crate::grid::{Fragment, PixelGrid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known overlay features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Horns,
    Antennae,
    Wings,
    Tail,
    Claws,
    /// Energy field drawn behind the body
    Aura,
    Shield,
    Markings,
    /// Dorsal spike ridge
    Spikes,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::Horns,
        Feature::Antennae,
        Feature::Wings,
        Feature::Tail,
        Feature::Claws,
        Feature::Aura,
        Feature::Shield,
        Feature::Markings,
        Feature::Spikes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Horns => "horns",
            Feature::Antennae => "antennae",
            Feature::Wings => "wings",
            Feature::Tail => "tail",
            Feature::Claws => "claws",
            Feature::Aura => "aura",
            Feature::Shield => "shield",
            Feature::Markings => "markings",
            Feature::Spikes => "spikes",
        }
    }

    /// Draw the overlay in the given color.
    pub fn draw(self, color: Color) -> Vec<Primitive> {
        let mut frag = Fragment::new(PixelGrid::SPRITE);
        match self {
            Feature::Horns => horns(&mut frag, color),
            Feature::Antennae => antennae(&mut frag, color),
            Feature::Wings => wings(&mut frag, color),
            Feature::Tail => tail(&mut frag, color),
            Feature::Claws => claws(&mut frag, color),
            Feature::Aura => aura(&mut frag, color),
            Feature::Shield => shield(&mut frag, color),
            Feature::Markings => markings(&mut frag, color),
            Feature::Spikes => spikes(&mut frag, color),
        }
        frag.finish()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown feature '{}'", s))
    }
}

fn horns(f: &mut Fragment, color: Color) {
    let tip = color.darken(30);
    let glint = color.lighten(50);
    // left horn curls outward
    f.cell(9, 5, 2, 2, color)
        .cell(8, 3, 2, 2, color)
        .cell(7, 1, 2, 2, color)
        .cell(6, 0, 2, 1, tip)
        .cell(21, 5, 2, 2, color)
        .cell(22, 3, 2, 2, color)
        .cell(23, 1, 2, 2, color)
        .cell(24, 0, 2, 1, tip)
        .cell(7, 1, 1, 1, glint)
        .cell(23, 1, 1, 1, glint);
}

fn antennae(f: &mut Fragment, color: Color) {
    let bulb = color.lighten(60);
    let glint = color.lighten(80);
    f.cell(10, 4, 1, 4, color)
        .cell(9, 2, 1, 2, color)
        .cell(8, 0, 2, 2, bulb)
        .cell(8, 0, 1, 1, glint)
        .cell(21, 4, 1, 4, color)
        .cell(22, 2, 1, 2, color)
        .cell(22, 0, 2, 2, bulb)
        .cell(23, 0, 1, 1, glint);
}

fn wings(f: &mut Fragment, color: Color) {
    let light = color.lighten(30);
    let vein = color.darken(20);
    f.cell(2, 7, 4, 2, color)
        .cell(0, 9, 6, 2, color)
        .cell(0, 11, 7, 2, light)
        .cell(0, 13, 6, 2, color)
        .cell(1, 15, 4, 1, vein)
        .cell(1, 9, 1, 6, vein)
        .cell(3, 8, 1, 7, vein)
        .cell(26, 7, 4, 2, color)
        .cell(26, 9, 6, 2, color)
        .cell(25, 11, 7, 2, light)
        .cell(26, 13, 6, 2, color)
        .cell(27, 15, 4, 1, vein)
        .cell(30, 9, 1, 6, vein)
        .cell(28, 8, 1, 7, vein);
}

fn tail(f: &mut Fragment, color: Color) {
    let tip = color.lighten(30);
    // sweeps right and up from the hip
    f.cell(22, 20, 3, 2, color)
        .cell(24, 19, 3, 2, color)
        .cell(26, 17, 3, 2, color)
        .cell(27, 15, 3, 2, color)
        .cell(28, 13, 2, 2, color)
        .cell(29, 12, 2, 1, tip)
        .cell(30, 11, 1, 1, tip);
}

fn claws(f: &mut Fragment, color: Color) {
    let talon = color.darken(30);
    f.cell(6, 22, 2, 3, color)
        .cell(5, 24, 1, 2, talon)
        .cell(7, 24, 1, 2, talon)
        .cell(8, 25, 1, 1, talon)
        .cell(24, 22, 2, 3, color)
        .cell(23, 24, 1, 2, talon)
        .cell(25, 24, 1, 2, talon)
        .cell(26, 25, 1, 1, talon);
}

fn aura(f: &mut Fragment, color: Color) {
    let grid = f.grid();
    let inner = Stroke::new(Paint::Tint(color, 0x33), 3.0);
    let outer = Stroke::new(Paint::Tint(color, 0x1a), 2.0);
    let sparkle = Paint::Tint(color, 0x44);

    f.push(Primitive::outline(grid.scale(5), grid.scale(3), grid.scale(22), grid.scale(24), inner, 2.0))
        .push(Primitive::outline(grid.scale(3), grid.scale(1), grid.scale(26), grid.scale(28), outer, 4.0))
        .cell(4, 3, 1, 1, sparkle)
        .cell(27, 3, 1, 1, sparkle)
        .cell(4, 26, 1, 1, sparkle)
        .cell(27, 26, 1, 1, sparkle);
}

fn shield(f: &mut Fragment, color: Color) {
    let rim = color.lighten(40);
    let point = color.darken(30);
    f.cell(12, 13, 8, 1, rim)
        .cell(11, 14, 10, 1, color)
        .cell(11, 15, 10, 2, color)
        .cell(12, 17, 8, 1, color)
        .cell(13, 18, 6, 1, color)
        .cell(14, 19, 4, 1, point)
        .cell(15, 20, 2, 1, point)
        // cross emblem
        .cell(15, 15, 2, 3, rim)
        .cell(13, 16, 6, 1, rim);
}

fn markings(f: &mut Fragment, color: Color) {
    f.rows(&[(16, 10, 2), (17, 11, 2), (18, 12, 2), (16, 18, 2), (17, 19, 2), (18, 20, 2)], color)
        .rows(&[(14, 14, 1), (14, 17, 1), (20, 15, 1), (20, 16, 1)], color);
}

fn spikes(f: &mut Fragment, color: Color) {
    let tip = color.lighten(40);
    for x in [11, 14, 17] {
        f.cell(x, 5, 3, 1, color).cell(x + 1, 3, 1, 2, color).cell(x + 1, 2, 1, 1, tip);
    }
}
