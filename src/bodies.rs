//! Body shape library
//!
//! Each body variant is a fixed composition of row bands drawn with three
//! colors: the primary fill, a darkened outline and a lightened specular
//! highlight. Every variant carries a ground shadow, a top outline, a body
//! mass, an upper-left highlight and a lower shade patch. Adding a variant
//! means adding one enum arm and one drawing function.

use crate::color::{Color, Paint};
use crate::document::Primitive;
use crate::grid::{Fragment, PixelGrid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount the outline is darkened from the primary color.
pub const OUTLINE_SHADE: u8 = 40;
/// Amount the highlight is lightened from the primary color.
pub const HIGHLIGHT_TINT: u8 = 35;
/// Amount the lower-body shade is darkened from the primary color.
pub const BELLY_SHADE: u8 = 20;

/// Known body silhouettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Round,
    Angular,
    Tall,
    Wide,
    Multi,
    Serpentine,
}

impl Body {
    pub const ALL: [Body; 6] =
        [Body::Round, Body::Angular, Body::Tall, Body::Wide, Body::Multi, Body::Serpentine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Body::Round => "round",
            Body::Angular => "angular",
            Body::Tall => "tall",
            Body::Wide => "wide",
            Body::Multi => "multi",
            Body::Serpentine => "serpentine",
        }
    }

    /// Draw the silhouette.
    pub fn draw(self, colors: &BodyColors) -> Vec<Primitive> {
        let mut frag = Fragment::new(PixelGrid::SPRITE);
        match self {
            Body::Round => round(&mut frag, colors),
            Body::Angular => angular(&mut frag, colors),
            Body::Tall => tall(&mut frag, colors),
            Body::Wide => wide(&mut frag, colors),
            Body::Multi => multi(&mut frag, colors),
            Body::Serpentine => serpentine(&mut frag, colors),
        }
        frag.finish()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("unknown body '{}'", s))
    }
}

/// The three colors a body is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyColors {
    pub primary: Color,
    pub dark: Color,
    pub light: Color,
}

impl BodyColors {
    /// Derive outline and highlight from the primary color.
    pub fn from_primary(primary: Color) -> Self {
        Self {
            primary,
            dark: primary.darken(OUTLINE_SHADE),
            light: primary.lighten(HIGHLIGHT_TINT),
        }
    }

    fn shade(&self) -> Color {
        self.primary.darken(BELLY_SHADE)
    }
}

fn round(f: &mut Fragment, c: &BodyColors) {
    f.rows(&[(27, 10, 12)], Paint::SHADOW)
        .rows(&[(7, 13, 6)], c.dark)
        .rows(&[(8, 11, 10)], c.dark)
        .rows(
            &[
                (9, 10, 12),
                (10, 9, 14),
                (11, 8, 16),
                (12, 8, 16),
                (13, 8, 16),
                (14, 8, 16),
                (15, 8, 16),
                (16, 8, 16),
                (17, 8, 16),
                (18, 8, 16),
                (19, 9, 14),
                (20, 9, 14),
                (21, 10, 12),
                (22, 11, 10),
                (23, 12, 8),
            ],
            c.primary,
        )
        .rows(&[(24, 13, 6)], c.dark)
        .rows(&[(10, 11, 4), (11, 10, 3), (12, 10, 2)], c.light)
        .rows(&[(20, 12, 8), (21, 13, 6)], c.shade());
}

fn angular(f: &mut Fragment, c: &BodyColors) {
    f.rows(&[(28, 9, 14)], Paint::SHADOW)
        // crest spike
        .rows(&[(4, 15, 2)], c.dark)
        .rows(&[(5, 14, 4)], c.dark)
        .rows(&[(6, 13, 6)], c.primary)
        .rows(
            &[
                (7, 12, 8),
                (8, 11, 10),
                (9, 10, 12),
                (10, 9, 14),
                (11, 8, 16),
                (12, 7, 18),
                (13, 7, 18),
                (14, 7, 18),
                (15, 7, 18),
                (16, 8, 16),
                (17, 8, 16),
                (18, 9, 14),
            ],
            c.primary,
        )
        // splayed legs
        .rows(
            &[
                (19, 8, 6),
                (19, 18, 6),
                (20, 7, 6),
                (20, 19, 6),
                (21, 7, 5),
                (21, 20, 5),
                (22, 7, 4),
                (22, 21, 4),
            ],
            c.primary,
        )
        .rows(&[(23, 7, 3), (23, 22, 3)], c.dark)
        .rows(&[(9, 12, 3), (10, 11, 4), (11, 10, 3)], c.light)
        .rows(
            &[
                (12, 7, 1),
                (13, 7, 1),
                (14, 7, 1),
                (15, 7, 1),
                (12, 24, 1),
                (13, 24, 1),
                (14, 24, 1),
                (15, 24, 1),
            ],
            c.dark,
        );
}

fn tall(f: &mut Fragment, c: &BodyColors) {
    f.rows(&[(28, 10, 12)], Paint::SHADOW)
        .rows(&[(3, 12, 8)], c.dark)
        // head
        .rows(&[(4, 11, 10), (5, 10, 12), (6, 10, 12), (7, 10, 12), (8, 11, 10)], c.primary)
        // neck
        .rows(&[(9, 12, 8), (10, 13, 6)], c.primary)
        // torso
        .rows(
            &[
                (11, 11, 10),
                (12, 10, 12),
                (13, 10, 12),
                (14, 10, 12),
                (15, 10, 12),
                (16, 10, 12),
                (17, 10, 12),
                (18, 11, 10),
                (19, 11, 10),
            ],
            c.primary,
        )
        // legs
        .rows(
            &[
                (20, 11, 4),
                (20, 17, 4),
                (21, 11, 4),
                (21, 17, 4),
                (22, 11, 4),
                (22, 17, 4),
                (23, 10, 4),
                (23, 18, 4),
            ],
            c.primary,
        )
        .rows(&[(24, 10, 5), (24, 17, 5)], c.dark)
        .rows(&[(4, 12, 4), (5, 11, 3)], c.light)
        .rows(&[(17, 12, 8), (18, 13, 6)], c.shade());
}

fn wide(f: &mut Fragment, c: &BodyColors) {
    f.rows(&[(27, 5, 22)], Paint::SHADOW)
        .rows(&[(7, 11, 10)], c.dark)
        .rows(
            &[
                (8, 9, 14),
                (9, 7, 18),
                (10, 6, 20),
                (11, 5, 22),
                (12, 4, 24),
                (13, 4, 24),
                (14, 4, 24),
                (15, 4, 24),
                (16, 4, 24),
                (17, 4, 24),
                (18, 5, 22),
                (19, 5, 22),
                (20, 6, 20),
                (21, 7, 18),
                (22, 8, 16),
            ],
            c.primary,
        )
        // feet stubs
        .rows(&[(23, 7, 5), (23, 20, 5), (24, 6, 6), (24, 20, 6)], c.primary)
        .rows(&[(25, 6, 6), (25, 20, 6)], c.dark)
        .rows(&[(9, 9, 5), (10, 8, 4), (11, 7, 3)], c.light)
        .rows(&[(20, 8, 16), (21, 10, 12)], c.shade());
}

fn multi(f: &mut Fragment, c: &BodyColors) {
    f.rows(&[(28, 8, 16)], Paint::SHADOW);

    // satellites: left at column 3, right at column 21
    for &(outline, fill, glint) in &[(4u32, 3u32, 4u32), (22, 21, 23)] {
        f.rows(&[(4, outline, 6)], c.dark)
            .rows(&[(5, fill, 8), (6, fill, 8), (7, fill, 8), (8, fill, 8), (9, fill, 8)], c.primary)
            .rows(&[(10, outline, 6)], c.dark)
            .rows(&[(5, glint, 3), (6, glint - 1, 2)], c.light);
    }

    f.rows(&[(8, 11, 2), (9, 10, 3), (8, 19, 2), (9, 19, 3)], c.primary.darken(15))
        .rows(&[(10, 12, 8)], c.dark)
        .rows(
            &[
                (11, 10, 12),
                (12, 9, 14),
                (13, 9, 14),
                (14, 9, 14),
                (15, 9, 14),
                (16, 9, 14),
                (17, 9, 14),
                (18, 10, 12),
                (19, 10, 12),
            ],
            c.primary,
        )
        .rows(&[(20, 11, 10)], c.primary)
        .rows(&[(21, 12, 8)], c.dark)
        .rows(&[(11, 12, 4), (12, 11, 3)], c.light)
        .rows(&[(19, 12, 8), (20, 13, 6)], c.shade());
}

fn serpentine(f: &mut Fragment, c: &BodyColors) {
    f.rows(&[(28, 5, 22)], Paint::SHADOW)
        // head, upper left
        .rows(&[(5, 6, 8)], c.dark)
        .rows(&[(6, 5, 10), (7, 4, 12), (8, 4, 12), (9, 4, 12), (10, 5, 10)], c.primary)
        .rows(&[(6, 6, 4), (7, 5, 3)], c.light)
        // neck sweeps right
        .rows(&[(11, 7, 10), (12, 10, 8), (13, 12, 8)], c.primary)
        .rows(&[(14, 14, 10), (15, 16, 10), (16, 17, 9), (17, 17, 9), (18, 16, 10)], c.primary)
        // and curls back left into the tail
        .rows(&[(19, 14, 10), (20, 12, 10), (21, 10, 8)], c.primary)
        .rows(&[(22, 8, 6), (23, 6, 5), (24, 5, 4)], c.primary)
        .rows(&[(25, 4, 3)], c.dark)
        .rows(&[(25, 3, 1)], c.primary.lighten(30))
        .rows(&[(10, 6, 8), (17, 19, 5), (18, 18, 6)], c.shade())
        .rows(&[(14, 15, 4), (15, 17, 4)], c.light);
}
