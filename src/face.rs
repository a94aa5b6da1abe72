//! Eye and mouth placement
//!
//! Anchors are fixed per body; a body with no entry uses the round anchors.

use crate::bodies::Body;
use crate::color::Color;
use crate::document::Primitive;
use crate::grid::{Fragment, PixelGrid};

/// Sclera fill.
pub const EYE_WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
/// Pupil fill.
pub const PUPIL: Color = Color::rgb(0x08, 0x08, 0x08);
/// Catch-light fill.
pub const GLINT: Color = Color::rgb(0xfc, 0xfc, 0xfc);

/// Amount the mouth is darkened from the body color.
pub const MOUTH_SHADE: u8 = 50;

const EYE_SIZE: u32 = 3;
const PUPIL_SIZE: u32 = 2;
const MOUTH_WIDTH: u32 = 4;

/// Left and right eye anchors (top-left cell of each eye).
pub fn eye_anchors(body: Option<Body>) -> [(u32, u32); 2] {
    match body {
        Some(Body::Round) | None => [(11, 13), (19, 13)],
        Some(Body::Angular) => [(11, 12), (19, 12)],
        Some(Body::Tall) => [(11, 5), (18, 5)],
        Some(Body::Wide) => [(10, 13), (19, 13)],
        Some(Body::Multi) => [(12, 14), (18, 14)],
        Some(Body::Serpentine) => [(6, 7), (12, 7)],
    }
}

/// Left end of the mouth bar.
pub fn mouth_anchor(body: Option<Body>) -> (u32, u32) {
    match body {
        Some(Body::Round) | None => (14, 18),
        Some(Body::Angular) => (14, 17),
        Some(Body::Tall) => (14, 9),
        Some(Body::Wide) => (14, 18),
        Some(Body::Multi) => (14, 18),
        Some(Body::Serpentine) => (8, 11),
    }
}

/// Draw both eyes. The pupil sits in the lower-right of the sclera, with
/// the catch-light in the opposite corner.
pub fn draw_eyes(body: Option<Body>) -> Vec<Primitive> {
    let mut frag = Fragment::new(PixelGrid::SPRITE);
    for (x, y) in eye_anchors(body) {
        frag.cell(x, y, EYE_SIZE, EYE_SIZE, EYE_WHITE)
            .cell(x + EYE_SIZE - PUPIL_SIZE, y + EYE_SIZE - PUPIL_SIZE, PUPIL_SIZE, PUPIL_SIZE, PUPIL)
            .cell(x, y, 1, 1, GLINT);
    }
    frag.finish()
}

/// Draw the mouth as a single bar in a strongly darkened body color.
pub fn draw_mouth(body: Option<Body>, color: Color) -> Vec<Primitive> {
    let (x, y) = mouth_anchor(body);
    vec![PixelGrid::SPRITE.cell(x, y, MOUTH_WIDTH, 1, color.darken(MOUTH_SHADE))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_body_uses_round_anchors() {
        assert_eq!(eye_anchors(None), eye_anchors(Some(Body::Round)));
        assert_eq!(mouth_anchor(None), mouth_anchor(Some(Body::Round)));
    }

    #[test]
    fn test_eye_layout() {
        let prims = draw_eyes(Some(Body::Round));
        assert_eq!(prims.len(), 6);
        assert_eq!(prims[0], Primitive::rect(22.0, 26.0, 6.0, 6.0, EYE_WHITE));
        assert_eq!(prims[1], Primitive::rect(24.0, 28.0, 4.0, 4.0, PUPIL));
        assert_eq!(prims[2], Primitive::rect(22.0, 26.0, 2.0, 2.0, GLINT));
        assert_eq!(prims[3], Primitive::rect(38.0, 26.0, 6.0, 6.0, EYE_WHITE));
    }

    #[test]
    fn test_tall_eyes_sit_in_head() {
        let prims = draw_eyes(Some(Body::Tall));
        assert_eq!(prims[0], Primitive::rect(22.0, 10.0, 6.0, 6.0, EYE_WHITE));
        assert_eq!(prims[3], Primitive::rect(36.0, 10.0, 6.0, 6.0, EYE_WHITE));
    }

    #[test]
    fn test_mouth_is_darkened_bar() {
        let body = Color::from_hex("#78c850").unwrap();
        let mouth = draw_mouth(Some(Body::Serpentine), body);
        assert_eq!(mouth, vec![Primitive::rect(16.0, 22.0, 8.0, 2.0, Color::rgb(0x46, 0x96, 0x1e))]);
    }
}
