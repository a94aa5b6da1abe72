//! Sprite synthesis
//!
//! Composites a creature's layers in fixed paint order:
//!
//! 1. aura (if listed among the features, regardless of position)
//! 2. body
//! 3. eyes
//! 4. mouth
//! 5. remaining features, in descriptor order
//! 6. accent, re-drawn in a lightened secondary color
//!
//! Descriptors without a visual block, or naming a body the library does
//! not know, get the fallback silhouette instead. Nothing here can fail.

use crate::bodies::{Body, BodyColors};
use crate::color::Color;
use crate::document::{Document, LayerKind, Primitive, Stroke, TextAnchor};
use crate::face::{draw_eyes, draw_mouth};
use crate::features::Feature;
use crate::grid::{PixelGrid, CANVAS_SIZE};
use crate::models::{Creature, FeatureRef, TypeTable, Visual};
use crate::svg;

/// Amount the accent is lightened from the secondary color.
pub const ACCENT_TINT: u8 = 20;

/// Amount the fallback inset is darkened.
const FALLBACK_INSET_SHADE: u8 = 20;

/// Colors resolved from a creature's types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatureColors {
    /// Drives the body, outline and mouth
    pub primary: Color,
    /// Drives features and the accent
    pub secondary: Color,
}

impl CreatureColors {
    pub fn new(primary: Color, secondary: Color) -> Self {
        Self { primary, secondary }
    }

    /// Both roles in one color.
    pub fn mono(color: Color) -> Self {
        Self { primary: color, secondary: color }
    }
}

impl Default for CreatureColors {
    fn default() -> Self {
        Self::mono(Color::GRAY)
    }
}

fn sprite_canvas() -> Document {
    let size = f64::from(CANVAS_SIZE);
    Document::new(size, size).crisp()
}

/// Build the layered sprite for a visual descriptor.
///
/// # Examples
///
/// ```
/// use patterndex::bodies::Body;
/// use patterndex::color::Color;
/// use patterndex::document::LayerKind;
/// use patterndex::features::Feature;
/// use patterndex::models::Visual;
/// use patterndex::sprite::{generate, CreatureColors};
///
/// let visual = Visual::new(Body::Round).with_feature(Feature::Horns);
/// let doc = generate(Some(&visual), CreatureColors::mono(Color::rgb(0xf0, 0x80, 0x30)));
/// assert_eq!(
///     doc.layer_order(),
///     vec![LayerKind::Body, LayerKind::Eyes, LayerKind::Mouth, LayerKind::Feature(Feature::Horns)]
/// );
/// ```
pub fn generate(visual: Option<&Visual>, colors: CreatureColors) -> Document {
    let Some(visual) = visual else {
        log::debug!("no visual descriptor, drawing fallback");
        return generate_fallback(colors.primary, None);
    };
    let Some(body) = visual.body.known() else {
        log::debug!("unknown body {:?}, drawing fallback", visual.body);
        return generate_fallback(colors.primary, None);
    };

    compose(body, visual, colors)
}

fn compose(body: Body, visual: &Visual, colors: CreatureColors) -> Document {
    let mut doc = sprite_canvas();

    if visual.has_feature(Feature::Aura) {
        doc.push(LayerKind::Aura, Feature::Aura.draw(colors.secondary));
    }

    doc.push(LayerKind::Body, body.draw(&BodyColors::from_primary(colors.primary)));
    doc.push(LayerKind::Eyes, draw_eyes(Some(body)));
    doc.push(LayerKind::Mouth, draw_mouth(Some(body), colors.primary));

    for feature in &visual.features {
        match feature {
            FeatureRef::Known(Feature::Aura) => {}
            FeatureRef::Known(feat) => doc.push(LayerKind::Feature(*feat), feat.draw(colors.secondary)),
            FeatureRef::Unknown(key) => log::debug!("skipping unknown feature '{}'", key),
        }
    }

    // An aura accent is never redrawn: it already sits behind the body when
    // listed, and a second copy would double its glow.
    match &visual.accent {
        Some(FeatureRef::Known(Feature::Aura)) | None => {}
        Some(FeatureRef::Known(feat)) => {
            doc.push(LayerKind::Accent(*feat), feat.draw(colors.secondary.lighten(ACCENT_TINT)))
        }
        Some(FeatureRef::Unknown(key)) => log::debug!("skipping unknown accent '{}'", key),
    }

    doc
}

/// The generic silhouette used for missing or unrecognized descriptors:
/// a filled block with a darker inset, a centered "?" glyph and a faint
/// rounded outline.
pub fn generate_fallback(color: Color, label: Option<&str>) -> Document {
    let grid = PixelGrid::SPRITE;
    let center = f64::from(CANVAS_SIZE) / 2.0;

    let primitives = vec![
        grid.cell(8, 6, 16, 20, color),
        grid.cell(9, 7, 14, 18, color.darken(FALLBACK_INSET_SHADE)),
        Primitive::Text {
            x: center,
            y: center + 4.0,
            content: "?".to_string(),
            font_family: "monospace".to_string(),
            font_size: 14.0,
            fill: Color::WHITE.into(),
            anchor: TextAnchor::Middle,
            centered: true,
        },
        Primitive::outline(grid.scale(8), grid.scale(6), grid.scale(16), grid.scale(20), Stroke::new(color, 2.0), 2.0)
            .with_opacity(0.6),
    ];

    let mut doc = sprite_canvas();
    if let Some(label) = label {
        doc = doc.with_title(label);
    }
    doc.push(LayerKind::Fallback, primitives);
    doc
}

/// Build the sprite document for a catalogue record, resolving its colors
/// from the type table. Fallback sprites are titled with the creature id.
pub fn sprite_document(creature: &Creature, types: &TypeTable) -> Document {
    let colors = types.resolve(&creature.types);
    match creature.visual.as_ref() {
        Some(visual) if visual.body.known().is_some() => generate(Some(visual), colors),
        _ => {
            log::debug!("creature {} has no drawable body, drawing fallback", creature.id);
            generate_fallback(colors.primary, Some(&creature.id))
        }
    }
}

/// Render a creature straight to SVG markup. Always succeeds.
pub fn generate_sprite(creature: &Creature, types: &TypeTable) -> String {
    svg::render(&sprite_document(creature, types))
}
