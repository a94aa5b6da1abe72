//! Radar chart synthesis
//!
//! Six axes, one per stat, evenly spaced clockwise from the top. Guide
//! hexagons mark every fifth of the outer radius, and the data polygon
//! reaches the outer ring at a value of 10. Values above 10 overshoot the
//! ring; negative values are floored at the centre.

use std::f64::consts::PI;

use crate::color::{Color, Paint};
use crate::document::{Document, LayerKind, Primitive, Stroke, TextAnchor};
use crate::models::{Stat, Stats};
use crate::svg;

/// Value that maps onto the outer ring.
pub const FULL_SCALE: f64 = 10.0;

/// Fractions of the outer radius at which guide rings are drawn.
pub const GUIDE_LEVELS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Layout and palette of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarStyle {
    /// View box side
    pub size: f64,
    pub center: (f64, f64),
    pub radius: f64,
    /// Distance past the outer ring at which labels sit
    pub label_offset: f64,
    /// Color of guides, axes and labels
    pub guide: Color,
    pub font_family: String,
    pub font_size: f64,
    /// Alpha suffix applied to the accent for the data fill
    pub fill_alpha: u8,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            size: 200.0,
            center: (100.0, 100.0),
            radius: 80.0,
            label_offset: 16.0,
            guide: Color::rgb(139, 172, 15),
            font_family: "'Press Start 2P', monospace".to_string(),
            font_size: 6.0,
            fill_alpha: 0x44,
        }
    }
}

impl RadarStyle {
    /// Point at `distance` from the centre along axis `index`.
    pub fn point(&self, index: usize, distance: f64) -> (f64, f64) {
        let angle = axis_angle(index);
        (self.center.0 + distance * angle.cos(), self.center.1 + distance * angle.sin())
    }

    fn ring(&self, distance: f64) -> Vec<(f64, f64)> {
        (0..Stat::ALL.len()).map(|i| self.point(i, distance)).collect()
    }
}

/// Angle of axis `index` in radians: top, then clockwise in 60° steps.
pub fn axis_angle(index: usize) -> f64 {
    (index as f64) * PI / 3.0 - PI / 2.0
}

/// Distance from the centre for a stat value.
pub fn value_radius(value: i32, radius: f64) -> f64 {
    radius * (f64::from(value.max(0)) / FULL_SCALE)
}

/// Build the chart document for a stat record.
pub fn generate(stats: &Stats, accent: Color, style: &RadarStyle) -> Document {
    let mut doc = Document::new(style.size, style.size);

    let guides = GUIDE_LEVELS
        .iter()
        .map(|level| Primitive::Polygon {
            points: style.ring(style.radius * level),
            fill: Paint::None,
            stroke: Some(Stroke::new(Paint::Translucent(style.guide, 0.2), 1.0)),
        })
        .collect();
    doc.push(LayerKind::Guides, guides);

    let axes = (0..Stat::ALL.len())
        .map(|i| Primitive::Line {
            from: style.center,
            to: style.point(i, style.radius),
            stroke: Stroke::new(Paint::Translucent(style.guide, 0.15), 1.0),
        })
        .collect();
    doc.push(LayerKind::Axes, axes);

    let points = Stat::ALL
        .iter()
        .enumerate()
        .map(|(i, stat)| style.point(i, value_radius(stats.get(*stat), style.radius)))
        .collect();
    doc.push(
        LayerKind::Data,
        vec![Primitive::Polygon {
            points,
            fill: Paint::Tint(accent, style.fill_alpha),
            stroke: Some(Stroke::new(accent, 2.0)),
        }],
    );

    let labels = Stat::ALL
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let (x, y) = style.point(i, style.radius + style.label_offset);
            Primitive::Text {
                x,
                y,
                content: stat.abbrev().to_string(),
                font_family: style.font_family.clone(),
                font_size: style.font_size,
                fill: Paint::Translucent(style.guide, 0.6),
                anchor: TextAnchor::Middle,
                centered: true,
            }
        })
        .collect();
    doc.push(LayerKind::Labels, labels);

    doc
}

/// Render a stat record straight to SVG markup with the default style.
pub fn generate_radar_chart(stats: &Stats, accent: Color) -> String {
    svg::render(&generate(stats, accent, &RadarStyle::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn data_points(doc: &Document) -> Vec<(f64, f64)> {
        match &doc.layer(LayerKind::Data).unwrap().primitives[0] {
            Primitive::Polygon { points, .. } => points.clone(),
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    fn dist(p: (f64, f64), c: (f64, f64)) -> f64 {
        ((p.0 - c.0).powi(2) + (p.1 - c.1).powi(2)).sqrt()
    }

    #[test]
    fn test_axis_angles() {
        assert!((axis_angle(0) + PI / 2.0).abs() < EPS);
        assert!((axis_angle(1) - (-PI / 6.0)).abs() < EPS);
        assert!((axis_angle(3) - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_first_axis_points_up() {
        let style = RadarStyle::default();
        let (x, y) = style.point(0, 80.0);
        assert!((x - 100.0).abs() < EPS);
        assert!((y - 20.0).abs() < EPS);
    }

    #[test]
    fn test_second_axis_is_clockwise() {
        let (x, y) = RadarStyle::default().point(1, 80.0);
        assert!(x > 100.0 && y < 100.0);
    }

    #[test]
    fn test_all_tens_reach_outer_radius() {
        let style = RadarStyle::default();
        let doc = generate(&Stats::uniform(10), Color::WHITE, &style);
        for p in data_points(&doc) {
            assert!((dist(p, style.center) - style.radius).abs() < EPS);
        }
    }

    #[test]
    fn test_all_zeros_collapse_to_center() {
        let style = RadarStyle::default();
        let doc = generate(&Stats::default(), Color::WHITE, &style);
        for p in data_points(&doc) {
            assert!(dist(p, style.center) < EPS);
        }
    }

    #[test]
    fn test_negative_values_floor_at_zero() {
        assert_eq!(value_radius(-5, 80.0), 0.0);
    }

    #[test]
    fn test_values_above_scale_overshoot() {
        assert_eq!(value_radius(15, 80.0), 120.0);
    }

    #[test]
    fn test_layer_order_and_counts() {
        let doc = generate(&Stats::uniform(5), Color::BLACK, &RadarStyle::default());
        assert_eq!(
            doc.layer_order(),
            vec![LayerKind::Guides, LayerKind::Axes, LayerKind::Data, LayerKind::Labels]
        );
        assert_eq!(doc.layer(LayerKind::Guides).unwrap().primitives.len(), 5);
        assert_eq!(doc.layer(LayerKind::Axes).unwrap().primitives.len(), 6);
        assert_eq!(doc.layer(LayerKind::Labels).unwrap().primitives.len(), 6);
    }

    #[test]
    fn test_data_polygon_paint() {
        let accent = Color::from_hex("#a040a0").unwrap();
        let doc = generate(&Stats::uniform(5), accent, &RadarStyle::default());
        match &doc.layer(LayerKind::Data).unwrap().primitives[0] {
            Primitive::Polygon { fill, stroke, .. } => {
                assert_eq!(fill.to_string(), "#a040a044");
                assert_eq!(stroke.unwrap().paint, Paint::Solid(accent));
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_labels_sit_past_outer_ring() {
        let style = RadarStyle::default();
        let doc = generate(&Stats::default(), Color::BLACK, &style);
        for prim in &doc.layer(LayerKind::Labels).unwrap().primitives {
            if let Primitive::Text { x, y, .. } = prim {
                assert!((dist((*x, *y), style.center) - 96.0).abs() < EPS);
            }
        }
    }
}
