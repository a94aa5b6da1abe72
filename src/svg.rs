//! SVG markup output
//!
//! Serializes a [`Document`] into a standalone `<svg>` string. Each layer
//! becomes a `<g data-layer="...">` group so consumers can style or inspect
//! layers. Numbers are written without trailing zeros and rounded to three
//! decimals, which keeps output byte-stable across platforms.

use std::fmt::Write;

use crate::document::{Document, Layer, Primitive, Stroke};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render a document to SVG markup.
///
/// ```
/// use patterndex::color::Color;
/// use patterndex::document::{Document, LayerKind, Primitive};
/// use patterndex::svg::render;
///
/// let mut doc = Document::new(64.0, 64.0).crisp();
/// doc.push(LayerKind::Body, vec![Primitive::rect(2.0, 4.0, 6.0, 2.0, Color::WHITE)]);
/// assert_eq!(
///     render(&doc),
///     "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 64 64\" shape-rendering=\"crispEdges\">\
///      <g data-layer=\"body\"><rect x=\"2\" y=\"4\" width=\"6\" height=\"2\" fill=\"#ffffff\"/></g></svg>"
/// );
/// ```
pub fn render(doc: &Document) -> String {
    let mut out = String::with_capacity(4096);

    let _ = write!(
        out,
        "<svg xmlns=\"{}\" viewBox=\"0 0 {} {}\"",
        SVG_NS,
        num(doc.width),
        num(doc.height)
    );
    if doc.crisp_edges {
        out.push_str(" shape-rendering=\"crispEdges\"");
    }
    out.push('>');

    if let Some(title) = &doc.title {
        let _ = write!(out, "<title>{}</title>", escape_xml(title));
    }

    for layer in &doc.layers {
        write_layer(&mut out, layer);
    }

    out.push_str("</svg>");
    out
}

fn write_layer(out: &mut String, layer: &Layer) {
    let _ = write!(out, "<g data-layer=\"{}\">", layer.kind);
    for primitive in &layer.primitives {
        write_primitive(out, primitive);
    }
    out.push_str("</g>");
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Rect { x, y, width, height, fill, stroke, rx, opacity } => {
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
                num(*x),
                num(*y),
                num(*width),
                num(*height),
                fill
            );
            write_stroke(out, stroke.as_ref());
            if let Some(rx) = rx {
                let _ = write!(out, " rx=\"{}\"", num(*rx));
            }
            if let Some(opacity) = opacity {
                let _ = write!(out, " opacity=\"{}\"", num(*opacity));
            }
            out.push_str("/>");
        }
        Primitive::Polygon { points, fill, stroke } => {
            let _ = write!(out, "<polygon points=\"{}\" fill=\"{}\"", points_attr(points), fill);
            write_stroke(out, stroke.as_ref());
            out.push_str("/>");
        }
        Primitive::Line { from, to, stroke } => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                num(from.0),
                num(from.1),
                num(to.0),
                num(to.1)
            );
            write_stroke(out, Some(stroke));
            out.push_str("/>");
        }
        Primitive::Text { x, y, content, font_family, font_size, fill, anchor, centered } => {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\"",
                num(*x),
                num(*y),
                anchor.as_str()
            );
            if *centered {
                out.push_str(" dominant-baseline=\"middle\"");
            }
            let _ = write!(
                out,
                " font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                escape_xml(font_family),
                num(*font_size),
                fill,
                escape_xml(content)
            );
        }
    }
}

fn write_stroke(out: &mut String, stroke: Option<&Stroke>) {
    if let Some(stroke) = stroke {
        let _ = write!(out, " stroke=\"{}\" stroke-width=\"{}\"", stroke.paint, num(stroke.width));
    }
}

/// Format a polygon's vertices as `x,y x,y ...`.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points.iter().map(|(x, y)| format!("{},{}", num(*x), num(*y))).collect::<Vec<_>>().join(" ")
}

/// Format a coordinate: integers bare, everything else to at most three
/// decimals with trailing zeros stripped.
pub fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Paint};
    use crate::document::{LayerKind, TextAnchor};

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(4.0), "4");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(1e-12), "0");
        assert_eq!(num(100.00000000000001), "100");
        assert_eq!(num(30.717967697244916), "30.718");
        assert_eq!(num(0.6), "0.6");
        assert_eq!(num(-12.5), "-12.5");
    }

    #[test]
    fn test_points_attr() {
        assert_eq!(points_attr(&[(1.0, 2.0), (3.5, 4.25)]), "1,2 3.5,4.25");
        assert_eq!(points_attr(&[]), "");
    }

    #[test]
    fn test_rect_with_all_attributes() {
        let mut doc = Document::new(64.0, 64.0);
        doc.push(
            LayerKind::Fallback,
            vec![Primitive::outline(16.0, 12.0, 32.0, 40.0, Stroke::new(Color::GRAY, 2.0), 2.0).with_opacity(0.6)],
        );
        let svg = render(&doc);
        assert!(svg.contains(
            "<rect x=\"16\" y=\"12\" width=\"32\" height=\"40\" fill=\"none\" stroke=\"#888888\" stroke-width=\"2\" rx=\"2\" opacity=\"0.6\"/>"
        ));
        assert!(!svg.contains("crispEdges"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = Document::new(10.0, 10.0).with_title("<&>");
        doc.push(
            LayerKind::Labels,
            vec![Primitive::Text {
                x: 5.0,
                y: 5.0,
                content: "a<b".to_string(),
                font_family: "'Press Start 2P', monospace".to_string(),
                font_size: 6.0,
                fill: Paint::Solid(Color::BLACK),
                anchor: TextAnchor::Middle,
                centered: true,
            }],
        );
        let svg = render(&doc);
        assert!(svg.contains("<title>&lt;&amp;&gt;</title>"));
        assert!(svg.contains(
            "<text x=\"5\" y=\"5\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"'Press Start 2P', monospace\" font-size=\"6\" fill=\"#000000\">a&lt;b</text>"
        ));
    }

    #[test]
    fn test_line_and_polygon() {
        let mut doc = Document::new(200.0, 200.0);
        doc.push(
            LayerKind::Axes,
            vec![Primitive::Line {
                from: (100.0, 100.0),
                to: (100.0, 20.0),
                stroke: Stroke::new(Paint::Translucent(Color::rgb(139, 172, 15), 0.15), 1.0),
            }],
        );
        doc.push(
            LayerKind::Data,
            vec![Primitive::Polygon {
                points: vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
                fill: Paint::Tint(Color::WHITE, 0x44),
                stroke: Some(Stroke::new(Color::WHITE, 2.0)),
            }],
        );
        let svg = render(&doc);
        assert!(svg.contains(
            "<g data-layer=\"axes\"><line x1=\"100\" y1=\"100\" x2=\"100\" y2=\"20\" stroke=\"rgba(139,172,15,0.15)\" stroke-width=\"1\"/></g>"
        ));
        assert!(svg.contains(
            "<polygon points=\"0,0 1,0 0,1\" fill=\"#ffffff44\" stroke=\"#ffffff\" stroke-width=\"2\"/>"
        ));
    }
}
