//! Primitive shape records produced by the synthesizers
//!
//! Sprite and chart generation never builds markup strings directly. They
//! emit a [`Document`]: an ordered list of tagged [`Layer`]s, each holding
//! rectangles, polygons, lines and text. The [`crate::svg`] and
//! [`crate::raster`] modules turn a document into its final target format.

use crate::color::Paint;
use crate::features::Feature;
use std::fmt;

/// Outline applied to a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

impl Stroke {
    pub fn new(paint: impl Into<Paint>, width: f64) -> Self {
        Self { paint: paint.into(), width }
    }
}

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A single drawable element in canvas units.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Paint,
        stroke: Option<Stroke>,
        /// Corner radius
        rx: Option<f64>,
        opacity: Option<f64>,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Stroke,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_family: String,
        font_size: f64,
        fill: Paint,
        anchor: TextAnchor,
        /// Vertically centre on `y` instead of sitting on the baseline
        centered: bool,
    },
}

impl Primitive {
    /// A filled, unstroked rectangle.
    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: impl Into<Paint>) -> Self {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill: fill.into(),
            stroke: None,
            rx: None,
            opacity: None,
        }
    }

    /// An unfilled rectangle outline with rounded corners.
    pub fn outline(x: f64, y: f64, width: f64, height: f64, stroke: Stroke, rx: f64) -> Self {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill: Paint::None,
            stroke: Some(stroke),
            rx: Some(rx),
            opacity: None,
        }
    }

    /// Set the opacity of a rectangle. Other primitives are returned as-is.
    pub fn with_opacity(self, value: f64) -> Self {
        match self {
            Primitive::Rect { x, y, width, height, fill, stroke, rx, .. } => Primitive::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
                rx,
                opacity: Some(value),
            },
            other => other,
        }
    }

    /// Short element name, matching the SVG tag it renders to.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Rect { .. } => "rect",
            Primitive::Polygon { .. } => "polygon",
            Primitive::Line { .. } => "line",
            Primitive::Text { .. } => "text",
        }
    }
}

/// What a layer depicts. Sprites and charts use disjoint subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Aura,
    Body,
    Eyes,
    Mouth,
    Feature(Feature),
    Accent(Feature),
    Fallback,
    Guides,
    Axes,
    Data,
    Labels,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Aura => f.write_str("aura"),
            LayerKind::Body => f.write_str("body"),
            LayerKind::Eyes => f.write_str("eyes"),
            LayerKind::Mouth => f.write_str("mouth"),
            LayerKind::Feature(feat) => write!(f, "feature-{}", feat),
            LayerKind::Accent(feat) => write!(f, "accent-{}", feat),
            LayerKind::Fallback => f.write_str("fallback"),
            LayerKind::Guides => f.write_str("guides"),
            LayerKind::Axes => f.write_str("axes"),
            LayerKind::Data => f.write_str("data"),
            LayerKind::Labels => f.write_str("labels"),
        }
    }
}

/// A tagged group of primitives. Later layers paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub primitives: Vec<Primitive>,
}

/// A complete, self-contained drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// View box width in canvas units
    pub width: f64,
    /// View box height in canvas units
    pub height: f64,
    /// Request pixel-exact edges from the renderer
    pub crisp_edges: bool,
    /// Accessible title, if any
    pub title: Option<String>,
    pub layers: Vec<Layer>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, crisp_edges: false, title: None, layers: Vec::new() }
    }

    pub fn crisp(mut self) -> Self {
        self.crisp_edges = true;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a layer. Empty layers are dropped.
    pub fn push(&mut self, kind: LayerKind, primitives: Vec<Primitive>) {
        if primitives.is_empty() {
            return;
        }
        self.layers.push(Layer { kind, primitives });
    }

    /// Layer kinds in paint order.
    pub fn layer_order(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|l| l.kind).collect()
    }

    /// First layer of the given kind.
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// All primitives in paint order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.layers.iter().flat_map(|l| l.primitives.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
