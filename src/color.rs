//! Color utilities for sprite and chart synthesis
//!
//! Every shade, highlight and tint used by the engine is derived from a
//! type's base color at generation time with [`Color::lighten`] and
//! [`Color::darken`]. Both work per channel on a fixed unsigned offset and
//! clamp to `[0, 255]`; there is no alpha handling here. Translucency is
//! expressed separately through [`Paint`].

use image::Rgba;
use std::fmt;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3 or 6 hex chars after #)
    #[error("invalid color length {0}, expected 3 or 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Neutral gray used whenever a type has no resolvable color.
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (`#RGB` or `#RRGGBB`).
    ///
    /// # Examples
    ///
    /// ```
    /// use patterndex::color::Color;
    ///
    /// let fire = Color::from_hex("#f08030").unwrap();
    /// assert_eq!(fire, Color::rgb(0xf0, 0x80, 0x30));
    ///
    /// let short = Color::from_hex("#F00").unwrap();
    /// assert_eq!(short, Color::rgb(255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ColorError` if the input is empty, lacks the leading `#`,
    /// has the wrong length, or contains non-hex characters.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(c));
        }

        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(parse_hex_digit);
                let mut next = || digits.next().unwrap_or(Ok(0)).map(|d| d * 17);
                Ok(Self::rgb(next()?, next()?, next()?))
            }
            6 => Ok(Self::rgb(
                parse_hex_pair(&hex[0..2])?,
                parse_hex_pair(&hex[2..4])?,
                parse_hex_pair(&hex[4..6])?,
            )),
            len => Err(ColorError::InvalidLength(len)),
        }
    }

    /// Add `amount` to every channel, saturating at 255.
    ///
    /// ```
    /// use patterndex::color::Color;
    ///
    /// let c = Color::from_hex("#fafafa").unwrap();
    /// assert_eq!(c.lighten(40).to_string(), "#ffffff");
    /// ```
    pub fn lighten(self, amount: u8) -> Self {
        Self::rgb(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Subtract `amount` from every channel, saturating at 0.
    ///
    /// ```
    /// use patterndex::color::Color;
    ///
    /// let c = Color::from_hex("#050505").unwrap();
    /// assert_eq!(c.darken(40).to_string(), "#000000");
    /// ```
    pub fn darken(self, amount: u8) -> Self {
        Self::rgb(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Pack into a 24-bit integer (`0xRRGGBB`).
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Convert to an image pixel with the given alpha.
    pub fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, alpha])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GRAY
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Lighten a hex color string, returning the new hex triplet.
///
/// Unparseable input is returned unchanged; callers upstream guarantee
/// well-formed colors.
pub fn lighten(hex: &str, amount: u8) -> String {
    match Color::from_hex(hex) {
        Ok(c) => c.lighten(amount).to_string(),
        Err(_) => hex.to_string(),
    }
}

/// Darken a hex color string, returning the new hex triplet.
///
/// Unparseable input is returned unchanged.
pub fn darken(hex: &str, amount: u8) -> String {
    match Color::from_hex(hex) {
        Ok(c) => c.darken(amount).to_string(),
        Err(_) => hex.to_string(),
    }
}

/// How a primitive is filled or stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// No paint (`none`)
    None,
    /// Opaque color, written as `#rrggbb`
    Solid(Color),
    /// Color with a two-digit alpha suffix, written as `#rrggbbaa`
    Tint(Color, u8),
    /// Color with fractional opacity, written as `rgba(r,g,b,a)`
    Translucent(Color, f32),
}

impl Paint {
    /// The translucent black used for ground shadows.
    pub const SHADOW: Paint = Paint::Translucent(Color::BLACK, 0.15);

    /// Effective alpha in `0..=255` for rasterization.
    pub fn alpha(&self) -> u8 {
        match self {
            Paint::None => 0,
            Paint::Solid(_) => 255,
            Paint::Tint(_, a) => *a,
            Paint::Translucent(_, a) => (a.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// The underlying color, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Paint::None => None,
            Paint::Solid(c) | Paint::Tint(c, _) | Paint::Translucent(c, _) => Some(*c),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Paint::None)
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::None => f.write_str("none"),
            Paint::Solid(c) => write!(f, "{}", c),
            Paint::Tint(c, a) => write!(f, "{}{:02x}", c, a),
            Paint::Translucent(c, a) => write!(f, "rgba({},{},{},{})", c.r, c.g, c.b, a),
        }
    }
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = chars.next().map(parse_hex_digit).ok_or(ColorError::InvalidLength(s.len()))??;
    let low = chars.next().map(parse_hex_digit).ok_or(ColorError::InvalidLength(s.len()))??;
    Ok(high * 16 + low)
}
