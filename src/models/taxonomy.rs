//! Type taxonomy: colors per type key and the matchup chart.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::Color;
use crate::sprite::CreatureColors;

/// One entry of the type table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(default)]
    pub name: String,
    /// Hex color, e.g. `#f08030`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    /// Software concept the type stands for
    #[serde(default, alias = "description", skip_serializing_if = "String::is_empty")]
    pub concept: String,
}

/// Type key to record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable(pub BTreeMap<String, TypeRecord>);

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, record: TypeRecord) {
        self.0.insert(key.into(), record);
    }

    pub fn get(&self, key: &str) -> Option<&TypeRecord> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Display name for a type, falling back to the key itself.
    pub fn name_of<'a>(&'a self, key: &'a str) -> &'a str {
        match self.0.get(key) {
            Some(rec) if !rec.name.is_empty() => &rec.name,
            _ => key,
        }
    }

    /// The type's color, if it has a parseable one.
    pub fn try_color(&self, key: &str) -> Option<Color> {
        let hex = self.0.get(key)?.color.as_deref()?;
        match Color::from_hex(hex) {
            Ok(color) => Some(color),
            Err(e) => {
                log::warn!("type '{}' has invalid color '{}': {}, using gray", key, hex, e);
                None
            }
        }
    }

    /// The type's color, or neutral gray.
    pub fn color_of(&self, key: &str) -> Color {
        self.try_color(key).unwrap_or(Color::GRAY)
    }

    /// Resolve the primary and secondary colors for an ordered type list.
    ///
    /// A missing or unresolvable secondary reuses the primary.
    pub fn resolve(&self, types: &[String]) -> CreatureColors {
        let primary = types.first().map(|t| self.color_of(t)).unwrap_or(Color::GRAY);
        let secondary = types.get(1).and_then(|t| self.try_color(t)).unwrap_or(primary);
        CreatureColors { primary, secondary }
    }
}

/// Attacker type to defender type to damage multiplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeChart(pub BTreeMap<String, BTreeMap<String, f32>>);

impl TypeChart {
    /// Multiplier for an attack; pairs absent from the chart are neutral.
    pub fn effectiveness(&self, attacker: &str, defender: &str) -> f32 {
        self.0.get(attacker).and_then(|row| row.get(defender)).copied().unwrap_or(1.0)
    }

    pub fn set(&mut self, attacker: impl Into<String>, defender: impl Into<String>, value: f32) {
        self.0.entry(attacker.into()).or_default().insert(defender.into(), value);
    }
}
