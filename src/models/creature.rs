//! Creature records and their visual descriptors.

use serde::{Deserialize, Deserializer, Serialize};

use super::stats::Stats;
use crate::bodies::Body;
use crate::features::Feature;

/// A body key from a descriptor: either a shape the library draws or a key
/// it does not know, which routes the sprite to the fallback renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodyRef {
    Known(Body),
    Unknown(String),
}

impl BodyRef {
    pub fn known(&self) -> Option<Body> {
        match self {
            BodyRef::Known(body) => Some(*body),
            BodyRef::Unknown(_) => None,
        }
    }
}

impl Default for BodyRef {
    fn default() -> Self {
        BodyRef::Unknown(String::new())
    }
}

impl From<Body> for BodyRef {
    fn from(body: Body) -> Self {
        BodyRef::Known(body)
    }
}

impl From<&str> for BodyRef {
    fn from(key: &str) -> Self {
        key.parse().map(BodyRef::Known).unwrap_or_else(|_| BodyRef::Unknown(key.to_string()))
    }
}

/// A feature key from a descriptor. Unknown keys are skipped when drawing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureRef {
    Known(Feature),
    Unknown(String),
}

impl FeatureRef {
    pub fn known(&self) -> Option<Feature> {
        match self {
            FeatureRef::Known(feat) => Some(*feat),
            FeatureRef::Unknown(_) => None,
        }
    }

    pub fn is(&self, feature: Feature) -> bool {
        self.known() == Some(feature)
    }
}

impl From<Feature> for FeatureRef {
    fn from(feat: Feature) -> Self {
        FeatureRef::Known(feat)
    }
}

impl From<&str> for FeatureRef {
    fn from(key: &str) -> Self {
        key.parse().map(FeatureRef::Known).unwrap_or_else(|_| FeatureRef::Unknown(key.to_string()))
    }
}

/// How a creature looks. Feature order is paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visual {
    #[serde(default)]
    pub body: BodyRef,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub features: Vec<FeatureRef>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub accent: Option<FeatureRef>,
}

/// `"features": null` draws the bare body, same as a missing list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FeatureRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FeatureRef>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Visual {
    pub fn new(body: impl Into<BodyRef>) -> Self {
        Self { body: body.into(), features: Vec::new(), accent: None }
    }

    pub fn with_feature(mut self, feature: impl Into<FeatureRef>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn with_accent(mut self, accent: impl Into<FeatureRef>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.iter().any(|f| f.is(feature))
    }
}

/// One catalogue entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// The design pattern this creature stands for
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub category: String,
    /// Primary type first, optional secondary second
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub visual: Option<Visual>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intent: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub problem: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub solution: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub analogy: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code_hint: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,
}

impl Creature {
    /// File stem used for rendered artwork: `{id}-{name}` with the name
    /// lowercased, or just the id when the name is empty.
    pub fn slug(&self) -> String {
        let name: String = self
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        let name = name.trim_matches('-');
        if name.is_empty() {
            self.id.clone()
        } else {
            format!("{}-{}", self.id, name)
        }
    }
}
