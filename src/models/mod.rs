//! Data models for catalogue records (creatures, types, stats)
//!
//! These mirror the catalogue document the engine is fed. Everything is
//! lenient: absent fields take defaults and unknown body or feature keys
//! deserialize into explicit `Unknown` variants instead of failing.

mod creature;
mod stats;
mod taxonomy;

pub use creature::{BodyRef, Creature, FeatureRef, Visual};
pub use stats::{Stat, Stats};
pub use taxonomy::{TypeChart, TypeRecord, TypeTable};

use serde::{Deserialize, Serialize};

/// A full catalogue document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    #[serde(default)]
    pub types: TypeTable,
    #[serde(default)]
    pub type_chart: TypeChart,
    #[serde(default)]
    pub creatures: Vec<Creature>,
}

impl Catalogue {
    /// Find a creature by id.
    pub fn creature(&self, id: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;
    use crate::features::Feature;

    #[test]
    fn test_visual_known_keys() {
        let visual: Visual = serde_json::from_str(
            r#"{"body": "round", "features": ["horns", "aura"], "accent": "wings"}"#,
        )
        .unwrap();
        assert_eq!(visual.body, BodyRef::Known(Body::Round));
        assert_eq!(visual.features, vec![FeatureRef::Known(Feature::Horns), FeatureRef::Known(Feature::Aura)]);
        assert_eq!(visual.accent, Some(FeatureRef::Known(Feature::Wings)));
        assert!(visual.has_feature(Feature::Aura));
    }

    #[test]
    fn test_visual_unknown_keys_are_explicit() {
        let visual: Visual =
            serde_json::from_str(r#"{"body": "nonexistent", "features": ["gills"]}"#).unwrap();
        assert_eq!(visual.body, BodyRef::Unknown("nonexistent".to_string()));
        assert_eq!(visual.features, vec![FeatureRef::Unknown("gills".to_string())]);
        assert_eq!(visual.accent, None);
    }

    #[test]
    fn test_visual_without_body() {
        let visual: Visual = serde_json::from_str(r#"{"features": []}"#).unwrap();
        assert_eq!(visual.body.known(), None);
    }

    #[test]
    fn test_visual_null_features() {
        let visual: Visual = serde_json::from_str(r#"{"body": "round", "features": null}"#).unwrap();
        assert_eq!(visual.body, BodyRef::Known(Body::Round));
        assert!(visual.features.is_empty());
    }

    #[test]
    fn test_creature_null_visual() {
        let creature: Creature =
            serde_json::from_str(r#"{"id": "007", "types": ["fire"], "visual": null}"#).unwrap();
        assert!(creature.visual.is_none());
        assert_eq!(creature.stats, Stats::default());
    }

    #[test]
    fn test_creature_camel_case_fields() {
        let creature: Creature =
            serde_json::from_str(r#"{"id": "001", "name": "Singleton", "codeHint": "static INSTANCE"}"#).unwrap();
        assert_eq!(creature.code_hint, "static INSTANCE");
    }

    #[test]
    fn test_creature_slug() {
        let mut c = Creature { id: "012".into(), name: "Facadon".into(), ..Default::default() };
        assert_eq!(c.slug(), "012-facadon");
        c.name = "Chain Wyrm!".into();
        assert_eq!(c.slug(), "012-chain-wyrm");
        c.name = String::new();
        assert_eq!(c.slug(), "012");
    }

    #[test]
    fn test_catalogue_lookup() {
        let cat: Catalogue = serde_json::from_str(
            r##"{
                "types": {"fire": {"name": "Fire", "color": "#f08030"}},
                "typeChart": {"fire": {"steel": 2}},
                "creatures": [{"id": "001"}, {"id": "002"}]
            }"##,
        )
        .unwrap();
        assert_eq!(cat.creature("002").map(|c| c.id.as_str()), Some("002"));
        assert!(cat.creature("999").is_none());
        assert_eq!(cat.type_chart.effectiveness("fire", "steel"), 2.0);
    }
}
