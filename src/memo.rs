//! Memoization of generated sprites
//!
//! Sprite output depends only on the visual descriptor and the two resolved
//! colors, so identical creatures share one document. The cache is safe to
//! share across rendering threads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::document::Document;
use crate::models::{Creature, TypeTable, Visual};
use crate::sprite::{self, CreatureColors};

/// Everything a sprite is a function of.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub visual: Option<Visual>,
    pub colors: CreatureColors,
}

/// Thread-safe sprite cache.
#[derive(Debug, Default)]
pub struct SpriteCache {
    entries: Mutex<HashMap<SpriteKey, Arc<Document>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl SpriteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached document for this input, generating it on first use.
    pub fn get_or_generate(&self, visual: Option<&Visual>, colors: CreatureColors) -> Arc<Document> {
        let key = SpriteKey { visual: visual.cloned(), colors };

        if let Some(doc) = self.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(doc);
        }

        // Generated outside the lock; a racing thread may build the same
        // document, and the first insert wins.
        let doc = Arc::new(sprite::generate(visual, colors));
        self.misses.fetch_add(1, Ordering::Relaxed);
        Arc::clone(self.lock().entry(key).or_insert(doc))
    }

    /// Sprite for a catalogue record. Fallback sprites carry the creature id
    /// and are therefore not shared.
    pub fn document_for(&self, creature: &Creature, types: &TypeTable) -> Arc<Document> {
        match creature.visual.as_ref() {
            Some(visual) if visual.body.known().is_some() => {
                self.get_or_generate(Some(visual), types.resolve(&creature.types))
            }
            _ => Arc::new(sprite::sprite_document(creature, types)),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<SpriteKey, Arc<Document>>> {
        // A poisoned map still holds valid documents.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;
    use crate::color::Color;
    use crate::features::Feature;
    use crate::models::TypeRecord;

    fn colors() -> CreatureColors {
        CreatureColors::mono(Color::rgb(0xa0, 0x40, 0xa0))
    }

    #[test]
    fn test_identical_input_hits_cache() {
        let cache = SpriteCache::new();
        let visual = Visual::new(Body::Wide).with_feature(Feature::Shield);
        let a = cache.get_or_generate(Some(&visual), colors());
        let b = cache.get_or_generate(Some(&visual), colors());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_different_colors_miss() {
        let cache = SpriteCache::new();
        let visual = Visual::new(Body::Round);
        cache.get_or_generate(Some(&visual), colors());
        cache.get_or_generate(Some(&visual), CreatureColors::mono(Color::GRAY));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cached_matches_fresh() {
        let cache = SpriteCache::new();
        let visual = Visual::new(Body::Tall).with_feature(Feature::Aura).with_accent(Feature::Wings);
        let cached = cache.get_or_generate(Some(&visual), colors());
        assert_eq!(*cached, sprite::generate(Some(&visual), colors()));
    }

    #[test]
    fn test_fallbacks_are_not_cached() {
        let cache = SpriteCache::new();
        let mut types = TypeTable::new();
        types.insert("poison", TypeRecord { color: Some("#a040a0".into()), ..Default::default() });
        let creature = Creature {
            id: "013".into(),
            types: vec!["poison".into()],
            visual: Some(Visual::new("blob")),
            ..Default::default()
        };
        let doc = cache.document_for(&creature, &types);
        assert_eq!(doc.title.as_deref(), Some("013"));
        assert!(cache.is_empty());
    }
}
