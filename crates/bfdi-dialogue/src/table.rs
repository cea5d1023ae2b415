//! Character table: per-character, per-category response payloads.
//!
//! Characters are only reachable through [`Character`] handles handed out by
//! the table, so resolving a response can never name an unknown character.
//! A missing category is not an error; it resolves to
//! [`ResponsePayload::fallback`].

use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

use crate::category::Category;
use crate::payload::ResponsePayload;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("character table is empty")]
    Empty,

    #[error("duplicate character: {0}")]
    DuplicateCharacter(String),

    #[error("character name is empty")]
    EmptyName,

    #[error("{character}/{category}: visual scale must be positive, got {scale}")]
    InvalidScale {
        character: String,
        category: Category,
        scale: f64,
    },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterProfile {
    name: String,
    responses: HashMap<Category, ResponsePayload>,
}

impl CharacterProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: HashMap::new(),
        }
    }

    pub fn with_response(mut self, category: Category, payload: ResponsePayload) -> Self {
        self.responses.insert(category, payload);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Handle to a character that exists in a [`CharacterTable`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character<'a> {
    profile: &'a CharacterProfile,
}

impl<'a> Character<'a> {
    pub fn name(&self) -> &'a str {
        &self.profile.name
    }

    /// Response for `category`, or the fallback payload when this character
    /// has no line for it.
    pub fn resolve(&self, category: Category) -> &'a ResponsePayload {
        self.profile
            .responses
            .get(&category)
            .unwrap_or_else(|| ResponsePayload::fallback())
    }

    pub fn has_response(&self, category: Category) -> bool {
        self.profile.responses.contains_key(&category)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterTable {
    pub(crate) profiles: Vec<CharacterProfile>,
}

impl CharacterTable {
    /// Build a table, rejecting empty tables, blank or duplicate names and
    /// non-positive scales.
    pub fn new(profiles: Vec<CharacterProfile>) -> Result<Self, TableError> {
        if profiles.is_empty() {
            return Err(TableError::Empty);
        }

        for (idx, profile) in profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(TableError::EmptyName);
            }
            if profiles[..idx].iter().any(|p| p.name == profile.name) {
                return Err(TableError::DuplicateCharacter(profile.name.clone()));
            }
            for (category, payload) in &profile.responses {
                if !(payload.visual_scale.is_finite() && payload.visual_scale > 0.0) {
                    return Err(TableError::InvalidScale {
                        character: profile.name.clone(),
                        category: *category,
                        scale: payload.visual_scale,
                    });
                }
            }
        }

        Ok(Self { profiles })
    }

    /// Parse a table from JSON shaped as
    /// `{ "<name>": { "<category>": { "dialogue_text": ..., ... } } }`.
    /// Characters are ordered by name.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: BTreeMap<String, HashMap<Category, ResponsePayload>> = serde_json::from_str(json)?;
        let profiles = raw
            .into_iter()
            .map(|(name, responses)| CharacterProfile { name, responses })
            .collect();
        Self::new(profiles)
    }

    pub fn load(path: &Path) -> Result<Self, TableError> {
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded {} characters from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn characters(&self) -> impl Iterator<Item = Character<'_>> + '_ {
        self.profiles.iter().map(|profile| Character { profile })
    }

    /// Validate a name against the table.
    pub fn get(&self, name: &str) -> Option<Character<'_>> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .map(|profile| Character { profile })
    }

    /// Uniformly random character.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Character<'_> {
        let idx = rng.gen_range(0..self.profiles.len());
        Character {
            profile: &self.profiles[idx],
        }
    }

    /// Uniformly random character other than `excluding`. A one-character
    /// table returns its only character; an unknown `excluding` name
    /// excludes nothing.
    pub fn pick_different<R: Rng + ?Sized>(&self, excluding: &str, rng: &mut R) -> Character<'_> {
        let skip = self.profiles.iter().position(|p| p.name == excluding);
        match skip {
            Some(skip) if self.profiles.len() > 1 => {
                let mut idx = rng.gen_range(0..self.profiles.len() - 1);
                if idx >= skip {
                    idx += 1;
                }
                Character {
                    profile: &self.profiles[idx],
                }
            }
            _ => self.pick_random(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_characters() -> CharacterTable {
        CharacterTable::new(vec![
            CharacterProfile::new("Leafy")
                .with_response(Category::Sunny, ResponsePayload::new("Sunshine helps me grow!")),
            CharacterProfile::new("Firey")
                .with_response(Category::Sunny, ResponsePayload::new("It's so hot! I love it!")),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_present_category() {
        let table = two_characters();
        let leafy = table.get("Leafy").unwrap();
        assert_eq!(leafy.resolve(Category::Sunny).dialogue_text, "Sunshine helps me grow!");
    }

    #[test]
    fn test_missing_category_returns_fallback() {
        let table = two_characters();
        let leafy = table.get("Leafy").unwrap();
        let payload = leafy.resolve(Category::Other);

        assert_eq!(payload, ResponsePayload::fallback());
        assert_eq!(payload.dialogue_text, "No dialogue available.");
        assert_eq!(payload.image_reference, "");
        assert_eq!(payload.visual_scale, 1.0);
        assert!(!leafy.has_response(Category::Other));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = two_characters();
        let firey = table.get("Firey").unwrap();
        let first = firey.resolve(Category::Sunny).clone();
        for _ in 0..5 {
            assert_eq!(firey.resolve(Category::Sunny), &first);
            assert!(firey.resolve(Category::Night).is_fallback());
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(two_characters().get("Bubble").is_none());
    }

    #[test]
    fn test_pick_different_two_characters() {
        let table = two_characters();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(table.pick_different("Leafy", &mut rng).name(), "Firey");
            assert_eq!(table.pick_different("Firey", &mut rng).name(), "Leafy");
        }
    }

    #[test]
    fn test_pick_different_single_character() {
        let table = CharacterTable::new(vec![CharacterProfile::new("Leafy")]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(table.pick_different("Leafy", &mut rng).name(), "Leafy");
        }
    }

    #[test]
    fn test_pick_different_unknown_excludes_nothing() {
        let table = two_characters();
        let mut rng = StdRng::seed_from_u64(3);
        let seen: std::collections::HashSet<_> = (0..200)
            .map(|_| table.pick_different("Rocky", &mut rng).name())
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_pick_random_is_reproducible() {
        let table = CharacterTable::builtin();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(table.pick_random(&mut a).name(), table.pick_random(&mut b).name());
        }
    }

    #[test]
    fn test_pick_random_covers_table() {
        let table = two_characters();
        let mut rng = StdRng::seed_from_u64(9);
        let seen: std::collections::HashSet<_> =
            (0..200).map(|_| table.pick_random(&mut rng).name()).collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(CharacterTable::new(Vec::new()), Err(TableError::Empty)));
    }

    #[test]
    fn test_duplicate_and_blank_names_rejected() {
        let dup = CharacterTable::new(vec![
            CharacterProfile::new("Pin"),
            CharacterProfile::new("Pin"),
        ]);
        assert!(matches!(dup, Err(TableError::DuplicateCharacter(name)) if name == "Pin"));

        let blank = CharacterTable::new(vec![CharacterProfile::new(" ")]);
        assert!(matches!(blank, Err(TableError::EmptyName)));
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        let result = CharacterTable::new(vec![CharacterProfile::new("Pin").with_response(
            Category::Sunny,
            ResponsePayload::new("Perfect weather for an experiment.").with_scale(0.0),
        )]);
        assert!(matches!(result, Err(TableError::InvalidScale { .. })));
    }

    #[test]
    fn test_from_json() {
        let table = CharacterTable::from_json(
            r#"{
                "Leafy": {
                    "sunny": { "dialogue_text": "Sunshine helps me grow!", "image_reference": "LeafyHappy.png", "visual_scale": 1.2 },
                    "night": { "dialogue_text": "Goodnight!", "placement_hints": { "bottom": "0" } }
                },
                "Bubble": {
                    "raining": { "dialogue_text": "Oh no, rain might pop me!" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Bubble", "Leafy"]);
        let leafy = table.get("Leafy").unwrap();
        assert_eq!(leafy.resolve(Category::Sunny).visual_scale, 1.2);
        assert_eq!(leafy.resolve(Category::Night).placement_hints["bottom"], "0");
        assert!(leafy.resolve(Category::Raining).is_fallback());
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let result = CharacterTable::from_json(r#"{ "Leafy": { "stormy": { "dialogue_text": "?" } } }"#);
        assert!(matches!(result, Err(TableError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");
        std::fs::write(&path, r#"{ "Rocky": { "other": { "dialogue_text": "..." } } }"#).unwrap();

        let table = CharacterTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Rocky").unwrap().resolve(Category::Other).dialogue_text, "...");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CharacterTable::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
