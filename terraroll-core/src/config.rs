//! Configuration document model and the read-only store built from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigSource;
use crate::category::Category;
use crate::error::{CategoryNotFound, ConfigLoadError};

/// World generation pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorldSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub difficulties: Vec<String>,
    #[serde(default)]
    pub corruptions: Vec<String>,
}

/// Character difficulty pool plus the Adventure coupling flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDifficulty {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub difficulties: Vec<String>,
    #[serde(default)]
    pub force_adventure_if_world_is_adventure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub classes: Vec<String>,
}

/// Subclass pools keyed by class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSubclass {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub subclasses: BTreeMap<String, Vec<String>>,
}

impl CharacterSubclass {
    /// Subclass pool for `class`, or `None` when it is absent or empty.
    #[must_use]
    pub fn pool_for(&self, class: &str) -> Option<&[String]> {
        self.subclasses
            .get(class)
            .map(Vec::as_slice)
            .filter(|pool| !pool.is_empty())
    }
}

/// Parsed configuration document. Each section is optional; a missing
/// section makes its category unknown to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_settings: Option<WorldSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_difficulty: Option<CharacterDifficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_class: Option<CharacterClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_subclass: Option<CharacterSubclass>,
}

impl Configuration {
    /// Parse a configuration document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Borrowed view of one category section, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryConfig<'a> {
    WorldSettings(&'a WorldSettings),
    CharacterDifficulty(&'a CharacterDifficulty),
    CharacterClass(&'a CharacterClass),
    CharacterSubclass(&'a CharacterSubclass),
}

impl CategoryConfig<'_> {
    #[must_use]
    pub const fn enabled(&self) -> bool {
        match self {
            Self::WorldSettings(section) => section.enabled,
            Self::CharacterDifficulty(section) => section.enabled,
            Self::CharacterClass(section) => section.enabled,
            Self::CharacterSubclass(section) => section.enabled,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::WorldSettings(_) => Category::WorldSettings,
            Self::CharacterDifficulty(_) => Category::CharacterDifficulty,
            Self::CharacterClass(_) => Category::CharacterClass,
            Self::CharacterSubclass(_) => Category::CharacterSubclass,
        }
    }
}

/// Immutable holder for a loaded [`Configuration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    config: Configuration,
}

impl ConfigStore {
    #[must_use]
    pub const fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Build a store from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Malformed`] if the document cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let config = Configuration::from_json(json)?;
        let store = Self::new(config);
        log::debug!(
            "configuration loaded with categories: {:?}",
            store.recognized_categories()
        );
        Ok(store)
    }

    /// Fetch a document from `source` and parse it.
    ///
    /// # Errors
    ///
    /// Propagates the source's fetch error, or [`ConfigLoadError::Malformed`]
    /// if the fetched document cannot be parsed.
    pub fn load<S>(source: &S) -> Result<Self, ConfigLoadError>
    where
        S: ConfigSource + ?Sized,
    {
        let document = source.fetch_document()?;
        Self::from_json(&document)
    }

    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Tagged view of a category section.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryNotFound`] if the section is absent from the document.
    pub fn section(&self, category: Category) -> Result<CategoryConfig<'_>, CategoryNotFound> {
        let section = match category {
            Category::WorldSettings => self
                .config
                .world_settings
                .as_ref()
                .map(CategoryConfig::WorldSettings),
            Category::CharacterDifficulty => self
                .config
                .character_difficulty
                .as_ref()
                .map(CategoryConfig::CharacterDifficulty),
            Category::CharacterClass => self
                .config
                .character_class
                .as_ref()
                .map(CategoryConfig::CharacterClass),
            Category::CharacterSubclass => self
                .config
                .character_subclass
                .as_ref()
                .map(CategoryConfig::CharacterSubclass),
        };
        section.ok_or(CategoryNotFound(category))
    }

    /// True iff the section exists and is marked enabled.
    #[must_use]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.section(category)
            .is_ok_and(|section| section.enabled())
    }

    /// String-keyed variant of [`Self::is_enabled`]; unknown keys are disabled.
    #[must_use]
    pub fn is_enabled_key(&self, key: &str) -> bool {
        Category::from_key(key).is_some_and(|category| self.is_enabled(category))
    }

    /// Categories whose sections are present, in selection order.
    #[must_use]
    pub fn recognized_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.section(*category).is_ok())
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`CategoryNotFound`] if `worldSettings` is absent.
    pub fn world_settings(&self) -> Result<&WorldSettings, CategoryNotFound> {
        self.config
            .world_settings
            .as_ref()
            .ok_or(CategoryNotFound(Category::WorldSettings))
    }

    /// # Errors
    ///
    /// Returns [`CategoryNotFound`] if `characterDifficulty` is absent.
    pub fn character_difficulty(&self) -> Result<&CharacterDifficulty, CategoryNotFound> {
        self.config
            .character_difficulty
            .as_ref()
            .ok_or(CategoryNotFound(Category::CharacterDifficulty))
    }

    /// # Errors
    ///
    /// Returns [`CategoryNotFound`] if `characterClass` is absent.
    pub fn character_class(&self) -> Result<&CharacterClass, CategoryNotFound> {
        self.config
            .character_class
            .as_ref()
            .ok_or(CategoryNotFound(Category::CharacterClass))
    }

    /// # Errors
    ///
    /// Returns [`CategoryNotFound`] if `characterSubclass` is absent.
    pub fn character_subclass(&self) -> Result<&CharacterSubclass, CategoryNotFound> {
        self.config
            .character_subclass
            .as_ref()
            .ok_or(CategoryNotFound(Category::CharacterSubclass))
    }
}

/// In-memory document source, used for embedded defaults and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSource<'a>(pub &'a str);

impl ConfigSource for StaticSource<'_> {
    fn fetch_document(&self) -> Result<String, ConfigLoadError> {
        Ok(self.0.to_string())
    }
}
