//! Selection engine
//!
//! Computes one [`ResultBundle`] per call. Categories run in a fixed order
//! (world, character difficulty, class) because the character step reads the
//! world result produced earlier in the same call.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::config::ConfigStore;
use crate::draw::{RandomSource, draw_uniform};
use crate::error::SelectionError;

/// World difficulty that, when coupling is enabled, pins the character difficulty.
pub const ADVENTURE_DIFFICULTY: &str = "Приключение";

/// Caller intent per category, independent of the stored `enabled` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFlags {
    pub world_settings: bool,
    pub character_difficulty: bool,
    pub character_class: bool,
    pub character_subclass: bool,
}

impl ActiveFlags {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            world_settings: true,
            character_difficulty: true,
            character_class: true,
            character_subclass: true,
        }
    }

    /// Flags mirroring each category's stored `enabled` state.
    #[must_use]
    pub fn from_store(store: &ConfigStore) -> Self {
        let mut flags = Self::default();
        for category in Category::ALL {
            flags.set(category, store.is_enabled(category));
        }
        flags
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> bool {
        match category {
            Category::WorldSettings => self.world_settings,
            Category::CharacterDifficulty => self.character_difficulty,
            Category::CharacterClass => self.character_class,
            Category::CharacterSubclass => self.character_subclass,
        }
    }

    pub const fn set(&mut self, category: Category, active: bool) {
        match category {
            Category::WorldSettings => self.world_settings = active,
            Category::CharacterDifficulty => self.character_difficulty = active,
            Category::CharacterClass => self.character_class = active,
            Category::CharacterSubclass => self.character_subclass = active,
        }
    }

    #[must_use]
    pub const fn with(mut self, category: Category, active: bool) -> Self {
        self.set(category, active);
        self
    }

    /// A category takes part only when both the caller and the store allow it.
    #[must_use]
    pub fn participates(&self, store: &ConfigStore, category: Category) -> bool {
        self.get(category) && store.is_enabled(category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldResult {
    pub size: String,
    pub difficulty: String,
    pub corruption: String,
}

impl WorldResult {
    #[must_use]
    pub fn is_adventure(&self) -> bool {
        self.difficulty == ADVENTURE_DIFFICULTY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResult {
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResult {
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<String>,
}

/// Outcome of one randomization; `None` marks a category that sat out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultBundle {
    pub world: Option<WorldResult>,
    pub character: Option<CharacterResult>,
    pub class_result: Option<ClassResult>,
}

/// Draw size, difficulty and corruption independently.
///
/// # Errors
///
/// Returns an error if the section is missing or any of its pools is empty.
pub fn select_world<R>(
    store: &ConfigStore,
    flags: &ActiveFlags,
    rng: &mut R,
) -> Result<Option<WorldResult>, SelectionError>
where
    R: RandomSource + ?Sized,
{
    if !flags.participates(store, Category::WorldSettings) {
        return Ok(None);
    }
    let world = store.world_settings()?;
    let category = Category::WorldSettings;
    Ok(Some(WorldResult {
        size: draw_uniform(rng, &world.sizes, category, "sizes")?.to_string(),
        difficulty: draw_uniform(rng, &world.difficulties, category, "difficulties")?.to_string(),
        corruption: draw_uniform(rng, &world.corruptions, category, "corruptions")?.to_string(),
    }))
}

/// Pick the character difficulty, honoring the Adventure coupling against
/// `world`, which must be the result of the current call.
///
/// # Errors
///
/// Returns an error if the section is missing or its pool is empty when a draw is needed.
pub fn select_character<R>(
    store: &ConfigStore,
    flags: &ActiveFlags,
    world: Option<&WorldResult>,
    rng: &mut R,
) -> Result<Option<CharacterResult>, SelectionError>
where
    R: RandomSource + ?Sized,
{
    if !flags.participates(store, Category::CharacterDifficulty) {
        return Ok(None);
    }
    let character = store.character_difficulty()?;
    if character.force_adventure_if_world_is_adventure && world.is_some_and(WorldResult::is_adventure)
    {
        log::debug!("world is {ADVENTURE_DIFFICULTY}; forcing character difficulty");
        return Ok(Some(CharacterResult {
            difficulty: ADVENTURE_DIFFICULTY.to_string(),
        }));
    }
    let difficulty = draw_uniform(
        rng,
        &character.difficulties,
        Category::CharacterDifficulty,
        "difficulties",
    )?;
    Ok(Some(CharacterResult {
        difficulty: difficulty.to_string(),
    }))
}

/// Pick a class and, when allowed and available, one of its subclasses.
///
/// # Errors
///
/// Returns an error if the class section is missing or its pool is empty.
pub fn select_class<R>(
    store: &ConfigStore,
    flags: &ActiveFlags,
    rng: &mut R,
) -> Result<Option<ClassResult>, SelectionError>
where
    R: RandomSource + ?Sized,
{
    if !flags.participates(store, Category::CharacterClass) {
        return Ok(None);
    }
    let classes = store.character_class()?;
    let class = draw_uniform(rng, &classes.classes, Category::CharacterClass, "classes")?;

    let mut subclass = None;
    if flags.participates(store, Category::CharacterSubclass) {
        let subclasses = store.character_subclass()?;
        if let Some(pool) = subclasses.pool_for(class) {
            subclass =
                Some(draw_uniform(rng, pool, Category::CharacterSubclass, "subclasses")?.to_string());
        }
    }

    Ok(Some(ClassResult {
        class: class.to_string(),
        subclass,
    }))
}

/// Compute a full bundle without touching any engine state.
///
/// # Errors
///
/// Returns the first [`SelectionError`] hit; no partial bundle is produced.
pub fn draw_bundle<R>(
    store: &ConfigStore,
    flags: &ActiveFlags,
    rng: &mut R,
) -> Result<ResultBundle, SelectionError>
where
    R: RandomSource + ?Sized,
{
    let world = select_world(store, flags, rng)?;
    let character = select_character(store, flags, world.as_ref(), rng)?;
    let class_result = select_class(store, flags, rng)?;
    Ok(ResultBundle {
        world,
        character,
        class_result,
    })
}

/// Stateful wrapper over [`draw_bundle`] that remembers the last world result.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    store: ConfigStore,
    last_world: Option<WorldResult>,
}

impl SelectionEngine {
    #[must_use]
    pub const fn new(store: ConfigStore) -> Self {
        Self {
            store,
            last_world: None,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// World result of the last successful call, if the world participated.
    #[must_use]
    pub const fn last_world(&self) -> Option<&WorldResult> {
        self.last_world.as_ref()
    }

    /// Run one randomization.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if a participating pool is empty or its
    /// section is missing. On error `last_world` keeps its previous value.
    pub fn randomize<R>(
        &mut self,
        flags: &ActiveFlags,
        rng: &mut R,
    ) -> Result<ResultBundle, SelectionError>
    where
        R: RandomSource + ?Sized,
    {
        let bundle = draw_bundle(&self.store, flags, rng)?;
        self.last_world.clone_from(&bundle.world);
        log::debug!("randomized bundle: {bundle:?}");
        Ok(bundle)
    }
}
