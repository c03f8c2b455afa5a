//! Terraroll Core
//!
//! Platform-agnostic selection logic for the Terraroll randomizer.
//! This crate loads the category configuration and draws one result per
//! enabled category without any UI or platform-specific dependencies.

pub mod category;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod panels;

// Re-export commonly used types
pub use category::Category;
pub use config::{
    CategoryConfig, CharacterClass, CharacterDifficulty, CharacterSubclass, ConfigStore,
    Configuration, StaticSource, WorldSettings,
};
pub use draw::{RandomSource, ScriptedSource, draw_uniform};
pub use engine::{
    ADVENTURE_DIFFICULTY, ActiveFlags, CharacterResult, ClassResult, ResultBundle,
    SelectionEngine, WorldResult, draw_bundle, select_character, select_class, select_world,
};
pub use error::{CategoryNotFound, ConfigLoadError, LoadFailureReason, SelectionError};
pub use panels::{PanelBody, PanelRow, ResultPanel, panels};

/// Trait for abstracting where the configuration document comes from.
/// Platform-specific implementations should provide this.
pub trait ConfigSource {
    /// Fetch the raw configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be located or transferred.
    fn fetch_document(&self) -> Result<String, ConfigLoadError>;
}
