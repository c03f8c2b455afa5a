//! Error taxonomy shared by the configuration store and the selection engine.

use serde::Serialize;
use thiserror::Error;

use crate::category::Category;

/// Coarse reason a configuration document could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadFailureReason {
    NotFound,
    Malformed,
    Network,
    Timeout,
}

impl std::fmt::Display for LoadFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not-found"),
            Self::Malformed => write!(f, "malformed"),
            Self::Network => write!(f, "network"),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}

/// Raised when the configuration document cannot be fetched or parsed.
///
/// A failed load never yields a partial configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigLoadError {
    #[error("configuration document not found: {0}")]
    NotFound(String),
    #[error("configuration document is malformed: {0}")]
    Malformed(String),
    #[error("configuration transport failed: {0}")]
    Network(String),
    #[error("configuration fetch timed out after {millis} ms")]
    Timeout { millis: u32 },
}

impl ConfigLoadError {
    #[must_use]
    pub const fn reason(&self) -> LoadFailureReason {
        match self {
            Self::NotFound(_) => LoadFailureReason::NotFound,
            Self::Malformed(_) => LoadFailureReason::Malformed,
            Self::Network(_) => LoadFailureReason::Network,
            Self::Timeout { .. } => LoadFailureReason::Timeout,
        }
    }
}

impl From<serde_json::Error> for ConfigLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// A category section is absent from the loaded document.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("category `{}` is not present in the configuration", .0.key())]
pub struct CategoryNotFound(pub Category);

/// Errors that fail a single `randomize` invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("pool `{pool}` of category `{}` is empty", .category.key())]
    EmptyPool {
        category: Category,
        pool: &'static str,
    },
    #[error(transparent)]
    CategoryNotFound(#[from] CategoryNotFound),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_report_their_reason() {
        assert_eq!(
            ConfigLoadError::NotFound("config.json".into()).reason(),
            LoadFailureReason::NotFound
        );
        assert_eq!(
            ConfigLoadError::Timeout { millis: 10 }.reason(),
            LoadFailureReason::Timeout
        );
        assert_eq!(LoadFailureReason::Network.to_string(), "network");
    }

    #[test]
    fn json_errors_become_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let load: ConfigLoadError = err.into();
        assert_eq!(load.reason(), LoadFailureReason::Malformed);
    }

    #[test]
    fn selection_errors_name_category_and_pool() {
        let err = SelectionError::EmptyPool {
            category: Category::WorldSettings,
            pool: "sizes",
        };
        assert_eq!(
            err.to_string(),
            "pool `sizes` of category `worldSettings` is empty"
        );
        let missing: SelectionError = CategoryNotFound(Category::CharacterClass).into();
        assert_eq!(
            missing.to_string(),
            "category `characterClass` is not present in the configuration"
        );
    }
}
