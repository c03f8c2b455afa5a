use serde::{Deserialize, Serialize};

/// One of the four independent randomization domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    WorldSettings,
    CharacterDifficulty,
    CharacterClass,
    CharacterSubclass,
}

impl Category {
    /// Every category, in the order selection runs.
    pub const ALL: [Self; 4] = [
        Self::WorldSettings,
        Self::CharacterDifficulty,
        Self::CharacterClass,
        Self::CharacterSubclass,
    ];

    /// Key used for this category in the configuration document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WorldSettings => "worldSettings",
            Self::CharacterDifficulty => "characterDifficulty",
            Self::CharacterClass => "characterClass",
            Self::CharacterSubclass => "characterSubclass",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Fixed-language label shown next to the category toggle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WorldSettings => "Настройки мира",
            Self::CharacterDifficulty => "Сложность персонажа",
            Self::CharacterClass => "Класс персонажа",
            Self::CharacterSubclass => "Подкласс персонажа",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
