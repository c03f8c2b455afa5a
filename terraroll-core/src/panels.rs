//! Presentation-neutral view of a [`ResultBundle`]: three panels with fixed
//! Russian labels, shared by the browser and terminal front ends.

use serde::Serialize;

use crate::engine::{CharacterResult, ClassResult, ResultBundle, WorldResult};

/// One labelled value inside a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl PanelRow {
    fn new(icon: &'static str, label: &'static str, value: &str) -> Self {
        Self {
            icon,
            label,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PanelBody {
    Rows { rows: Vec<PanelRow> },
    Disabled { message: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPanel {
    /// Stable element id, e.g. `worldResult`.
    pub id: &'static str,
    pub title: &'static str,
    pub body: PanelBody,
}

impl ResultPanel {
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self.body, PanelBody::Disabled { .. })
    }

    #[must_use]
    pub fn rows(&self) -> &[PanelRow] {
        match &self.body {
            PanelBody::Rows { rows } => rows,
            PanelBody::Disabled { .. } => &[],
        }
    }
}

#[must_use]
pub fn world_panel(world: Option<&WorldResult>) -> ResultPanel {
    let body = world.map_or(
        PanelBody::Disabled {
            message: "Рандомизация настроек мира отключена",
        },
        |world| PanelBody::Rows {
            rows: vec![
                PanelRow::new("🌍", "Размер мира", &world.size),
                PanelRow::new("⚡", "Сложность", &world.difficulty),
                PanelRow::new("🦠", "Заражение", &world.corruption),
            ],
        },
    );
    ResultPanel {
        id: "worldResult",
        title: "Мир",
        body,
    }
}

#[must_use]
pub fn character_panel(character: Option<&CharacterResult>) -> ResultPanel {
    let body = character.map_or(
        PanelBody::Disabled {
            message: "Рандомизация сложности персонажа отключена",
        },
        |character| PanelBody::Rows {
            rows: vec![PanelRow::new(
                "💪",
                "Сложность персонажа",
                &character.difficulty,
            )],
        },
    );
    ResultPanel {
        id: "characterResult",
        title: "Персонаж",
        body,
    }
}

#[must_use]
pub fn class_panel(class: Option<&ClassResult>) -> ResultPanel {
    let body = class.map_or(
        PanelBody::Disabled {
            message: "Рандомизация класса персонажа отключена",
        },
        |class| {
            let mut rows = vec![PanelRow::new("⚔️", "Класс", &class.class)];
            if let Some(subclass) = &class.subclass {
                rows.push(PanelRow::new("🎯", "Подкласс", subclass));
            }
            PanelBody::Rows { rows }
        },
    );
    ResultPanel {
        id: "classResult",
        title: "Класс",
        body,
    }
}

/// World, character and class panels, in display order.
#[must_use]
pub fn panels(bundle: &ResultBundle) -> [ResultPanel; 3] {
    [
        world_panel(bundle.world.as_ref()),
        character_panel(bundle.character.as_ref()),
        class_panel(bundle.class_result.as_ref()),
    ]
}
