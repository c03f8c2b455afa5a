use std::collections::{BTreeMap, BTreeSet};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use terraroll_core::{
    ADVENTURE_DIFFICULTY, ActiveFlags, Category, CharacterResult, ClassResult, ConfigStore,
    ResultBundle, ScriptedSource, SelectionEngine, StaticSource, WorldResult, draw_bundle,
};

const SHIPPED: &str = include_str!("../../terraroll-web/static/config.json");

const SCENARIO: &str = r#"{
    "worldSettings": {
        "enabled": true,
        "sizes": ["Small"],
        "difficulties": ["Приключение"],
        "corruptions": ["Коррупция"]
    },
    "characterDifficulty": {
        "enabled": true,
        "difficulties": ["Лёгкая", "Эксперт"],
        "forceAdventureIfWorldIsAdventure": true
    },
    "characterClass": { "enabled": true, "classes": ["Воин"] },
    "characterSubclass": { "enabled": true, "subclasses": { "Воин": ["Страж"] } }
}"#;

fn shipped_store() -> ConfigStore {
    ConfigStore::from_json(SHIPPED).unwrap()
}

#[test]
fn single_value_pools_produce_expected_bundle() {
    let mut engine = SelectionEngine::new(ConfigStore::from_json(SCENARIO).unwrap());
    let mut rng = SmallRng::from_entropy();
    let bundle = engine.randomize(&ActiveFlags::all(), &mut rng).unwrap();
    assert_eq!(
        bundle,
        ResultBundle {
            world: Some(WorldResult {
                size: "Small".into(),
                difficulty: "Приключение".into(),
                corruption: "Коррупция".into(),
            }),
            character: Some(CharacterResult {
                difficulty: "Приключение".into(),
            }),
            class_result: Some(ClassResult {
                class: "Воин".into(),
                subclass: Some("Страж".into()),
            }),
        }
    );
    assert_eq!(engine.last_world(), bundle.world.as_ref());
}

#[test]
fn disabled_world_cannot_force_character_difficulty() {
    let store = ConfigStore::from_json(SCENARIO).unwrap();
    let flags = ActiveFlags::all().with(Category::WorldSettings, false);
    let mut seen = BTreeSet::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        let bundle = draw_bundle(&store, &flags, &mut rng).unwrap();
        assert!(bundle.world.is_none());
        seen.insert(bundle.character.unwrap().difficulty);
    }
    assert_eq!(
        seen,
        BTreeSet::from(["Лёгкая".to_string(), "Эксперт".to_string()])
    );
}

#[test]
fn forced_adventure_holds_across_repeated_runs() {
    let store = shipped_store();
    let mut engine = SelectionEngine::new(store);
    for run in 0..50_usize {
        // size varies, difficulty index 0 is Приключение, corruption varies,
        // then the class draws; the character step must not consume a draw.
        let mut rng = ScriptedSource::new([run, 0, run, run, run]);
        let bundle = engine.randomize(&ActiveFlags::all(), &mut rng).unwrap();
        assert_eq!(
            bundle.world.as_ref().map(|world| world.difficulty.as_str()),
            Some(ADVENTURE_DIFFICULTY)
        );
        assert_eq!(
            bundle.character,
            Some(CharacterResult {
                difficulty: ADVENTURE_DIFFICULTY.into()
            })
        );
        let expected_calls = if bundle
            .class_result
            .as_ref()
            .is_some_and(|class| class.subclass.is_some())
        {
            5
        } else {
            4
        };
        assert_eq!(rng.calls(), expected_calls);
    }
}

fn sat_out(bundle: &ResultBundle, category: Category) -> bool {
    match category {
        Category::WorldSettings => bundle.world.is_none(),
        Category::CharacterDifficulty => bundle.character.is_none(),
        Category::CharacterClass => bundle.class_result.is_none(),
        Category::CharacterSubclass => bundle
            .class_result
            .as_ref()
            .is_some_and(|class| class.subclass.is_none()),
    }
}

#[test]
fn disabling_any_category_yields_none_for_it() {
    let store = shipped_store();
    let mut rng = SmallRng::seed_from_u64(7);
    for category in Category::ALL {
        let bundle = draw_bundle(&store, &ActiveFlags::all().with(category, false), &mut rng)
            .unwrap();
        let missing = sat_out(&bundle, category);
        assert!(missing, "{category} should sit out");

        let disabled_json = SHIPPED.replacen(
            &format!("\"{}\": {{\n    \"enabled\": true", category.key()),
            &format!("\"{}\": {{\n    \"enabled\": false", category.key()),
            1,
        );
        assert_ne!(disabled_json, SHIPPED, "fixture must contain {category}");
        let disabled_store = ConfigStore::from_json(&disabled_json).unwrap();
        assert!(!disabled_store.is_enabled(category));
        let bundle = draw_bundle(&disabled_store, &ActiveFlags::all(), &mut rng).unwrap();
        let missing = sat_out(&bundle, category);
        assert!(missing, "{category} disabled in config should sit out");
    }
}

#[test]
fn subclass_disabled_in_config_leaves_class_bare() {
    let disabled = SCENARIO.replace(
        r#""characterSubclass": { "enabled": true"#,
        r#""characterSubclass": { "enabled": false"#,
    );
    assert_ne!(disabled, SCENARIO);
    let store = ConfigStore::from_json(&disabled).unwrap();
    let bundle = draw_bundle(&store, &ActiveFlags::all(), &mut SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(
        bundle.class_result,
        Some(ClassResult {
            class: "Воин".into(),
            subclass: None,
        })
    );
}

#[test]
fn classes_without_subclasses_never_carry_one() {
    let store = shipped_store();
    let subclasses = store.character_subclass().unwrap();
    let mut rng = SmallRng::seed_from_u64(0xC1A55);
    for _ in 0..500 {
        let bundle = draw_bundle(&store, &ActiveFlags::all(), &mut rng).unwrap();
        let class = bundle.class_result.unwrap();
        match subclasses.pool_for(&class.class) {
            Some(pool) => {
                let subclass = class.subclass.expect("class with pool gets a subclass");
                assert!(pool.contains(&subclass));
            }
            None => assert!(class.subclass.is_none()),
        }
    }
}

#[test]
fn every_pool_member_is_eventually_drawn() {
    let store = shipped_store();
    let world_cfg = store.world_settings().unwrap().clone();
    let classes_cfg = store.character_class().unwrap().clone();
    let subclasses_cfg = store.character_subclass().unwrap().clone();
    let mut drawn_subclasses: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut tallies: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for _ in 0..2_000 {
        let bundle = draw_bundle(&store, &ActiveFlags::all(), &mut rng).unwrap();
        let world = bundle.world.unwrap();
        tallies.entry("sizes").or_default().insert(world.size);
        tallies
            .entry("difficulties")
            .or_default()
            .insert(world.difficulty);
        tallies
            .entry("corruptions")
            .or_default()
            .insert(world.corruption);
        let class = bundle.class_result.unwrap();
        if let Some(subclass) = class.subclass {
            drawn_subclasses
                .entry(class.class.clone())
                .or_default()
                .insert(subclass);
        }
        tallies.entry("classes").or_default().insert(class.class);
    }
    let expect = |pool: &[String]| pool.iter().cloned().collect::<BTreeSet<_>>();
    assert_eq!(tallies["sizes"], expect(&world_cfg.sizes));
    assert_eq!(tallies["difficulties"], expect(&world_cfg.difficulties));
    assert_eq!(tallies["corruptions"], expect(&world_cfg.corruptions));
    assert_eq!(tallies["classes"], expect(&classes_cfg.classes));
    for class in &classes_cfg.classes {
        match subclasses_cfg.pool_for(class) {
            Some(pool) => assert_eq!(drawn_subclasses.get(class), Some(&expect(pool)), "{class}"),
            None => assert!(!drawn_subclasses.contains_key(class), "{class}"),
        }
    }
}

#[test]
fn reloading_same_document_is_structurally_equal() {
    let first = ConfigStore::load(&StaticSource(SHIPPED)).unwrap();
    let second = ConfigStore::load(&StaticSource(SHIPPED)).unwrap();
    assert_eq!(first.configuration(), second.configuration());
    assert_eq!(first.recognized_categories(), Category::ALL.to_vec());
}
