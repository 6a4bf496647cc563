use super::*;
use crate::error::CatalogError;
use std::collections::HashMap;

fn record(id: &str, filename: &str) -> SoundRecord {
    SoundRecord {
        id: id.into(),
        filename: filename.into(),
        title: format!("Sound {id}"),
        description: String::new(),
        category: Category::Ui,
        duration: "0:01".into(),
    }
}

#[test]
fn builtin_catalog_has_seven_unique_sounds() {
    let catalog = builtin_catalog(false);
    assert_eq!(catalog.len(), 7);
    let game: Vec<&str> = catalog
        .sounds()
        .iter()
        .filter(|s| s.category == Category::Game)
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(game, vec!["Coin Pickup", "Laser Blast"]);
}

#[test]
fn catalog_rejects_duplicate_and_empty_ids() {
    let dup = Catalog::new(vec![record("a", "a.mp3"), record("a", "b.mp3")], HashMap::new());
    assert!(matches!(dup, Err(CatalogError::DuplicateId(id)) if id == "a"));

    let empty = Catalog::new(vec![record("a", "a.mp3"), record("  ", "b.mp3")], HashMap::new());
    assert!(matches!(empty, Err(CatalogError::EmptyId(1))));
}

#[test]
fn resolver_joins_base_path_with_single_slash() {
    let catalog = Catalog::new(vec![record("1", "bell.mp3")], HashMap::new()).unwrap();
    let bell = &catalog.sounds()[0];

    assert_eq!(AssetResolver::new("/sounds/").url_for(&catalog, bell), "/sounds/bell.mp3");
    assert_eq!(AssetResolver::new("sounds").url_for(&catalog, bell), "sounds/bell.mp3");
    assert_eq!(AssetResolver::new("").url_for(&catalog, bell), "bell.mp3");
}

#[test]
fn resolver_prefers_url_override() {
    let mut overrides = HashMap::new();
    overrides.insert("bell.mp3".to_string(), "https://cdn.test/bell.mp3".to_string());
    let catalog = Catalog::new(vec![record("1", "bell.mp3"), record("2", "pop.mp3")], overrides)
        .unwrap();
    let resolver = AssetResolver::new("/sounds/");

    assert_eq!(
        resolver.url_for(&catalog, &catalog.sounds()[0]),
        "https://cdn.test/bell.mp3"
    );
    assert_eq!(resolver.url_for(&catalog, &catalog.sounds()[1]), "/sounds/pop.mp3");

    let plain = catalog.without_overrides();
    assert_eq!(resolver.url_for(&plain, &plain.sounds()[0]), "/sounds/bell.mp3");
}

#[test]
fn builtin_demo_urls_only_when_enabled() {
    let resolver = AssetResolver::new("sounds/");

    let demo = builtin_catalog(true);
    let url = resolver.url_for(&demo, &demo.sounds()[5]);
    assert!(url.starts_with("https://"));

    let local = builtin_catalog(false);
    assert_eq!(
        resolver.url_for(&local, &local.sounds()[5]),
        "sounds/laser_shoot.wav"
    );
}

#[test]
fn load_catalog_file_reads_sounds_and_urls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[sounds]]
id = "door"
filename = "door.ogg"
title = "Door Knock"
category = "ui"
description = "Two firm knocks."
duration = "0:01"

[[sounds]]
id = "wind"
filename = "wind.ogg"
title = "Wind"
category = "Ambience"

[urls]
"wind.ogg" = "https://cdn.test/wind.ogg"
"#,
    )
    .unwrap();

    let catalog = load_catalog_file(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.sounds()[0].category, Category::Ui);
    assert_eq!(catalog.sounds()[1].category, Category::Ambience);
    assert_eq!(catalog.sounds()[1].description, "");
    assert_eq!(catalog.url_override("wind.ogg"), Some("https://cdn.test/wind.ogg"));
    assert_eq!(catalog.get("door").map(|s| s.title.as_str()), Some("Door Knock"));
}

#[test]
fn load_catalog_file_reports_missing_and_invalid_files() {
    let dir = tempfile::tempdir().unwrap();

    let missing = load_catalog_file(&dir.path().join("nope.toml"));
    assert!(matches!(missing, Err(CatalogError::Read { .. })));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[[sounds]]\nid = 3\n").unwrap();
    assert!(matches!(load_catalog_file(&bad), Err(CatalogError::Parse { .. })));

    let dup = dir.path().join("dup.toml");
    std::fs::write(
        &dup,
        r#"
[[sounds]]
id = "x"
filename = "a.mp3"
title = "A"
category = "Game"

[[sounds]]
id = "x"
filename = "b.mp3"
title = "B"
category = "Game"
"#,
    )
    .unwrap();
    assert!(matches!(load_catalog_file(&dup), Err(CatalogError::DuplicateId(_))));
}
