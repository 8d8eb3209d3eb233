use std::fs;

use hikari::catalog::Catalog;
use hikari::error::CatalogError;

const ONE_BOTTLE: &str = r##"
[[bottles]]
id = "108"
number = 108
name = "Test Bottle"
theme = "測試"
affirmation = "我是測試。"
tags = ["Fixture"]
colors.top = { hex = "#fff", label = "白色" }
colors.bottom = { hex = "#000000", label = "黑色" }
"##;

#[test]
fn configured_file_replaces_bundled_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bottles.toml");
    fs::write(&path, ONE_BOTTLE).unwrap();

    let catalog = Catalog::load(Some(&path)).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.resolve("B108").unwrap().name, "Test Bottle");
    assert_eq!(catalog.search("fixture").len(), 1);
}

#[test]
fn no_path_means_bundled_catalog() {
    let catalog = Catalog::load(None).unwrap();
    assert_eq!(catalog.len(), Catalog::bundled().unwrap().len());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match Catalog::load(Some(&path)) {
        Err(CatalogError::Read { path: reported, .. }) => {
            assert_eq!(reported, path.display().to_string());
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bottles.toml");
    fs::write(&path, "[[bottles]]\nid = ").unwrap();

    assert!(matches!(
        Catalog::load(Some(&path)),
        Err(CatalogError::Parse(_))
    ));
}
