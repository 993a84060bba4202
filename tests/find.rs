use findup::vfs::MemFs;
use findup::{find, find_in, FindError};
use std::fs;
use tempfile::tempdir;

// ─── Native filesystem ───

#[test]
fn locates_project_root_from_nested_source_dir() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("Cargo.toml"), "[package]\n").unwrap();
    let deep = root.path().join("src/parser/grammar");
    fs::create_dir_all(&deep).unwrap();

    let found = find(&deep, "Cargo.toml").unwrap();
    assert_eq!(found, root.path());
}

#[test]
fn nested_project_shadows_outer_one() {
    let outer = tempdir().unwrap();
    fs::write(outer.path().join("Cargo.toml"), "[workspace]\n").unwrap();
    let inner = outer.path().join("vendor/dep");
    fs::create_dir_all(inner.join("src")).unwrap();
    fs::write(inner.join("Cargo.toml"), "[package]\n").unwrap();

    let found = find(&inner.join("src"), "Cargo.toml").unwrap();
    assert_eq!(found, inner);
}

#[test]
fn repository_marker_may_be_a_directory() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join(".git")).unwrap();
    let deep = root.path().join("docs/book");
    fs::create_dir_all(&deep).unwrap();

    let found = find(&deep, ".git").unwrap();
    assert_eq!(found, root.path());
}

#[test]
fn search_ends_at_filesystem_root_with_not_found() {
    let dir = tempdir().unwrap();

    let result = find(dir.path(), "findup-integration-test-missing-marker");
    assert_eq!(result, Err(FindError::NotFound));
}

// ─── Virtual filesystem ───

#[test]
fn locates_manifest_in_virtual_tree() {
    let fsys: MemFs = ["app/manifest.toml", "app/ui/widgets/button.css"]
        .into_iter()
        .collect();

    let found = find_in(&fsys, "app/ui/widgets", "manifest.toml").unwrap();
    assert_eq!(found, "app");
}

#[test]
fn falls_back_to_virtual_root() {
    let fsys: MemFs = ["defaults.toml", "themes/dark/colors.toml"]
        .into_iter()
        .collect();

    let found = find_in(&fsys, "themes/dark", "defaults.toml").unwrap();
    assert_eq!(found, ".");
}

#[test]
fn virtual_search_misses_cleanly() {
    let fsys: MemFs = ["themes/dark/colors.toml"].into_iter().collect();

    let result = find_in(&fsys, "themes/dark", "defaults.toml");
    assert_eq!(result, Err(FindError::NotFound));
}
