//! Composer provider tests
//!
//! Autoload map parsing, the class↔file strategies over it, and discovery's
//! hook-list isolation contract. Discovery tests are serialized because the
//! hook list is process-global.

use classnav_domain::error::Error;
use classnav_domain::ports::{ClassToFile, FileListProvider, FileToClass};
use classnav_domain::value_objects::{ClassName, FilePath};
use classnav_providers::composer::hooks::{self, AutoloadHook};
use classnav_providers::composer::{
    discover, AutoloaderMap, ComposerClassToFile, ComposerFileListProvider, ComposerFileToClass,
};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

static HOOKS_LOCK: Mutex<()> = Mutex::new(());

fn project_with_manifest(manifest: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("composer.json"), manifest).unwrap();
    dir
}

fn animals_project() -> TempDir {
    let dir = project_with_manifest(
        r#"{
            "autoload": {
                "psr-4": {
                    "Animals\\": "src/",
                    "Animals\\Nocturnal\\": "nocturnal/"
                }
            }
        }"#,
    );
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::create_dir_all(dir.path().join("nocturnal")).unwrap();
    std::fs::write(dir.path().join("src/Badger.php"), "<?php class Badger {}").unwrap();
    std::fs::write(dir.path().join("nocturnal/Owl.php"), "<?php class Owl {}").unwrap();
    dir
}

fn load(dir: &Path) -> Arc<AutoloaderMap> {
    Arc::new(AutoloaderMap::load(dir).unwrap())
}

#[test]
fn psr4_class_maps_to_its_source_file() {
    let project = animals_project();
    let strategy = ComposerClassToFile::new(load(project.path()));

    let file = strategy
        .class_to_file(&ClassName::new("Animals\\Badger"))
        .unwrap()
        .expect("known class should resolve");
    assert_eq!(file.as_path(), project.path().join("src/Badger.php"));
}

#[test]
fn longest_psr4_prefix_wins() {
    let project = animals_project();
    let strategy = ComposerClassToFile::new(load(project.path()));

    let file = strategy
        .class_to_file(&ClassName::new("Animals\\Nocturnal\\Owl"))
        .unwrap()
        .unwrap();
    assert_eq!(file.as_path(), project.path().join("nocturnal/Owl.php"));
}

#[test]
fn unmapped_class_yields_no_match() {
    let project = animals_project();
    let strategy = ComposerClassToFile::new(load(project.path()));

    assert_eq!(
        strategy
            .class_to_file(&ClassName::new("Plants\\Fern"))
            .unwrap(),
        None
    );
}

#[test]
fn nested_class_derives_a_nested_path() {
    let project = animals_project();
    let strategy = ComposerClassToFile::new(load(project.path()));

    // no file on disk: the derived candidate is still returned
    let file = strategy
        .class_to_file(&ClassName::new("Animals\\Deep\\Sett"))
        .unwrap()
        .unwrap();
    assert_eq!(file.as_path(), project.path().join("src/Deep/Sett.php"));
}

#[test]
fn file_maps_back_to_its_class() {
    let project = animals_project();
    let strategy = ComposerFileToClass::new(load(project.path()));

    let class = strategy
        .file_to_class(&FilePath::from(project.path().join("src/Badger.php")))
        .unwrap();
    assert_eq!(class, Some(ClassName::new("Animals\\Badger")));

    let nested = strategy
        .file_to_class(&FilePath::from(project.path().join("nocturnal/Owl.php")))
        .unwrap();
    assert_eq!(nested, Some(ClassName::new("Animals\\Nocturnal\\Owl")));
}

#[test]
fn unrelated_file_yields_no_class() {
    let project = animals_project();
    let strategy = ComposerFileToClass::new(load(project.path()));

    assert_eq!(
        strategy
            .file_to_class(&FilePath::from("/elsewhere/Badger.php"))
            .unwrap(),
        None
    );
}

#[test]
fn classmap_entries_resolve_by_stem() {
    let dir = project_with_manifest(
        r#"{ "autoload": { "classmap": ["lib/Legacy.php"] } }"#,
    );
    std::fs::create_dir_all(dir.path().join("lib")).unwrap();
    std::fs::write(dir.path().join("lib/Legacy.php"), "<?php class Legacy {}").unwrap();

    let map = load(dir.path());
    let to_file = ComposerClassToFile::new(map.clone());
    let to_class = ComposerFileToClass::new(map);

    assert_eq!(
        to_file
            .class_to_file(&ClassName::new("Legacy"))
            .unwrap()
            .unwrap()
            .as_path(),
        dir.path().join("lib/Legacy.php")
    );
    assert_eq!(
        to_class
            .file_to_class(&FilePath::from(dir.path().join("lib/Legacy.php")))
            .unwrap(),
        Some(ClassName::new("Legacy"))
    );
}

#[test]
fn file_list_covers_psr4_roots_and_classmap() {
    let project = animals_project();
    let provider = ComposerFileListProvider::new(load(project.path()));

    let files = provider.file_list().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|f| f.to_string().ends_with("Badger.php")));
    assert!(files.iter().any(|f| f.to_string().ends_with("Owl.php")));
}

#[test]
fn manifest_without_autoload_section_is_invalid() {
    let dir = project_with_manifest(r#"{ "name": "acme/thing" }"#);
    let err = AutoloaderMap::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidAutoloader { .. }));
}

#[test]
fn malformed_manifest_is_invalid() {
    let dir = project_with_manifest("not json at all");
    let err = AutoloaderMap::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidAutoloader { .. }));
}

#[test]
fn discovery_returns_maps_in_input_order_and_restores_hooks() {
    let _serial = HOOKS_LOCK.lock().unwrap();
    // run against a clean hook list, restored when the test ends
    let _clean = hooks::IsolationGuard::isolate();
    let first = animals_project();
    let second = project_with_manifest(r#"{ "autoload": { "psr-4": { "Plants\\": "src/" } } }"#);

    let existing = Arc::new(AutoloaderMap::load(first.path()).unwrap());
    hooks::register(AutoloadHook::new(existing));
    let before = hooks::registered_names();

    let maps = discover(&[
        first.path().to_path_buf(),
        second.path().join("composer.json"),
    ])
    .unwrap();

    assert_eq!(maps.len(), 2);
    assert!(maps[0].name().starts_with(&first.path().display().to_string()));
    assert!(maps[1].name().starts_with(&second.path().display().to_string()));
    assert_eq!(hooks::registered_names(), before);
}

#[test]
fn discovery_failure_restores_the_prior_hook_list() {
    let _serial = HOOKS_LOCK.lock().unwrap();
    let _clean = hooks::IsolationGuard::isolate();
    let valid = animals_project();

    let existing = Arc::new(AutoloaderMap::load(valid.path()).unwrap());
    hooks::register(AutoloadHook::new(existing));
    let before = hooks::registered_names();

    let missing = valid.path().join("does-not-exist/composer.json");
    let err = discover(&[valid.path().to_path_buf(), missing.clone()]).unwrap_err();

    assert!(matches!(err, Error::AutoloaderNotFound { path } if path == missing));
    assert_eq!(hooks::registered_names(), before);
}

#[test]
fn hooks_resolve_classes_during_the_discovery_window_only() {
    let _serial = HOOKS_LOCK.lock().unwrap();
    let _clean = hooks::IsolationGuard::isolate();
    let project = animals_project();

    let maps = discover(&[project.path().to_path_buf()]).unwrap();
    // after discovery the window is closed: the map is returned but no
    // longer globally registered
    assert!(hooks::registered_names().is_empty());
    assert!(hooks::resolve_class(&ClassName::new("Animals\\Badger")).is_none());

    // a caller may re-register the discovered map deliberately
    hooks::register(AutoloadHook::new(maps[0].clone()));
    assert_eq!(
        hooks::resolve_class(&ClassName::new("Animals\\Badger"))
            .unwrap()
            .as_path(),
        project.path().join("src/Badger.php")
    );
}
