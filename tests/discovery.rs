//! Discovery and search-path configuration tests.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pysol_cardset::options::{CARDSET_PREFIX, DEFAULT_ROOT};
use pysol_cardset::{
    CardThemeProvider, DirectoryLister, DiscoveryOptions, FsDirectoryLister, ThemeKind,
    discover_themes, parser,
};

fn valid_config(name: &str) -> String {
    format!(
        "PySol solitaire cardset;5;.gif;1;52;1;1\n\
         x;{name}\n\
         71 96 2\n\
         18 18 8 8\n\
         back01.gif\n\
         back01.gif;back02.gif\n"
    )
}

fn write_cardset(root: &Path, subdir: &str, text: &str) {
    let dir = root.join(subdir);
    fs::create_dir_all(&dir).expect("failed to create cardset directory");
    fs::write(dir.join(parser::CONFIG_FILENAME), text).expect("failed to write config");
}

/// Lister that records which roots were asked for.
#[derive(Default)]
struct RecordingLister {
    inner: FsDirectoryLister,
    visited: RefCell<Vec<PathBuf>>,
}

impl DirectoryLister for RecordingLister {
    fn list(&self, root: &Path) -> io::Result<Vec<String>> {
        self.visited.borrow_mut().push(root.to_path_buf());
        self.inner.list(root)
    }
}

#[test]
fn default_options_search_system_directory() {
    let options = DiscoveryOptions::default();
    assert_eq!(options.roots, [PathBuf::from(DEFAULT_ROOT)]);
    assert_eq!(options.prefix, CARDSET_PREFIX);
}

#[test]
fn builder_orders_roots_by_priority() {
    let options = DiscoveryOptions::default()
        .with_roots(["/low"])
        .with_root("/high")
        .with_prefix("deck-");

    assert_eq!(
        options.roots,
        [PathBuf::from("/high"), PathBuf::from("/low")]
    );
    assert_eq!(options.prefix, "deck-");
}

#[test]
fn search_path_entries_come_first() {
    let search_path =
        std::env::join_paths(["/one", "/two"]).expect("paths contain no separator");
    let options = DiscoveryOptions::default()
        .with_roots(["/base"])
        .with_search_path(&search_path);

    assert_eq!(
        options.roots,
        [
            PathBuf::from("/one"),
            PathBuf::from("/two"),
            PathBuf::from("/base")
        ]
    );
}

#[test]
fn fs_lister_returns_sorted_directories_only() {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    fs::create_dir(dir.path().join("cardset-b")).expect("failed to create dir");
    fs::create_dir(dir.path().join("cardset-a")).expect("failed to create dir");
    fs::write(dir.path().join("cardset-file"), "").expect("failed to create file");

    let names = FsDirectoryLister.list(dir.path()).expect("root is readable");
    assert_eq!(names, ["cardset-a", "cardset-b"]);
}

#[test]
fn discovery_keeps_valid_cardsets_and_skips_the_rest() {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    write_cardset(dir.path(), "cardset-good", &valid_config("Good"));
    write_cardset(dir.path(), "cardset-broken", "PySol solitaire cardset;5\n");
    write_cardset(
        dir.path(),
        "cardset-tarock",
        &valid_config("Tarock").replace(";1;52;", ";3;78;"),
    );
    write_cardset(dir.path(), "unprefixed", &valid_config("Hidden"));
    fs::create_dir(dir.path().join("cardset-noconfig")).expect("failed to create dir");
    write_cardset(dir.path(), "cardset-zeta", &valid_config("Zeta"));

    let options = DiscoveryOptions::default().with_roots([dir.path()]);
    let themes = discover_themes(&options, &FsDirectoryLister);

    let names: Vec<&str> = themes
        .iter()
        .map(|theme| theme.info().display_name.as_str())
        .collect();
    assert_eq!(names, ["Good (PySol)", "Zeta (PySol)"]);

    let good = &themes[0];
    assert_eq!(good.info().kind, ThemeKind::Pysol);
    assert_eq!(good.info().pref_name, "pysol:cardset-good");
    assert_eq!(good.info().filename, "cardset-good");
    assert_eq!(good.info().root, dir.path());
    assert_eq!(good.descriptor().base_path(), dir.path().join("cardset-good"));
}

#[test]
fn earlier_roots_shadow_later_ones() {
    let first = tempfile::tempdir().expect("failed to create temp directory");
    let second = tempfile::tempdir().expect("failed to create temp directory");
    write_cardset(first.path(), "cardset-shared", &valid_config("First"));
    write_cardset(second.path(), "cardset-shared", &valid_config("Second"));
    write_cardset(second.path(), "cardset-extra", &valid_config("Extra"));

    let options = DiscoveryOptions::default().with_roots([first.path(), second.path()]);
    let themes = discover_themes(&options, &FsDirectoryLister);

    let names: Vec<&str> = themes
        .iter()
        .map(|theme| theme.descriptor().name())
        .collect();
    assert_eq!(names, ["First", "Extra"]);
}

#[test]
fn unreadable_root_does_not_stop_discovery() {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    write_cardset(dir.path(), "cardset-good", &valid_config("Good"));
    let missing = dir.path().join("does-not-exist");

    let options = DiscoveryOptions::default().with_roots([missing.clone(), dir.path().to_path_buf()]);
    let lister = RecordingLister::default();
    let themes = discover_themes(&options, &lister);

    assert_eq!(themes.len(), 1);
    assert_eq!(*lister.visited.borrow(), [missing, dir.path().to_path_buf()]);
}

#[test]
fn custom_prefix_filters_directories() {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    write_cardset(dir.path(), "cardset-default", &valid_config("Default"));
    write_cardset(dir.path(), "deck-custom", &valid_config("Custom"));

    let options = DiscoveryOptions::default()
        .with_roots([dir.path()])
        .with_prefix("deck-");
    let themes = discover_themes(&options, &FsDirectoryLister);

    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].info().pref_name, "pysol:deck-custom");
}
