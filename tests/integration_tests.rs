use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tabview::config::load_config_from;
use tabview::document::load_file;
use tabview::search::BannerKind;
use tabview::{App, Config};
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn handbook_app() -> App {
    let document = load_file(&fixture_path("handbook.html")).unwrap();
    App::new(document, &Config::default()).unwrap()
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabbed HTML documents"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabview"));
}

#[test]
fn test_cli_requires_input_file() {
    cargo_bin_cmd!().assert().failure();
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_cli_with_document_without_tabs() {
    cargo_bin_cmd!()
        .arg(fixture_path("no_tabs.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tabs found"));
}

#[test]
fn test_cli_with_mismatched_panels() {
    cargo_bin_cmd!()
        .arg(fixture_path("mismatched.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 tab buttons but 1 tab panels"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("handbook.html").exists());
    assert!(fixture_path("no_tabs.html").exists());
    assert!(fixture_path("mismatched.html").exists());
}

#[test]
fn test_handbook_loads_with_first_tab_active() {
    let app = handbook_app();

    assert_eq!(app.tabs.tab_count(), 3);
    assert_eq!(
        app.tabs.labels(&app.document),
        vec!["Einleitung", "Installation", "Preise"]
    );
    let first_tab = app.tabs.tabs()[0];
    assert_eq!(app.document.attr(first_tab, "aria-selected"), Some("true"));
    assert_eq!(app.document.attr(first_tab, "tabindex"), Some("0"));
}

#[test]
fn test_handbook_script_text_is_not_searchable() {
    let mut app = handbook_app();
    let now = std::time::Instant::now();

    app.search
        .search(&mut app.document, &app.tabs, "querySelectorAll", now);

    assert_eq!(app.search.highlight_count(), 0);
    assert_eq!(
        app.search.banner().map(|b| b.kind),
        Some(BannerKind::NoResults)
    );
}

#[test]
fn test_handbook_price_table_skips_header_cells() {
    let mut app = handbook_app();
    app.tabs.activate(&mut app.document, 2);
    let panel = app.active_panel().unwrap();
    let before = app.document.to_html(panel);

    app.search.search(
        &mut app.document,
        &app.tabs,
        "paket",
        std::time::Instant::now(),
    );
    assert_eq!(app.search.highlight_count(), 1);

    app.search.clear(&mut app.document);
    assert_eq!(app.document.to_html(panel), before);
}

#[test]
fn test_config_file_controls_dismiss_delay() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[search]\nno_results_dismiss_ms = 250\n\n[tabs]\nshow_numbers = false\n",
    )
    .unwrap();

    let result = load_config_from(&path);

    assert!(result.warning.is_none());
    assert_eq!(
        result.config.search.no_results_dismiss(),
        std::time::Duration::from_millis(250)
    );
    assert!(!result.config.tabs.show_numbers);
}
