//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command that skips the system font scan
fn cli_cmd() -> Command {
    let mut cmd = Command::cargo_bin("membercard").expect("Failed to find membercard binary");
    cmd.arg("--no-system-fonts");
    cmd
}

// ============================================================================
// Listing Commands
// ============================================================================

#[test]
fn test_branches_lists_all_four() {
    cli_cmd()
        .arg("branches")
        .assert()
        .success()
        .stdout(predicate::str::contains("putrajaya"))
        .stdout(predicate::str::contains("cyberjaya"))
        .stdout(predicate::str::contains("bangi"))
        .stdout(predicate::str::contains("country-homes"))
        .stdout(predicate::str::contains("Country Homes"));
}

#[test]
fn test_themes_lists_gradients() {
    cli_cmd()
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("monochrome"))
        .stdout(predicate::str::contains("#374151 -> #111827"));
}

// ============================================================================
// Svg Command Tests
// ============================================================================

#[test]
fn test_svg_mirrors_fields() {
    cli_cmd()
        .args(["svg", "--name", "Aminah", "--branch", "bangi", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains(">Aminah<"))
        .stdout(predicate::str::contains("Cawangan: Bangi"))
        .stdout(predicate::str::contains("Tarikh Mula Keahlian: 05/01/2024"));
}

#[test]
fn test_svg_defaults_to_placeholders() {
    cli_cmd()
        .args(["svg", "--date", "2030-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Member Name"))
        .stdout(predicate::str::contains("Cawangan: Not selected"))
        .stdout(predicate::str::contains("31/12/2030"));
}

#[test]
fn test_svg_defaults_to_today() {
    let today = membercard_core::text::format_membership_date(chrono::Local::now().date_naive());

    cli_cmd()
        .arg("svg")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Tarikh Mula Keahlian: {}", today)));
}

#[test]
fn test_invalid_branch_rejected() {
    cli_cmd()
        .args(["svg", "--branch", "kajang"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid branch: kajang"));
}

#[test]
fn test_invalid_theme_rejected() {
    cli_cmd()
        .args(["svg", "--theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme: neon"));
}

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn test_render_writes_membership_card_png() {
    let out = TempDir::new().unwrap();

    cli_cmd()
        .args(["render", "--name", "Hafiz", "--theme", "sunset", "--scale", "1"])
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("membership-card.png"))
        .stdout(predicate::str::contains("Size: 448x232"));

    let img = image::open(out.path().join("membership-card.png")).unwrap();
    assert_eq!((img.width(), img.height()), (448, 232));
}

#[test]
fn test_render_with_unreadable_photo_still_saves() {
    let out = TempDir::new().unwrap();
    let bogus = out.path().join("photo.png");
    std::fs::write(&bogus, "not an image").unwrap();

    cli_cmd()
        .args(["render", "--scale", "1"])
        .arg("--photo")
        .arg(&bogus)
        .arg("--out")
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("membership-card.png").exists());
}

#[test]
fn test_render_uses_config_output_dir() {
    let dir = TempDir::new().unwrap();
    let cards = dir.path().join("cards");
    let config = dir.path().join("membercard.json");
    std::fs::write(
        &config,
        format!(r#"{{ "output-dir": {:?}, "scale": 1.0 }}"#, cards.display().to_string()),
    )
    .unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .assert()
        .success();

    assert!(cards.join("membership-card.png").exists());
}

// ============================================================================
// Share Command Tests
// ============================================================================

#[test]
fn test_share_url_default_text() {
    cli_cmd()
        .arg("share-url")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "https://twitter.com/intent/tweet?text=Check%20out%20my%20Global%20Ikhwan%20Sdn%20Bhd%20membership%20card%21",
        ));
}

#[test]
fn test_share_url_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("membercard.json");
    std::fs::write(&config, r#"{ "share-text": "Hello", "share-url": "https://example.org" }"#).unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("share-url")
        .assert()
        .success()
        .stdout(predicate::str::contains("?text=Hello&url=https%3A%2F%2Fexample.org"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("membercard.json");
    std::fs::write(&config, "{ not json").unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("share-url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
