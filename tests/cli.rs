// tests/cli.rs

//! Exit codes and output of the `larder` binary.

mod common;

use common::{empty_catalog, populated_catalog, recipe_toml, write_recipe};
use std::process::Command;

fn larder() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_larder"));
    command.env_remove("LARDER_RECIPES_DIR").env_remove("RUST_LOG");
    command
}

#[test]
fn test_generate_clean_catalog_exits_zero() {
    let (temp_dir, config) = populated_catalog(1);
    let output_path = temp_dir.path().join("dist").join("recipes.json");

    let output = larder()
        .arg("generate")
        .arg("--recipes-dir")
        .arg(&config.recipes_root)
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run larder");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(json["schema_version"], "1.0.0");
    assert_eq!(json["recipes"].as_array().unwrap().len(), 26);
}

#[test]
fn test_generate_dirty_catalog_exits_one_without_output() {
    let (temp_dir, config) = empty_catalog();
    write_recipe(&config, "f/fd.toml", &recipe_toml("fd"));
    write_recipe(&config, "r/ripgrep.toml", &recipe_toml("rg"));
    let output_path = temp_dir.path().join("dist").join("recipes.json");

    let output = larder()
        .arg("generate")
        .arg("--recipes-dir")
        .arg(&config.recipes_root)
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run larder");

    assert_eq!(output.status.code(), Some(1));
    assert!(!output_path.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ripgrep.toml"));
    assert!(stdout.contains("does not match filename"));
}

#[test]
fn test_check_uses_env_root() {
    let (_temp_dir, config) = populated_catalog(1);

    let output = larder()
        .arg("check")
        .env("LARDER_RECIPES_DIR", &config.recipes_root)
        .output()
        .expect("run larder");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("26 recipe(s) valid"));
}

#[test]
fn test_missing_root_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = larder()
        .arg("check")
        .arg("--recipes-dir")
        .arg(temp_dir.path().join("missing"))
        .output()
        .expect("run larder");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Recipes root not found"));
}
