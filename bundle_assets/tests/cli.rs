/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{fs, process::Command};

const BIN: &str = env!("CARGO_BIN_EXE_bundle_assets");

#[test]
fn no_arguments_prints_usage() {
    let output = Command::new(BIN).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: bundle_assets <assets_dir> <output_file>"));
}

#[test]
fn single_argument_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("assets.h");

    let output = Command::new(BIN).arg(&header).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage:"));
    assert!(!header.exists());

    fs::write(&header, "keep me").unwrap();
    let output = Command::new(BIN).arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&header).unwrap(), "keep me");
}

#[test]
fn bundles_directory() {
    let assets = tempfile::tempdir().unwrap();
    fs::write(assets.path().join("w_k.png"), [0x10u8, 0x20]).unwrap();
    let out = tempfile::tempdir().unwrap();
    let header = out.path().join("assets.h");

    let output = Command::new(BIN)
        .arg(assets.path())
        .arg(&header)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let text = fs::read_to_string(&header).unwrap();
    assert!(text.contains("    0x10, 0x20,\n"));
    assert!(text.contains("assets['K'] = { asset_w_k_png, asset_w_k_png_len };"));
}

#[test]
fn missing_directory_fails() {
    let out = tempfile::tempdir().unwrap();
    let header = out.path().join("assets.h");

    let output = Command::new(BIN)
        .arg(out.path().join("nope"))
        .arg(&header)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}

#[test]
fn help_flag_alone_is_too_few_arguments() {
    for flag in ["--help", "-h", "--version"] {
        let output = Command::new(BIN).arg(flag).output().unwrap();

        assert_eq!(output.status.code(), Some(1), "{flag}");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "Usage: bundle_assets <assets_dir> <output_file>\n"
        );
    }
}

#[test]
fn hyphenated_paths_are_positionals() {
    let root = tempfile::tempdir().unwrap();
    let assets = root.path().join("-icons");
    fs::create_dir(&assets).unwrap();
    fs::write(assets.join("w_p.png"), [0x01u8]).unwrap();

    let output = Command::new(BIN)
        .current_dir(root.path())
        .args(["-icons", "-out.h"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let text = fs::read_to_string(root.path().join("-out.h")).unwrap();
    assert!(text.contains("assets['P'] = { asset_w_p_png, asset_w_p_png_len };"));
}
