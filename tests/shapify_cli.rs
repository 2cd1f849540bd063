use std::fs;
use std::process::Command;

#[test]
fn cli_writes_html_page() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tokens.txt");
    let output = dir.path().join("out.html");
    fs::write(&input, "the cat sat on the mat").unwrap();

    let result = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--seed",
            "7",
            "--json",
        ])
        .output()
        .expect("run failed");
    assert!(result.status.success());

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert_eq!(page.matches("<span>").count(), 6);

    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("\"tokens\": 6"));
    assert!(stderr.contains("\"distinct\": 5"));
    assert!(stderr.contains("\"remaining\": 40"));
}

#[test]
fn cli_is_deterministic_with_seed() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tokens.txt");
    fs::write(&input, "a\nb\na\n").unwrap();
    let run = || {
        Command::new(exe)
            .args([input.to_str().unwrap(), "--split", "lines", "--seed", "3"])
            .output()
            .expect("run failed")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn cli_draws_bit_matrices() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ints.txt");
    fs::write(&input, "3 10 15").unwrap();
    let result = Command::new(exe)
        .args([input.to_str().unwrap(), "--bits", "4"])
        .output()
        .expect("run failed");
    assert!(result.status.success());
    let page = String::from_utf8(result.stdout).unwrap();
    assert_eq!(page.matches(r#"<svg width="32" height="32">"#).count(), 3);
}

#[test]
fn out_of_range_bits_fail() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ints.txt");
    fs::write(&input, "16").unwrap();
    let status = Command::new(exe)
        .args([input.to_str().unwrap(), "--bits", "4"])
        .status()
        .expect("run failed");
    assert!(!status.success());
}

#[test]
fn too_many_distinct_tokens_fail() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tokens.txt");
    let text: Vec<String> = (0..46).map(|i| format!("t{i}")).collect();
    fs::write(&input, text.join(" ")).unwrap();
    let result = Command::new(exe)
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("shaping tokens: only 45"));
}

#[test]
fn missing_input_reports_path() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let result = Command::new(exe)
        .arg(missing.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("missing.txt"));
}

#[test]
fn small_palette_limits_distinct_tokens() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let palette = dir.path().join("palette.json");
    fs::write(
        &palette,
        r#"{"forms": ["square"], "colors": ["red", "blue"], "durations": [1.0]}"#,
    )
    .unwrap();
    let input = dir.path().join("tokens.txt");
    fs::write(&input, "x y z").unwrap();

    let result = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--palette",
            palette.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("shaping tokens: only 2"), "{stderr}");

    fs::write(&input, "x y x").unwrap();
    let result = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--palette",
            palette.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(result.status.success());
    let page = String::from_utf8(result.stdout).unwrap();
    assert_eq!(page.matches("<rect").count(), 3);
}

#[test]
fn malformed_palette_is_reported() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let palette = dir.path().join("palette.json");
    fs::write(&palette, r#"{"forms": []}"#).unwrap();
    let input = dir.path().join("tokens.txt");
    fs::write(&input, "x").unwrap();
    let result = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--palette",
            palette.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("loading palette:"), "{stderr}");
}

#[test]
fn char_split_skips_whitespace() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("chars.txt");
    fs::write(&input, "ab a").unwrap();
    let result = Command::new(exe)
        .args([input.to_str().unwrap(), "--split", "chars", "--seed", "1", "--json"])
        .output()
        .expect("run failed");
    assert!(result.status.success());
    let page = String::from_utf8(result.stdout).unwrap();
    assert_eq!(page.matches("<span>").count(), 3);
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("\"distinct\": 2"));
}

#[test]
fn wide_bit_matrices_draw() {
    let exe = env!("CARGO_BIN_EXE_shapify");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ints.txt");
    fs::write(&input, "0 5 0x8000000000000000000000000000000000000000").unwrap();
    let result = Command::new(exe)
        .args([input.to_str().unwrap(), "--bits", "256"])
        .output()
        .expect("run failed");
    assert!(result.status.success());
    let page = String::from_utf8(result.stdout).unwrap();
    assert_eq!(page.matches(r#"<svg width="256" height="256">"#).count(), 3);
}
