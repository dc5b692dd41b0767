use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn setup(words: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let dict = dir.path().join("words.txt");
    fs::write(&dict, words).unwrap();
    (dir, dict)
}

fn triespell(dir: &Path, dict: &Path) -> Command {
    let mut cmd = Command::cargo_bin("triespell").unwrap();
    cmd.current_dir(dir)
        .env_remove("TRIESPELL_LOG")
        .arg("--no-color")
        .arg("--dictionary")
        .arg(dict);
    cmd
}

#[test]
fn contains_reports_membership() {
    let (dir, dict) = setup("cat\ncot\ncar\ndog\n");

    triespell(dir.path(), &dict)
        .args(["contains", "dog"])
        .assert()
        .success()
        .stdout("true\n");

    triespell(dir.path(), &dict)
        .args(["contains", "do"])
        .assert()
        .code(2)
        .stdout("false\n");
}

#[test]
fn suggest_lists_same_length_words() {
    let (dir, dict) = setup("cat\ncot\ncar\ndog\ncats\n");

    triespell(dir.path(), &dict)
        .args(["suggest", "cat", "--max-mistakes", "1"])
        .assert()
        .success()
        .stdout("cat: car, cat, cot\n");

    triespell(dir.path(), &dict)
        .args(["suggest", "dog", "--max-mistakes", "1"])
        .assert()
        .success()
        .stdout("dog: dog\n");
}

#[test]
fn suggest_ranked_and_negative_budget() {
    let (dir, dict) = setup("cat\ncot\ncar\ndog\n");

    triespell(dir.path(), &dict)
        .args(["suggest", "cot", "--ranked", "--max-mistakes", "1", "--max-suggestions", "2"])
        .assert()
        .success()
        .stdout("cot: cot, cat\n");

    triespell(dir.path(), &dict)
        .args(["suggest", "cat", "--max-mistakes=-1"])
        .assert()
        .success()
        .stdout("cat: (no suggestions)\n");
}

#[test]
fn suggest_json_output() {
    let (dir, dict) = setup("cat\ncot\n");

    let output = triespell(dir.path(), &dict)
        .args(["suggest", "cut", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["word"], "cut");
    assert_eq!(value["known"], false);
    assert_eq!(value["suggestions"], serde_json::json!(["cat", "cot"]));
}

#[test]
fn check_reports_misspellings() {
    let (dir, dict) = setup("the\ncat\nsat\non\nmat\n");
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, "The cat sat on the mxt\n").unwrap();

    triespell(dir.path(), &dict)
        .arg("check")
        .arg(&doc)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1:20 mxt"))
        .stdout(predicate::str::contains("→ mat"))
        .stdout(predicate::str::contains("1 error found in 1 file"));

    triespell(dir.path(), &dict)
        .args(["check", "--no-fail"])
        .arg(&doc)
        .assert()
        .success();
}

#[test]
fn check_clean_directory() {
    let (dir, dict) = setup("hello\nworld\n");
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("a.txt"), "hello world\n").unwrap();
    fs::write(docs.join("b.md"), "Hello, World!\n").unwrap();

    triespell(dir.path(), &dict)
        .arg("check")
        .arg(&docs)
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn check_json_report() {
    let (dir, dict) = setup("hello\n");
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, "hello jello\n").unwrap();

    let output = triespell(dir.path(), &dict)
        .args(["check", "--no-fail", "--format", "json"])
        .arg(&doc)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files_checked"], 1);
    assert_eq!(value["total_errors"], 1);
    let error = &value["files"][0]["errors"][0];
    assert_eq!(error["word"], "jello");
    assert_eq!(error["column"], 7);
    assert_eq!(error["suggestions"], serde_json::json!(["hello"]));
}

#[test]
fn local_config_sets_budget() {
    let (dir, dict) = setup("abcd\nxbcd\nxycd\n");
    fs::write(dir.path().join(".triespell.toml"), "max_mistakes = 2\n").unwrap();

    triespell(dir.path(), &dict)
        .args(["suggest", "abcd"])
        .assert()
        .success()
        .stdout("abcd: abcd, xbcd, xycd\n");
}

#[test]
fn missing_dictionary_fails() {
    let dir = tempdir().unwrap();
    let dict = dir.path().join("absent.txt");

    triespell(dir.path(), &dict)
        .args(["contains", "word"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dictionary not found"));
}

#[test]
fn completion_script() {
    Command::cargo_bin("triespell")
        .unwrap()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("triespell"));
}
