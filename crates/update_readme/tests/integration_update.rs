// tests/integration_update.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const README: &str = "\
# Data Structures Collection

A collection of header-only C++ data structures.

## Features Overview

- **Skip List**: probabilistic ordered map
- **Trie**: prefix tree over strings
- **Radix Policy Table**: longest-prefix-match routing

## How to Compile & Run Examples

Compile each example directly:

    g++ -std=c++17 -Iinclude examples/use_skip.cpp -o use_skip
    ./use_skip

## Skip List (`skiplist.h`)

A sorted container with O(log n) expected search.

## Trie (`trie.h`)

Insert and prefix-search over ASCII strings.
";

fn write_readme(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("README.md"), content).unwrap();
}

fn read_readme(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("README.md")).unwrap()
}

#[test]
fn test_update_succeeds_on_well_formed_readme() {
    let dir = TempDir::new().unwrap();
    write_readme(&dir, README);

    let mut cmd = Command::cargo_bin("update_readme").unwrap();
    cmd.current_dir(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("README.md updated successfully."));

    let updated = read_readme(&dir);
    assert!(updated.contains("## Directory Structure"));
    assert!(updated.contains("## How to Compile & Run\n"));
    assert!(updated.contains("CTest will provide a summary of test results."));
    // The stale instructions are gone.
    assert!(!updated.contains("## How to Compile & Run Examples"));
    assert!(!updated.contains("g++ -std=c++17"));
}

#[test]
fn test_update_preserves_surrounding_sections() {
    let dir = TempDir::new().unwrap();
    write_readme(&dir, README);

    Command::cargo_bin("update_readme")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success();

    let updated = read_readme(&dir);
    assert!(updated.starts_with(
        "# Data Structures Collection\n\nA collection of header-only C++ data structures.\n\n"
    ));
    assert!(updated.contains("- **Skip List**: probabilistic ordered map\n"));
    assert!(updated.ends_with(
        "## Skip List (`skiplist.h`)\n\nA sorted container with O(log n) expected search.\n\n## Trie (`trie.h`)\n\nInsert and prefix-search over ASCII strings.\n"
    ));
}

#[test]
fn test_missing_readme_fails_without_creating_one() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("update_readme").unwrap();
    cmd.current_dir(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read README.md"));

    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_missing_marker_leaves_readme_unchanged() {
    let dir = TempDir::new().unwrap();
    let without_compile = README.replace("## How to Compile & Run Examples", "## Building");
    write_readme(&dir, &without_compile);

    let mut cmd = Command::cargo_bin("update_readme").unwrap();
    cmd.current_dir(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Section marker(s) not found"))
        .stderr(predicate::str::contains("## How to Compile & Run Examples"));

    assert_eq!(read_readme(&dir), without_compile);
}

#[test]
fn test_all_markers_missing_reported_in_one_failure() {
    let dir = TempDir::new().unwrap();
    write_readme(&dir, "# Empty project\n\nNothing here yet.\n");

    let mut cmd = Command::cargo_bin("update_readme").unwrap();
    cmd.current_dir(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("## Features Overview"))
        .stderr(predicate::str::contains("## How to Compile & Run Examples"))
        .stderr(predicate::str::contains("## Skip List (`skiplist.h`)"));
}

#[test]
fn test_out_of_order_markers_leave_readme_unchanged() {
    let dir = TempDir::new().unwrap();
    // Tail heading ahead of the compile heading.
    let scrambled = "\
# Data Structures Collection

## Features Overview

- Skip list

## Skip List (`skiplist.h`)

Details.

## How to Compile & Run Examples

Old instructions.
";
    write_readme(&dir, scrambled);

    let mut cmd = Command::cargo_bin("update_readme").unwrap();
    cmd.current_dir(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of order"));

    assert_eq!(read_readme(&dir), scrambled);
}
