//! Hygiene: enforces coding standards at test time
//!
//! Scans the catalog crate's production sources for panicking or
//! error-discarding constructs. The layout allocator and command table run on
//! every gallery render, so each budget is zero and never grows.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `catalog/src/`; `_test.rs` siblings are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut pending = vec![PathBuf::from("src")];
    let mut files = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if is_production_source(&path) {
                if let Ok(content) = fs::read_to_string(&path) {
                    files.push(SourceFile { path: path.to_string_lossy().into_owned(), content });
                }
            }
        }
    }
    files
}

fn is_production_source(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "rs") && !path.to_string_lossy().ends_with("_test.rs")
}

/// Assert that `pattern` occurs on at most `budget` lines across the crate.
fn check_budget(label: &str, pattern: &str, budget: usize) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect();
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= budget, "{label} budget exceeded: found {found}, max {budget}.\n{listing}");
}

// =============================================================
// Panics
// =============================================================

#[test]
fn unwrap_budget() {
    check_budget(".unwrap()", ".unwrap()", 0);
}

#[test]
fn expect_budget() {
    check_budget(".expect()", ".expect(", 0);
}

#[test]
fn panic_budget() {
    check_budget("panic!()", "panic!(", 0);
}

#[test]
fn unreachable_budget() {
    check_budget("unreachable!()", "unreachable!(", 0);
}

#[test]
fn todo_and_unimplemented_budget() {
    check_budget("todo!()", "todo!(", 0);
    check_budget("unimplemented!()", "unimplemented!(", 0);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn silent_discard_budget() {
    check_budget("let _ =", "let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    check_budget(".ok()", ".ok()", 0);
}

#[test]
fn allow_dead_code_budget() {
    check_budget("#[allow(dead_code)]", "#[allow(dead_code)]", 0);
}
