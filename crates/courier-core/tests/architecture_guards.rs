//! Architecture guard tests for the courier workspace.
//!
//! These tests scan source files to enforce design-level consistency:
//! - Error handling style (thiserror vs hand-written Display)
//! - Process environment is read only by the configuration loader
//!
//! Run: `cargo test --package courier-core --test architecture_guards -- --nocapture`

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Walk `dir` recursively, collecting .rs files that pass `filter`.
fn collect_rs_files(dir: &Path, filter: &dyn Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut result = Vec::new();
    if !dir.exists() {
        return result;
    }
    for entry in walkdir(dir) {
        if entry.extension().is_some_and(|e| e == "rs") && filter(&entry) {
            result.push(entry);
        }
    }
    result
}

/// Simple recursive directory walk (no external dep).
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(walkdir(&path));
            } else {
                files.push(path);
            }
        }
    }
    files
}

/// Return the workspace root (two levels up from courier-core/tests/).
fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // crates/courier-core
    manifest
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .expect("cannot determine workspace root")
        .to_path_buf()
}

fn is_test_file(path: &Path) -> bool {
    let s = path.to_string_lossy();
    s.contains("/tests/") || s.ends_with("/tests.rs") || s.ends_with("_test.rs")
}

/// Source up to the first `#[cfg(test)]` item.
fn non_test_code(content: &str) -> &str {
    content.split("#[cfg(test)]").next().unwrap_or(content)
}

/// Strip the workspace root prefix for display.
fn rel(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn report(code: &str, headline: &str, violations: &[(String, usize, String)]) {
    if violations.is_empty() {
        return;
    }
    let mut msg = format!("\n[{}] {}\n\n", code, headline);
    for (file, line, text) in violations {
        msg.push_str(&format!("  {}:{} -> {}\n", file, line, text));
    }
    panic!("{msg}");
}

// ---------------------------------------------------------------------------
// CR-ERR-01: Error types must use thiserror, no hand-written Display
// ---------------------------------------------------------------------------

#[test]
fn test_error_types_use_thiserror() {
    let root = workspace_root();
    let files = collect_rs_files(&root.join("crates"), &|p| !is_test_file(p));
    let mut violations = Vec::new();

    for file in &files {
        let Ok(content) = fs::read_to_string(file) else {
            continue;
        };
        for (i, line) in non_test_code(&content).lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("impl")
                && trimmed.contains("Display for")
                && trimmed.contains("Error")
            {
                violations.push((rel(file, &root), i + 1, trimmed.to_string()));
            }
        }
    }

    report(
        "CR-ERR-01",
        "Hand-written Display for Error types detected. Use #[derive(thiserror::Error)] instead.",
        &violations,
    );
}

// ---------------------------------------------------------------------------
// CR-CFG-01: Only the configuration loader reads the process environment
// ---------------------------------------------------------------------------

#[test]
fn test_environment_read_only_by_config_loader() {
    let root = workspace_root();
    let allowlist: HashSet<&str> = ["crates/courier-core/src/config/env_loader.rs"]
        .into_iter()
        .collect();

    let files = collect_rs_files(&root.join("crates"), &|p| !is_test_file(p));
    let mut violations = Vec::new();

    for file in &files {
        let relative = rel(file, &root);
        if allowlist.contains(relative.as_str()) {
            continue;
        }
        let Ok(content) = fs::read_to_string(file) else {
            continue;
        };
        for (i, line) in non_test_code(&content).lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            if trimmed.contains("env::var(") || trimmed.contains("env::var_os(") {
                violations.push((relative.clone(), i + 1, trimmed.to_string()));
            }
        }
    }

    report(
        "CR-CFG-01",
        "Environment lookup outside the configuration loader. Pass Configuration instead.",
        &violations,
    );
}
