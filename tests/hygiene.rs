//! Hygiene — coding standards for the options pane, checked at test time.
//!
//! Scans `src/` (excluding `_test.rs` sidecars) for antipatterns. Budgets
//! are zero; the pane has no reason to panic, silently drop errors, reach
//! for thread-safe primitives, or touch the DOM outside its binding modules.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// Modules allowed to use web-sys / wasm-bindgen directly.
const DOM_MODULES: &[&str] = &["dom.rs", "wasm.rs"];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn is_dom_module(&self) -> bool {
        DOM_MODULES.iter().any(|name| self.path.ends_with(name))
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits<'a>(files: impl IntoIterator<Item = &'a SourceFile>, pattern: &str) -> Vec<(String, usize)> {
    files
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_absent(pattern: &str, found: &[(String, usize)]) {
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count == 0, "`{pattern}` found {count} time(s):\n{listing}");
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("pane.rs")), "run from the crate root");
}

#[test]
fn no_panicking_calls() {
    let files = source_files();
    for pattern in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern, &hits(&files, pattern));
    }
}

#[test]
fn no_silent_discards() {
    let files = source_files();
    for pattern in ["let _ =", ".ok()"] {
        assert_absent(pattern, &hits(&files, pattern));
    }
}

#[test]
fn no_dead_code_allowances() {
    let files = source_files();
    assert_absent("#[allow(dead_code)]", &hits(&files, "#[allow(dead_code)]"));
}

#[test]
fn single_threaded_primitives_only() {
    let files = source_files();
    for pattern in ["Arc<", "Mutex<", "RwLock<"] {
        assert_absent(pattern, &hits(&files, pattern));
    }
}

#[test]
fn dom_access_stays_in_binding_modules() {
    let files = source_files();
    let outside: Vec<&SourceFile> = files.iter().filter(|f| !f.is_dom_module()).collect();
    for pattern in ["web_sys::", "wasm_bindgen::", "js_sys::"] {
        assert_absent(pattern, &hits(outside.iter().copied(), pattern));
    }
}
