//! Expansion of user path specs into a deterministic file list
//!
//! Specs may be exact `.py` files, directories (scanned recursively), or
//! glob patterns. Results are deduplicated and lexicographically sorted;
//! that ordering is the basis for deterministic manifest output.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Result of path-spec expansion.
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    /// Sorted, deduplicated source file paths.
    pub files: Vec<PathBuf>,
    /// Non-fatal discovery warnings (patterns that matched nothing).
    pub warnings: Vec<String>,
}

/// Expand `specs` into the ordered list of Python files to scan.
///
/// A glob pattern matching nothing records a warning and falls back to a
/// recursive walk rooted at the pattern's first path segment, collecting
/// every `.py` file found there.
pub fn collect_python_files(specs: &[String]) -> DiscoveredFiles {
    let mut found: BTreeSet<PathBuf> = BTreeSet::new();
    let mut warnings = Vec::new();
    let mut patterns: Vec<String> = Vec::new();

    for spec in specs {
        if spec.contains('*') {
            patterns.push(spec.clone());
            continue;
        }
        let path = Path::new(spec);
        if path.is_file() && spec.ends_with(".py") {
            found.insert(path.to_path_buf());
        } else if path.is_dir() {
            // Directories expand to a recursive glob over their subtree.
            patterns.push(format!("{}/**/*.py", spec.trim_end_matches('/')));
        } else {
            warnings.push(format!("Path '{}' is not a Python file or directory", spec));
        }
    }

    for pattern in &patterns {
        let mut matched = 0usize;
        match glob::glob(pattern) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    if entry.is_file() {
                        found.insert(entry);
                        matched += 1;
                    }
                }
            }
            Err(err) => {
                warnings.push(format!("Invalid glob pattern '{}': {}", pattern, err));
                continue;
            }
        }

        if matched == 0 {
            warnings.push(format!("No files match the pattern '{}'", pattern));
            walk_pattern_root(pattern, &mut found);
        }
    }

    debug!("Discovered {} Python files", found.len());
    DiscoveredFiles {
        files: found.into_iter().collect(),
        warnings,
    }
}

/// Fallback for a dead glob: walk the pattern's first path segment and
/// collect every `.py` file below it.
fn walk_pattern_root(pattern: &str, found: &mut BTreeSet<PathBuf>) {
    let Some(first_segment) = pattern.split('/').next() else {
        return;
    };
    let root = Path::new(first_segment);
    if !root.is_dir() {
        return;
    }

    debug!("Falling back to directory walk under: {:?}", root);
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("py") {
            found.insert(path.to_path_buf());
        }
    }
}
