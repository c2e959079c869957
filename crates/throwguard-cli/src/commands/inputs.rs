//! Resolve `analyze` path arguments into the tree files to load.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::{DirEntry, WalkBuilder};
use throwguard_core::config::{ThrowguardConfig, IGNORE_FILE};

/// Expand each path: files are taken as given, directories are walked for
/// files ending in the configured tree suffix. Output is sorted and deduped.
pub fn collect_tree_files(
    paths: &[PathBuf],
    config: &ThrowguardConfig,
) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            walk_dir(path, config, &mut files)?;
        } else {
            return Err(format!("path not found: {}", path.display()));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Walk one directory the way source walkers do: hidden entries, gitignore
/// rules and `.throwguardignore` files are honored, and the config's
/// `ignore_patterns` apply to paths below `root`.
fn walk_dir(root: &Path, config: &ThrowguardConfig, out: &mut Vec<PathBuf>) -> Result<(), String> {
    let patterns = config_ignores(root, &config.ignore_patterns)?;

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .add_custom_ignore_filename(IGNORE_FILE)
        .filter_entry(move |entry: &DirEntry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            entry.depth() == 0 || !patterns.matched(entry.path(), is_dir).is_ignore()
        })
        .build();

    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let is_tree = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(config.tree_suffix.as_str()));
        if !is_tree {
            continue;
        }
        tracing::debug!(path = %entry.path().display(), "found tree");
        out.push(entry.into_path());
    }
    Ok(())
}

/// Compile the configured patterns into a matcher rooted at the walk root.
fn config_ignores(root: &Path, patterns: &[String]) -> Result<Gitignore, String> {
    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|e| format!("invalid ignore pattern {:?}: {}", pattern, e))?;
    }
    builder
        .build()
        .map_err(|e| format!("invalid ignore patterns: {}", e))
}
