use std::path::PathBuf;

use throwguard_core::config::{ThrowguardConfig, CONFIG_DIR};
use throwguard_core::tree::SyntaxTree;
use throwguard_enforce::config::AnalyzerConfig;
use throwguard_enforce::engine::Analyzer;
use throwguard_output::OutputFormatter;

use super::inputs::collect_tree_files;

/// Run `throwguard analyze [paths..]`: load every tree and report
/// unhandled checked calls.
///
/// Exit codes: 0 clean, 1 unsuppressed violations, 2 when any input could
/// not be read or parsed (the remaining files are still analyzed).
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    paths: Vec<String>,
    suppress: Vec<String>,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("throwguard analyze: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = ThrowguardConfig::load(&cwd.join(CONFIG_DIR));

    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![cwd]
    } else {
        paths.iter().map(PathBuf::from).collect()
    };

    let files = match collect_tree_files(&roots, &config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("throwguard analyze: {}", e);
            return 2;
        }
    };

    if files.is_empty() {
        eprintln!(
            "throwguard analyze: no tree files found (looking for *{})",
            config.tree_suffix
        );
        return 2;
    }

    let mut trees = Vec::with_capacity(files.len());
    let mut load_failures = 0usize;
    for file in &files {
        match SyntaxTree::load(file) {
            Ok(tree) => trees.push(tree),
            Err(e) => {
                eprintln!("throwguard analyze: {}: {}", file.display(), e);
                load_failures += 1;
            }
        }
    }

    let mut analyzer = Analyzer::with_config(AnalyzerConfig::default(), &config);
    for id in &suppress {
        analyzer.suppress(id);
    }

    let result = analyzer.analyze(&trees);

    if verbose {
        let info = &result.info;
        eprintln!(
            "throwguard analyze: {} files, {} calls, {} checked ({} handled, {} exempt), {} unresolved, {} skipped",
            trees.len(),
            info.call_sites,
            info.checked_calls,
            info.handled,
            info.exempted,
            info.unresolved,
            info.skipped_malformed,
        );
    }

    let output = formatter.format_analyze(&result);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    exit_code(result.is_clean(), load_failures)
}

fn exit_code(clean: bool, load_failures: usize) -> i32 {
    if load_failures > 0 {
        2
    } else if !clean {
        1
    } else {
        0
    }
}
