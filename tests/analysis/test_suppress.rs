// Tests for suppressing the issue from config and from the command line.
use std::fs;

use throwguard_core::config::{ThrowguardConfig, CONFIG_DIR, CONFIG_FILE};
use throwguard_core::tree::SyntaxTree;
use throwguard_enforce::config::AnalyzerConfig;
use throwguard_enforce::engine::Analyzer;
use throwguard_enforce::types::Severity;

use super::common::{analyzer, Project};

fn two_violations() -> SyntaxTree {
    let mut p = Project::new("Suppressed.kt");
    let f = p.b.function(None, "noisy", &[]);
    p.b.call(f, "doThingThrowingException", Some(p.throwing));
    p.b.call(f, "doThingThatReturnsThrowing", Some(p.returns_throwing));
    p.build()
}

#[test]
fn test_unsuppressed_run_is_an_error() {
    let result = analyzer().analyze(&[two_violations()]);
    assert_eq!(result.status, "error");
    assert_eq!(result.active().count(), 2);
    assert!(!result.is_clean());
}

#[test]
fn test_cli_suppression_downgrades_to_info() {
    let mut a = analyzer();
    a.suppress("CheckedExceptionNotCaught");
    let result = a.analyze(&[two_violations()]);

    assert_eq!(result.status, "ok");
    assert!(result.is_clean());
    assert_eq!(result.violations.len(), 2);
    for v in &result.violations {
        assert!(v.suppressed);
        assert_eq!(v.severity, Severity::Info);
        assert_eq!(
            v.suppress_hint.as_deref(),
            Some("Suppressed CheckedExceptionNotCaught via --suppress flag")
        );
    }
}

#[test]
fn test_config_file_suppression() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join(CONFIG_DIR);
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join(CONFIG_FILE),
        r#"{ "suppress": ["CheckedExceptionNotCaught"] }"#,
    )
    .unwrap();

    let settings = ThrowguardConfig::load(&config_dir);
    let a = Analyzer::with_config(AnalyzerConfig::default(), &settings);
    let result = a.analyze(&[two_violations()]);

    assert_eq!(result.status, "ok");
    assert!(result.violations.iter().all(|v| v
        .suppress_hint
        .as_deref()
        .is_some_and(|h| h.ends_with("via throwguard.json"))));
}

#[test]
fn test_suppressing_unknown_id_changes_nothing() {
    let mut a = analyzer();
    a.suppress("SomethingElse");
    let result = a.analyze(&[two_violations()]);
    assert_eq!(result.status, "error");
    assert!(result.violations.iter().all(|v| !v.suppressed));
}

#[test]
fn test_results_aggregate_across_files() {
    let mut clean = Project::new("Clean.kt");
    let f = clean.b.function(None, "quiet", &[]);
    clean.b.call(f, "println", Some(clean.println));

    let result = analyzer().analyze(&[two_violations(), clean.build()]);
    assert_eq!(result.command, "analyze");
    assert_eq!(result.files_analyzed, vec!["Suppressed.kt", "Clean.kt"]);
    assert_eq!(result.violations.len(), 2);
    assert_eq!(result.info.call_sites, 3);
}
