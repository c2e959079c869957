// Tests for trees arriving as JSON from a host.
use throwguard_core::tree::SyntaxTree;
use throwguard_core::types::{SourceLanguage, TreeError};

use super::common::{analyzer, write_tree, Project};

const HAND_WRITTEN: &str = r#"{
  "file": "src/Main.kt",
  "language": "kotlin",
  "source": "fun main() {\n    JavaFunctions.doThingThrowingException()\n}\n",
  "declarations": [
    {
      "qualified_name": "com.keyboardr.kotlinexceptiontest.JavaFunctions.doThingThrowingException",
      "throws": ["com.keyboardr.kotlinexceptiontest.CheckedException"]
    }
  ],
  "nodes": [
    { "range": { "start": 0, "end": 58 }, "kind": { "type": "function", "name": "main", "throws": [] } },
    { "parent": 0, "range": { "start": 17, "end": 56 }, "kind": { "type": "other" } },
    {
      "parent": 1,
      "range": { "start": 17, "end": 56 },
      "kind": {
        "type": "call",
        "name": "doThingThrowingException",
        "target": 0,
        "callee_range": { "start": 31, "end": 55 },
        "statement_range": { "start": 17, "end": 56 }
      }
    }
  ]
}"#;

#[test]
fn test_hand_written_tree_reports_with_location() {
    let tree = SyntaxTree::from_json(HAND_WRITTEN).unwrap();
    let report = analyzer().analyze_tree(&tree);

    assert_eq!(report.violations.len(), 1);
    let v = &report.violations[0];
    assert_eq!(v.file, "src/Main.kt");
    assert_eq!(v.line, Some(2));
    assert_eq!(v.column, Some(19));
    assert_eq!(v.problem_range.start, 31);
    assert_eq!(v.statement_range.end, 56);
}

#[test]
fn test_tree_survives_disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = Project::new("src/Disk.kt");
    let f = p.b.function(None, "disk", &[]);
    let (safe, checked) = (p.call_safely, Some(p.checked_block));
    let l = p.closure_arg(f, "callSafely", safe, checked);
    p.b.call(l, "doThingThrowingException", Some(p.throwing));
    p.b.call(f, "doThingThrowingException", Some(p.throwing));
    let built = p.build();

    let path = write_tree(dir.path(), "trees/Disk.kt.tree.json", &built);
    let loaded = SyntaxTree::load(&path).unwrap();

    let a = analyzer();
    let expected = a.analyze_tree(&built);
    let actual = a.analyze_tree(&loaded);
    assert_eq!(actual.violations.len(), 1);
    assert_eq!(actual.info, expected.info);
    assert_eq!(actual.violations[0].fingerprint, expected.violations[0].fingerprint);
}

#[test]
fn test_dangling_parent_rejected_at_load() {
    let json = HAND_WRITTEN.replace(r#""parent": 1,"#, r#""parent": 7,"#);
    let err = SyntaxTree::from_json(&json).unwrap_err();
    assert!(matches!(err, TreeError::InvalidHandle { kind: "node", index: 7, .. }));
}

#[test]
fn test_dangling_target_rejected_at_load() {
    let json = HAND_WRITTEN.replace(r#""target": 0,"#, r#""target": 3,"#);
    let err = SyntaxTree::from_json(&json).unwrap_err();
    assert!(matches!(err, TreeError::InvalidHandle { kind: "declaration", .. }));
}

#[test]
fn test_parent_cycle_rejected_at_load() {
    let json = HAND_WRITTEN.replace(
        r#"{ "range": { "start": 0, "end": 58 }"#,
        r#"{ "parent": 2, "range": { "start": 0, "end": 58 }"#,
    );
    let err = SyntaxTree::from_json(&json).unwrap_err();
    assert!(matches!(err, TreeError::Malformed { .. }));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = SyntaxTree::from_json("{ not json").unwrap_err();
    assert!(matches!(err, TreeError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SyntaxTree::load(&dir.path().join("absent.tree.json")).unwrap_err();
    assert!(matches!(err, TreeError::Io(_)));
}

#[test]
fn test_unknown_language_is_skipped() {
    let json = HAND_WRITTEN.replace(r#""language": "kotlin""#, r#""language": "scala""#);
    let tree = SyntaxTree::from_json(&json).unwrap();
    assert_eq!(tree.language, SourceLanguage::Other);

    let report = analyzer().analyze_tree(&tree);
    assert!(report.violations.is_empty());
    assert_eq!(report.info.skipped_files, 1);
    assert_eq!(report.info.call_sites, 0);
}

#[test]
fn test_java_tree_is_skipped() {
    let json = HAND_WRITTEN.replace(r#""language": "kotlin""#, r#""language": "java""#);
    let tree = SyntaxTree::from_json(&json).unwrap();
    assert!(analyzer().analyze_tree(&tree).violations.is_empty());
}
