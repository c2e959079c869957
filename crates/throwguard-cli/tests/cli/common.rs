use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use throwguard_core::builder::TreeBuilder;
use throwguard_core::tree::SyntaxTree;
use throwguard_core::types::{SourceLanguage, TextRange};

pub const CHECKED: &str = "com.keyboardr.kotlinexceptiontest.CheckedException";

pub fn throwguard_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_throwguard"))
}

/// Run the binary in `dir` with a clean logging environment.
pub fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(throwguard_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("THROWGUARD_LOG")
        .output()
        .expect("failed to run throwguard")
}

pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// A fresh project directory. Hold the TempDir to keep it alive.
pub fn project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(&root).unwrap();
    (dir, root)
}

/// `fun f() {\n    doThingThrowingException()\n}`, optionally inside a try.
pub fn kotlin_tree(file: &str, caught: bool) -> SyntaxTree {
    let mut b = TreeBuilder::new(file, SourceLanguage::Kotlin);
    b.source("fun f() {\n    doThingThrowingException()\n}\n");
    let throwing = b.declaration(
        "com.keyboardr.kotlinexceptiontest.JavaFunctions.doThingThrowingException",
        &[CHECKED],
    );
    let f = b.function(None, "f", &[]);
    let parent = if caught {
        b.try_scope(f, &[&[CHECKED]])
    } else {
        f
    };
    b.call_at(
        parent,
        "doThingThrowingException",
        Some(throwing),
        TextRange::new(14, 38),
        TextRange::new(14, 40),
    );
    b.build()
}

pub fn write_tree(root: &Path, rel: &str, tree: &SyntaxTree) -> PathBuf {
    write_file(root, rel, &serde_json::to_string(tree).unwrap())
}

pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
