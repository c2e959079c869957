use serde::{Deserialize, Serialize};
use throwguard_core::types::{NodeId, TextRange};

use crate::fix::LintFix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Correctness,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Correctness => "correctness",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unhandled call to a member that throws the checked exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub issue_id: String,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub file: String,
    /// 1-based, present when the tree carried source text.
    pub line: Option<u32>,
    pub column: Option<u32>,
    /// Callee name as written at the call site.
    pub callee: String,
    /// Highlighted range: the callee only.
    pub problem_range: TextRange,
    /// Range the fixes wrap: receiver and arguments included.
    pub statement_range: TextRange,
    pub fingerprint: String,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
    pub fix: LintFix,
}

/// Why a checked call counts as handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HandledBy {
    /// A catch clause of this try scope names the checked exception.
    Catch { scope: NodeId },
    /// The enclosing function declares it throws the checked exception.
    Declaration { function: NodeId },
}

/// Why a checked call inside a closure is exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exemption {
    /// The closure's functional interface member declares the exception.
    ThrowingContract { lambda: NodeId },
    /// The function receiving the closure carries the safe marker.
    SafeMarker { lambda: NodeId, receiver: NodeId },
}

/// Verdict for a single call site.
#[derive(Debug, Clone)]
pub enum SiteOutcome {
    /// The callee could not be resolved.
    Unresolved,
    /// The callee does not declare the checked exception.
    Unchecked,
    Handled(HandledBy),
    Exempt(Exemption),
    /// The tree around the call could not be walked.
    Skipped,
    Violation(Box<Violation>),
}

/// Counters describing one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInfo {
    pub call_sites: u32,
    pub checked_calls: u32,
    pub handled: u32,
    pub exempted: u32,
    pub unresolved: u32,
    pub skipped_malformed: u32,
    /// Trees skipped entirely (non-Kotlin sources).
    pub skipped_files: u32,
}

impl AnalysisInfo {
    pub fn merge(&mut self, other: &AnalysisInfo) {
        self.call_sites += other.call_sites;
        self.checked_calls += other.checked_calls;
        self.handled += other.handled;
        self.exempted += other.exempted;
        self.unresolved += other.unresolved;
        self.skipped_malformed += other.skipped_malformed;
        self.skipped_files += other.skipped_files;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error"
    pub files_analyzed: Vec<String>,
    pub violations: Vec<Violation>,
    pub info: AnalysisInfo,
}

impl AnalysisResult {
    /// Violations that were not suppressed.
    pub fn active(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.suppressed)
    }

    pub fn is_clean(&self) -> bool {
        self.active().next().is_none()
    }
}
