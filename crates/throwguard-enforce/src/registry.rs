//! The issues this analyzer can report.
//!
//! A fixed table built at compile time; hosts iterate it read-only to
//! register the analyzer.

use serde::Serialize;

use crate::types::{Category, Severity};

/// Version of the registry contract exposed to hosts.
pub const REGISTRY_API: u32 = 1;

/// What a host scans to run the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// One source file at a time.
    SourceFile,
}

/// Static description of a reportable issue.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub id: &'static str,
    pub brief_description: &'static str,
    pub explanation: &'static str,
    pub category: Category,
    /// 1 (lowest) to 10 (highest).
    pub priority: u8,
    pub severity: Severity,
    pub scope: Scope,
}

pub static CHECKED_EXCEPTION_NOT_CAUGHT: Issue = Issue {
    id: "CheckedExceptionNotCaught",
    brief_description: "Code must catch `CheckedException` or declare that it throws",
    explanation: "Kotlin does not support checked Exceptions, so we should not rely on \
                  Exceptions to propagate errors in our application.\n\
                  More details in: https://kotlinlang.org/docs/reference/exceptions.html",
    category: Category::Correctness,
    priority: 9,
    severity: Severity::Error,
    scope: Scope::SourceFile,
};

static ISSUES: [&Issue; 1] = [&CHECKED_EXCEPTION_NOT_CAUGHT];

/// Every issue the analyzer reports.
pub fn issues() -> &'static [&'static Issue] {
    &ISSUES
}

/// Look up an issue by id (case-sensitive).
pub fn find(id: &str) -> Option<&'static Issue> {
    ISSUES.iter().copied().find(|issue| issue.id == id)
}
