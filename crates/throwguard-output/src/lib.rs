//! Output formatters for throwguard results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output, fixes included
//! - **Human** (default): Compiler-style diagnostics for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use throwguard_enforce::registry::Issue;
use throwguard_enforce::types::AnalysisResult;

pub trait OutputFormatter {
    fn format_analyze(&self, result: &AnalysisResult) -> String;
    fn format_issues(&self, issues: &[&Issue]) -> String;
    fn format_explain(&self, issue: &Issue) -> String;
}
