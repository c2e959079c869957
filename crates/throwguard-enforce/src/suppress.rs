use std::collections::HashSet;

use crate::types::{Severity, Violation};

/// Where a suppression came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionSource {
    Config,
    Cli,
}

impl SuppressionSource {
    fn describe(&self) -> &'static str {
        match self {
            SuppressionSource::Config => "throwguard.json",
            SuppressionSource::Cli => "--suppress flag",
        }
    }
}

/// Manages suppressed issue ids.
///
/// When an issue is suppressed, its violations are:
/// - Changed to severity `Info` and marked suppressed=true
/// - Given a suppress_hint explaining the suppression
///
/// Suppressed violations stay in the result but do not fail the run.
#[derive(Debug, Default)]
pub struct SuppressionManager {
    suppressed: HashSet<String>,
    sources: Vec<(String, SuppressionSource)>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress an issue id (e.g. "CheckedExceptionNotCaught").
    pub fn suppress(&mut self, issue_id: &str, source: SuppressionSource) {
        if self.suppressed.insert(issue_id.to_string()) {
            self.sources.push((issue_id.to_string(), source));
        }
    }

    pub fn is_suppressed(&self, issue_id: &str) -> bool {
        self.suppressed.contains(issue_id)
    }

    /// Apply suppression to a violation, returning the modified violation.
    /// If the issue is not suppressed, returns the violation unchanged.
    pub fn apply(&self, mut violation: Violation) -> Violation {
        if let Some((_, source)) = self.sources.iter().find(|(id, _)| *id == violation.issue_id) {
            violation.suppress_hint = Some(format!(
                "Suppressed {} via {}",
                violation.issue_id,
                source.describe()
            ));
            violation.suppressed = true;
            violation.severity = Severity::Info;
        }
        violation
    }

    pub fn count(&self) -> usize {
        self.suppressed.len()
    }
}
