use throwguard_core::config::ThrowguardConfig;
use throwguard_core::lines::LineIndex;
use throwguard_core::tree::SyntaxTree;
use throwguard_core::types::{NodeId, SourceLanguage};

use crate::config::AnalyzerConfig;
use crate::suppress::{SuppressionManager, SuppressionSource};
use crate::types::{AnalysisInfo, AnalysisResult, SiteOutcome, Violation};
use crate::violations::check_call_site;

/// Violations and counters for one tree.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub violations: Vec<Violation>,
    pub info: AnalysisInfo,
}

/// Runs the checked exception analysis over syntax trees.
///
/// Holds no state between call sites; the same analyzer can be reused for
/// any number of trees.
#[derive(Debug, Default)]
pub struct Analyzer {
    pub(crate) config: AnalyzerConfig,
    pub(crate) suppressions: SuppressionManager,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            suppressions: SuppressionManager::new(),
        }
    }

    /// Create an analyzer honoring the suppressions of a `ThrowguardConfig`.
    pub fn with_config(config: AnalyzerConfig, settings: &ThrowguardConfig) -> Self {
        let mut analyzer = Self::new(config);
        for id in &settings.suppress {
            analyzer.suppressions.suppress(id, SuppressionSource::Config);
        }
        analyzer
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Suppress an issue id for this analyzer.
    pub fn suppress(&mut self, issue_id: &str) {
        self.suppressions.suppress(issue_id, SuppressionSource::Cli);
    }

    /// Analyze one call site. `None` unless it is an unhandled checked call.
    ///
    /// `lines` comes from [`SyntaxTree::line_index`]; hosts checking many
    /// calls of one tree build it once. Without it the violation carries
    /// ranges but no line/column.
    pub fn analyze_call(
        &self,
        tree: &SyntaxTree,
        id: NodeId,
        lines: Option<&LineIndex>,
    ) -> Option<Violation> {
        if tree.language != SourceLanguage::Kotlin {
            return None;
        }
        match check_call_site(tree, id, &self.config, lines) {
            SiteOutcome::Violation(v) => Some(self.suppressions.apply(*v)),
            _ => None,
        }
    }

    /// Analyze every call in a tree, in arena order.
    pub fn analyze_tree(&self, tree: &SyntaxTree) -> FileReport {
        let mut report = FileReport::default();
        if tree.language != SourceLanguage::Kotlin {
            tracing::debug!(file = %tree.file, language = %tree.language, "not a Kotlin tree, skipping");
            report.info.skipped_files = 1;
            return report;
        }

        let lines = tree.line_index();
        for (id, _) in tree.call_sites() {
            report.info.call_sites += 1;
            match check_call_site(tree, id, &self.config, lines.as_ref()) {
                SiteOutcome::Unresolved => report.info.unresolved += 1,
                SiteOutcome::Unchecked => {}
                SiteOutcome::Handled(_) => {
                    report.info.checked_calls += 1;
                    report.info.handled += 1;
                }
                SiteOutcome::Exempt(_) => {
                    report.info.checked_calls += 1;
                    report.info.exempted += 1;
                }
                SiteOutcome::Skipped => report.info.skipped_malformed += 1,
                SiteOutcome::Violation(v) => {
                    report.info.checked_calls += 1;
                    report.violations.push(self.suppressions.apply(*v));
                }
            }
        }
        tracing::debug!(
            file = %tree.file,
            calls = report.info.call_sites,
            violations = report.violations.len(),
            "analyzed tree"
        );
        report
    }

    /// Analyze a set of trees and aggregate the results.
    pub fn analyze(&self, trees: &[SyntaxTree]) -> AnalysisResult {
        let mut violations = Vec::new();
        let mut info = AnalysisInfo::default();
        for tree in trees {
            let report = self.analyze_tree(tree);
            info.merge(&report.info);
            violations.extend(report.violations);
        }

        let status = if violations.iter().any(|v| !v.suppressed) {
            "error"
        } else {
            "ok"
        };

        AnalysisResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "analyze".to_string(),
            status: status.to_string(),
            files_analyzed: trees.iter().map(|t| t.file.clone()).collect(),
            violations,
            info,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
