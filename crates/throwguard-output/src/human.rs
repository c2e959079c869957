use throwguard_enforce::registry::Issue;
use throwguard_enforce::types::AnalysisResult;

use crate::human_helpers::format_violation_human;
use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_analyze(&self, result: &AnalysisResult) -> String {
        if result.violations.is_empty() {
            return String::new(); // Clean run = empty stdout
        }

        let mut out = String::new();
        for v in &result.violations {
            out.push_str(&format_violation_human(v));
        }

        let suppressed = result.violations.iter().filter(|v| v.suppressed).count();
        out.push_str(&format!(
            "\n{} error(s), {} suppressed in {} file(s)\n",
            result.violations.len() - suppressed,
            suppressed,
            result.files_analyzed.len(),
        ));
        out
    }

    fn format_issues(&self, issues: &[&Issue]) -> String {
        let mut out = String::new();
        for issue in issues {
            out.push_str(&format!(
                "{:<28} {:<8} {:<12} p{}  {}\n",
                issue.id,
                issue.severity.as_str(),
                issue.category.as_str(),
                issue.priority,
                issue.brief_description,
            ));
        }
        out
    }

    fn format_explain(&self, issue: &Issue) -> String {
        format!(
            "{}: {}\n  severity: {}\n  category: {}\n  priority: {}\n\n{}\n",
            issue.id,
            issue.brief_description,
            issue.severity,
            issue.category,
            issue.priority,
            issue.explanation,
        )
    }
}
