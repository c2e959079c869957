use serde::Serialize;
use throwguard_enforce::registry::{Issue, REGISTRY_API};
use throwguard_enforce::types::AnalysisResult;

use crate::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct IssueList<'a> {
    api: u32,
    issues: &'a [&'a Issue],
}

impl OutputFormatter for JsonFormatter {
    fn format_analyze(&self, result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_issues(&self, issues: &[&Issue]) -> String {
        let list = IssueList {
            api: REGISTRY_API,
            issues,
        };
        serde_json::to_string_pretty(&list).unwrap_or_default()
    }

    fn format_explain(&self, issue: &Issue) -> String {
        serde_json::to_string_pretty(issue).unwrap_or_default()
    }
}
