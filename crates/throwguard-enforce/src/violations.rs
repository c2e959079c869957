use throwguard_core::hash::compute_fingerprint;
use throwguard_core::lines::LineIndex;
use throwguard_core::tree::{CallExpr, NodeKind, SyntaxTree};
use throwguard_core::types::{NodeId, TextRange};

use crate::closure::find_exemption;
use crate::config::AnalyzerConfig;
use crate::fix::{LintFix, ReplaceFix, ReplaceOptions, ReplaceTarget};
use crate::handler::find_handler;
use crate::registry::CHECKED_EXCEPTION_NOT_CAUGHT;
use crate::resolve::{is_checked, resolve};
use crate::types::{SiteOutcome, Violation};

pub const MESSAGE: &str = "Must catch `CheckedException` or declare throws";

/// Decide a single call site.
///
/// Resolution runs first and prunes everything that does not throw the
/// checked exception; the handler walk and the closure check only run for
/// checked calls. Tree errors around the call are absorbed as `Skipped`.
pub fn check_call_site(
    tree: &SyntaxTree,
    id: NodeId,
    config: &AnalyzerConfig,
    lines: Option<&LineIndex>,
) -> SiteOutcome {
    let call = match tree.node(id) {
        Ok(node) => match &node.kind {
            NodeKind::Call(call) => call,
            _ => return SiteOutcome::Unchecked,
        },
        Err(e) => {
            tracing::debug!(file = %tree.file, node = %id, error = %e, "skipping call site");
            return SiteOutcome::Skipped;
        }
    };

    let Some(decl) = resolve(tree, call) else {
        return SiteOutcome::Unresolved;
    };
    if !is_checked(decl, config) {
        return SiteOutcome::Unchecked;
    }

    match find_handler(tree, id, config) {
        Ok(Some(handled)) => return SiteOutcome::Handled(handled),
        Ok(None) => {}
        Err(e) => {
            tracing::debug!(file = %tree.file, callee = %call.name, error = %e, "skipping call site");
            return SiteOutcome::Skipped;
        }
    }
    match find_exemption(tree, id, config) {
        Ok(Some(exemption)) => return SiteOutcome::Exempt(exemption),
        Ok(None) => {}
        Err(e) => {
            tracing::debug!(file = %tree.file, callee = %call.name, error = %e, "skipping call site");
            return SiteOutcome::Skipped;
        }
    }

    SiteOutcome::Violation(Box::new(build_violation(tree, call, config, lines)))
}

/// The violation for an unhandled checked call.
pub fn build_violation(
    tree: &SyntaxTree,
    call: &CallExpr,
    config: &AnalyzerConfig,
    lines: Option<&LineIndex>,
) -> Violation {
    let issue = &CHECKED_EXCEPTION_NOT_CAUGHT;
    let (line, column) = match lines {
        Some(index) => {
            let (l, c) = index.line_col(call.callee_range.start);
            (Some(l), Some(c))
        }
        None => (None, None),
    };
    Violation {
        issue_id: issue.id.to_string(),
        severity: issue.severity,
        category: issue.category,
        message: MESSAGE.to_string(),
        file: tree.file.clone(),
        line,
        column,
        callee: call.name.clone(),
        problem_range: call.callee_range,
        statement_range: call.statement_range,
        fingerprint: compute_fingerprint(issue.id, &tree.file, &call.name, call.statement_range),
        suppressed: false,
        suppress_hint: None,
        fix: checked_exception_fixes(call.statement_range, config),
    }
}

/// The two alternative fixes for an unhandled call: surround the statement
/// with try/catch, or pass it to the safe-call helper as a closure.
pub fn checked_exception_fixes(statement: TextRange, config: &AnalyzerConfig) -> LintFix {
    let catch_clause = format!("}} catch(e: {}){{kotlin.TODO()}}", config.checked_exception);
    let helper_name = format!("Surround with {}()", config.safe_call_helper);
    let helper_open = format!("{} {{", config.safe_call_helper);

    LintFix::alternatives(|alts| {
        alts.composite("Surround with try/catch", |group| {
            group
                .replace(
                    ReplaceFix::new(ReplaceTarget::Beginning)
                        .with("try {")
                        .range(statement)
                        .options(ReplaceOptions::auto_fix()),
                )
                .replace(
                    ReplaceFix::new(ReplaceTarget::End)
                        .with(catch_clause)
                        .range(statement)
                        .options(ReplaceOptions::auto_fix().reformat().shorten_names()),
                );
        });
        alts.composite(&helper_name, |group| {
            group
                .replace(
                    ReplaceFix::new(ReplaceTarget::Beginning)
                        .with(helper_open)
                        .range(statement)
                        .options(ReplaceOptions::auto_fix()),
                )
                .replace(
                    ReplaceFix::new(ReplaceTarget::End)
                        .with("}")
                        .range(statement)
                        .options(ReplaceOptions::auto_fix().reformat().shorten_names()),
                );
        });
    })
}
