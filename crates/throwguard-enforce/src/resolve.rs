use throwguard_core::tree::{CallExpr, Declaration, SyntaxTree};

use crate::config::AnalyzerConfig;

/// The declaration a call resolves to, or `None` if the host left it
/// unresolved. Pure lookup into the tree's symbol table.
pub fn resolve<'a>(tree: &'a SyntaxTree, call: &CallExpr) -> Option<&'a Declaration> {
    let target = match call.target {
        Some(t) => t,
        None => {
            tracing::debug!(file = %tree.file, callee = %call.name, "unresolved call, skipping");
            return None;
        }
    };
    let decl = tree.declaration(target);
    if decl.is_none() {
        tracing::debug!(
            file = %tree.file,
            callee = %call.name,
            target = target.0,
            "call target missing from declaration table, skipping"
        );
    }
    decl
}

/// Whether the declaration's throw list names the checked exception.
pub fn is_checked(decl: &Declaration, config: &AnalyzerConfig) -> bool {
    decl.declares_throw(&config.checked_exception)
}
