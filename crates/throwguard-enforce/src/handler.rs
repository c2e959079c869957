//! Enclosing-handler walk: is a checked call caught or re-declared?

use throwguard_core::tree::{NodeKind, SyntaxTree};
use throwguard_core::types::{NodeId, TreeError};

use crate::config::AnalyzerConfig;
use crate::types::HandledBy;

/// Walk outward from `call` looking for a handler of the checked exception.
///
/// Every try scope between the call and the nearest enclosing function is
/// consulted, innermost first; the first one with a catch clause naming the
/// checked exception wins, whichever nesting level it sits at. Closures are
/// walked through. The walk stops at the first function declaration, which
/// handles the call if its own throw list names the checked exception.
pub fn find_handler(
    tree: &SyntaxTree,
    call: NodeId,
    config: &AnalyzerConfig,
) -> Result<Option<HandledBy>, TreeError> {
    for step in tree.ancestors(call) {
        let (id, node) = step?;
        match &node.kind {
            NodeKind::Try(scope) => {
                let catches = scope
                    .catch_clauses
                    .iter()
                    .any(|clause| config.contains_checked(&clause.caught));
                if catches {
                    tracing::trace!(call = %call, scope = %id, "caught by enclosing try");
                    return Ok(Some(HandledBy::Catch { scope: id }));
                }
            }
            NodeKind::Function(function) => {
                if config.contains_checked(&function.throws) {
                    tracing::trace!(call = %call, function = %function.name, "declared by enclosing function");
                    return Ok(Some(HandledBy::Declaration { function: id }));
                }
                return Ok(None);
            }
            NodeKind::Call(_) | NodeKind::Lambda(_) | NodeKind::Other => {}
        }
    }
    Ok(None)
}

/// Convenience wrapper answering only yes or no.
pub fn is_handled(
    tree: &SyntaxTree,
    call: NodeId,
    config: &AnalyzerConfig,
) -> Result<bool, TreeError> {
    Ok(find_handler(tree, call, config)?.is_some())
}
