//! Closure exemptions for checked calls made inside function literals.
//!
//! Only the innermost enclosing closure is examined, and the search never
//! crosses a named function declaration.

use throwguard_core::tree::{Declaration, LambdaExpr, NodeKind, SyntaxTree};
use throwguard_core::types::{NodeId, TreeError};

use crate::config::AnalyzerConfig;
use crate::resolve::resolve;
use crate::types::Exemption;

/// Check whether the closure around `call` exempts it.
///
/// Exempt when either the closure's functional interface has a single
/// abstract member declaring the checked exception, or the higher-order
/// function the closure is passed to carries the safe marker.
pub fn find_exemption(
    tree: &SyntaxTree,
    call: NodeId,
    config: &AnalyzerConfig,
) -> Result<Option<Exemption>, TreeError> {
    let Some((lambda_id, lambda)) = enclosing_lambda(tree, call)? else {
        return Ok(None);
    };

    if let Some(member) = contract_member(tree, lambda_id, lambda) {
        if config.contains_checked(&member.throws) {
            tracing::trace!(call = %call, lambda = %lambda_id, "closure contract declares throws");
            return Ok(Some(Exemption::ThrowingContract { lambda: lambda_id }));
        }
    }

    let lambda_node = tree.node(lambda_id)?;
    let Some(receiver_id) = lambda_node.parent else {
        return Ok(None);
    };
    let NodeKind::Call(receiver) = &tree.node(receiver_id)?.kind else {
        return Ok(None);
    };
    let marked = resolve(tree, receiver)
        .map(|decl| decl.has_annotation(&config.safe_marker))
        .unwrap_or(false);
    if marked {
        tracing::trace!(call = %call, receiver = %receiver.name, "closure passed to safe function");
        return Ok(Some(Exemption::SafeMarker {
            lambda: lambda_id,
            receiver: receiver_id,
        }));
    }
    Ok(None)
}

/// Convenience wrapper answering only yes or no.
pub fn is_safe_via_closure(
    tree: &SyntaxTree,
    call: NodeId,
    config: &AnalyzerConfig,
) -> Result<bool, TreeError> {
    Ok(find_exemption(tree, call, config)?.is_some())
}

/// The nearest strict closure ancestor, unless a function declaration comes first.
fn enclosing_lambda(
    tree: &SyntaxTree,
    call: NodeId,
) -> Result<Option<(NodeId, &LambdaExpr)>, TreeError> {
    for step in tree.ancestors(call) {
        let (id, node) = step?;
        match &node.kind {
            NodeKind::Lambda(lambda) => return Ok(Some((id, lambda))),
            NodeKind::Function(_) => return Ok(None),
            NodeKind::Call(_) | NodeKind::Try(_) | NodeKind::Other => {}
        }
    }
    Ok(None)
}

/// The single abstract member of the closure's functional interface.
///
/// Returns `None` when the interface is unknown or does not have exactly one
/// abstract member; the marker check still runs in that case.
fn contract_member<'a>(
    tree: &'a SyntaxTree,
    lambda_id: NodeId,
    lambda: &LambdaExpr,
) -> Option<&'a Declaration> {
    let type_id = lambda.functional_interface?;
    let Some(ty) = tree.type_decl(type_id) else {
        tracing::debug!(lambda = %lambda_id, "functional interface type not in table");
        return None;
    };
    let mut abstract_members = ty
        .methods
        .iter()
        .filter_map(|m| tree.declaration(*m))
        .filter(|d| d.is_abstract);
    let member = abstract_members.next();
    if member.is_none() || abstract_members.next().is_some() {
        tracing::debug!(
            lambda = %lambda_id,
            interface = %ty.qualified_name,
            "interface is not a single-abstract-member type"
        );
        return None;
    }
    member
}
