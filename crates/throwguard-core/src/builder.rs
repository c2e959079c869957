use crate::tree::{
    CallExpr, CatchClause, Declaration, FunctionDecl, LambdaExpr, Node, NodeKind, SyntaxTree,
    TryScope, TypeDecl,
};
use crate::types::{DeclId, NodeId, SourceLanguage, TextRange, TypeId};

/// Spacing between synthetic node ranges handed out by the builder.
const SYNTHETIC_STRIDE: u32 = 100;

/// Incremental builder for [`SyntaxTree`] arenas.
///
/// Hosts that already have an AST can fill a `SyntaxTree` directly; this
/// builder exists for adapters and tests that assemble trees node by node.
/// Nodes added without an explicit range get a synthetic, non-overlapping one.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: SyntaxTree,
    cursor: u32,
}

impl TreeBuilder {
    pub fn new(file: impl Into<String>, language: SourceLanguage) -> Self {
        Self {
            tree: SyntaxTree::new(file, language),
            cursor: 0,
        }
    }

    pub fn source(&mut self, text: impl Into<String>) -> &mut Self {
        self.tree.source = Some(text.into());
        self
    }

    /// Add a resolved member declaration.
    pub fn declaration(&mut self, qualified_name: &str, throws: &[&str]) -> DeclId {
        self.push_declaration(qualified_name, throws, &[], false)
    }

    /// Add a declaration carrying annotations (e.g. a safe marker).
    pub fn annotated_declaration(
        &mut self,
        qualified_name: &str,
        throws: &[&str],
        annotations: &[&str],
    ) -> DeclId {
        self.push_declaration(qualified_name, throws, annotations, false)
    }

    /// Add an abstract member, as found on functional interfaces.
    pub fn abstract_member(&mut self, qualified_name: &str, throws: &[&str]) -> DeclId {
        self.push_declaration(qualified_name, throws, &[], true)
    }

    /// Add a type declaration owning the given members.
    pub fn interface(&mut self, qualified_name: &str, methods: &[DeclId]) -> TypeId {
        let id = TypeId(self.tree.types.len() as u32);
        self.tree.types.push(TypeDecl {
            qualified_name: qualified_name.to_string(),
            methods: methods.to_vec(),
        });
        id
    }

    pub fn function(&mut self, parent: Option<NodeId>, name: &str, throws: &[&str]) -> NodeId {
        let kind = NodeKind::Function(FunctionDecl {
            name: name.to_string(),
            throws: to_owned(throws),
        });
        let range = self.next_range();
        self.push_node(parent, range, kind)
    }

    /// Add a try scope. Each entry of `catches` is one catch clause listing
    /// the qualified names it catches.
    pub fn try_scope(&mut self, parent: NodeId, catches: &[&[&str]]) -> NodeId {
        let catch_clauses = catches
            .iter()
            .map(|types| CatchClause {
                caught: to_owned(types),
            })
            .collect();
        let range = self.next_range();
        self.push_node(Some(parent), range, NodeKind::Try(TryScope { catch_clauses }))
    }

    pub fn lambda(&mut self, parent: NodeId, functional_interface: Option<TypeId>) -> NodeId {
        let range = self.next_range();
        self.push_node(
            Some(parent),
            range,
            NodeKind::Lambda(LambdaExpr {
                functional_interface,
            }),
        )
    }

    /// Add a plain node the analysis only walks through (block, statement).
    pub fn block(&mut self, parent: NodeId) -> NodeId {
        let range = self.next_range();
        self.push_node(Some(parent), range, NodeKind::Other)
    }

    /// Add a call with synthetic ranges: the callee covers the name and the
    /// statement extends past it to include arguments.
    pub fn call(&mut self, parent: NodeId, name: &str, target: Option<DeclId>) -> NodeId {
        let range = self.next_range();
        let callee = TextRange::new(range.start, range.start + name.len() as u32);
        self.call_at(parent, name, target, callee, range)
    }

    pub fn call_at(
        &mut self,
        parent: NodeId,
        name: &str,
        target: Option<DeclId>,
        callee_range: TextRange,
        statement_range: TextRange,
    ) -> NodeId {
        let kind = NodeKind::Call(CallExpr {
            name: name.to_string(),
            target,
            callee_range,
            statement_range,
        });
        self.push_node(Some(parent), statement_range, kind)
    }

    pub fn build(self) -> SyntaxTree {
        self.tree
    }

    fn push_declaration(
        &mut self,
        qualified_name: &str,
        throws: &[&str],
        annotations: &[&str],
        is_abstract: bool,
    ) -> DeclId {
        let id = DeclId(self.tree.declarations.len() as u32);
        self.tree.declarations.push(Declaration {
            qualified_name: qualified_name.to_string(),
            throws: to_owned(throws),
            annotations: to_owned(annotations),
            is_abstract,
        });
        id
    }

    fn push_node(&mut self, parent: Option<NodeId>, range: TextRange, kind: NodeKind) -> NodeId {
        let id = NodeId(self.tree.nodes.len() as u32);
        self.tree.nodes.push(Node {
            parent,
            range,
            kind,
        });
        id
    }

    fn next_range(&mut self) -> TextRange {
        let start = self.cursor;
        self.cursor += SYNTHETIC_STRIDE;
        TextRange::new(start, start + SYNTHETIC_STRIDE / 2)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
