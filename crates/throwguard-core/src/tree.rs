//! Arena-backed syntax tree supplied by the host.
//!
//! Nodes refer to their lexical parent by [`NodeId`] instead of holding
//! pointers, so ancestor walks are bounded index-chasing loops. Calls carry
//! their already-resolved target as a [`DeclId`]; closures carry their
//! functional interface as a [`TypeId`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::lines::LineIndex;
use crate::types::{DeclId, NodeId, SourceLanguage, TextRange, TreeError, TypeId};

/// Upper bound on ancestor chain length. Anything deeper is treated as a
/// malformed tree (most likely a parent cycle).
pub const MAX_ANCESTOR_DEPTH: usize = 4096;

/// A single compilation unit handed over by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxTree {
    pub file: String,
    pub language: SourceLanguage,
    /// Full source text, if the host provides it. Used only for line/column
    /// reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub parent: Option<NodeId>,
    pub range: TextRange,
    pub kind: NodeKind,
}

/// The node shapes the analysis distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Call(CallExpr),
    Try(TryScope),
    Function(FunctionDecl),
    Lambda(LambdaExpr),
    Other,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Call(_) => "call",
            NodeKind::Try(_) => "try",
            NodeKind::Function(_) => "function",
            NodeKind::Lambda(_) => "lambda",
            NodeKind::Other => "other",
        }
    }
}

/// A call expression with its resolved target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallExpr {
    /// Callee name as written.
    pub name: String,
    /// `None` when the host could not resolve the callee.
    #[serde(default)]
    pub target: Option<DeclId>,
    /// Range of the callee identifier only.
    pub callee_range: TextRange,
    /// Range of the call including receiver and arguments.
    pub statement_range: TextRange,
}

/// A try-like construct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TryScope {
    #[serde(default)]
    pub catch_clauses: Vec<CatchClause>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatchClause {
    /// Qualified names of the caught types. Multi-catch clauses list several.
    #[serde(default)]
    pub caught: Vec<String>,
}

/// A named function or method declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub throws: Vec<String>,
}

/// A function literal passed as a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LambdaExpr {
    /// The functional interface type the literal converts to, if known.
    #[serde(default)]
    pub functional_interface: Option<TypeId>,
}

/// A resolved member declaration, possibly from another compilation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub qualified_name: String,
    #[serde(default)]
    pub throws: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub is_abstract: bool,
}

impl Declaration {
    pub fn declares_throw(&self, fqn: &str) -> bool {
        self.throws.iter().any(|t| t == fqn)
    }

    pub fn has_annotation(&self, fqn: &str) -> bool {
        self.annotations.iter().any(|a| a == fqn)
    }
}

/// A class or interface with its member declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub qualified_name: String,
    #[serde(default)]
    pub methods: Vec<DeclId>,
}

impl SyntaxTree {
    pub fn new(file: impl Into<String>, language: SourceLanguage) -> Self {
        Self {
            file: file.into(),
            language,
            source: None,
            nodes: Vec::new(),
            declarations: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Parse a tree from JSON and validate every handle in it.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let tree: SyntaxTree = serde_json::from_str(json)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Read and validate a tree stored as JSON on disk.
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.index()).ok_or(TreeError::InvalidHandle {
            kind: "node",
            index: id.0,
            len: self.nodes.len(),
        })
    }

    pub fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.index())
    }

    pub fn type_decl(&self, id: TypeId) -> Option<&TypeDecl> {
        self.types.get(id.index())
    }

    /// Line index over the source text, when the host supplied it. Build it
    /// once per tree and share it across call sites.
    pub fn line_index(&self) -> Option<LineIndex<'_>> {
        self.source.as_deref().map(LineIndex::new)
    }

    /// All call expressions in arena order.
    pub fn call_sites(&self) -> impl Iterator<Item = (NodeId, &CallExpr)> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match &n.kind {
            NodeKind::Call(call) => Some((NodeId(i as u32), call)),
            _ => None,
        })
    }

    /// Strict ancestors of `id`, innermost first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        let next = self.nodes.get(id.index()).and_then(|n| n.parent);
        Ancestors {
            tree: self,
            origin: id,
            next,
            depth: 0,
        }
    }

    /// Check every handle in the arena and make sure each parent chain ends.
    pub fn validate(&self) -> Result<(), TreeError> {
        let node_len = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                if parent.index() >= node_len {
                    return Err(TreeError::InvalidHandle {
                        kind: "node",
                        index: parent.0,
                        len: node_len,
                    });
                }
                if parent.index() == i {
                    return Err(TreeError::Malformed {
                        node: NodeId(i as u32),
                        reason: "node is its own parent".to_string(),
                    });
                }
            }
            match &node.kind {
                NodeKind::Call(call) => {
                    if let Some(target) = call.target {
                        self.check_decl(target)?;
                    }
                }
                NodeKind::Lambda(lambda) => {
                    if let Some(ty) = lambda.functional_interface {
                        if ty.index() >= self.types.len() {
                            return Err(TreeError::InvalidHandle {
                                kind: "type",
                                index: ty.0,
                                len: self.types.len(),
                            });
                        }
                    }
                }
                NodeKind::Try(_) | NodeKind::Function(_) | NodeKind::Other => {}
            }
        }
        for ty in &self.types {
            for method in &ty.methods {
                self.check_decl(*method)?;
            }
        }
        for i in 0..node_len {
            for step in self.ancestors(NodeId(i as u32)) {
                step?;
            }
        }
        Ok(())
    }

    fn check_decl(&self, id: DeclId) -> Result<(), TreeError> {
        if id.index() >= self.declarations.len() {
            return Err(TreeError::InvalidHandle {
                kind: "declaration",
                index: id.0,
                len: self.declarations.len(),
            });
        }
        Ok(())
    }
}

/// Iterator over the strict ancestor chain of a node.
///
/// Yields an error and stops if a parent handle is out of range or the chain
/// exceeds [`MAX_ANCESTOR_DEPTH`].
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    origin: NodeId,
    next: Option<NodeId>,
    depth: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Result<(NodeId, &'a Node), TreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        self.depth += 1;
        if self.depth > MAX_ANCESTOR_DEPTH {
            return Some(Err(TreeError::Malformed {
                node: self.origin,
                reason: format!("ancestor chain exceeds {} levels", MAX_ANCESTOR_DEPTH),
            }));
        }
        match self.tree.node(id) {
            Ok(node) => {
                self.next = node.parent;
                Some(Ok((id, node)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
