//! Syntax tree representation.
//!
//! [`SyntaxTree`] is the read-only view the change attribution walk consumes.
//! [`Tree`] is the stock arena-backed implementation, built either node by
//! node or from a GumTree text dump (see [`Tree::from_dump`]).

use core::fmt;
use indextree::{Arena, NodeId};

/// Read-only access to one side of a classified tree pair.
///
/// Node identities are only meaningful within the tree that produced them.
pub trait SyntaxTree {
    /// The root node.
    fn root(&self) -> NodeId;

    /// Whether `node` is a live node of this tree.
    fn contains(&self, node: NodeId) -> bool;

    /// Number of live nodes in the tree.
    fn node_count(&self) -> usize;

    /// Direct children of `node`, in source order.
    fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// `node` and everything below it, in pre-order.
    fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Parent of `node`, `None` for the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Index of `node` among its siblings (0 for the root).
    fn position(&self, node: NodeId) -> usize;

    /// The node's kind, e.g. `MethodDeclaration`.
    fn kind(&self, node: NodeId) -> &str;

    /// The node's text label. Empty labels are reported as `None`.
    fn label(&self, node: NodeId) -> Option<&str>;

    /// Whether the node carries a non-empty label.
    fn has_label(&self, node: NodeId) -> bool {
        self.label(node).is_some()
    }

    /// Human-readable node signature: `Kind`, or `Kind: label` for labeled nodes.
    fn signature(&self, node: NodeId) -> String {
        let kind = self.kind(node);
        match self.label(node) {
            Some(label) => format!("{kind}: {label}"),
            None => kind.to_owned(),
        }
    }
}

/// Source offsets of a node, as `[start,end]` in dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start offset
    pub start: usize,
    /// End offset
    pub end: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}

/// Data stored in each tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Node kind (the grammar's type label)
    pub kind: String,
    /// Optional text label (identifiers, literals, operators)
    pub label: Option<String>,
    /// Optional source span
    pub span: Option<Span>,
}

impl NodeData {
    /// An unlabeled node.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: None,
            span: None,
        }
    }

    /// A labeled node.
    pub fn labeled(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: Some(label.into()),
            span: None,
        }
    }

    /// Attach a source span.
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span = Some(Span { start, end });
        self
    }
}

/// An arena-backed syntax tree.
#[derive(Debug, Clone)]
pub struct Tree {
    /// The underlying arena
    pub arena: Arena<NodeData>,
    /// The root node
    pub root: NodeId,
}

impl Tree {
    /// Create a tree holding only a root node.
    pub fn new(root_data: NodeData) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(root_data);
        Self { arena, root }
    }

    /// Append a child under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.arena.new_node(data);
        parent.append(id, &mut self.arena);
        id
    }

    /// Node data by id.
    ///
    /// Panics if `id` does not belong to this tree's arena.
    pub fn get(&self, id: NodeId) -> &NodeData {
        self.arena[id].get()
    }

    /// Node data by id, if the node is live.
    pub fn try_get(&self, id: NodeId) -> Option<&NodeData> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(|node| node.get())
    }

    /// All nodes in pre-order, starting at the root.
    pub fn pre_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root.descendants(&self.arena)
    }
}

impl SyntaxTree for Tree {
    fn root(&self) -> NodeId {
        self.root
    }

    fn contains(&self, node: NodeId) -> bool {
        self.try_get(node).is_some()
    }

    fn node_count(&self) -> usize {
        self.arena.iter().filter(|node| !node.is_removed()).count()
    }

    fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.descendants(&self.arena)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].parent()
    }

    fn position(&self, node: NodeId) -> usize {
        // preceding_siblings includes the node itself
        node.preceding_siblings(&self.arena).count() - 1
    }

    fn kind(&self, node: NodeId) -> &str {
        &self.get(node).kind
    }

    fn label(&self, node: NodeId) -> Option<&str> {
        self.get(node)
            .label
            .as_deref()
            .filter(|label| !label.is_empty())
    }
}
