//! GumTree text dumps.
//!
//! One node per line, children indented below their parent:
//!
//! ```text
//! CompilationUnit [0,62]
//!     TypeDeclaration [0,62]
//!         SimpleName: Foo [13,16]
//!         MethodDeclaration [23,60]
//! ```
//!
//! A line is `Kind` or `Kind: label`, optionally followed by a ` [start,end]`
//! span. Any indentation width works as long as children are indented
//! further than their parent. Blank lines are ignored.

use crate::tree::{NodeData, Span, SyntaxTree, Tree};
use crate::{debug, trace};
use facet::Facet;
use indextree::NodeId;
use smallvec::SmallVec;

/// Errors that can occur while reading a tree dump.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum DumpError {
    /// tree dump contains no nodes
    Empty,

    /// line {line}: a second root node was found
    SecondRoot { line: usize },

    /// line {line}: node has no kind
    MissingKind { line: usize },

    /// line {line}: malformed span `{span}`
    BadSpan { line: usize, span: String },
}

impl Tree {
    /// Read a tree from a GumTree text dump.
    pub fn from_dump(input: &str) -> Result<Tree, DumpError> {
        let mut tree: Option<Tree> = None;
        // (indentation, node) for the current chain of ancestors
        let mut stack: SmallVec<[(usize, NodeId); 32]> = SmallVec::new();

        for (idx, raw) in input.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let indent = indentation(raw);
            let data = parse_line(raw.trim(), line)?;

            match tree.as_mut() {
                None => {
                    let root = Tree::new(data);
                    stack.push((indent, root.root));
                    tree = Some(root);
                }
                Some(tree) => {
                    while stack.last().is_some_and(|&(open, _)| open >= indent) {
                        stack.pop();
                    }
                    let Some(&(_, parent)) = stack.last() else {
                        return Err(DumpError::SecondRoot { line });
                    };
                    let id = tree.add_child(parent, data);
                    trace!(line, indent, depth = stack.len(), "dump: node");
                    stack.push((indent, id));
                }
            }
        }

        let tree = tree.ok_or(DumpError::Empty)?;
        debug!(nodes = tree.node_count(), "dump: read tree");
        Ok(tree)
    }

    /// Write the tree as a GumTree text dump, four spaces per level.
    pub fn to_dump(&self) -> String {
        let mut out = String::new();
        for edge in self.root.traverse(&self.arena) {
            if let indextree::NodeEdge::Start(id) = edge {
                let depth = id.ancestors(&self.arena).count() - 1;
                for _ in 0..depth {
                    out.push_str("    ");
                }
                out.push_str(&self.signature(id));
                if let Some(span) = self.get(id).span {
                    out.push(' ');
                    out.push_str(&span.to_string());
                }
                out.push('\n');
            }
        }
        out
    }
}

fn indentation(raw: &str) -> usize {
    raw.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

fn parse_line(body: &str, line: usize) -> Result<NodeData, DumpError> {
    let (body, span) = split_span(body, line)?;

    let (kind, label) = match body.split_once(": ") {
        Some((kind, label)) => (kind.trim(), Some(label)),
        None => (body.trim_end_matches(':').trim(), None),
    };
    if kind.is_empty() {
        return Err(DumpError::MissingKind { line });
    }

    Ok(NodeData {
        kind: kind.to_owned(),
        label: label.filter(|l| !l.is_empty()).map(str::to_owned),
        span,
    })
}

/// Split a trailing ` [start,end]` off a line. Brackets without a comma are
/// part of the label (`int[]`).
fn split_span(body: &str, line: usize) -> Result<(&str, Option<Span>), DumpError> {
    if !body.ends_with(']') {
        return Ok((body, None));
    }
    let Some(open) = body.rfind('[') else {
        return Ok((body, None));
    };
    let inner = &body[open + 1..body.len() - 1];
    let Some((start, end)) = inner.split_once(',') else {
        return Ok((body, None));
    };

    let bad_span = || DumpError::BadSpan {
        line,
        span: body[open..].to_owned(),
    };
    let start: usize = start.trim().parse().map_err(|_| bad_span())?;
    let end: usize = end.trim().parse().map_err(|_| bad_span())?;
    if end < start {
        return Err(bad_span());
    }

    Ok((body[..open].trim_end(), Some(Span { start, end })))
}
