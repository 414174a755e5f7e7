//! Context-carrying walk over one side of a classified tree pair.
//!
//! The walk descends depth-first from a type declaration, refreshing the
//! method or field name whenever it crosses a method or field declaration.
//! A node whose classification is terminal for the side being walked
//! (inserted or updated in the destination, deleted from the source) yields a
//! single record, and the walk does not descend below it: a wholly new
//! subtree is one change, not one change per descendant.

use crate::config::AttributionConfig;
use crate::context::{Context, declared_name, field_name};
use crate::record::{ChangeKind, ChangeRecord, ChangeStore};
use crate::trace;
use crate::visited::VisitedRegistry;
use gumleaf::{Classification, Classifier, Side, SyntaxTree};
use indextree::NodeId;

/// What the walk does with a node, given its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Record the node as this kind of change and stop descending.
    Emit(ChangeKind),
    /// Mark the node visited and walk its children.
    Descend,
}

/// The disposition of a node classified `classification` on `side`.
///
/// Only three combinations are terminal. Updates seen from the source side
/// and moves in either direction are descended through without a record.
pub fn disposition(side: Side, classification: Classification) -> Disposition {
    match (side, classification) {
        (Side::Destination, Classification::InsertedIntoDestination) => {
            Disposition::Emit(ChangeKind::Inserted)
        }
        (Side::Destination, Classification::UpdatedInDestination) => {
            Disposition::Emit(ChangeKind::Updated)
        }
        (Side::Source, Classification::DeletedFromSource) => Disposition::Emit(ChangeKind::Deleted),
        _ => Disposition::Descend,
    }
}

/// Walks one tree side, emitting change records into a store.
///
/// The walker owns the side's [`VisitedRegistry`]; a node is descended
/// through at most once per walker, however many times it is reached.
pub struct Walker<'a, T, C>
where
    T: SyntaxTree,
    C: Classifier + ?Sized,
{
    tree: &'a T,
    side: Side,
    classifier: &'a C,
    config: &'a AttributionConfig,
    store: &'a mut ChangeStore,
    visited: VisitedRegistry,
}

impl<'a, T, C> Walker<'a, T, C>
where
    T: SyntaxTree,
    C: Classifier + ?Sized,
{
    /// A walker over `tree`, which is the `side` half of the pair.
    pub fn new(
        tree: &'a T,
        side: Side,
        classifier: &'a C,
        config: &'a AttributionConfig,
        store: &'a mut ChangeStore,
    ) -> Self {
        Self {
            tree,
            side,
            classifier,
            config,
            store,
            visited: VisitedRegistry::with_capacity(tree.node_count()),
        }
    }

    /// Mark `node` visited without walking it.
    pub fn mark_visited(&mut self, node: NodeId) {
        self.visited.mark(node);
    }

    /// Nodes descended through so far.
    pub fn visited(&self) -> &VisitedRegistry {
        &self.visited
    }

    /// Walk the subtree at `node` in `context`.
    ///
    /// Nodes not in the tree are ignored.
    pub fn walk(&mut self, node: NodeId, context: &Context) {
        self.walk_at(node, context, 0);
    }

    fn walk_at(&mut self, node: NodeId, context: &Context, depth: usize) {
        let tree = self.tree;
        let config = self.config;

        if !tree.contains(node) {
            return;
        }
        if tree.kind(node) == config.documentation {
            trace!(depth, node = usize::from(node), "walk: skip documentation");
            return;
        }
        if self.visited.contains(node) {
            return;
        }

        let classification = self.classifier.classify(self.side, node);
        match disposition(self.side, classification) {
            Disposition::Emit(kind) => {
                let record = ChangeRecord::in_context(tree.signature(node), context);
                trace!(depth, side = %self.side, %kind, %record, "walk: emit");
                self.store.emit(kind, record);
                return;
            }
            Disposition::Descend if classification != Classification::Unclassified => {
                trace!(
                    depth,
                    side = %self.side,
                    %classification,
                    signature = %tree.signature(node),
                    "walk: informational"
                );
            }
            Disposition::Descend => {}
        }

        self.visited.mark(node);

        for child in tree.children(node) {
            let kind = tree.kind(child);
            if kind == config.method_declaration {
                let inner = context.in_method(declared_name(tree, child, config));
                self.walk_at(child, &inner, depth + 1);
            } else if kind == config.field_declaration {
                let inner = context.in_field(field_name(tree, child, config));
                self.walk_at(child, &inner, depth + 1);
            } else {
                self.walk_at(child, context, depth + 1);
            }
        }
    }
}
