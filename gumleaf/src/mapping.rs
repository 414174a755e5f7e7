//! Node mappings and the classifier derived from them.

use crate::classify::{Classification, ClassificationMap, Classifier, Side};
use crate::tree::SyntaxTree;
use crate::{debug, trace};
use indextree::NodeId;

/// A bidirectional mapping between source and destination nodes.
///
/// Produced by an external matcher. Uses Vec for O(1) lookups indexed by NodeId.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    /// Source node to destination node (indexed by the source NodeId)
    src_to_dst: Vec<Option<NodeId>>,
    /// Destination node to source node (indexed by the destination NodeId)
    dst_to_src: Vec<Option<NodeId>>,
    /// All mapped pairs, in insertion order
    pairs: Vec<(NodeId, NodeId)>,
}

impl Mapping {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `src` to `dst`.
    ///
    /// A node already mapped on either side is remapped; the stale pair is
    /// dropped.
    pub fn add(&mut self, src: NodeId, dst: NodeId) {
        if self.contains_src(src) || self.contains_dst(dst) {
            self.pairs.retain(|&(s, d)| s != src && d != dst);
            if let Some(old_dst) = self.get_dst(src) {
                self.dst_to_src[usize::from(old_dst)] = None;
            }
            if let Some(old_src) = self.get_src(dst) {
                self.src_to_dst[usize::from(old_src)] = None;
            }
        }

        let src_idx = usize::from(src);
        let dst_idx = usize::from(dst);
        if src_idx >= self.src_to_dst.len() {
            self.src_to_dst.resize(src_idx + 1, None);
        }
        if dst_idx >= self.dst_to_src.len() {
            self.dst_to_src.resize(dst_idx + 1, None);
        }

        self.src_to_dst[src_idx] = Some(dst);
        self.dst_to_src[dst_idx] = Some(src);
        self.pairs.push((src, dst));
    }

    /// Whether a source node is mapped.
    #[inline]
    pub fn contains_src(&self, src: NodeId) -> bool {
        self.get_dst(src).is_some()
    }

    /// Whether a destination node is mapped.
    #[inline]
    pub fn contains_dst(&self, dst: NodeId) -> bool {
        self.get_src(dst).is_some()
    }

    /// The destination counterpart of a source node.
    #[inline]
    pub fn get_dst(&self, src: NodeId) -> Option<NodeId> {
        self.src_to_dst.get(usize::from(src)).copied().flatten()
    }

    /// The source counterpart of a destination node.
    #[inline]
    pub fn get_src(&self, dst: NodeId) -> Option<NodeId> {
        self.dst_to_src.get(usize::from(dst)).copied().flatten()
    }

    /// All mapped pairs as `(src, dst)`.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.pairs.iter().copied()
    }

    /// Number of mapped pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Classifies every node of a tree pair from a [`Mapping`].
///
/// - unmapped source nodes are deleted, unmapped destination nodes inserted;
/// - mapped pairs with different labels are updated on both sides;
/// - otherwise, mapped pairs whose parents are not mapped to each other, or
///   whose sibling positions differ, are moved on both sides.
///
/// Roots are never moved. A pair that is both updated and moved is reported
/// as updated.
#[derive(Debug, Clone)]
pub struct MappingClassifier {
    classes: ClassificationMap,
}

impl MappingClassifier {
    /// Classify all nodes of `src` and `dst` under `mapping`.
    pub fn new<S, D>(src: &S, dst: &D, mapping: &Mapping) -> Self
    where
        S: SyntaxTree,
        D: SyntaxTree,
    {
        debug!(
            nodes_src = src.node_count(),
            nodes_dst = dst.node_count(),
            mapped = mapping.len(),
            "classify start"
        );
        let mut classes = ClassificationMap::new();

        for a in src.descendants(src.root()) {
            let class = match mapping.get_dst(a) {
                None => Classification::DeletedFromSource,
                Some(b) if src.label(a) != dst.label(b) => Classification::UpdatedInSource,
                Some(b) if is_moved(src, dst, mapping, a, b) => Classification::MovedFromSource,
                Some(_) => continue,
            };
            trace!(node = usize::from(a), %class, "classify src");
            classes.set(Side::Source, a, class);
        }

        for b in dst.descendants(dst.root()) {
            let class = match mapping.get_src(b) {
                None => Classification::InsertedIntoDestination,
                Some(a) if src.label(a) != dst.label(b) => Classification::UpdatedInDestination,
                Some(a) if is_moved(src, dst, mapping, a, b) => {
                    Classification::MovedIntoDestination
                }
                Some(_) => continue,
            };
            trace!(node = usize::from(b), %class, "classify dst");
            classes.set(Side::Destination, b, class);
        }

        debug!(classified = classes.len(), "classify done");
        Self { classes }
    }

    /// The precomputed classifications.
    pub fn classifications(&self) -> &ClassificationMap {
        &self.classes
    }
}

impl Classifier for MappingClassifier {
    fn classify(&self, side: Side, node: NodeId) -> Classification {
        self.classes.classify(side, node)
    }
}

fn is_moved<S, D>(src: &S, dst: &D, mapping: &Mapping, a: NodeId, b: NodeId) -> bool
where
    S: SyntaxTree,
    D: SyntaxTree,
{
    let (Some(parent_a), Some(parent_b)) = (src.parent(a), dst.parent(b)) else {
        return false;
    };
    if mapping.get_dst(parent_a) != Some(parent_b) {
        return true;
    }
    src.position(a) != dst.position(b)
}
