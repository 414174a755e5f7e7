//! Node classification: which edit category a node of a tree pair belongs to.
//!
//! A matcher relates the nodes of a source ("before") tree to those of a
//! destination ("after") tree. A [`Classifier`] reports the outcome for a
//! single node as one [`Classification`]. Node ids are only unique within
//! their own tree, so every query names the [`Side`] it is about.

use core::fmt;
use core::str::FromStr;

use facet::Facet;
use indextree::NodeId;
use rapidhash::RapidHashMap as HashMap;

/// Which tree of the pair a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Side {
    /// The "before" tree
    Source,
    /// The "after" tree
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "src"),
            Side::Destination => write!(f, "dst"),
        }
    }
}

/// The edit category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Facet)]
#[repr(u8)]
pub enum Classification {
    /// Matched and unchanged, or not known to the classifier
    #[default]
    Unclassified,
    /// Source node with no counterpart in the destination
    DeletedFromSource,
    /// Destination node with no counterpart in the source
    InsertedIntoDestination,
    /// Source node whose counterpart has a different label
    UpdatedInSource,
    /// Destination node whose counterpart has a different label
    UpdatedInDestination,
    /// Source node whose counterpart sits elsewhere in the destination
    MovedFromSource,
    /// Destination node whose counterpart sat elsewhere in the source
    MovedIntoDestination,
}

impl Classification {
    /// Every category, in declaration order.
    pub const ALL: [Classification; 7] = [
        Classification::Unclassified,
        Classification::DeletedFromSource,
        Classification::InsertedIntoDestination,
        Classification::UpdatedInSource,
        Classification::UpdatedInDestination,
        Classification::MovedFromSource,
        Classification::MovedIntoDestination,
    ];

    /// The tree side this category describes, `None` for [`Classification::Unclassified`].
    pub fn side(self) -> Option<Side> {
        match self {
            Classification::Unclassified => None,
            Classification::DeletedFromSource
            | Classification::UpdatedInSource
            | Classification::MovedFromSource => Some(Side::Source),
            Classification::InsertedIntoDestination
            | Classification::UpdatedInDestination
            | Classification::MovedIntoDestination => Some(Side::Destination),
        }
    }

    /// Short name, as used in fixtures and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Unclassified => "unclassified",
            Classification::DeletedFromSource => "src-del",
            Classification::InsertedIntoDestination => "dst-ins",
            Classification::UpdatedInSource => "src-upd",
            Classification::UpdatedInDestination => "dst-upd",
            Classification::MovedFromSource => "src-mov",
            Classification::MovedIntoDestination => "dst-mov",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Classification`] from its short name.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum ClassificationError {
    /// unknown classification `{name}`
    Unknown { name: String },
}

impl FromStr for Classification {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ClassificationError::Unknown { name: s.to_owned() })
    }
}

/// Answers classification queries for the nodes of a tree pair.
///
/// Answers must not change while a walk is running.
pub trait Classifier {
    /// The category of `node` on `side`.
    fn classify(&self, side: Side, node: NodeId) -> Classification;

    /// Source node deleted.
    fn is_deleted_from_source(&self, node: NodeId) -> bool {
        self.classify(Side::Source, node) == Classification::DeletedFromSource
    }

    /// Destination node inserted.
    fn is_inserted_into_destination(&self, node: NodeId) -> bool {
        self.classify(Side::Destination, node) == Classification::InsertedIntoDestination
    }

    /// Source node updated.
    fn is_updated_in_source(&self, node: NodeId) -> bool {
        self.classify(Side::Source, node) == Classification::UpdatedInSource
    }

    /// Destination node updated.
    fn is_updated_in_destination(&self, node: NodeId) -> bool {
        self.classify(Side::Destination, node) == Classification::UpdatedInDestination
    }

    /// Source node moved.
    fn is_moved_from_source(&self, node: NodeId) -> bool {
        self.classify(Side::Source, node) == Classification::MovedFromSource
    }

    /// Destination node moved.
    fn is_moved_into_destination(&self, node: NodeId) -> bool {
        self.classify(Side::Destination, node) == Classification::MovedIntoDestination
    }
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn classify(&self, side: Side, node: NodeId) -> Classification {
        (**self).classify(side, node)
    }
}

/// A classifier backed by explicit per-side tables.
///
/// Nodes that were never set are [`Classification::Unclassified`].
#[derive(Debug, Clone, Default)]
pub struct ClassificationMap {
    src: HashMap<NodeId, Classification>,
    dst: HashMap<NodeId, Classification>,
}

impl ClassificationMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, side: Side) -> &HashMap<NodeId, Classification> {
        match side {
            Side::Source => &self.src,
            Side::Destination => &self.dst,
        }
    }

    /// Record the category of `node` on `side`, replacing any previous one.
    ///
    /// Setting [`Classification::Unclassified`] clears the entry.
    pub fn set(&mut self, side: Side, node: NodeId, classification: Classification) {
        let table = match side {
            Side::Source => &mut self.src,
            Side::Destination => &mut self.dst,
        };
        if classification == Classification::Unclassified {
            table.remove(&node);
        } else {
            table.insert(node, classification);
        }
    }

    /// Builder-style [`ClassificationMap::set`].
    pub fn with(mut self, side: Side, node: NodeId, classification: Classification) -> Self {
        self.set(side, node, classification);
        self
    }

    /// Classified nodes of one side, in no particular order.
    pub fn iter(&self, side: Side) -> impl Iterator<Item = (NodeId, Classification)> + '_ {
        self.table(side).iter().map(|(&node, &c)| (node, c))
    }

    /// Number of classified nodes across both sides.
    pub fn len(&self) -> usize {
        self.src.len() + self.dst.len()
    }

    /// Whether no node is classified.
    pub fn is_empty(&self) -> bool {
        self.src.is_empty() && self.dst.is_empty()
    }
}

impl Classifier for ClassificationMap {
    fn classify(&self, side: Side, node: NodeId) -> Classification {
        self.table(side).get(&node).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeData, Tree};
    use facet_testhelpers::test;

    #[test]
    fn test_map_predicates_respect_side() {
        let mut tree = Tree::new(NodeData::new("root"));
        let leaf = tree.add_child(tree.root, NodeData::new("leaf"));

        let map = ClassificationMap::new()
            .with(Side::Source, leaf, Classification::DeletedFromSource)
            .with(Side::Destination, leaf, Classification::UpdatedInDestination);

        assert!(map.is_deleted_from_source(leaf));
        assert!(map.is_updated_in_destination(leaf));
        assert!(!map.is_inserted_into_destination(leaf));
        assert!(!map.is_updated_in_source(leaf));
        assert!(!map.is_moved_from_source(leaf));
        assert!(!map.is_moved_into_destination(leaf));
        assert_eq!(
            map.classify(Side::Source, tree.root),
            Classification::Unclassified
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_setting_unclassified_clears() {
        let tree = Tree::new(NodeData::new("root"));
        let mut map = ClassificationMap::new();
        map.set(Side::Destination, tree.root, Classification::MovedIntoDestination);
        assert!(map.is_moved_into_destination(tree.root));

        map.set(Side::Destination, tree.root, Classification::Unclassified);
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_short_names() {
        for c in Classification::ALL {
            assert_eq!(c.as_str().parse::<Classification>(), Ok(c));
        }
        assert_eq!(
            "DST-INS".parse::<Classification>(),
            Ok(Classification::InsertedIntoDestination)
        );
        assert_eq!(
            "renamed".parse::<Classification>(),
            Err(ClassificationError::Unknown {
                name: "renamed".to_owned()
            })
        );
    }

    #[test]
    fn test_sides() {
        assert_eq!(Classification::Unclassified.side(), None);
        assert_eq!(
            Classification::MovedFromSource.side(),
            Some(Side::Source)
        );
        assert_eq!(
            Classification::UpdatedInDestination.side(),
            Some(Side::Destination)
        );
    }
}
