//! # commitgen
//!
//! Turns a classified pair of syntax trees into change records, each
//! attributed to the class, method and field it happened in.
//!
//! The inputs come from elsewhere: two [`SyntaxTree`]s (the "before" and
//! "after" versions of a file) and a [`Classifier`] that knows, for every
//! node, whether a matcher found it inserted, deleted, updated or moved.
//! commitgen walks both trees once and collects:
//! - **inserted** records from the destination tree,
//! - **updated** records from the destination tree,
//! - **deleted** records from the source tree.
//!
//! A changed subtree produces one record for its root, not one per
//! descendant, and documentation comments are never reported.
//!
//! # Example
//!
//! ```
//! use commitgen::{ChangeRecord, attribute_changes};
//! use gumleaf::{Classification, ClassificationMap, NodeData, Side, Tree};
//!
//! let src = Tree::from_dump(
//!     "CompilationUnit\n    TypeDeclaration\n        SimpleName: Foo\n",
//! )
//! .unwrap();
//!
//! let mut dst = Tree::new(NodeData::new("CompilationUnit"));
//! let ty = dst.add_child(dst.root, NodeData::new("TypeDeclaration"));
//! dst.add_child(ty, NodeData::labeled("SimpleName", "Foo"));
//! let method = dst.add_child(ty, NodeData::new("MethodDeclaration"));
//! dst.add_child(method, NodeData::labeled("SimpleName", "bar"));
//!
//! let classes = ClassificationMap::new().with(
//!     Side::Destination,
//!     method,
//!     Classification::InsertedIntoDestination,
//! );
//!
//! let changes = attribute_changes(&src, &dst, &classes);
//! assert!(changes.inserted_items().contains(&ChangeRecord::new(
//!     "MethodDeclaration",
//!     "Foo",
//!     "bar",
//!     "",
//! )));
//! assert!(changes.deleted_items().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod tracing_macros;

mod config;
/// Declaration context and name lookups
pub mod context;
mod driver;
mod record;
mod visited;
/// The context-carrying walk
pub mod walker;

pub use config::AttributionConfig;
pub use context::Context;
pub use driver::{SideStats, attribute_side};
pub use record::{ChangeKind, ChangeRecord, ChangeStore};
pub use visited::VisitedRegistry;
pub use walker::{Disposition, Walker};

pub use gumleaf::{Classification, Classifier, Side, SyntaxTree};

/// The outcome of attributing one tree pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// The collected change records
    pub changes: ChangeStore,
    /// Coverage of the source ("before") walk
    pub source: SideStats,
    /// Coverage of the destination ("after") walk
    pub destination: SideStats,
}

/// A change attribution session with a fixed grammar vocabulary.
///
/// ```
/// use commitgen::{AttributionConfig, CommitGen};
///
/// let generator = CommitGen::with_config(AttributionConfig {
///     documentation: "DocComment".into(),
///     ..Default::default()
/// });
/// assert_eq!(generator.config().documentation, "DocComment");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommitGen {
    config: AttributionConfig,
}

impl CommitGen {
    /// A session using the default (Java) vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session using `config`.
    pub fn with_config(config: AttributionConfig) -> Self {
        Self { config }
    }

    /// The session's vocabulary.
    pub fn config(&self) -> &AttributionConfig {
        &self.config
    }

    /// Walk the destination tree, then the source tree, on this thread.
    pub fn run<S, D, C>(&self, src: &S, dst: &D, classifier: &C) -> Report
    where
        S: SyntaxTree,
        D: SyntaxTree,
        C: Classifier + ?Sized,
    {
        let mut changes = ChangeStore::new();
        let destination =
            attribute_side(dst, Side::Destination, classifier, &self.config, &mut changes);
        let source = attribute_side(src, Side::Source, classifier, &self.config, &mut changes);
        debug!(records = changes.len(), "run done");
        Report {
            changes,
            source,
            destination,
        }
    }

    /// Like [`CommitGen::run`], with the two walks on the rayon pool.
    ///
    /// Each walk fills its own store; the stores are merged afterwards, so
    /// the result is the same as the sequential run.
    pub fn run_parallel<S, D, C>(&self, src: &S, dst: &D, classifier: &C) -> Report
    where
        S: SyntaxTree + Sync,
        D: SyntaxTree + Sync,
        C: Classifier + Sync + ?Sized,
    {
        let config = &self.config;
        let ((mut changes, destination), (src_changes, source)) = rayon::join(
            || {
                let mut store = ChangeStore::new();
                let stats = attribute_side(dst, Side::Destination, classifier, config, &mut store);
                (store, stats)
            },
            || {
                let mut store = ChangeStore::new();
                let stats = attribute_side(src, Side::Source, classifier, config, &mut store);
                (store, stats)
            },
        );
        changes.merge(src_changes);
        debug!(records = changes.len(), "run_parallel done");
        Report {
            changes,
            source,
            destination,
        }
    }
}

/// Attribute the changes of a classified tree pair using the default
/// vocabulary.
///
/// This is the main entry point. Inserted and updated records come from
/// `dst`, deleted records from `src`.
pub fn attribute_changes<S, D, C>(src: &S, dst: &D, classifier: &C) -> ChangeStore
where
    S: SyntaxTree,
    D: SyntaxTree,
    C: Classifier + ?Sized,
{
    CommitGen::new().run(src, dst, classifier).changes
}

/// Like [`attribute_changes`], walking both trees in parallel.
pub fn attribute_changes_parallel<S, D, C>(src: &S, dst: &D, classifier: &C) -> ChangeStore
where
    S: SyntaxTree + Sync,
    D: SyntaxTree + Sync,
    C: Classifier + Sync + ?Sized,
{
    CommitGen::new().run_parallel(src, dst, classifier).changes
}
