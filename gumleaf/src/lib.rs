//! # gumleaf
//!
//! Syntax trees and node classification for GumTree-style tree diffs.
//!
//! gumleaf provides the inputs a change attribution pass consumes:
//! - **Trees**: an arena-backed [`Tree`] behind the read-only [`SyntaxTree`] trait
//! - **Dumps**: reading and writing GumTree's indented text dumps
//! - **Classification**: the [`Classifier`] trait answering, per node and side,
//!   whether it was inserted, deleted, updated or moved
//! - **Mappings**: a [`MappingClassifier`] that derives those answers from a
//!   matcher's node [`Mapping`]
//!
//! gumleaf does not match trees itself; mappings come from elsewhere.
//!
//! ## Usage
//!
//! ```
//! use gumleaf::{Classifier, Mapping, MappingClassifier, SyntaxTree, Tree};
//!
//! let src = Tree::from_dump("CompilationUnit\n    TypeDeclaration\n").unwrap();
//! let dst = Tree::from_dump(
//!     "CompilationUnit\n    TypeDeclaration\n        SimpleName: Foo\n",
//! )
//! .unwrap();
//!
//! let mut mapping = Mapping::new();
//! mapping.add(src.root(), dst.root());
//! let src_ty = src.children(src.root()).next().unwrap();
//! let dst_ty = dst.children(dst.root()).next().unwrap();
//! mapping.add(src_ty, dst_ty);
//!
//! let classifier = MappingClassifier::new(&src, &dst, &mapping);
//! let name = dst.children(dst_ty).next().unwrap();
//! assert!(classifier.is_inserted_into_destination(name));
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

pub use indextree;

mod tracing_macros;

/// Node classification model
pub mod classify;
mod dump;
/// Node mappings and the mapping-derived classifier
pub mod mapping;
/// Tree representation
pub mod tree;

pub use classify::{Classification, ClassificationError, ClassificationMap, Classifier, Side};
pub use dump::DumpError;
pub use mapping::{Mapping, MappingClassifier};
pub use tree::{NodeData, Span, SyntaxTree, Tree};
