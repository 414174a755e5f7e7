//! Change records and the store that collects them.

use core::fmt;

use crate::context::Context;
use crate::debug;
use facet::Facet;
use rapidhash::RapidHashSet as HashSet;

/// Which set a change record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Facet)]
#[repr(u8)]
pub enum ChangeKind {
    /// Code that only exists in the destination tree
    Inserted,
    /// Code whose text changed between the trees
    Updated,
    /// Code that only exists in the source tree
    Deleted,
}

impl ChangeKind {
    /// Every kind, in store order.
    pub const ALL: [ChangeKind; 3] = [ChangeKind::Inserted, ChangeKind::Updated, ChangeKind::Deleted];
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Inserted => write!(f, "inserted"),
            ChangeKind::Updated => write!(f, "updated"),
            ChangeKind::Deleted => write!(f, "deleted"),
        }
    }
}

/// One change: the changed node's signature and where it happened.
///
/// Records compare by value; two nodes producing the same signature in the
/// same context are the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Facet)]
pub struct ChangeRecord {
    signature: String,
    class_name: String,
    method_name: String,
    field_name: String,
}

impl ChangeRecord {
    /// Build a record from its four parts.
    pub fn new(
        signature: impl Into<String>,
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            signature: signature.into(),
            class_name: class_name.into(),
            method_name: method_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Build a record for `signature` in `context`.
    pub fn in_context(signature: impl Into<String>, context: &Context) -> Self {
        Self::new(
            signature,
            context.class_name.as_str(),
            context.method_name.as_str(),
            context.field_name.as_str(),
        )
    }

    /// Signature of the changed node, e.g. `SimpleName: count`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Enclosing class, empty if unknown.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Enclosing method, empty outside methods.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Enclosing field, empty outside fields.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Method: {}, Class: {}",
            self.signature, self.method_name, self.class_name
        )?;
        if !self.field_name.is_empty() {
            write!(f, ", Field: {}", self.field_name)?;
        }
        Ok(())
    }
}

/// The inserted, updated and deleted record sets of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeStore {
    inserted: HashSet<ChangeRecord>,
    updated: HashSet<ChangeRecord>,
    deleted: HashSet<ChangeRecord>,
}

impl ChangeStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn set_mut(&mut self, kind: ChangeKind) -> &mut HashSet<ChangeRecord> {
        match kind {
            ChangeKind::Inserted => &mut self.inserted,
            ChangeKind::Updated => &mut self.updated,
            ChangeKind::Deleted => &mut self.deleted,
        }
    }

    /// Add `record` to the `kind` set. Returns `false` if an equal record was
    /// already there.
    pub fn emit(&mut self, kind: ChangeKind, record: ChangeRecord) -> bool {
        let added = self.set_mut(kind).insert(record);
        if !added {
            debug!(%kind, "emit: duplicate record collapsed");
        }
        added
    }

    /// Records of one kind, in no particular order.
    pub fn items(&self, kind: ChangeKind) -> &HashSet<ChangeRecord> {
        match kind {
            ChangeKind::Inserted => &self.inserted,
            ChangeKind::Updated => &self.updated,
            ChangeKind::Deleted => &self.deleted,
        }
    }

    /// Records of code added in the destination tree.
    pub fn inserted_items(&self) -> &HashSet<ChangeRecord> {
        &self.inserted
    }

    /// Records of code whose text changed.
    pub fn updated_items(&self) -> &HashSet<ChangeRecord> {
        &self.updated
    }

    /// Records of code removed from the source tree.
    pub fn deleted_items(&self) -> &HashSet<ChangeRecord> {
        &self.deleted
    }

    /// Records of one kind, sorted by signature then context.
    pub fn sorted(&self, kind: ChangeKind) -> Vec<&ChangeRecord> {
        let mut records: Vec<_> = self.items(kind).iter().collect();
        records.sort();
        records
    }

    /// Move every record of `other` into this store.
    pub fn merge(&mut self, other: ChangeStore) {
        self.inserted.extend(other.inserted);
        self.updated.extend(other.updated);
        self.deleted.extend(other.deleted);
    }

    /// Total number of records across the three sets.
    pub fn len(&self) -> usize {
        self.inserted.len() + self.updated.len() + self.deleted.len()
    }

    /// Whether all three sets are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
