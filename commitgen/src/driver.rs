//! Per-side driver: finds the top-level type declarations and walks each one.

use crate::config::AttributionConfig;
use crate::context::{Context, declared_name};
use crate::debug;
use crate::record::ChangeStore;
use crate::walker::Walker;
use gumleaf::{Classifier, Side, SyntaxTree};

/// What one side's walk covered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideStats {
    /// Type declarations found directly under the root
    pub type_declarations: usize,
    /// Nodes descended through, the root included
    pub visited: usize,
}

/// Walk every top-level type declaration of `tree` (the `side` half of the
/// pair), emitting into `store`.
///
/// Other children of the root (package and import declarations) are not
/// walked. Each declaration is walked with its own name as the class context.
pub fn attribute_side<T, C>(
    tree: &T,
    side: Side,
    classifier: &C,
    config: &AttributionConfig,
    store: &mut ChangeStore,
) -> SideStats
where
    T: SyntaxTree,
    C: Classifier + ?Sized,
{
    let root = tree.root();
    let mut walker = Walker::new(tree, side, classifier, config, store);
    walker.mark_visited(root);

    let mut type_declarations = 0;
    for child in tree.children(root) {
        if tree.kind(child) != config.type_declaration {
            continue;
        }
        type_declarations += 1;
        let class_name = declared_name(tree, child, config);
        debug!(%side, class = %class_name, "attribute: type declaration");
        walker.walk(child, &Context::for_class(class_name));
    }

    let stats = SideStats {
        type_declarations,
        visited: walker.visited().len(),
    };
    debug!(
        %side,
        type_declarations,
        visited = stats.visited,
        records = store.len(),
        "attribute: side done"
    );
    stats
}
