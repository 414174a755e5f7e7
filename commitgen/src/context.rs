//! The enclosing declaration context of a change, and the name lookups that
//! feed it.

use crate::config::AttributionConfig;
use gumleaf::SyntaxTree;
use indextree::NodeId;

/// Where a change happened: enclosing class, method and field names.
///
/// Empty strings mean "not inside one" or "name unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Context {
    /// Enclosing type declaration
    pub class_name: String,
    /// Enclosing method declaration
    pub method_name: String,
    /// Enclosing field declaration
    pub field_name: String,
}

impl Context {
    /// The context at the top of a type declaration.
    pub fn for_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// This context, inside a method. The field name is kept.
    pub fn in_method(&self, method_name: impl Into<String>) -> Self {
        Self {
            class_name: self.class_name.clone(),
            method_name: method_name.into(),
            field_name: self.field_name.clone(),
        }
    }

    /// This context, inside a field. The method name is kept.
    pub fn in_field(&self, field_name: impl Into<String>) -> Self {
        Self {
            class_name: self.class_name.clone(),
            method_name: self.method_name.clone(),
            field_name: field_name.into(),
        }
    }
}

/// The first labeled simple-name child of `node`, or an empty string.
///
/// Used for type and method declarations. Kind comparison ignores ASCII case.
pub fn declared_name<T: SyntaxTree>(tree: &T, node: NodeId, config: &AttributionConfig) -> String {
    tree.children(node)
        .filter(|&child| tree.has_label(child))
        .find(|&child| tree.kind(child).eq_ignore_ascii_case(&config.simple_name))
        .and_then(|child| tree.label(child))
        .unwrap_or_default()
        .to_owned()
}

/// The name of a field declaration: the declared name of its last variable
/// declaration fragment that has one, or an empty string.
///
/// `int x, y;` is named `y`.
pub fn field_name<T: SyntaxTree>(tree: &T, node: NodeId, config: &AttributionConfig) -> String {
    tree.children(node)
        .filter(|&child| {
            tree.kind(child)
                .eq_ignore_ascii_case(&config.variable_fragment)
        })
        .map(|fragment| declared_name(tree, fragment, config))
        .filter(|name| !name.is_empty())
        .last()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;
    use gumleaf::{NodeData, Tree};

    #[test]
    fn test_declared_name_takes_first_simple_name() {
        let mut tree = Tree::new(NodeData::new("TypeDeclaration"));
        tree.add_child(tree.root, NodeData::labeled("Modifier", "public"));
        tree.add_child(tree.root, NodeData::labeled("SimpleName", "Foo"));
        tree.add_child(tree.root, NodeData::labeled("SimpleName", "Other"));

        let config = AttributionConfig::default();
        assert_eq!(declared_name(&tree, tree.root, &config), "Foo");
    }

    #[test]
    fn test_declared_name_skips_unlabeled_and_ignores_case() {
        let mut tree = Tree::new(NodeData::new("MethodDeclaration"));
        tree.add_child(tree.root, NodeData::new("SimpleName"));
        tree.add_child(tree.root, NodeData::labeled("simplename", "run"));

        let config = AttributionConfig::default();
        assert_eq!(declared_name(&tree, tree.root, &config), "run");
    }

    #[test]
    fn test_declared_name_missing_is_empty() {
        let mut tree = Tree::new(NodeData::new("MethodDeclaration"));
        let block = tree.add_child(tree.root, NodeData::new("Block"));
        // only direct children count
        tree.add_child(block, NodeData::labeled("SimpleName", "deep"));

        let config = AttributionConfig::default();
        assert_eq!(declared_name(&tree, tree.root, &config), "");
    }

    #[test]
    fn test_field_name_from_fragment() {
        let mut tree = Tree::new(NodeData::new("FieldDeclaration"));
        tree.add_child(tree.root, NodeData::labeled("PrimitiveType", "int"));
        let empty = tree.add_child(tree.root, NodeData::new("VariableDeclarationFragment"));
        tree.add_child(empty, NodeData::new("NumberLiteral"));
        let first = tree.add_child(tree.root, NodeData::new("VariableDeclarationFragment"));
        tree.add_child(first, NodeData::labeled("SimpleName", "x"));
        let second = tree.add_child(tree.root, NodeData::new("VariableDeclarationFragment"));
        tree.add_child(second, NodeData::labeled("SimpleName", "y"));

        let config = AttributionConfig::default();
        assert_eq!(field_name(&tree, tree.root, &config), "y");
    }

    #[test]
    fn test_field_name_skips_trailing_unnamed_fragment() {
        let mut tree = Tree::new(NodeData::new("FieldDeclaration"));
        let named = tree.add_child(tree.root, NodeData::new("VariableDeclarationFragment"));
        tree.add_child(named, NodeData::labeled("SimpleName", "x"));
        let unnamed = tree.add_child(tree.root, NodeData::new("VariableDeclarationFragment"));
        tree.add_child(unnamed, NodeData::new("NullLiteral"));

        let config = AttributionConfig::default();
        assert_eq!(field_name(&tree, tree.root, &config), "x");
    }

    #[test]
    fn test_field_name_without_fragment_is_empty() {
        let mut tree = Tree::new(NodeData::new("FieldDeclaration"));
        tree.add_child(tree.root, NodeData::labeled("SimpleName", "notAFragment"));

        let config = AttributionConfig::default();
        assert_eq!(field_name(&tree, tree.root, &config), "");
    }

    #[test]
    fn test_context_transitions() {
        let class = Context::for_class("Foo");
        let field = class.in_field("x");
        let method = field.in_method("bar");

        assert_eq!(field.method_name, "");
        assert_eq!(field.field_name, "x");
        assert_eq!(method.class_name, "Foo");
        assert_eq!(method.method_name, "bar");
        assert_eq!(method.field_name, "x");
    }
}
