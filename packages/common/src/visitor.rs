use pagecraft_document::{ComponentNode, FieldDescriptor};

/// Visitor pattern for traversing a component tree immutably
///
/// The default implementations walk the whole tree depth-first, pre-order:
/// a node's fields are visited in declaration order before its children,
/// and children in sequence order. Override specific visit_* methods to act
/// on nodes or fields.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &ComponentNode) {
        walk_node(self, node);
    }

    fn visit_field(&mut self, _node: &ComponentNode, _field: &FieldDescriptor) {
        // Leaf, nothing to walk
    }
}

/// Visit the fields of a node, then recurse into its children
pub fn walk_node<V: Visitor>(visitor: &mut V, node: &ComponentNode) {
    walk_fields(visitor, node);
    for child in &node.children {
        visitor.visit_node(child);
    }
}

/// Visit the fields of a node without recursing
pub fn walk_fields<V: Visitor>(visitor: &mut V, node: &ComponentNode) {
    for field in &node.fields {
        visitor.visit_field(node, field);
    }
}
