/// Visitor trait for traversing scene trees.
///
/// Implement this trait to walk a tree without modifying it.
/// Each method has a default implementation that recurses into children.
use crate::node::{Modifier, Node, NodeKind};
use crate::value::Value;

/// A visitor that traverses nodes by reference.
pub trait Visitor {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_value(&mut self, value: &Value) {
        if let Value::Vector(items) = value {
            for item in items {
                self.visit_value(item);
            }
        }
    }
}

/// Visit a node's parameters, then each child in order.
///
/// Call this from an overridden [`Visitor::visit_node`] to keep recursing.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    if let NodeKind::Transform(_, param) = node.kind() {
        visitor.visit_value(param);
    }
    for (_, value) in node.properties().iter() {
        visitor.visit_value(value);
    }
    for child in node.children() {
        visitor.visit_node(child);
    }
}

/// Size and shape of a tree, gathered with a [`Visitor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub max_depth: usize,
    pub disabled: usize,
    pub show_only: usize,
    pub debug: usize,
    depth: usize,
}

impl NodeStats {
    #[must_use]
    pub fn collect(root: &Node) -> Self {
        let mut stats = Self::default();
        stats.visit_node(root);
        stats
    }
}

impl Visitor for NodeStats {
    fn visit_node(&mut self, node: &Node) {
        self.nodes += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        if node.children().is_empty() {
            self.leaves += 1;
        }
        match node.modifier() {
            Some(Modifier::Disable) => self.disabled += 1,
            Some(Modifier::ShowOnly) => self.show_only += 1,
            Some(Modifier::Debug) => self.debug += 1,
            None => {}
        }
        walk_node(self, node);
        self.depth -= 1;
    }
}
