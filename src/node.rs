//! Scene-graph nodes.
//!
//! A [`Node`] is immutable once built. Every derivation (`disable`, `update`,
//! `linear_extrude`, ...) returns a new node; children are held behind an
//! [`Arc`] and shared between a node and everything derived from it.

use std::sync::Arc;

use crate::props::Properties;
use crate::value::Value;

/// Rendering annotation attached to a node: `*`, `!` or `#`.
///
/// A node carries at most one; setting another replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `*` — the subtree is ignored.
    Disable,
    /// `!` — only this subtree is rendered.
    ShowOnly,
    /// `#` — highlighted for debugging.
    Debug,
}

impl Modifier {
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Disable => '*',
            Self::ShowOnly => '!',
            Self::Debug => '#',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Two,
    Three,
}

/// Leaf primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Polygon,
    Text,
    Sphere,
    Cube,
    Cylinder,
}

impl Shape {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Polygon => "polygon",
            Self::Text => "text",
            Self::Sphere => "sphere",
            Self::Cube => "cube",
            Self::Cylinder => "cylinder",
        }
    }

    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Circle | Self::Square | Self::Polygon | Self::Text => Dimension::Two,
            Self::Sphere | Self::Cube | Self::Cylinder => Dimension::Three,
        }
    }
}

/// Boolean and compound operations over children. They take no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Union,
    Difference,
    Intersection,
    Hull,
    Minkowski,
}

impl Container {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
            Self::Hull => "hull",
            Self::Minkowski => "minkowski",
        }
    }
}

/// Operations applying one positional parameter to their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Translate,
    Rotate,
    Scale,
    Resize,
    Mirror,
    Color,
}

impl Transform {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Resize => "resize",
            Self::Mirror => "mirror",
            Self::Color => "color",
        }
    }
}

/// The variant of a node. Fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Shape(Shape),
    LinearExtrude,
    Container(Container),
    /// The operation and its positional parameter.
    Transform(Transform, Value),
    /// A literal command passed through unchanged.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    props: Properties,
    children: Arc<[Node]>,
    modifier: Option<Modifier>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, children: Arc<[Self]>) -> Self {
        Self {
            kind,
            props: Properties::new(),
            children,
            modifier: None,
        }
    }

    pub(crate) fn leaf(shape: Shape) -> Self {
        Self::new(NodeKind::Shape(shape), Arc::from([]))
    }

    // ── Accessors ────────────────────────────────────────────

    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The name emitted in front of the parameter list.
    ///
    /// For raw nodes this is the literal command.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match &self.kind {
            NodeKind::Shape(shape) => shape.name(),
            NodeKind::LinearExtrude => "linear_extrude",
            NodeKind::Container(op) => op.name(),
            NodeKind::Transform(op, _) => op.name(),
            NodeKind::Raw(command) => command,
        }
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.props
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[must_use]
    pub const fn modifier(&self) -> Option<Modifier> {
        self.modifier
    }

    /// `true` if both nodes share the same child list.
    #[must_use]
    pub fn shares_children_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.children, &other.children)
    }

    // ── Derivation ───────────────────────────────────────────

    fn with_modifier(&self, modifier: Modifier) -> Self {
        Self {
            modifier: Some(modifier),
            ..self.clone()
        }
    }

    /// Copy of this node prefixed with `*`.
    #[must_use]
    pub fn disable(&self) -> Self {
        self.with_modifier(Modifier::Disable)
    }

    /// Copy of this node prefixed with `!`.
    #[must_use]
    pub fn only(&self) -> Self {
        self.with_modifier(Modifier::ShowOnly)
    }

    /// Copy of this node prefixed with `#`.
    #[must_use]
    pub fn debug(&self) -> Self {
        self.with_modifier(Modifier::Debug)
    }

    /// Copy of this node with `props` merged in as defaults.
    ///
    /// Parameters already set on the node keep their values, so the first
    /// `update` to mention a key wins over later ones:
    ///
    /// ```
    /// use scad_builder::{sphere, Properties, Value};
    ///
    /// let s = sphere(3)
    ///     .update(Properties::new().with("$fn", 16))
    ///     .update(Properties::new().with("$fn", 64));
    /// assert_eq!(s.properties().get("$fn"), Some(&Value::Number(16.0)));
    /// ```
    #[must_use]
    pub fn update(&self, props: Properties) -> Self {
        Self {
            props: self.props.merge_defaults(props),
            ..self.clone()
        }
    }

    /// In-place merge used while a factory is still assembling the node.
    pub(crate) fn set(mut self, props: Properties) -> Self {
        self.props = self.props.merge_defaults(props);
        self
    }

    /// Wrap a copy of this node in `linear_extrude(height=..[, center=..])`.
    #[must_use]
    pub fn linear_extrude(&self, height: impl Into<Value>, center: impl Into<Option<bool>>) -> Self {
        Self::new(NodeKind::LinearExtrude, Arc::from([self.clone()]))
            .centered(center)
            .set(Properties::new().with("height", height))
    }

    pub(crate) fn centered(self, center: impl Into<Option<bool>>) -> Self {
        match center.into() {
            Some(center) => self.set(Properties::new().with("center", center)),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{circle, cube, sphere, union};

    #[test]
    fn test_modifier_prefixes() {
        assert_eq!(Modifier::Disable.prefix(), '*');
        assert_eq!(Modifier::ShowOnly.prefix(), '!');
        assert_eq!(Modifier::Debug.prefix(), '#');
    }

    #[test]
    fn test_modifier_returns_new_node() {
        let base = cube(1, None);
        let disabled = base.disable();
        assert_eq!(base.modifier(), None);
        assert_eq!(disabled.modifier(), Some(Modifier::Disable));
    }

    #[test]
    fn test_last_modifier_wins() {
        let node = sphere(3).disable().debug();
        assert_eq!(node.modifier(), Some(Modifier::Debug));
        let node = sphere(3).debug().only();
        assert_eq!(node.modifier(), Some(Modifier::ShowOnly));
    }

    #[test]
    fn test_derivation_shares_children() {
        let group = union([cube(1, None), sphere(2)]);
        let highlighted = group.debug();
        assert!(group.shares_children_with(&highlighted));
        assert_eq!(highlighted.children().len(), 2);
    }

    #[test]
    fn test_update_first_wins() {
        let node = sphere(1)
            .update(Properties::new().with("r", 5))
            .update(Properties::new().with("r", 9));
        assert_eq!(node.properties().get("r"), Some(&Value::Number(1.0)));

        let node = circle(2)
            .update(Properties::new().with("$fn", 5))
            .update(Properties::new().with("$fn", 9));
        assert_eq!(node.properties().get("$fn"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn test_update_leaves_receiver_alone() {
        let base = cube(2, None);
        let updated = base.update(Properties::new().with("center", true));
        assert!(!base.properties().contains_key("center"));
        assert!(updated.properties().contains_key("center"));
    }

    #[test]
    fn test_linear_extrude_wraps_receiver() {
        let shape = circle(5).debug();
        let extruded = shape.linear_extrude(10, None);
        assert_eq!(extruded.kind(), &NodeKind::LinearExtrude);
        assert_eq!(extruded.kind_name(), "linear_extrude");
        assert_eq!(extruded.modifier(), None);
        assert_eq!(extruded.children(), &[shape]);
        assert_eq!(extruded.properties().render_params(), "height=10");
    }

    #[test]
    fn test_linear_extrude_center_follows_height() {
        let extruded = circle(5).linear_extrude(3, true);
        assert_eq!(extruded.properties().render_params(), "height=3, center=true");
    }

    #[test]
    fn test_shape_dimensions() {
        assert_eq!(Shape::Circle.dimension(), Dimension::Two);
        assert_eq!(Shape::Text.dimension(), Dimension::Two);
        assert_eq!(Shape::Cylinder.dimension(), Dimension::Three);
    }

    #[test]
    fn test_nodes_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Node>();
    }
}
