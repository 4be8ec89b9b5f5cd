/// Factories for every node kind.
///
/// Positional arguments are stored under the parameter names `OpenSCAD`
/// expects (`r`, `size`, `h`, ...). An optional `center` is folded in after
/// the primary parameters.
use std::sync::Arc;

use crate::node::{Container, Node, NodeKind, Shape, Transform};
use crate::props::Properties;
use crate::value::Value;

/// Radius of a cylinder: one value, or bottom/top radii for a frustum.
#[derive(Debug, Clone, PartialEq)]
pub enum Radius {
    Uniform(Value),
    Cone(Value, Value),
}

impl From<f64> for Radius {
    fn from(r: f64) -> Self {
        Self::Uniform(r.into())
    }
}

impl From<i32> for Radius {
    fn from(r: i32) -> Self {
        Self::Uniform(r.into())
    }
}

impl From<Value> for Radius {
    fn from(r: Value) -> Self {
        Self::Uniform(r)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Radius {
    fn from((r1, r2): (A, B)) -> Self {
        Self::Cone(r1.into(), r2.into())
    }
}

impl<T: Into<Value>> From<[T; 2]> for Radius {
    fn from([r1, r2]: [T; 2]) -> Self {
        Self::Cone(r1.into(), r2.into())
    }
}

fn children<I>(nodes: I) -> Arc<[Node]>
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    nodes.into_iter().filter_map(Into::<Option<Node>>::into).collect()
}

// ── 2D shapes ────────────────────────────────────────────────

#[must_use]
pub fn circle(r: impl Into<Value>) -> Node {
    Node::leaf(Shape::Circle).set(Properties::new().with("r", r))
}

#[must_use]
pub fn square(size: impl Into<Value>, center: impl Into<Option<bool>>) -> Node {
    Node::leaf(Shape::Square)
        .centered(center)
        .set(Properties::new().with("size", size))
}

#[must_use]
pub fn polygon(points: impl Into<Value>) -> Node {
    Node::leaf(Shape::Polygon).set(Properties::new().with("points", points))
}

/// `text(text=..[, size=..][, font=..])`; absent options are left out.
#[must_use]
pub fn text(text: impl Into<Value>, size: Option<f64>, font: Option<&str>) -> Node {
    let mut props = Properties::new().with("text", text);
    if let Some(size) = size {
        props = props.with("size", size);
    }
    if let Some(font) = font {
        props = props.with("font", font);
    }
    Node::leaf(Shape::Text).set(props)
}

// ── 3D shapes ────────────────────────────────────────────────

#[must_use]
pub fn sphere(r: impl Into<Value>) -> Node {
    Node::leaf(Shape::Sphere).set(Properties::new().with("r", r))
}

#[must_use]
pub fn cube(size: impl Into<Value>, center: impl Into<Option<bool>>) -> Node {
    Node::leaf(Shape::Cube)
        .centered(center)
        .set(Properties::new().with("size", size))
}

/// `cylinder(h=.., r=..)`, or `cylinder(h=.., r1=.., r2=..)` for a cone.
///
/// ```
/// use scad_builder::{cylinder, to_scad};
///
/// assert_eq!(to_scad(&cylinder(10, 2, None)), "cylinder(h=10, r=2);\n");
/// assert_eq!(
///     to_scad(&cylinder(10, (2, 1), true)),
///     "cylinder(h=10, r1=2, r2=1, center=true);\n"
/// );
/// ```
#[must_use]
pub fn cylinder(
    h: impl Into<Value>,
    radius: impl Into<Radius>,
    center: impl Into<Option<bool>>,
) -> Node {
    let props = Properties::new().with("h", h);
    let props = match radius.into() {
        Radius::Uniform(r) => props.with("r", r),
        Radius::Cone(r1, r2) => props.with("r1", r1).with("r2", r2),
    };
    Node::leaf(Shape::Cylinder).centered(center).set(props)
}

// ── Containers ───────────────────────────────────────────────

fn container<I>(op: Container, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    Node::new(NodeKind::Container(op), children(nodes))
}

/// Accepts `Node`s or `Option<Node>`s; `None` entries are skipped.
#[must_use]
pub fn union<I>(nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    container(Container::Union, nodes)
}

#[must_use]
pub fn difference<I>(nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    container(Container::Difference, nodes)
}

#[must_use]
pub fn intersection<I>(nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    container(Container::Intersection, nodes)
}

#[must_use]
pub fn hull<I>(nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    container(Container::Hull, nodes)
}

#[must_use]
pub fn minkowski<I>(nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    container(Container::Minkowski, nodes)
}

// ── Transformations ──────────────────────────────────────────

fn transform<I>(op: Transform, param: Value, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    Node::new(NodeKind::Transform(op, param), children(nodes))
}

#[must_use]
pub fn translate<I>(v: impl Into<Value>, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    transform(Transform::Translate, v.into(), nodes)
}

#[must_use]
pub fn rotate<I>(a: impl Into<Value>, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    transform(Transform::Rotate, a.into(), nodes)
}

#[must_use]
pub fn scale<I>(v: impl Into<Value>, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    transform(Transform::Scale, v.into(), nodes)
}

#[must_use]
pub fn resize<I>(size: impl Into<Value>, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    transform(Transform::Resize, size.into(), nodes)
}

#[must_use]
pub fn mirror<I>(v: impl Into<Value>, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    transform(Transform::Mirror, v.into(), nodes)
}

/// `color(c)`; `c` is usually a name (`"red"`) or an RGBA vector.
#[must_use]
pub fn color<I>(c: impl Into<Value>, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    transform(Transform::Color, c.into(), nodes)
}

// ── Raw passthrough ──────────────────────────────────────────

/// A literal statement, emitted as `command;`.
#[must_use]
pub fn raw(command: impl Into<String>) -> Node {
    Node::new(NodeKind::Raw(command.into()), Arc::from([]))
}

/// A literal header wrapping children: `command { ... }`.
///
/// With no children present this degrades to [`raw`].
#[must_use]
pub fn raw_block<I>(command: impl Into<String>, nodes: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Option<Node>>,
{
    Node::new(NodeKind::Raw(command.into()), children(nodes))
}
