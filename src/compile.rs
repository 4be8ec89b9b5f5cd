/// Compiler from scene nodes to `OpenSCAD` source.
///
/// Output is written incrementally to any [`std::io::Write`] sink in a single
/// depth-first, pre-order walk: a node's header goes out before its children.
use std::io::{self, Write};

use crate::node::{Node, NodeKind};

/// Hook for literal lines written outside the scene tree.
///
/// The default host implementation ([`Emitter`]) writes the line followed by a
/// newline to its sink; hosts can supply their own to redirect or capture it.
pub trait RawText {
    /// Emit `line` verbatim.
    ///
    /// # Errors
    /// Returns any error raised by the underlying sink.
    fn text(&mut self, line: &str) -> io::Result<()>;
}

/// Owns a sink and writes compiled nodes and raw text lines to it.
#[derive(Debug)]
pub struct Emitter<W> {
    out: W,
}

impl<W: Write> Emitter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `node` and its whole subtree.
    ///
    /// # Errors
    /// Returns any error raised by the underlying sink.
    pub fn compile(&mut self, node: &Node) -> io::Result<()> {
        compile(node, &mut self.out)
    }

    /// # Errors
    /// Returns any error raised by the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RawText for Emitter<W> {
    fn text(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }
}

/// Compile `node` and its subtree into `out`.
///
/// The only possible failure is the sink itself failing.
///
/// # Errors
/// Returns any error raised while writing to `out`.
///
/// ```
/// use scad_builder::{compile, cube, translate};
///
/// let mut out = Vec::new();
/// compile(&translate([1, 0, 0], [cube(2, None)]), &mut out).unwrap();
/// assert_eq!(out, b"translate([1, 0, 0]) {\ncube(size=2);\n}\n");
/// ```
pub fn compile<W: Write + ?Sized>(node: &Node, out: &mut W) -> io::Result<()> {
    if let Some(modifier) = node.modifier() {
        write!(out, "{}", modifier.prefix())?;
    }

    match node.kind() {
        NodeKind::Shape(shape) => {
            writeln!(out, "{}({});", shape.name(), node.properties().render_params())
        }
        NodeKind::LinearExtrude => {
            writeln!(
                out,
                "{}({}) {{",
                node.kind_name(),
                node.properties().render_params()
            )?;
            compile_children(node, out)
        }
        NodeKind::Container(op) => {
            writeln!(out, "{}() {{", op.name())?;
            compile_children(node, out)
        }
        NodeKind::Transform(op, param) => {
            writeln!(out, "{}({param}) {{", op.name())?;
            compile_children(node, out)
        }
        NodeKind::Raw(command) if node.children().is_empty() => writeln!(out, "{command};"),
        NodeKind::Raw(command) => {
            writeln!(out, "{command} {{")?;
            compile_children(node, out)
        }
    }
}

fn compile_children<W: Write + ?Sized>(node: &Node, out: &mut W) -> io::Result<()> {
    for child in node.children() {
        compile(child, out)?;
    }
    writeln!(out, "}}")
}

/// Compile `node` into a `String`.
#[must_use]
pub fn to_scad(node: &Node) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail, and every emitted fragment is UTF-8.
    let _ = compile(node, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
