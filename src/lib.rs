//! # scad-builder
//!
//! Build `OpenSCAD` scene graphs in Rust and compile them to `.scad` source.
//!
//! Scenes are trees of immutable [`Node`]s: primitives (`cube`, `sphere`, ...),
//! transformations (`translate`, `rotate`, ...), Boolean containers
//! (`union`, `difference`, ...), a linear-extrude decorator, and raw
//! passthrough commands. Derivations such as [`Node::disable`] or
//! [`Node::update`] return new nodes and never touch the original.
//!
//! ## Quick Start
//!
//! ```rust
//! use scad_builder::{cube, cylinder, difference, to_scad, translate};
//!
//! let plate = difference([
//!     cube([20, 20, 3], None),
//!     translate([10, 10, -1], [cylinder(5, 2, None)]),
//! ]);
//!
//! assert_eq!(
//!     to_scad(&plate),
//!     "difference() {\n\
//!      cube(size=[20, 20, 3]);\n\
//!      translate([10, 10, -1]) {\n\
//!      cylinder(h=5, r=2);\n\
//!      }\n\
//!      }\n"
//! );
//! ```

// Suppress false positive from thiserror/miette derive macros
#![allow(unused_assignments)]

pub mod build;
pub mod compile;
pub mod error;
pub mod node;
pub mod props;
pub mod render;
pub mod value;
pub mod vector;
pub mod visit;

// Re-exports for convenience
pub use build::{
    Radius, circle, color, cube, cylinder, difference, hull, intersection, minkowski, mirror,
    polygon, raw, raw_block, resize, rotate, scale, sphere, square, text, translate, union,
};
pub use compile::{Emitter, RawText, compile, to_scad};
pub use error::{RenderError, RenderResult, VectorError, VectorResult};
pub use node::{Container, Dimension, Modifier, Node, NodeKind, Shape, Transform};
pub use props::Properties;
pub use render::{Script, Target, render, render_to_writer};
pub use value::Value;
pub use vector::{vector_add, vector_multiply};
pub use visit::{NodeStats, Visitor};
