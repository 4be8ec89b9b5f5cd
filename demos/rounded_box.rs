//! Render a parametric rounded box with a lid recess.
//!
//! ```text
//! cargo run --example rounded_box [out.scad]
//! ```

use std::path::PathBuf;

use scad_builder::{
    Node, Properties, RawText, Target, Value, cube, cylinder, difference, minkowski, render,
    sphere, translate, union, vector_add, vector_multiply,
};

const SIZE: [f64; 3] = [40.0, 30.0, 20.0];
const WALL: f64 = 2.0;
const ROUNDING: f64 = 3.0;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn rounded_box(size: &[f64], r: f64) -> Result<Node, BoxError> {
    let inner = vector_add(size, &Value::from(-2.0 * r))?;
    Ok(minkowski([
        cube(inner, true),
        sphere(r).update(Properties::new().with("$fn", 24)),
    ]))
}

fn main() -> miette::Result<()> {
    let out: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let target = Target::from_arg(out.as_deref());

    let script = |text: &mut dyn RawText| -> Result<Node, BoxError> {
        text.text("// rounded box, generated by scad-builder")?;

        let outer = rounded_box(&SIZE, ROUNDING)?;
        let cavity_size = vector_add(&SIZE, &Value::from(-2.0 * WALL))?;
        let cavity = rounded_box(&cavity_size, ROUNDING - WALL)?;
        let lift = vector_multiply(&[0.0, 0.0, WALL], &Value::from(1.5))?;

        let corners = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];
        let magnets = corners.iter().map(|&(x, y)| {
            translate(
                [x * (SIZE[0] / 2.0 - 4.0), y * (SIZE[1] / 2.0 - 4.0), SIZE[2] / 2.0 - 3.0],
                [cylinder(4, 3, None)],
            )
        });

        Ok(difference([
            outer,
            translate(lift, [cavity]),
            union(magnets).debug(),
        ]))
    };

    render(script, &target).map_err(miette::Report::new)?;
    Ok(())
}
