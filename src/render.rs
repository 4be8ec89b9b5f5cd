//! Host runner: turn a script into a `.scad` file or stdout stream.
//!
//! A script is anything implementing [`Script`]: it receives the raw-text hook,
//! may echo literal lines through it, and returns the root node. The runner
//! compiles that root after the echoed lines. When the output is a file and
//! any step fails, the partial file is removed before the error is returned.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::compile::{Emitter, RawText};
use crate::error::{RenderError, RenderResult};
use crate::node::Node;
use crate::visit::NodeStats;

/// Produces the root of a scene.
pub trait Script {
    type Error: Into<Box<dyn std::error::Error + Send + Sync>>;

    /// Build the scene, optionally echoing literal lines through `text`.
    ///
    /// # Errors
    /// Whatever the script considers a failure.
    fn produce_root(self, text: &mut dyn RawText) -> Result<Node, Self::Error>;
}

impl<F, E> Script for F
where
    F: FnOnce(&mut dyn RawText) -> Result<Node, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Error = E;

    fn produce_root(self, text: &mut dyn RawText) -> Result<Node, E> {
        self(text)
    }
}

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    File(PathBuf),
}

impl Target {
    /// Stdout when no path is given, otherwise that file.
    #[must_use]
    pub fn from_arg(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_path_buf()))
    }
}

/// Render `script` to `target`.
///
/// # Errors
/// Returns [`RenderError::Create`] if the output file cannot be created,
/// [`RenderError::Script`] if the script fails, and [`RenderError::Io`] if
/// writing fails. A file target is deleted on any failure after creation.
pub fn render<S: Script>(script: S, target: &Target) -> RenderResult<()> {
    debug!(?target, "rendering script");
    match target {
        Target::Stdout => {
            let stdout = io::stdout();
            render_to_writer(script, stdout.lock()).map(drop)
        }
        Target::File(path) => {
            let file = File::create(path).map_err(|source| RenderError::Create {
                path: path.clone(),
                source,
            })?;
            let result = render_to_writer(script, file).map(drop);
            if result.is_err() {
                discard(path);
            }
            result
        }
    }
}

/// Render `script` into `out`, returning the writer once flushed.
///
/// # Errors
/// Returns [`RenderError::Script`] if the script fails and
/// [`RenderError::Io`] if writing fails.
pub fn render_to_writer<S: Script, W: Write>(script: S, out: W) -> RenderResult<W> {
    let mut emitter = Emitter::new(BufWriter::new(out));
    let root = script
        .produce_root(&mut emitter)
        .map_err(|err| RenderError::Script(err.into()))?;

    let stats = NodeStats::collect(&root);
    debug!(
        nodes = stats.nodes,
        depth = stats.max_depth,
        disabled = stats.disabled,
        show_only = stats.show_only,
        debug = stats.debug,
        "scene built"
    );

    emitter.compile(&root)?;
    emitter.flush()?;
    debug!("scene compiled");

    emitter
        .into_inner()
        .into_inner()
        .map_err(|err| RenderError::Io(err.into_error()))
}

fn discard(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %err, "failed to remove partial output");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{cube, raw, union};

    #[test]
    fn test_text_precedes_tree() {
        let script = |text: &mut dyn RawText| -> io::Result<Node> {
            text.text("// header")?;
            Ok(union([cube(1, None), raw("echo(\"done\")")]))
        };
        let out = render_to_writer(script, Vec::new()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "// header\nunion() {\ncube(size=1);\necho(\"done\");\n}\n"
        );
    }

    #[test]
    fn test_script_error_is_wrapped() {
        let script = |_: &mut dyn RawText| -> Result<Node, String> { Err("bad radius".into()) };
        let err = render_to_writer(script, Vec::new()).unwrap_err();
        match err {
            RenderError::Script(source) => assert_eq!(source.to_string(), "bad radius"),
            other => panic!("expected script error, got {other:?}"),
        }
    }

    #[test]
    fn test_target_from_arg() {
        assert_eq!(Target::from_arg(None), Target::Stdout);
        assert_eq!(
            Target::from_arg(Some(Path::new("out.scad"))),
            Target::File(PathBuf::from("out.scad"))
        );
    }
}
