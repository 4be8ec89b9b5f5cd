/// Error types for the vector helpers and the host runner.
use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// An unsupported operand passed to a vector helper.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("{operation}: unsupported operand of type {found}")]
    #[diagnostic(
        code(scad::vector::type_mismatch),
        help("pass a number, or (for addition) a vector of numbers")
    )]
    TypeMismatch {
        operation: &'static str,
        found: &'static str,
    },

    #[error("vector length mismatch: expected {expected}, found {found}")]
    #[diagnostic(code(scad::vector::length_mismatch))]
    LengthMismatch { expected: usize, found: usize },
}

impl VectorError {
    #[must_use]
    pub const fn type_mismatch(operation: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { operation, found }
    }
}

/// A failure while rendering a script to its output.
#[derive(Error, Debug, Diagnostic)]
pub enum RenderError {
    #[error("cannot create output file `{}`", path.display())]
    #[diagnostic(code(scad::render::create))]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    #[diagnostic(code(scad::render::io))]
    Io(#[from] io::Error),

    #[error("script failed")]
    #[diagnostic(
        code(scad::render::script),
        help("the partially written output was discarded")
    )]
    Script(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for vector helpers.
pub type VectorResult<T> = Result<T, VectorError>;

/// Result type alias for the host runner.
pub type RenderResult<T> = Result<T, RenderError>;
