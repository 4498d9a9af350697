//! Error types for fixture generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating fixtures.
///
/// Every variant is fatal for the whole batch.
#[derive(Debug, Error)]
pub enum GenError {
    /// The sampler no longer reproduces the stream the golden files were drawn from.
    #[error(
        "PRNG self-check failed: expected {expected}, drew {actual}; \
         the generator algorithm changed and every golden value is suspect"
    )]
    DeterminismViolation { expected: u32, actual: u32 },

    #[error("matrix shapes are not conformant: A is {a_rows}x{a_cols}, B is {b_rows}x{b_cols}")]
    ShapeMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },

    #[error(
        "matrix {matrix} has shape {}x{}, expected {}x{}",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    UnexpectedShape {
        matrix: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("value {value} is not exactly representable as {element}")]
    InexactValue { value: String, element: &'static str },

    #[error("failed to render {case}:\n{diagnostic}")]
    Render { case: String, diagnostic: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture at `path` is on disk but its path could not be reported.
    #[error("wrote {} but failed to report it on the output sink: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, GenError>;
