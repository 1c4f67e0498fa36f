//! Error taxonomy for the core pipeline. Plain enum with a hand-written
//! `Error` impl, matching the teacher's own preference for `Box<dyn Error>`
//! and hand-rolled error types over a derive-macro crate.

use std::fmt;

#[derive(Debug)]
pub enum GraphError {
    /// A required column was missing or had the wrong type, at the given
    /// row index (0-based, header excluded).
    MalformedInput { row: usize, column: &'static str },
    /// The input had zero edges and zero vertices.
    EmptyGraph,
    /// The analyzer was asked for a largest component on an empty graph.
    NoLargestComponent,
    /// Wraps a CSV/IO failure from the table shim.
    Io(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::MalformedInput { row, column } => {
                write!(f, "malformed input at row {row}: column `{column}`")
            }
            GraphError::EmptyGraph => write!(f, "graph has no vertices or edges"),
            GraphError::NoLargestComponent => write!(f, "no largest component: graph is empty"),
            GraphError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<csv::Error> for GraphError {
    fn from(e: csv::Error) -> Self {
        GraphError::Io(e.to_string())
    }
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        GraphError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
