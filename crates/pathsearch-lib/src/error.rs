use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;
use crate::routing::SearchAlgorithm;

/// Convenient result alias for the pathsearch library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// A search that finds no path is not an error; it is reported as an empty
/// path on the [`SearchResult`](crate::SearchResult). Everything here is a
/// rejection of the input before any algorithm runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an adjacency matrix row does not match the matrix height.
    #[error("adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    MatrixNotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a node identifier falls outside `0..node_count`.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    /// Raised when an informed algorithm is requested without a heuristic.
    #[error("algorithm {algorithm} requires a heuristic but none was supplied")]
    MissingHeuristic { algorithm: SearchAlgorithm },

    /// Raised when the heuristic does not cover every node exactly once.
    #[error("heuristic has {found} values, expected {expected}")]
    HeuristicLength { expected: usize, found: usize },

    /// Raised when an algorithm name could not be recognised.
    #[error("unknown algorithm: {name}{}", format_suggestions(.suggestions))]
    UnknownAlgorithm {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when problem text could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Raised when a problem file could not be read.
    #[error("failed to read problem from {path}: {source}")]
    ProblemRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error reports malformed search input (bad shape, bounds,
    /// heuristic or text) as opposed to an environmental failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::MatrixNotSquare { .. }
                | Error::NodeOutOfRange { .. }
                | Error::MissingHeuristic { .. }
                | Error::HeuristicLength { .. }
                | Error::UnknownAlgorithm { .. }
                | Error::Parse { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
