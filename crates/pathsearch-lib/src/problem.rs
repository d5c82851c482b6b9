//! Text problem format.
//!
//! ```text
//! 5            <- node count n
//! 0 4          <- source destination
//! 0 1 0 0 0    <- n rows of the adjacency matrix, 0 = no edge
//! 1 0 1 0 0
//! 0 1 0 1 0
//! 0 0 1 0 1
//! 0 0 0 1 0
//! 4 3 2 1 0    <- optional heuristic, one value per node
//! ```
//!
//! Blank lines are ignored. Line numbers in errors are 1-based positions in
//! the input text.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, NodeId};
use crate::heuristic::Heuristic;
use crate::routing::{SearchAlgorithm, SearchRequest};

/// Fully parsed search problem.
#[derive(Debug, Clone)]
pub struct Problem {
    pub graph: Graph,
    pub source: NodeId,
    pub destination: NodeId,
    pub heuristic: Option<Heuristic>,
}

impl Problem {
    /// Parse a problem from its text form.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line, header) = lines.next().ok_or_else(|| Error::Parse {
            line: 1,
            message: "missing node count".to_string(),
        })?;
        let node_count: usize = parse_token(header, line, "node count")?;

        let (line, endpoints) = lines.next().ok_or_else(|| Error::Parse {
            line: line + 1,
            message: "missing source and destination".to_string(),
        })?;
        let endpoints: Vec<NodeId> = parse_row(endpoints, line, "node id")?;
        let &[source, destination] = endpoints.as_slice() else {
            return Err(Error::Parse {
                line,
                message: format!(
                    "expected source and destination, found {} values",
                    endpoints.len()
                ),
            });
        };

        let mut rows = Vec::new();
        let mut last_line = line;
        for _ in 0..node_count {
            let (line, row) = lines.next().ok_or_else(|| Error::Parse {
                line: last_line + 1,
                message: format!(
                    "expected {node_count} matrix rows, found {}",
                    rows.len()
                ),
            })?;
            let costs: Vec<Cost> = parse_row(row, line, "edge cost")?;
            if costs.len() != node_count {
                return Err(Error::Parse {
                    line,
                    message: format!("expected {node_count} edge costs, found {}", costs.len()),
                });
            }
            rows.push(costs);
            last_line = line;
        }

        let heuristic = match lines.next() {
            Some((line, values)) => {
                Some(Heuristic::new(parse_row(values, line, "heuristic value")?))
            }
            None => None,
        };

        if let Some((line, _)) = lines.next() {
            return Err(Error::Parse {
                line,
                message: "unexpected content after heuristic".to_string(),
            });
        }

        let graph = Graph::from_matrix(rows)?;
        graph.check_node(source)?;
        graph.check_node(destination)?;
        if let Some(heuristic) = &heuristic {
            heuristic.check_len(graph.node_count())?;
        }

        Ok(Self {
            graph,
            source,
            destination,
            heuristic,
        })
    }

    /// Build a request for `algorithm` over this problem's endpoints and heuristic.
    pub fn request(&self, algorithm: SearchAlgorithm) -> SearchRequest {
        SearchRequest {
            source: self.source,
            destination: self.destination,
            algorithm,
            heuristic: self.heuristic.clone(),
            seed: None,
        }
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Problem::parse(text)
    }
}

/// Read and parse a problem file.
pub fn load_problem(path: &Path) -> Result<Problem> {
    let text = fs::read_to_string(path).map_err(|source| Error::ProblemRead {
        path: path.to_path_buf(),
        source,
    })?;
    Problem::parse(&text)
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {what} '{token}'"),
    })
}

fn parse_row<T: FromStr>(row: &str, line: usize, what: &str) -> Result<Vec<T>> {
    row.split_whitespace()
        .map(|token| parse_token(token, line, what))
        .collect()
}
