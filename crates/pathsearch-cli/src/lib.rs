//! pathsearch CLI library.
//!
//! Terminal styling and output formatting used by the `pathsearch` binary.

pub mod output;
pub mod terminal;
