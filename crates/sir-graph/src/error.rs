//! Graph error type.

use thiserror::Error;

/// Errors produced by `sir-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge named a node that is not in the graph.
    #[error("edge endpoint {node} is not in the graph")]
    MissingEndpoint { node: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
