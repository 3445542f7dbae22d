//! `sir-graph` — generic undirected graph.
//!
//! # Crate layout
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`graph`] | `Graph<K, N, E>`                          |
//! | [`error`] | `GraphError`, `GraphResult<T>`            |
//!
//! The graph carries no simulation semantics.  `sir-agent` instantiates it
//! as `Graph<AgentId, Agent, ContactEdge>`.

pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::Graph;
