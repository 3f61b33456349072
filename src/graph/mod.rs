//! Directed graph core
//!
//! The structural layer of the follow network:
//! - Opaque vertex identities ([`VertexId`])
//! - Insertion-ordered adjacency lists with duplicate edges allowed
//! - Explicit missing-vertex / missing-edge errors instead of silent no-ops

pub mod store;
pub mod types;

pub use store::{DirectedGraph, GraphError, GraphResult};
pub use types::VertexId;
