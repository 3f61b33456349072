//! In-memory directed graph storage
//!
//! An adjacency-list store keyed by [`VertexId`]. Successor lists keep
//! insertion order and allow duplicates and self-edges; deduplication and
//! self-loop policy belong to the layers above.

use super::types::VertexId;
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("No edge from {from} to {to}")]
    EdgeNotFound { from: VertexId, to: VertexId },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed graph over opaque vertex identities
///
/// One map entry per vertex: `VertexId -> Vec<VertexId>` (ordered list of
/// outgoing-edge targets). An `IndexMap` keeps the vertex set itself in
/// insertion order, so `vertices()` enumerates in creation order without a
/// separate order list.
///
/// Mutations are atomic with respect to their own success: a failed
/// `add_edge` or `remove_edge` leaves the graph untouched.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    adjacency: IndexMap<VertexId, Vec<VertexId>>,
}

impl DirectedGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: IndexMap::new(),
        }
    }

    /// Ensure a vertex is present with an empty successor list
    ///
    /// Idempotent: adding an already-present vertex never resets its
    /// successor list.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Check if a vertex exists
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Append `to` to the successor list of `from`
    ///
    /// Both endpoints must already be vertices; the missing side is named
    /// in the error (`from` is checked first). Duplicate edges and
    /// self-edges are accepted.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.contains(from) {
            return Err(GraphError::VertexNotFound(from));
        }
        if !self.contains(to) {
            return Err(GraphError::VertexNotFound(to));
        }

        let successors = self
            .adjacency
            .get_mut(&from)
            .ok_or(GraphError::VertexNotFound(from))?;
        successors.push(to);
        Ok(())
    }

    /// Remove the first occurrence of `to` from the successor list of `from`
    ///
    /// An absent endpoint reports `VertexNotFound`; a missing edge between
    /// present vertices reports `EdgeNotFound`. Only one occurrence is
    /// removed per call.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.contains(from) {
            return Err(GraphError::VertexNotFound(from));
        }
        if !self.contains(to) {
            return Err(GraphError::VertexNotFound(to));
        }

        let successors = self
            .adjacency
            .get_mut(&from)
            .ok_or(GraphError::VertexNotFound(from))?;
        match successors.iter().position(|&s| s == to) {
            Some(pos) => {
                successors.remove(pos);
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound { from, to }),
        }
    }

    /// Snapshot of the successor sequence of a vertex (outgoing edges)
    pub fn successors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        self.adjacency
            .get(&vertex)
            .cloned()
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Snapshot of all vertices in insertion order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    /// Check whether at least one edge `from -> to` exists
    ///
    /// Unknown vertices simply have no edges; no error.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .map_or(false, |successors| successors.contains(&to))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges (duplicates counted)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
