//! Error types for socialgraph-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::VertexId;

/// Everything that can go wrong while loading or querying a social graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The source file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The source exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `<numVertices> <numEdges>` header is missing or invalid.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// An edge line references a vertex outside `[0, numVertices)` or itself.
    #[error("malformed edge #{index} ({from}, {to}): {reason}")]
    MalformedEdge {
        index: usize,
        from: i64,
        to: i64,
        reason: &'static str,
    },

    /// Storage for the requested vertex count could not be obtained.
    #[error("cannot allocate storage for {vertex_count} vertices: {detail}")]
    AllocationFailure { vertex_count: usize, detail: String },

    /// A query referenced a vertex outside `[0, numVertices)`.
    #[error("invalid vertex {id}: IDs range from 0 to {}", vertex_count.saturating_sub(1))]
    InvalidVertex { id: VertexId, vertex_count: usize },

    /// Path queries need two distinct endpoints.
    #[error("source and destination are the same vertex ({0})")]
    SameVertex(VertexId),

    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("stack is empty")]
    EmptyStack,

    /// The traversal finished without reaching the destination.
    #[error("no connection from {src} to {dst}")]
    NotFound { src: VertexId, dst: VertexId },

    /// The graph was released and can no longer be queried.
    #[error("graph has been released")]
    Released,
}

impl GraphError {
    pub(crate) fn alloc(vertex_count: usize, detail: impl Into<String>) -> Self {
        GraphError::AllocationFailure {
            vertex_count,
            detail: detail.into(),
        }
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
